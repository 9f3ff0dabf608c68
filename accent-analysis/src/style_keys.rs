//! Editor attribute keys for highlight categories
//!
//! Themes register one attribute key per category and fall back to a base
//! key when they do not style it explicitly. The classifier knows nothing
//! about these names; this module is the only place they live.

use accent_core::HighlightCategory;
use serde::Serialize;
use std::fmt;

/// Base style a category inherits from when a theme leaves it unstyled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BaseStyle {
    Keyword,
    Number,
}

impl BaseStyle {
    pub fn key(self) -> &'static str {
        match self {
            BaseStyle::Keyword => "JS.KEYWORD",
            BaseStyle::Number => "JS.NUMBER",
        }
    }
}

impl fmt::Display for BaseStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct StyleKey {
    pub name: &'static str,
    pub fallback: BaseStyle,
}

/// The attribute key a theme registers for `category`.
///
/// Literal values (`null`, `true`, ...) fall back to number styling so they
/// read as values; everything else falls back to keyword styling.
pub fn style_key(category: HighlightCategory) -> StyleKey {
    use HighlightCategory::*;

    let name = match category {
        ThisOrSuper => "JS.THIS_SUPER",
        Constructor => "JS.CONSTRUCTOR",
        Yield => "JS.YIELD",
        NewOrThrow => "JS.NEW",
        AsyncAwait => "JS.ASYNC_AWAIT",
        ExceptionControl => "JS.TRY_CATCH",
        ModuleKeyword => "JS.MODULE_KEYWORD",
        DebuggerStatement => "JS.DEBUGGER_STMT",
        Prototype => "JS.PROTOTYPE",
        NullishLiteral => "JS.NULL_UNDEFINED",
        BooleanLiteral => "JS.PRIMITIVE",
        VariableDeclaration => "JS.VAR_DEF",
        FunctionKeyword => "JS.FUNCTION",
        ClassKeyword => "JS.CLASS_EXTENDS",
        GlobalObject => "JS.CONSOLE",
        InlineOperatorKeyword => "JS.INLINE",
    };
    let fallback = match category {
        NullishLiteral | BooleanLiteral => BaseStyle::Number,
        _ => BaseStyle::Keyword,
    };
    StyleKey { name, fallback }
}
