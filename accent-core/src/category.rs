//! Highlight categories
//!
//! The closed set of semantic classes a token can be assigned. Categories are
//! abstract: they say what a token *is*, never how it should look. Mapping a
//! category to an editor style lives outside this crate.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Semantic class assigned to a keyword-like token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE", try_from = "String")]
pub enum HighlightCategory {
    ThisOrSuper,
    Constructor,
    Yield,
    NewOrThrow,
    AsyncAwait,
    ExceptionControl,
    ModuleKeyword,
    DebuggerStatement,
    Prototype,
    NullishLiteral,
    BooleanLiteral,
    VariableDeclaration,
    FunctionKeyword,
    ClassKeyword,
    GlobalObject,
    InlineOperatorKeyword,
}

impl HighlightCategory {
    /// Every category, in classification table order.
    pub const ALL: [HighlightCategory; 16] = [
        HighlightCategory::ThisOrSuper,
        HighlightCategory::Constructor,
        HighlightCategory::Yield,
        HighlightCategory::NewOrThrow,
        HighlightCategory::AsyncAwait,
        HighlightCategory::ExceptionControl,
        HighlightCategory::ModuleKeyword,
        HighlightCategory::DebuggerStatement,
        HighlightCategory::Prototype,
        HighlightCategory::NullishLiteral,
        HighlightCategory::BooleanLiteral,
        HighlightCategory::VariableDeclaration,
        HighlightCategory::FunctionKeyword,
        HighlightCategory::ClassKeyword,
        HighlightCategory::GlobalObject,
        HighlightCategory::InlineOperatorKeyword,
    ];

    /// Canonical name, as used in configuration files and serialized output.
    pub fn as_str(self) -> &'static str {
        match self {
            HighlightCategory::ThisOrSuper => "THIS_OR_SUPER",
            HighlightCategory::Constructor => "CONSTRUCTOR",
            HighlightCategory::Yield => "YIELD",
            HighlightCategory::NewOrThrow => "NEW_OR_THROW",
            HighlightCategory::AsyncAwait => "ASYNC_AWAIT",
            HighlightCategory::ExceptionControl => "EXCEPTION_CONTROL",
            HighlightCategory::ModuleKeyword => "MODULE_KEYWORD",
            HighlightCategory::DebuggerStatement => "DEBUGGER_STATEMENT",
            HighlightCategory::Prototype => "PROTOTYPE",
            HighlightCategory::NullishLiteral => "NULLISH_LITERAL",
            HighlightCategory::BooleanLiteral => "BOOLEAN_LITERAL",
            HighlightCategory::VariableDeclaration => "VARIABLE_DECLARATION",
            HighlightCategory::FunctionKeyword => "FUNCTION_KEYWORD",
            HighlightCategory::ClassKeyword => "CLASS_KEYWORD",
            HighlightCategory::GlobalObject => "GLOBAL_OBJECT",
            HighlightCategory::InlineOperatorKeyword => "INLINE_OPERATOR_KEYWORD",
        }
    }

    /// Literal token texts that classify to this category, in table order.
    pub fn literals(self) -> &'static [&'static str] {
        match self {
            HighlightCategory::ThisOrSuper => &["this", "super"],
            HighlightCategory::Constructor => &["constructor"],
            HighlightCategory::Yield => &["yield"],
            HighlightCategory::NewOrThrow => &["new", "throw"],
            HighlightCategory::AsyncAwait => &["async", "await"],
            HighlightCategory::ExceptionControl => &["try", "catch", "finally"],
            HighlightCategory::ModuleKeyword => {
                &["export", "import", "require", "from", "default", "module"]
            }
            HighlightCategory::DebuggerStatement => &["debugger"],
            HighlightCategory::Prototype => &["prototype"],
            HighlightCategory::NullishLiteral => &["null", "undefined", "NaN"],
            HighlightCategory::BooleanLiteral => &["true", "false"],
            HighlightCategory::VariableDeclaration => &["var", "let", "const"],
            HighlightCategory::FunctionKeyword => &["function", "static", "get", "set"],
            HighlightCategory::ClassKeyword => &["abstract", "class", "extends", "implements"],
            HighlightCategory::GlobalObject => &["console", "window", "document", "global"],
            HighlightCategory::InlineOperatorKeyword => {
                &["in", "of", "as", "instanceof", "typeof"]
            }
        }
    }
}

impl fmt::Display for HighlightCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string names no known category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseCategoryError {
    input: String,
}

impl ParseCategoryError {
    pub fn input(&self) -> &str {
        &self.input
    }
}

impl fmt::Display for ParseCategoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unknown highlight category '{}'", self.input)
    }
}

impl std::error::Error for ParseCategoryError {}

impl FromStr for HighlightCategory {
    type Err = ParseCategoryError;

    /// Accepts the canonical name in any case, with `-` allowed for `_`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().replace('-', "_").to_ascii_uppercase();
        HighlightCategory::ALL
            .iter()
            .copied()
            .find(|category| category.as_str() == normalized)
            .ok_or_else(|| ParseCategoryError {
                input: s.to_string(),
            })
    }
}

impl TryFrom<String> for HighlightCategory {
    type Error = ParseCategoryError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}
