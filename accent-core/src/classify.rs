//! Token classification
//!
//! Maps the exact text of a single token to a [`HighlightCategory`]. Matching
//! is lexical only: case-sensitive, whole-token, and blind to surrounding
//! syntax. Contextual keywords such as `get`, `set`, `static` or `of` are
//! classified the same way whether they act as keywords or identifiers.

use crate::category::HighlightCategory;

/// Every recognized literal with its category, in table order.
pub const CLASSIFICATION_TABLE: [(&str, HighlightCategory); 44] = [
    ("this", HighlightCategory::ThisOrSuper),
    ("super", HighlightCategory::ThisOrSuper),
    ("constructor", HighlightCategory::Constructor),
    ("yield", HighlightCategory::Yield),
    ("new", HighlightCategory::NewOrThrow),
    ("throw", HighlightCategory::NewOrThrow),
    ("async", HighlightCategory::AsyncAwait),
    ("await", HighlightCategory::AsyncAwait),
    ("try", HighlightCategory::ExceptionControl),
    ("catch", HighlightCategory::ExceptionControl),
    ("finally", HighlightCategory::ExceptionControl),
    ("export", HighlightCategory::ModuleKeyword),
    ("import", HighlightCategory::ModuleKeyword),
    ("require", HighlightCategory::ModuleKeyword),
    ("from", HighlightCategory::ModuleKeyword),
    ("default", HighlightCategory::ModuleKeyword),
    ("module", HighlightCategory::ModuleKeyword),
    ("debugger", HighlightCategory::DebuggerStatement),
    ("prototype", HighlightCategory::Prototype),
    ("null", HighlightCategory::NullishLiteral),
    ("undefined", HighlightCategory::NullishLiteral),
    ("NaN", HighlightCategory::NullishLiteral),
    ("true", HighlightCategory::BooleanLiteral),
    ("false", HighlightCategory::BooleanLiteral),
    ("var", HighlightCategory::VariableDeclaration),
    ("let", HighlightCategory::VariableDeclaration),
    ("const", HighlightCategory::VariableDeclaration),
    ("function", HighlightCategory::FunctionKeyword),
    ("static", HighlightCategory::FunctionKeyword),
    ("get", HighlightCategory::FunctionKeyword),
    ("set", HighlightCategory::FunctionKeyword),
    ("abstract", HighlightCategory::ClassKeyword),
    ("class", HighlightCategory::ClassKeyword),
    ("extends", HighlightCategory::ClassKeyword),
    ("implements", HighlightCategory::ClassKeyword),
    ("console", HighlightCategory::GlobalObject),
    ("window", HighlightCategory::GlobalObject),
    ("document", HighlightCategory::GlobalObject),
    ("global", HighlightCategory::GlobalObject),
    ("in", HighlightCategory::InlineOperatorKeyword),
    ("of", HighlightCategory::InlineOperatorKeyword),
    ("as", HighlightCategory::InlineOperatorKeyword),
    ("instanceof", HighlightCategory::InlineOperatorKeyword),
    ("typeof", HighlightCategory::InlineOperatorKeyword),
];

/// Classify a token by its exact text.
///
/// Returns `None` for anything that is not a recognized literal, including
/// the empty string and differently-cased spellings (`This`, `CONST`).
pub fn classify(token_text: &str) -> Option<HighlightCategory> {
    let category = match token_text {
        "this" | "super" => HighlightCategory::ThisOrSuper,
        "constructor" => HighlightCategory::Constructor,
        "yield" => HighlightCategory::Yield,
        "new" | "throw" => HighlightCategory::NewOrThrow,
        "async" | "await" => HighlightCategory::AsyncAwait,
        "try" | "catch" | "finally" => HighlightCategory::ExceptionControl,
        "export" | "import" | "require" | "from" | "default" | "module" => {
            HighlightCategory::ModuleKeyword
        }
        "debugger" => HighlightCategory::DebuggerStatement,
        "prototype" => HighlightCategory::Prototype,
        "null" | "undefined" | "NaN" => HighlightCategory::NullishLiteral,
        "true" | "false" => HighlightCategory::BooleanLiteral,
        "var" | "let" | "const" => HighlightCategory::VariableDeclaration,
        "function" | "static" | "get" | "set" => HighlightCategory::FunctionKeyword,
        "abstract" | "class" | "extends" | "implements" => HighlightCategory::ClassKeyword,
        "console" | "window" | "document" | "global" => HighlightCategory::GlobalObject,
        "in" | "of" | "as" | "instanceof" | "typeof" => HighlightCategory::InlineOperatorKeyword,
        _ => return None,
    };
    Some(category)
}
