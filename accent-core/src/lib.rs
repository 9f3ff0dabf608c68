//! # accent-core
//!
//! Keyword classification for JavaScript and TypeScript tokens.
//!
//! The crate answers one question: given the text of a single token, which
//! highlight category (if any) does it belong to? Tokens come from an external
//! lexer; styles are resolved by whoever consumes the categories.
//!
//! ```text
//! "await"     -> Some(ASYNC_AWAIT)
//! "undefined" -> Some(NULLISH_LITERAL)
//! "foo"       -> None
//! ```

pub mod category;
pub mod classify;

pub use category::{HighlightCategory, ParseCategoryError};
pub use classify::{classify, CLASSIFICATION_TABLE};
