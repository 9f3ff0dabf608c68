//! # accent
//!
//! Highlight classification for JavaScript and TypeScript tokens.
//!
//! Layout
//!
//! The workspace is split by concern, and this crate re-exports the pieces a
//! host editor needs:
//!   accent-core       Token text -> category, the classification table
//!   accent-analysis   Token streams -> ordered highlights, style keys
//!   accent-config     Layered TOML configuration
//!   accent-cli        The `accent` binary
//!
//! Lexing is not done here: hosts hand over tokens their own lexer produced,
//! and map the resulting categories to styles themselves.

pub use accent_analysis::{
    collect_highlights, style_key, BaseStyle, Highlight, HighlightFilter, SourceToken, StyleKey,
};
pub use accent_config::{load_defaults, AccentConfig, HighlightConfig, Loader};
pub use accent_core::{classify, HighlightCategory, ParseCategoryError, CLASSIFICATION_TABLE};

/// Highlight a token stream honoring the `[highlight]` section of `config`.
pub fn highlight_with_config<'a, I>(tokens: I, config: &AccentConfig) -> Vec<Highlight>
where
    I: IntoIterator<Item = SourceToken<'a>>,
{
    collect_highlights(tokens, &HighlightFilter::from_config(&config.highlight))
}
