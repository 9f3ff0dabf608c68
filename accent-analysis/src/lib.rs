//! Highlight analysis on top of token classification.
//!
//! [`highlights`] turns a stream of externally lexed tokens into ordered
//! highlight ranges; [`style_keys`] names the editor attribute key each
//! category is registered under.

pub mod highlights;
pub mod style_keys;

pub use highlights::{collect_highlights, Highlight, HighlightFilter, SourceToken};
pub use style_keys::{style_key, BaseStyle, StyleKey};
