use accent_config::HighlightConfig;
use accent_core::{classify, HighlightCategory};
use serde::Serialize;
use std::collections::BTreeSet;
use std::ops::Range;

/// A token as handed over by the lexer: its text and byte range in the source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceToken<'a> {
    pub text: &'a str,
    pub range: Range<usize>,
}

impl<'a> SourceToken<'a> {
    pub fn new(text: &'a str, range: Range<usize>) -> Self {
        Self { text, range }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Highlight {
    pub category: HighlightCategory,
    pub range: Range<usize>,
}

/// The set of categories allowed through to the renderer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HighlightFilter {
    allowed: BTreeSet<HighlightCategory>,
}

impl HighlightFilter {
    /// Let every category through.
    pub fn all() -> Self {
        Self {
            allowed: HighlightCategory::ALL.into_iter().collect(),
        }
    }

    /// Let nothing through.
    pub fn disabled() -> Self {
        Self {
            allowed: BTreeSet::new(),
        }
    }

    pub fn from_config(config: &HighlightConfig) -> Self {
        Self {
            allowed: HighlightCategory::ALL
                .into_iter()
                .filter(|category| config.allows(*category))
                .collect(),
        }
    }

    /// Suppress one more category.
    pub fn without(mut self, category: HighlightCategory) -> Self {
        self.allowed.remove(&category);
        self
    }

    pub fn allows(&self, category: HighlightCategory) -> bool {
        self.allowed.contains(&category)
    }

    /// Classify `text`, dropping categories this filter suppresses.
    pub fn classify(&self, text: &str) -> Option<HighlightCategory> {
        classify(text).filter(|category| self.allows(*category))
    }
}

impl Default for HighlightFilter {
    fn default() -> Self {
        Self::all()
    }
}

/// Classify every token and return the highlights, ordered by range.
///
/// Tokens with an empty range, no category, or a suppressed category produce
/// nothing.
pub fn collect_highlights<'a, I>(tokens: I, filter: &HighlightFilter) -> Vec<Highlight>
where
    I: IntoIterator<Item = SourceToken<'a>>,
{
    let mut collector = HighlightCollector::new(filter);
    for token in tokens {
        collector.process_token(token);
    }
    collector.finish()
}

struct HighlightCollector<'f> {
    filter: &'f HighlightFilter,
    highlights: Vec<Highlight>,
    seen: usize,
}

impl<'f> HighlightCollector<'f> {
    fn new(filter: &'f HighlightFilter) -> Self {
        Self {
            filter,
            highlights: Vec::new(),
            seen: 0,
        }
    }

    fn process_token(&mut self, token: SourceToken<'_>) {
        self.seen += 1;
        if let Some(category) = self.filter.classify(token.text) {
            self.push_range(token.range, category);
        }
    }

    fn push_range(&mut self, range: Range<usize>, category: HighlightCategory) {
        if range.start < range.end {
            self.highlights.push(Highlight { category, range });
        }
    }

    fn finish(mut self) -> Vec<Highlight> {
        self.highlights
            .sort_by_key(|highlight| (highlight.range.start, highlight.range.end));
        log::trace!(
            "collected {} highlights from {} tokens",
            self.highlights.len(),
            self.seen
        );
        self.highlights
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Splits on ASCII whitespace and punctuation, standing in for a real lexer.
    fn words(source: &str) -> Vec<SourceToken<'_>> {
        let mut tokens = Vec::new();
        let mut start = None;
        for (index, ch) in source.char_indices() {
            let is_word = ch.is_alphanumeric() || ch == '_' || ch == '$';
            match (is_word, start) {
                (true, None) => start = Some(index),
                (false, Some(s)) => {
                    tokens.push(SourceToken::new(&source[s..index], s..index));
                    start = None;
                }
                _ => {}
            }
        }
        if let Some(s) = start {
            tokens.push(SourceToken::new(&source[s..], s..source.len()));
        }
        tokens
    }

    fn snippets<'s>(
        highlights: &[Highlight],
        category: HighlightCategory,
        source: &'s str,
    ) -> Vec<&'s str> {
        highlights
            .iter()
            .filter(|highlight| highlight.category == category)
            .map(|highlight| &source[highlight.range.clone()])
            .collect()
    }

    const SAMPLE: &str = "export default class Cache extends Base {\n  static async get(key) {\n    const value = await this.store.get(key);\n    return value ?? null;\n  }\n}\n";

    #[test]
    fn collects_keyword_ranges() {
        let highlights = collect_highlights(words(SAMPLE), &HighlightFilter::all());

        assert_eq!(
            snippets(&highlights, HighlightCategory::ModuleKeyword, SAMPLE),
            vec!["export", "default"]
        );
        assert_eq!(
            snippets(&highlights, HighlightCategory::ClassKeyword, SAMPLE),
            vec!["class", "extends"]
        );
        assert_eq!(
            snippets(&highlights, HighlightCategory::FunctionKeyword, SAMPLE),
            vec!["static", "get", "get"]
        );
        assert_eq!(
            snippets(&highlights, HighlightCategory::AsyncAwait, SAMPLE),
            vec!["async", "await"]
        );
        assert_eq!(
            snippets(&highlights, HighlightCategory::ThisOrSuper, SAMPLE),
            vec!["this"]
        );
        assert_eq!(
            snippets(&highlights, HighlightCategory::NullishLiteral, SAMPLE),
            vec!["null"]
        );
        // identifiers and unlisted keywords stay plain
        assert!(highlights
            .iter()
            .all(|h| !matches!(&SAMPLE[h.range.clone()], "Cache" | "return" | "value")));
    }

    #[test]
    fn output_is_sorted_by_range() {
        let mut tokens = words(SAMPLE);
        tokens.reverse();
        let highlights = collect_highlights(tokens, &HighlightFilter::all());
        assert!(!highlights.is_empty());
        assert!(highlights
            .windows(2)
            .all(|pair| pair[0].range.start <= pair[1].range.start));
    }

    #[test]
    fn empty_ranges_are_skipped() {
        let tokens = vec![
            SourceToken::new("this", 4..4),
            SourceToken::new("this", 9..3),
            SourceToken::new("super", 10..15),
        ];
        let highlights = collect_highlights(tokens, &HighlightFilter::all());
        assert_eq!(
            highlights,
            vec![Highlight {
                category: HighlightCategory::ThisOrSuper,
                range: 10..15,
            }]
        );
    }

    #[test]
    fn suppressed_categories_are_dropped() {
        let filter = HighlightFilter::all().without(HighlightCategory::FunctionKeyword);
        let highlights = collect_highlights(words(SAMPLE), &filter);
        assert!(snippets(&highlights, HighlightCategory::FunctionKeyword, SAMPLE).is_empty());
        assert!(!snippets(&highlights, HighlightCategory::ClassKeyword, SAMPLE).is_empty());
    }

    #[test]
    fn disabled_filter_produces_nothing() {
        let highlights = collect_highlights(words(SAMPLE), &HighlightFilter::disabled());
        assert!(highlights.is_empty());
    }

    #[test]
    fn filter_follows_config() {
        let config = HighlightConfig {
            enabled: true,
            disabled_categories: vec![HighlightCategory::GlobalObject],
        };
        let filter = HighlightFilter::from_config(&config);
        assert_eq!(filter.classify("console"), None);
        assert_eq!(filter.classify("this"), Some(HighlightCategory::ThisOrSuper));

        let off = HighlightConfig {
            enabled: false,
            disabled_categories: Vec::new(),
        };
        assert_eq!(HighlightFilter::from_config(&off), HighlightFilter::disabled());
    }

    #[test]
    fn highlights_serialize_with_category_names() {
        let highlight = Highlight {
            category: HighlightCategory::BooleanLiteral,
            range: 3..7,
        };
        let json = serde_json::to_value(&highlight).unwrap();
        assert_eq!(json["category"], "BOOLEAN_LITERAL");
        assert_eq!(json["range"]["start"], 3);
        assert_eq!(json["range"]["end"], 7);
    }
}
