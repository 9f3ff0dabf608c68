//! End-to-end checks through the facade: tokens in, ordered highlights out

use accent::{
    classify, collect_highlights, highlight_with_config, load_defaults, HighlightCategory,
    HighlightFilter, Loader, SourceToken, CLASSIFICATION_TABLE,
};
use proptest::prelude::*;
use rstest::rstest;

/// Lays `texts` out back to back, separated by one space, and returns the tokens.
fn layout<'a>(texts: &[&'a str]) -> Vec<SourceToken<'a>> {
    let mut offset = 0;
    texts
        .iter()
        .map(|text| {
            let token = SourceToken::new(text, offset..offset + text.len());
            offset += text.len() + 1;
            token
        })
        .collect()
}

#[test]
fn test_defaults_highlight_every_known_literal() {
    let literals: Vec<&str> = CLASSIFICATION_TABLE.iter().map(|(l, _)| *l).collect();
    let config = load_defaults().expect("defaults to load");
    let highlights = highlight_with_config(layout(&literals), &config);

    assert_eq!(highlights.len(), CLASSIFICATION_TABLE.len());
    for (highlight, (_, category)) in highlights.iter().zip(CLASSIFICATION_TABLE) {
        assert_eq!(highlight.category, category);
    }
}

#[rstest]
#[case("GLOBAL_OBJECT", "window", None)]
#[case("GLOBAL_OBJECT", "this", Some(HighlightCategory::ThisOrSuper))]
#[case("nullish-literal", "undefined", None)]
#[case("nullish-literal", "false", Some(HighlightCategory::BooleanLiteral))]
fn test_config_suppression(
    #[case] disabled: &str,
    #[case] text: &str,
    #[case] expected: Option<HighlightCategory>,
) {
    let config = Loader::new()
        .set_override("highlight.disabled_categories", vec![disabled])
        .expect("override to apply")
        .build()
        .expect("config to build");
    let highlights = highlight_with_config(layout(&[text]), &config);
    assert_eq!(highlights.first().map(|h| h.category), expected);
}

proptest! {
    #[test]
    fn highlights_are_sorted_and_classified(
        texts in prop::collection::vec("[a-zA-Z]{0,12}", 0..40),
    ) {
        let refs: Vec<&str> = texts.iter().map(String::as_str).collect();
        let mut tokens = layout(&refs);
        tokens.reverse();
        let highlights = collect_highlights(tokens, &HighlightFilter::all());

        prop_assert!(highlights.windows(2).all(|w| w[0].range.start < w[1].range.start));

        let source = refs.join(" ");
        for highlight in &highlights {
            prop_assert_eq!(
                classify(&source[highlight.range.clone()]),
                Some(highlight.category)
            );
        }

        let expected = refs.iter().filter(|text| classify(text).is_some()).count();
        prop_assert_eq!(highlights.len(), expected);
    }
}
