//! Output formatting for the `classify` and `table` commands

use crate::CliError;
use accent_analysis::{style_key, BaseStyle, HighlightFilter};
use accent_config::OutputFormat;
use accent_core::HighlightCategory;
use serde::Serialize;

/// One classified token.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClassifiedToken {
    pub token: String,
    pub category: Option<HighlightCategory>,
}

/// One line of the classification table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableRow {
    pub category: HighlightCategory,
    pub style_key: &'static str,
    pub fallback: BaseStyle,
    pub literals: &'static [&'static str],
}

pub fn classify_tokens<I>(
    tokens: I,
    filter: &HighlightFilter,
    show_unclassified: bool,
) -> Vec<ClassifiedToken>
where
    I: IntoIterator<Item = String>,
{
    tokens
        .into_iter()
        .map(|token| {
            let category = filter.classify(&token);
            ClassifiedToken { token, category }
        })
        .filter(|row| show_unclassified || row.category.is_some())
        .collect()
}

pub fn table_rows() -> Vec<TableRow> {
    HighlightCategory::ALL
        .into_iter()
        .map(|category| {
            let key = style_key(category);
            TableRow {
                category,
                style_key: key.name,
                fallback: key.fallback,
                literals: category.literals(),
            }
        })
        .collect()
}

pub fn render_classified(
    rows: &[ClassifiedToken],
    format: OutputFormat,
) -> Result<String, CliError> {
    match format {
        OutputFormat::Simple => Ok(rows
            .iter()
            .map(|row| {
                let category = row.category.map_or("-", HighlightCategory::as_str);
                format!("{}\t{}\n", row.token, category)
            })
            .collect()),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(rows)? + "\n"),
        OutputFormat::Yaml => Ok(serde_yaml::to_string(rows)?),
    }
}

pub fn render_table(rows: &[TableRow], format: OutputFormat) -> Result<String, CliError> {
    match format {
        OutputFormat::Simple => Ok(rows
            .iter()
            .map(|row| {
                format!(
                    "{:<24} {:<18} {:<11} {}\n",
                    row.category.as_str(),
                    row.style_key,
                    row.fallback.key(),
                    row.literals.join(" ")
                )
            })
            .collect()),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(rows)? + "\n"),
        OutputFormat::Yaml => Ok(serde_yaml::to_string(rows)?),
    }
}
