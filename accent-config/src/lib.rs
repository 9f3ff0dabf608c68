//! Shared configuration loader for the accent tools.
//!
//! `defaults/accent.default.toml` is embedded into every binary so that docs
//! and runtime behavior stay in sync. Applications layer user-specific files on
//! top of those defaults via [`Loader`] before deserializing into
//! [`AccentConfig`].

use accent_core::HighlightCategory;
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::path::Path;

pub use config::ConfigError;

const DEFAULT_TOML: &str = include_str!("../defaults/accent.default.toml");

/// Top-level configuration consumed by accent applications.
#[derive(Debug, Clone, Deserialize)]
pub struct AccentConfig {
    pub highlight: HighlightConfig,
    pub output: OutputConfig,
}

/// Which categories are allowed to reach the renderer.
#[derive(Debug, Clone, Deserialize)]
pub struct HighlightConfig {
    pub enabled: bool,
    pub disabled_categories: Vec<HighlightCategory>,
}

impl HighlightConfig {
    /// Whether tokens of `category` should be highlighted at all.
    pub fn allows(&self, category: HighlightCategory) -> bool {
        self.enabled && !self.disabled_categories.contains(&category)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub show_unclassified: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OutputFormat {
    Simple,
    Json,
    Yaml,
}

/// Helper for layering user overrides over the built-in defaults.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// Start a loader seeded with the embedded defaults.
    pub fn new() -> Self {
        let builder =
            Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Layer a configuration file. Missing files trigger an error.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        log::debug!("layering config file {}", path.as_ref().display());
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Layer an optional configuration file (ignored if the file is absent).
    pub fn with_optional_file(mut self, path: impl AsRef<Path>) -> Self {
        log::debug!("layering optional config file {}", path.as_ref().display());
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(false);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Apply a single key/value override (useful for CLI settings).
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Replace the suppressed category list.
    pub fn disable_categories(
        self,
        categories: &[HighlightCategory],
    ) -> Result<Self, ConfigError> {
        let names: Vec<String> = categories.iter().map(|c| c.as_str().to_string()).collect();
        self.set_override("highlight.disabled_categories", names)
    }

    /// Finalize the builder and deserialize the resulting configuration.
    pub fn build(self) -> Result<AccentConfig, ConfigError> {
        let config: AccentConfig = self.builder.build()?.try_deserialize()?;
        log::debug!(
            "highlighting enabled={} disabled={:?}",
            config.highlight.enabled,
            config.highlight.disabled_categories
        );
        Ok(config)
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<AccentConfig, ConfigError> {
    Loader::new().build()
}
