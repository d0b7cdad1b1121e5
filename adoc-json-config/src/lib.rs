//! Shared configuration loader for adoc-json.
//!
//! `defaults/adoc-json.default.toml` is embedded into every binary so that docs
//! and runtime behavior stay in sync. Applications layer user-specific files on
//! top of those defaults via [`Loader`] before deserializing into [`AppConfig`].

use adoc_json::ConverterOptions;
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../defaults/adoc-json.default.toml");

/// File picked up from the working directory when present.
pub const LOCAL_CONFIG_FILE: &str = "adoc-json.toml";

/// Top-level configuration consumed by adoc-json applications.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub convert: ConvertConfig,
    pub logging: LoggingConfig,
}

/// Conversion defaults; command line flags take precedence.
#[derive(Debug, Clone, Deserialize)]
pub struct ConvertConfig {
    pub backend: String,
    pub pretty: bool,
    pub mdast: MdastConfig,
}

/// Mirrors the knobs exposed by the Mdast backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct MdastConfig {
    pub flat: bool,
    pub no_asciidoc_data: bool,
}

impl From<MdastConfig> for ConverterOptions {
    fn from(config: MdastConfig) -> Self {
        ConverterOptions {
            flat: config.flat,
            no_asciidoc_data: config.no_asciidoc_data,
        }
    }
}

impl From<&MdastConfig> for ConverterOptions {
    fn from(config: &MdastConfig) -> Self {
        ConverterOptions::from(*config)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// A `tracing` filter directive such as `warn` or `adoc_json=debug`.
    pub level: String,
}

/// Helper for layering user overrides over the built-in defaults.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// Start a loader seeded with the embedded defaults.
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Layer a configuration file. Missing files trigger an error.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Layer an optional configuration file (ignored if the file is absent).
    pub fn with_optional_file(mut self, path: impl AsRef<Path>) -> Self {
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

    /// Finalize the builder and deserialize the resulting configuration.
    pub fn build(self) -> Result<AppConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<AppConfig, ConfigError> {
    Loader::new().build()
}
