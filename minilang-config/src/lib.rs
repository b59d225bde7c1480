//! Configuration loader for the minilang front end.
//!
//! `defaults/minilang.default.toml` is embedded so that the documented defaults
//! and runtime behavior stay in sync. Callers layer their own files and
//! overrides on top of those defaults via [`Loader`] before deserializing into
//! [`MinilangConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../defaults/minilang.default.toml");

/// Top-level configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct MinilangConfig {
    pub building: BuildingConfig,
    pub formats: FormatsConfig,
}

/// Knobs for AST construction.
#[derive(Debug, Clone, Deserialize)]
pub struct BuildingConfig {
    pub local_initializers: InitializerPolicy,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InitializerPolicy {
    Keep,
    Discard,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FormatsConfig {
    pub default: String,
    pub treeviz_label_width: usize,
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

    /// Apply a single key/value override, e.g. `("building.local_initializers", "discard")`.
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Finalize the builder and deserialize the resulting configuration.
    pub fn build(self) -> Result<MinilangConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<MinilangConfig, ConfigError> {
    Loader::new().build()
}
