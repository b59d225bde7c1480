//! Format registry for AST serialization
//!
//! Each format implements the `Formatter` trait and is registered by name with
//! `FormatRegistry`.

use std::collections::HashMap;
use thiserror::Error;

use minilang_config::FormatsConfig;

use super::serialized::{JsonFormatter, YamlFormatter};
use super::treeviz::TreevizFormatter;
use crate::minilang::ast::Program;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    #[error("format '{0}' not found")]
    FormatNotFound(String),
    #[error("serialization error: {0}")]
    Serialization(String),
}

/// A named way of rendering a [`Program`] as text
pub trait Formatter: Send + Sync {
    /// The name of this format (e.g., "treeviz", "json")
    fn name(&self) -> &str;

    fn serialize(&self, program: &Program) -> Result<String, FormatError>;

    fn description(&self) -> &str {
        ""
    }
}

pub struct FormatRegistry {
    formatters: HashMap<String, Box<dyn Formatter>>,
    default_format: String,
}

impl FormatRegistry {
    /// An empty registry whose default format is `treeviz`
    pub fn new() -> Self {
        FormatRegistry {
            formatters: HashMap::new(),
            default_format: TreevizFormatter::NAME.to_string(),
        }
    }

    /// Register a formatter, replacing any existing one of the same name
    pub fn register<F: Formatter + 'static>(&mut self, formatter: F) {
        self.formatters
            .insert(formatter.name().to_string(), Box::new(formatter));
    }

    pub fn get(&self, name: &str) -> Option<&dyn Formatter> {
        self.formatters.get(name).map(|f| f.as_ref())
    }

    pub fn has(&self, name: &str) -> bool {
        self.formatters.contains_key(name)
    }

    pub fn default_format(&self) -> &str {
        &self.default_format
    }

    /// Serialize a program using the named format
    pub fn serialize(&self, program: &Program, format: &str) -> Result<String, FormatError> {
        let formatter = self
            .get(format)
            .ok_or_else(|| FormatError::FormatNotFound(format.to_string()))?;
        formatter.serialize(program)
    }

    /// Serialize a program using the default format
    pub fn serialize_default(&self, program: &Program) -> Result<String, FormatError> {
        self.serialize(program, &self.default_format)
    }

    /// All available format names, sorted
    pub fn list_formats(&self) -> Vec<String> {
        let mut names: Vec<_> = self.formatters.keys().cloned().collect();
        names.sort();
        names
    }

    /// Registry with the built-in formatters
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(TreevizFormatter::default());
        registry.register(JsonFormatter);
        registry.register(YamlFormatter);
        registry
    }

    /// Registry with the built-in formatters, tuned by the `[formats]` table
    pub fn from_config(config: &FormatsConfig) -> Self {
        let mut registry = Self::with_defaults();
        registry.register(TreevizFormatter::new(config.treeviz_label_width));
        registry.default_format = config.default.clone();
        registry
    }
}

impl Default for FormatRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}
