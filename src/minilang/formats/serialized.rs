//! serde-backed formats
//!
//! Both render the derived `Serialize` shape of the AST: statements and
//! expressions are tagged with a `kind` field naming the variant.

use super::registry::{FormatError, Formatter};
use crate::minilang::ast::Program;

pub struct JsonFormatter;

impl Formatter for JsonFormatter {
    fn name(&self) -> &str {
        "json"
    }

    fn serialize(&self, program: &Program) -> Result<String, FormatError> {
        serde_json::to_string_pretty(program).map_err(|e| FormatError::Serialization(e.to_string()))
    }

    fn description(&self) -> &str {
        "Pretty-printed JSON"
    }
}

pub struct YamlFormatter;

impl Formatter for YamlFormatter {
    fn name(&self) -> &str {
        "yaml"
    }

    fn serialize(&self, program: &Program) -> Result<String, FormatError> {
        serde_yaml::to_string(program).map_err(|e| FormatError::Serialization(e.to_string()))
    }

    fn description(&self) -> &str {
        "YAML document"
    }
}
