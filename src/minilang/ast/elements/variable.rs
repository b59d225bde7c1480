//! Variable element definition

use super::super::traits::AstNode;
use super::expression::Expression;
use super::types::Type;
use serde::Serialize;
use std::fmt;

/// A declared global, local or parameter
///
/// `initializer` holds the expression of `int x = e;`. Parameters never have one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Variable {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: Type,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub initializer: Option<Expression>,
}

impl Variable {
    pub fn new(name: impl Into<String>, ty: Type) -> Self {
        Self {
            name: name.into(),
            ty,
            initializer: None,
        }
    }

    pub fn with_initializer(mut self, initializer: Option<Expression>) -> Self {
        self.initializer = initializer;
        self
    }
}

impl AstNode for Variable {
    fn node_type(&self) -> &'static str {
        "Variable"
    }
    fn display_label(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Variable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.initializer {
            Some(init) => write!(f, "{} {} = {}", self.ty, self.name, init),
            None => write!(f, "{} {}", self.ty, self.name),
        }
    }
}
