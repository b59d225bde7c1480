//! Function element definition

use super::super::traits::AstNode;
use super::block::Block;
use super::types::Type;
use super::variable::Variable;
use serde::Serialize;
use std::fmt;

/// A function declaration
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Function {
    pub return_type: Type,
    pub name: String,
    pub params: Vec<Variable>,
    pub body: Block,
}

impl Function {
    pub fn new(
        return_type: Type,
        name: impl Into<String>,
        params: Vec<Variable>,
        body: Block,
    ) -> Self {
        Self {
            return_type,
            name: name.into(),
            params,
            body,
        }
    }

    pub fn arity(&self) -> usize {
        self.params.len()
    }
}

impl AstNode for Function {
    fn node_type(&self) -> &'static str {
        "Function"
    }
    fn display_label(&self) -> String {
        let params: Vec<String> = self.params.iter().map(|p| p.to_string()).collect();
        format!("{} {}({})", self.return_type, self.name, params.join(", "))
    }
}

impl fmt::Display for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Function('{}', {} params)", self.name, self.params.len())
    }
}
