//! Program element definition
//!
//! The root of the AST: every global and every function of a compilation unit,
//! each list in source order.

use super::super::traits::AstNode;
use super::function::Function;
use super::variable::Variable;
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Program {
    pub variables: Vec<Variable>,
    pub functions: Vec<Function>,
}

impl Program {
    pub fn new(variables: Vec<Variable>, functions: Vec<Function>) -> Self {
        Self {
            variables,
            functions,
        }
    }

    /// First function declared with this name
    pub fn function(&self, name: &str) -> Option<&Function> {
        self.functions.iter().find(|f| f.name == name)
    }

    /// First global declared with this name
    pub fn variable(&self, name: &str) -> Option<&Variable> {
        self.variables.iter().find(|v| v.name == name)
    }
}

impl AstNode for Program {
    fn node_type(&self) -> &'static str {
        "Program"
    }
    fn display_label(&self) -> String {
        format!(
            "{} variables, {} functions",
            self.variables.len(),
            self.functions.len()
        )
    }
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Program({})", self.display_label())
    }
}
