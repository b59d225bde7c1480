//! Block element definition

use super::super::traits::AstNode;
use super::statement::Statement;
use super::variable::Variable;
use serde::Serialize;
use std::fmt;

/// A braced scope: the locals declared directly inside it and its statements,
/// each in source order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Block {
    pub locals: Vec<Variable>,
    pub statements: Vec<Statement>,
}

impl Block {
    pub fn new(locals: Vec<Variable>, statements: Vec<Statement>) -> Self {
        Self { locals, statements }
    }

    /// A block with no locals and no statements; stands in for an omitted `else`
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn with_statements(statements: Vec<Statement>) -> Self {
        Self {
            locals: Vec::new(),
            statements,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.locals.is_empty() && self.statements.is_empty()
    }
}

impl AstNode for Block {
    fn node_type(&self) -> &'static str {
        "Block"
    }
    fn display_label(&self) -> String {
        format!(
            "{} locals, {} statements",
            self.locals.len(),
            self.statements.len()
        )
    }
}

impl fmt::Display for Block {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Block({})", self.display_label())
    }
}
