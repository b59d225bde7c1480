//! Statement element definition

use super::super::traits::AstNode;
use super::block::Block;
use super::expression::{Expression, Location};
use serde::Serialize;
use std::fmt;

/// Executable statements of the language
///
/// `IfElse` always has an else block; an omitted `else` is an empty [`Block`].
/// `Return` and `ReturnVoid` are distinct so void returns stay recognizable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind")]
pub enum Statement {
    Assignment {
        target: Location,
        value: Expression,
    },
    IfElse {
        cond: Expression,
        then_block: Block,
        else_block: Block,
    },
    While {
        cond: Expression,
        body: Block,
    },
    Return {
        value: Expression,
    },
    ReturnVoid,
    Break,
    Continue,
}

impl Statement {
    pub fn assign(target: impl Into<String>, value: Expression) -> Self {
        Statement::Assignment {
            target: Location::new(target),
            value,
        }
    }

    pub fn if_else(cond: Expression, then_block: Block, else_block: Block) -> Self {
        Statement::IfElse {
            cond,
            then_block,
            else_block,
        }
    }

    pub fn while_loop(cond: Expression, body: Block) -> Self {
        Statement::While { cond, body }
    }

    pub fn ret(value: Expression) -> Self {
        Statement::Return { value }
    }
}

impl AstNode for Statement {
    fn node_type(&self) -> &'static str {
        match self {
            Statement::Assignment { .. } => "Assignment",
            Statement::IfElse { .. } => "IfElse",
            Statement::While { .. } => "While",
            Statement::Return { .. } => "Return",
            Statement::ReturnVoid => "ReturnVoid",
            Statement::Break => "Break",
            Statement::Continue => "Continue",
        }
    }

    fn display_label(&self) -> String {
        match self {
            Statement::Assignment { target, value } => format!("{} = {}", target, value),
            Statement::IfElse { cond, .. } | Statement::While { cond, .. } => cond.to_string(),
            Statement::Return { value } => value.to_string(),
            Statement::ReturnVoid | Statement::Break | Statement::Continue => String::new(),
        }
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Statement::Assignment { target, value } => write!(f, "{} = {};", target, value),
            Statement::IfElse {
                cond,
                then_block,
                else_block,
            } => write!(f, "if ({}) {} else {}", cond, then_block, else_block),
            Statement::While { cond, body } => write!(f, "while ({}) {}", cond, body),
            Statement::Return { value } => write!(f, "return {};", value),
            Statement::ReturnVoid => write!(f, "return;"),
            Statement::Break => write!(f, "break;"),
            Statement::Continue => write!(f, "continue;"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::minilang::ast::Operator;

    #[test]
    fn test_assignment_label() {
        let stmt = Statement::assign(
            "x",
            Expression::binary(Expression::location("x"), Operator::Add, Expression::int(1)),
        );
        assert_eq!(stmt.node_type(), "Assignment");
        assert_eq!(stmt.display_label(), "x = x + 1");
        assert_eq!(stmt.to_string(), "x = x + 1;");
    }

    #[test]
    fn test_return_kinds_are_distinct() {
        assert_ne!(Statement::ReturnVoid, Statement::ret(Expression::int(0)));
        assert_eq!(Statement::ReturnVoid.node_type(), "ReturnVoid");
    }

    #[test]
    fn test_serialize_unit_variant() {
        let json = serde_json::to_string(&Statement::Break).unwrap();
        assert_eq!(json, r#"{"kind":"Break"}"#);
    }
}
