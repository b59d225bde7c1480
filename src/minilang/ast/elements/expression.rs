//! Expression element definition

use super::super::traits::AstNode;
use super::types::Operator;
use serde::Serialize;
use std::fmt;

/// A named variable or parameter reference, used both as lvalue and rvalue
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Location {
    pub name: String,
}

impl Location {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Expressions of the language
///
/// Grouping parentheses have no node of their own: they only shape the tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind")]
pub enum Expression {
    Binary {
        left: Box<Expression>,
        op: Operator,
        right: Box<Expression>,
    },
    IntConstant {
        value: i32,
    },
    BoolConstant {
        value: bool,
    },
    Location(Location),
    FunctionCall {
        name: String,
        args: Vec<Expression>,
    },
}

impl Expression {
    pub fn binary(left: Expression, op: Operator, right: Expression) -> Self {
        Expression::Binary {
            left: Box::new(left),
            op,
            right: Box::new(right),
        }
    }

    pub fn int(value: i32) -> Self {
        Expression::IntConstant { value }
    }

    pub fn bool(value: bool) -> Self {
        Expression::BoolConstant { value }
    }

    pub fn location(name: impl Into<String>) -> Self {
        Expression::Location(Location::new(name))
    }

    pub fn call(name: impl Into<String>, args: Vec<Expression>) -> Self {
        Expression::FunctionCall {
            name: name.into(),
            args,
        }
    }

    /// Number of nodes in this expression tree, counting itself
    pub fn node_count(&self) -> usize {
        match self {
            Expression::Binary { left, right, .. } => 1 + left.node_count() + right.node_count(),
            Expression::FunctionCall { args, .. } => {
                1 + args.iter().map(Expression::node_count).sum::<usize>()
            }
            _ => 1,
        }
    }

    fn fmt_operand(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expression::Binary { .. } => write!(f, "({})", self),
            _ => write!(f, "{}", self),
        }
    }
}

impl AstNode for Expression {
    fn node_type(&self) -> &'static str {
        match self {
            Expression::Binary { .. } => "Binary",
            Expression::IntConstant { .. } => "IntConstant",
            Expression::BoolConstant { .. } => "BoolConstant",
            Expression::Location(_) => "Location",
            Expression::FunctionCall { .. } => "FunctionCall",
        }
    }

    fn display_label(&self) -> String {
        match self {
            Expression::Binary { op, .. } => op.to_string(),
            Expression::FunctionCall { name, args } => format!("{}/{}", name, args.len()),
            other => other.to_string(),
        }
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expression::Binary { left, op, right } => {
                left.fmt_operand(f)?;
                write!(f, " {} ", op)?;
                right.fmt_operand(f)
            }
            Expression::IntConstant { value } => write!(f, "{}", value),
            Expression::BoolConstant { value } => write!(f, "{}", value),
            Expression::Location(location) => write!(f, "{}", location),
            Expression::FunctionCall { name, args } => {
                write!(f, "{}(", name)?;
                for (i, arg) in args.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", arg)?;
                }
                write!(f, ")")
            }
        }
    }
}
