//! Expression building
//!
//! One function per grammar alternative, dispatched on the node kind. Operands
//! are built left before right and arguments in source order. Parentheses
//! leave no trace: the builder recurses straight into the grouped expression.

use tracing::trace;

use super::error::{BuildError, LiteralKind};
use super::extraction::{expect_kind, expression_child, nth_child, required_child};
use crate::minilang::ast::{Expression, Operator};
use crate::minilang::parsing::{SyntaxKind, SyntaxNode};

/// Build an [`Expression`] from any expression node
pub fn build_expression(node: &SyntaxNode) -> Result<Expression, BuildError> {
    match node.kind() {
        SyntaxKind::BinaryExpr => build_binary(node),
        SyntaxKind::CallExpr => build_call(node),
        SyntaxKind::IntLiteral => parse_int_literal(node).map(Expression::int),
        SyntaxKind::BoolLiteral => parse_bool_literal(node).map(Expression::bool),
        SyntaxKind::ParenExpr => build_expression(expression_child(node, "inner expression")?),
        SyntaxKind::LocationExpr => {
            let name = required_child(node, SyntaxKind::Ident, "name")?;
            Ok(Expression::location(name.text()))
        }
        SyntaxKind::Ident => Ok(Expression::location(node.text())),
        _ => Err(BuildError::unexpected_node("expression", node)),
    }
}

fn build_binary(node: &SyntaxNode) -> Result<Expression, BuildError> {
    let left = build_expression(nth_child(node, 0, "left operand")?)?;
    let op = resolve_operator(nth_child(node, 1, "operator")?)?;
    let right = build_expression(nth_child(node, 2, "right operand")?)?;
    Ok(Expression::binary(left, op, right))
}

fn build_call(node: &SyntaxNode) -> Result<Expression, BuildError> {
    let name = required_child(node, SyntaxKind::Ident, "callee name")?.text();
    let args = match node.child(SyntaxKind::ArgList) {
        Some(list) => list
            .children()
            .iter()
            .map(build_expression)
            .collect::<Result<Vec<_>, _>>()?,
        None => Vec::new(),
    };
    trace!(callee = name, args = args.len(), "built call");
    Ok(Expression::call(name, args))
}

/// Map an operator token to an [`Operator`].
///
/// Only `+`, `-` and `*` exist in the AST; everything else the grammar accepts
/// is rejected here.
pub fn resolve_operator(node: &SyntaxNode) -> Result<Operator, BuildError> {
    expect_kind(node, SyntaxKind::Operator, "operator")?;
    match node.text() {
        "+" => Ok(Operator::Add),
        "-" => Ok(Operator::Sub),
        "*" => Ok(Operator::Mul),
        _ => Err(BuildError::unsupported_operator(node)),
    }
}

/// Decimal, 32-bit signed
fn parse_int_literal(node: &SyntaxNode) -> Result<i32, BuildError> {
    node.text()
        .parse::<i32>()
        .map_err(|_| BuildError::malformed_literal(LiteralKind::Int, node))
}

fn parse_bool_literal(node: &SyntaxNode) -> Result<bool, BuildError> {
    match node.text() {
        "true" => Ok(true),
        "false" => Ok(false),
        _ => Err(BuildError::malformed_literal(LiteralKind::Bool, node)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::minilang::parsing::parse_expression_tree;

    fn build(source: &str) -> Result<Expression, BuildError> {
        let tree = parse_expression_tree(source).expect("source should parse");
        build_expression(&tree)
    }

    #[test]
    fn test_binary_keeps_operand_order() {
        assert_eq!(
            build("x + 3").unwrap(),
            Expression::binary(Expression::location("x"), Operator::Add, Expression::int(3))
        );
        assert_eq!(
            build("3 - x").unwrap(),
            Expression::binary(Expression::int(3), Operator::Sub, Expression::location("x"))
        );
    }

    #[test]
    fn test_parentheses_only_shape_the_tree() {
        let grouped = build("(a + b) * c").unwrap();
        assert_eq!(
            grouped,
            Expression::binary(
                Expression::binary(
                    Expression::location("a"),
                    Operator::Add,
                    Expression::location("b")
                ),
                Operator::Mul,
                Expression::location("c"),
            )
        );
        assert_eq!(build("((x))").unwrap(), Expression::location("x"));
    }

    #[test]
    fn test_call_arguments_in_source_order() {
        assert_eq!(
            build("m(x, y)").unwrap(),
            Expression::call("m", vec![Expression::location("x"), Expression::location("y")])
        );
        assert_eq!(build("f()").unwrap(), Expression::call("f", vec![]));
    }

    #[test]
    fn test_literals() {
        assert_eq!(build("3").unwrap(), Expression::int(3));
        assert_eq!(build("true").unwrap(), Expression::bool(true));
        assert_eq!(build("false").unwrap(), Expression::bool(false));
        assert_eq!(build("2147483647").unwrap(), Expression::int(i32::MAX));
    }

    #[test]
    fn test_integer_overflow_is_malformed() {
        match build("2147483648") {
            Err(BuildError::MalformedLiteral { kind, text, .. }) => {
                assert_eq!(kind, LiteralKind::Int);
                assert_eq!(text, "2147483648");
            }
            other => panic!("Expected MalformedLiteral, got {:?}", other),
        }
    }

    #[test]
    fn test_malformed_bool_spelling() {
        let node = SyntaxNode::leaf(SyntaxKind::BoolLiteral, 0..4, "True");
        assert!(matches!(
            build_expression(&node),
            Err(BuildError::MalformedLiteral {
                kind: LiteralKind::Bool,
                ..
            })
        ));
    }

    #[test]
    fn test_unsupported_operators() {
        for (source, op) in [("a / b", "/"), ("a % b", "%"), ("a < b", "<"), ("a && b", "&&")] {
            match build(source) {
                Err(BuildError::UnsupportedOperator { operator, .. }) => assert_eq!(operator, op),
                other => panic!("{}: expected UnsupportedOperator, got {:?}", source, other),
            }
        }
    }

    #[test]
    fn test_unsupported_operator_nested_in_argument() {
        assert!(matches!(
            build("f(1, x / 2)"),
            Err(BuildError::UnsupportedOperator { .. })
        ));
    }

    #[test]
    fn test_statement_node_is_not_an_expression() {
        let node = SyntaxNode::branch(SyntaxKind::BreakStmt, 0..6, "break;", vec![]);
        assert!(matches!(
            build_expression(&node),
            Err(BuildError::UnexpectedNode {
                expected: "expression",
                ..
            })
        ));
    }

    #[test]
    fn test_operator_must_be_an_operator_node() {
        let node = SyntaxNode::leaf(SyntaxKind::Ident, 2..3, "+");
        assert!(matches!(
            resolve_operator(&node),
            Err(BuildError::UnexpectedNode {
                expected: "operator",
                found: SyntaxKind::Ident,
                ..
            })
        ));

        let node = SyntaxNode::leaf(SyntaxKind::Operator, 2..3, "+");
        assert_eq!(resolve_operator(&node).unwrap(), Operator::Add);
    }
}
