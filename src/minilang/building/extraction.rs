//! Structural access to concrete syntax tree nodes
//!
//! The builders never index into `children()` directly; they go through these
//! helpers so a tree that does not match the grammar fails with a
//! [`BuildError`] instead of a panic.

use super::error::BuildError;
use crate::minilang::parsing::{SyntaxKind, SyntaxNode};

/// Fail unless `node` was produced by the `expected` rule
pub(crate) fn expect_kind(
    node: &SyntaxNode,
    expected: SyntaxKind,
    what: &'static str,
) -> Result<(), BuildError> {
    if node.kind() == expected {
        Ok(())
    } else {
        Err(BuildError::unexpected_node(what, node))
    }
}

/// First child of the given kind, which the rule guarantees to exist
pub(crate) fn required_child<'a>(
    node: &'a SyntaxNode,
    kind: SyntaxKind,
    what: &'static str,
) -> Result<&'a SyntaxNode, BuildError> {
    node.child(kind).ok_or_else(|| BuildError::missing_child(node, what))
}

/// First child that is an expression alternative
pub(crate) fn expression_child<'a>(
    node: &'a SyntaxNode,
    what: &'static str,
) -> Result<&'a SyntaxNode, BuildError> {
    optional_expression_child(node).ok_or_else(|| BuildError::missing_child(node, what))
}

/// First child that is an expression alternative, if the rule has one
pub(crate) fn optional_expression_child(node: &SyntaxNode) -> Option<&SyntaxNode> {
    node.children().iter().find(|c| c.kind().is_expression())
}

/// Child at a fixed position of the rule
pub(crate) fn nth_child<'a>(
    node: &'a SyntaxNode,
    index: usize,
    what: &'static str,
) -> Result<&'a SyntaxNode, BuildError> {
    node.children()
        .get(index)
        .ok_or_else(|| BuildError::missing_child(node, what))
}
