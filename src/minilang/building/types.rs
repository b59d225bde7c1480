//! Type resolution

use super::error::BuildError;
use crate::minilang::ast::Type;
use crate::minilang::parsing::{SyntaxKind, SyntaxNode};

/// Map a type annotation to a [`Type`].
///
/// Accepts either the `type` rule node or the keyword leaf it wraps.
pub fn resolve_type(node: &SyntaxNode) -> Result<Type, BuildError> {
    let keyword = match node.kind() {
        SyntaxKind::Type => node
            .children()
            .first()
            .ok_or_else(|| BuildError::missing_child(node, "type keyword"))?,
        _ => node,
    };

    match keyword.kind() {
        SyntaxKind::IntKw => Ok(Type::Int),
        SyntaxKind::BoolKw => Ok(Type::Bool),
        SyntaxKind::VoidKw => Ok(Type::Void),
        _ => Err(BuildError::unrecognized_type(keyword)),
    }
}
