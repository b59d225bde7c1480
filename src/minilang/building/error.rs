//! Errors raised while building the AST
//!
//! Every variant is fatal: the builder stops at the first one and no partial
//! tree is returned.

use std::fmt;
use std::ops::Range;
use thiserror::Error;
use tracing::debug;

use crate::minilang::parsing::{SyntaxKind, SyntaxNode};

/// Which kind of literal failed to parse
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LiteralKind {
    Int,
    Bool,
}

impl fmt::Display for LiteralKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LiteralKind::Int => write!(f, "integer"),
            LiteralKind::Bool => write!(f, "boolean"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuildError {
    /// A type annotation that is none of `int`, `bool`, `void`
    #[error("unrecognized type `{text}`")]
    UnrecognizedType { text: String, span: Range<usize> },

    /// An operator outside `+`, `-`, `*`
    #[error("unsupported operator `{operator}`")]
    UnsupportedOperator {
        operator: String,
        span: Range<usize>,
    },

    /// A literal whose text does not parse as its declared kind
    #[error("malformed {kind} literal `{text}`")]
    MalformedLiteral {
        kind: LiteralKind,
        text: String,
        span: Range<usize>,
    },

    /// A node of the wrong kind where a specific construct was required
    #[error("expected {expected}, found {found} `{text}`")]
    UnexpectedNode {
        expected: &'static str,
        found: SyntaxKind,
        text: String,
        span: Range<usize>,
    },

    /// A node lacking a child its rule always has
    #[error("{parent} is missing its {child}")]
    MissingChild {
        parent: SyntaxKind,
        child: &'static str,
        span: Range<usize>,
    },
}

impl BuildError {
    pub(crate) fn unrecognized_type(node: &SyntaxNode) -> Self {
        Self::report(BuildError::UnrecognizedType {
            text: node.text().to_string(),
            span: node.span(),
        })
    }

    pub(crate) fn unsupported_operator(node: &SyntaxNode) -> Self {
        Self::report(BuildError::UnsupportedOperator {
            operator: node.text().to_string(),
            span: node.span(),
        })
    }

    pub(crate) fn malformed_literal(kind: LiteralKind, node: &SyntaxNode) -> Self {
        Self::report(BuildError::MalformedLiteral {
            kind,
            text: node.text().to_string(),
            span: node.span(),
        })
    }

    pub(crate) fn unexpected_node(expected: &'static str, node: &SyntaxNode) -> Self {
        Self::report(BuildError::UnexpectedNode {
            expected,
            found: node.kind(),
            text: node.text().to_string(),
            span: node.span(),
        })
    }

    pub(crate) fn missing_child(parent: &SyntaxNode, child: &'static str) -> Self {
        Self::report(BuildError::MissingChild {
            parent: parent.kind(),
            child,
            span: parent.span(),
        })
    }

    fn report(err: Self) -> Self {
        debug!(error = %err, span = ?err.span(), "AST construction aborted");
        err
    }

    /// Byte range of the offending node
    pub fn span(&self) -> Range<usize> {
        match self {
            BuildError::UnrecognizedType { span, .. }
            | BuildError::UnsupportedOperator { span, .. }
            | BuildError::MalformedLiteral { span, .. }
            | BuildError::UnexpectedNode { span, .. }
            | BuildError::MissingChild { span, .. } => span.clone(),
        }
    }
}
