//! Syntax errors reported by the lexer and parser

use chumsky::error::{Simple, SimpleReason};
use std::fmt;
use std::ops::Range;

use crate::minilang::lexing::{LexError, LexErrorKind, Token};

/// A syntax error with the byte range it was detected at
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxError {
    pub span: Range<usize>,
    pub message: String,
}

impl SyntaxError {
    pub fn new(span: Range<usize>, message: impl Into<String>) -> Self {
        Self {
            span,
            message: message.into(),
        }
    }

    pub(crate) fn from_simple(err: Simple<Token>) -> Self {
        let message = match err.reason() {
            SimpleReason::Custom(msg) => msg.clone(),
            SimpleReason::Unclosed { delimiter, .. } => {
                format!("unclosed delimiter `{}`", delimiter)
            }
            SimpleReason::Unexpected => {
                let found = err
                    .found()
                    .map(|t| format!("`{}`", t))
                    .unwrap_or_else(|| "end of input".to_string());

                let mut expected: Vec<String> = err
                    .expected()
                    .map(|e| match e {
                        Some(t) => format!("`{}`", t),
                        None => "end of input".to_string(),
                    })
                    .collect();
                expected.sort();
                expected.dedup();

                if expected.is_empty() {
                    format!("unexpected {}", found)
                } else {
                    format!("unexpected {}, expected {}", found, expected.join(", "))
                }
            }
        };

        Self::new(err.span(), message)
    }
}

impl From<LexError> for SyntaxError {
    fn from(err: LexError) -> Self {
        let message = match err.kind {
            LexErrorKind::UnterminatedComment => "unterminated block comment".to_string(),
            LexErrorKind::Unrecognized => format!("unrecognized input `{}`", err.text),
        };
        SyntaxError::new(err.span, message)
    }
}

impl fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at {}..{}", self.message, self.span.start, self.span.end)
    }
}

impl std::error::Error for SyntaxError {}
