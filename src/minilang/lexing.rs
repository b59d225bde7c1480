//! Lexer module for minilang
//!
//! This module contains the tokenization logic, including token definitions and
//! span-preserving helpers for the parser. The actual tokenization is handled
//! entirely by logos; this layer only collects spans and unrecognized input.

pub mod tokens;

pub use tokens::{LexErrorKind, Token};

use logos::Logos;
use std::ops::Range;

/// A token together with its byte range in the source
pub type TokenSpan = (Token, Range<usize>);

/// Input that matched no token definition, or a comment that never closed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LexError {
    pub kind: LexErrorKind,
    pub span: Range<usize>,
    pub text: String,
}

/// Tokenize a source string, keeping the byte span of every token.
///
/// Unrecognized characters are collected rather than dropped; if any are found
/// the whole input is rejected.
pub fn tokenize_with_spans(source: &str) -> Result<Vec<TokenSpan>, Vec<LexError>> {
    let mut lexer = Token::lexer(source);
    let mut tokens = Vec::new();
    let mut errors = Vec::new();

    while let Some(result) = lexer.next() {
        match result {
            Ok(token) => tokens.push((token, lexer.span())),
            Err(kind) => errors.push(LexError {
                kind,
                span: lexer.span(),
                text: lexer.slice().to_string(),
            }),
        }
    }

    if errors.is_empty() {
        Ok(tokens)
    } else {
        Err(errors)
    }
}
