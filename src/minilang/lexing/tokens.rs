//! Token definitions for minilang
//!
//! This module defines all the tokens that can be produced by the minilang lexer.
//! The tokens are defined using the logos derive macro for efficient tokenization.
//! Whitespace and comments are skipped by logos itself and never reach the parser.
use logos::{FilterResult, Lexer, Logos};
use std::fmt;

/// Why a stretch of input produced no token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LexErrorKind {
    #[default]
    Unrecognized,
    /// `/*` with no matching `*/` before end of input
    UnterminatedComment,
}

/// Consume a block comment up to and including its `*/`.
///
/// An unterminated comment swallows the rest of the input and is reported as
/// a single error spanning from `/*` to the end.
fn block_comment(lex: &mut Lexer<Token>) -> FilterResult<(), LexErrorKind> {
    match lex.remainder().find("*/") {
        Some(end) => {
            lex.bump(end + 2);
            FilterResult::Skip
        }
        None => {
            lex.bump(lex.remainder().len());
            FilterResult::Error(LexErrorKind::UnterminatedComment)
        }
    }
}

/// All possible tokens in minilang
#[derive(Logos, Debug, PartialEq, Eq, Hash, Clone, Copy)]
#[logos(error = LexErrorKind)]
#[logos(skip r"[ \t\r\n\f]+")]
#[logos(skip r"//[^\n]*")]
pub enum Token {
    /// Only ever skipped by its callback, never emitted
    #[token("/*", block_comment)]
    BlockComment,

    // Type keywords
    #[token("int")]
    Int,
    #[token("bool")]
    Bool,
    #[token("void")]
    Void,

    // Statement keywords
    #[token("if")]
    If,
    #[token("else")]
    Else,
    #[token("while")]
    While,
    #[token("return")]
    Return,
    #[token("break")]
    Break,
    #[token("continue")]
    Continue,

    // Literals
    #[token("true")]
    True,
    #[token("false")]
    False,
    #[regex(r"[0-9]+")]
    IntLiteral,
    #[regex(r"[A-Za-z_][A-Za-z0-9_]*")]
    Ident,

    // Punctuation
    #[token("(")]
    OpenParen,
    #[token(")")]
    CloseParen,
    #[token("{")]
    OpenBrace,
    #[token("}")]
    CloseBrace,
    #[token(",")]
    Comma,
    #[token(";")]
    Semicolon,
    #[token("=")]
    Assign,

    // Operators
    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("*")]
    Star,
    #[token("/")]
    Slash,
    #[token("%")]
    Percent,
    #[token("<")]
    Less,
    #[token("<=")]
    LessEqual,
    #[token(">")]
    Greater,
    #[token(">=")]
    GreaterEqual,
    #[token("==")]
    EqualEqual,
    #[token("!=")]
    NotEqual,
    #[token("&&")]
    AndAnd,
    #[token("||")]
    OrOr,
    #[token("!")]
    Bang,
}

impl Token {
    /// The spelling used when reporting this token in diagnostics
    pub fn describe(&self) -> &'static str {
        match self {
            Token::BlockComment => "comment",
            Token::Int => "int",
            Token::Bool => "bool",
            Token::Void => "void",
            Token::If => "if",
            Token::Else => "else",
            Token::While => "while",
            Token::Return => "return",
            Token::Break => "break",
            Token::Continue => "continue",
            Token::True => "true",
            Token::False => "false",
            Token::IntLiteral => "integer literal",
            Token::Ident => "identifier",
            Token::OpenParen => "(",
            Token::CloseParen => ")",
            Token::OpenBrace => "{",
            Token::CloseBrace => "}",
            Token::Comma => ",",
            Token::Semicolon => ";",
            Token::Assign => "=",
            Token::Plus => "+",
            Token::Minus => "-",
            Token::Star => "*",
            Token::Slash => "/",
            Token::Percent => "%",
            Token::Less => "<",
            Token::LessEqual => "<=",
            Token::Greater => ">",
            Token::GreaterEqual => ">=",
            Token::EqualEqual => "==",
            Token::NotEqual => "!=",
            Token::AndAnd => "&&",
            Token::OrOr => "||",
            Token::Bang => "!",
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.describe())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keywords_win_over_identifiers() {
        let mut lexer = Token::lexer("int bool void if else while");
        assert_eq!(lexer.next(), Some(Ok(Token::Int)));
        assert_eq!(lexer.next(), Some(Ok(Token::Bool)));
        assert_eq!(lexer.next(), Some(Ok(Token::Void)));
        assert_eq!(lexer.next(), Some(Ok(Token::If)));
        assert_eq!(lexer.next(), Some(Ok(Token::Else)));
        assert_eq!(lexer.next(), Some(Ok(Token::While)));
        assert_eq!(lexer.next(), None);
    }

    #[test]
    fn test_keyword_prefix_is_identifier() {
        let mut lexer = Token::lexer("integer iffy true_value");
        assert_eq!(lexer.next(), Some(Ok(Token::Ident)));
        assert_eq!(lexer.slice(), "integer");
        assert_eq!(lexer.next(), Some(Ok(Token::Ident)));
        assert_eq!(lexer.next(), Some(Ok(Token::Ident)));
        assert_eq!(lexer.slice(), "true_value");
        assert_eq!(lexer.next(), None);
    }

    #[test]
    fn test_two_character_operators() {
        let mut lexer = Token::lexer("<= < >= > == = != && ||");
        assert_eq!(lexer.next(), Some(Ok(Token::LessEqual)));
        assert_eq!(lexer.next(), Some(Ok(Token::Less)));
        assert_eq!(lexer.next(), Some(Ok(Token::GreaterEqual)));
        assert_eq!(lexer.next(), Some(Ok(Token::Greater)));
        assert_eq!(lexer.next(), Some(Ok(Token::EqualEqual)));
        assert_eq!(lexer.next(), Some(Ok(Token::Assign)));
        assert_eq!(lexer.next(), Some(Ok(Token::NotEqual)));
        assert_eq!(lexer.next(), Some(Ok(Token::AndAnd)));
        assert_eq!(lexer.next(), Some(Ok(Token::OrOr)));
        assert_eq!(lexer.next(), None);
    }

    #[test]
    fn test_comments_are_skipped() {
        let mut lexer = Token::lexer("x // trailing\n/* block\n comment */ y / z");
        assert_eq!(lexer.next(), Some(Ok(Token::Ident)));
        assert_eq!(lexer.next(), Some(Ok(Token::Ident)));
        assert_eq!(lexer.slice(), "y");
        assert_eq!(lexer.next(), Some(Ok(Token::Slash)));
        assert_eq!(lexer.next(), Some(Ok(Token::Ident)));
        assert_eq!(lexer.next(), None);
    }

    #[test]
    fn test_unknown_character_is_an_error() {
        let mut lexer = Token::lexer("x # y");
        assert_eq!(lexer.next(), Some(Ok(Token::Ident)));
        assert_eq!(lexer.next(), Some(Err(LexErrorKind::Unrecognized)));
        assert_eq!(lexer.next(), Some(Ok(Token::Ident)));
    }

    #[test]
    fn test_block_comment_edge_cases() {
        let mut lexer = Token::lexer("a /** doc **/ b /* x * / y */ c /**/ d");
        for expected in ["a", "b", "c", "d"] {
            assert_eq!(lexer.next(), Some(Ok(Token::Ident)));
            assert_eq!(lexer.slice(), expected);
        }
        assert_eq!(lexer.next(), None);
    }

    #[test]
    fn test_block_comments_do_not_nest() {
        let mut lexer = Token::lexer("/* outer /* inner */ x");
        assert_eq!(lexer.next(), Some(Ok(Token::Ident)));
        assert_eq!(lexer.slice(), "x");
        assert_eq!(lexer.next(), None);
    }

    #[test]
    fn test_unterminated_block_comment() {
        let mut lexer = Token::lexer("x /* never closed\n y");
        assert_eq!(lexer.next(), Some(Ok(Token::Ident)));
        assert_eq!(lexer.next(), Some(Err(LexErrorKind::UnterminatedComment)));
        assert_eq!(lexer.span(), 2..20);
        assert_eq!(lexer.next(), None);
    }
}
