//! Parsing module for minilang
//!
//! Turns source text into a concrete syntax tree. This is the parse tree
//! provider of the front end: it validates syntax and reports every error it
//! finds, but gives no meaning to the tree it produces. See
//! [`building`](crate::minilang::building) for the AST construction step.
//!
//! Three entry points are provided so that fragments can be parsed on their own:
//! a whole compilation unit, a single statement, and a single expression. Each
//! requires the entire input to be consumed.

pub mod error;
pub(crate) mod grammar;
pub mod syntax_tree;

pub use error::SyntaxError;
pub use syntax_tree::{SyntaxKind, SyntaxNode};

use chumsky::prelude::*;
use chumsky::Stream;
use std::sync::Arc;
use tracing::debug;

use crate::minilang::lexing::{tokenize_with_spans, Token};
use grammar::ParserError;

/// Result of parsing source text into a concrete syntax tree
pub type ParseResult = Result<SyntaxNode, Vec<SyntaxError>>;

fn run<P>(source: &str, parser: P) -> ParseResult
where
    P: Parser<Token, SyntaxNode, Error = ParserError>,
{
    let tokens = tokenize_with_spans(source)
        .map_err(|errors| errors.into_iter().map(SyntaxError::from).collect::<Vec<_>>())?;
    debug!(tokens = tokens.len(), "parsing token stream");

    let eoi = source.len()..source.len();
    parser
        .then_ignore(end())
        .parse(Stream::from_iter(eoi, tokens.into_iter()))
        .map_err(|errors| errors.into_iter().map(SyntaxError::from_simple).collect())
}

/// Parse a whole compilation unit
pub fn parse_program_tree(source: &str) -> ParseResult {
    let text = Arc::new(source.to_string());
    run(source, grammar::program(&text))
}

/// Parse a single statement (assignment, `if`, `while`, `return`, `break`, `continue`)
pub fn parse_statement_tree(source: &str) -> ParseResult {
    let text = Arc::new(source.to_string());
    run(source, grammar::statement(&text))
}

/// Parse a single expression
pub fn parse_expression_tree(source: &str) -> ParseResult {
    let text = Arc::new(source.to_string());
    run(source, grammar::expression(&text))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(node: &SyntaxNode) -> Vec<SyntaxKind> {
        node.children().iter().map(|c| c.kind()).collect()
    }

    #[test]
    fn test_binary_expression_shape() {
        let tree = parse_expression_tree("x + 3").unwrap();
        assert_eq!(tree.kind(), SyntaxKind::BinaryExpr);
        assert_eq!(
            kinds(&tree),
            vec![
                SyntaxKind::LocationExpr,
                SyntaxKind::Operator,
                SyntaxKind::IntLiteral
            ]
        );
        assert_eq!(tree.children()[1].text(), "+");
        assert_eq!(tree.text(), "x + 3");
    }

    #[test]
    fn test_multiplication_binds_tighter() {
        let tree = parse_expression_tree("a + b * c").unwrap();
        assert_eq!(tree.children()[1].text(), "+");
        let right = &tree.children()[2];
        assert_eq!(right.kind(), SyntaxKind::BinaryExpr);
        assert_eq!(right.children()[1].text(), "*");
    }

    #[test]
    fn test_subtraction_is_left_associative() {
        let tree = parse_expression_tree("a - b - c").unwrap();
        let left = &tree.children()[0];
        assert_eq!(left.kind(), SyntaxKind::BinaryExpr);
        assert_eq!(left.text(), "a - b");
        assert_eq!(tree.children()[2].text(), "c");
    }

    #[test]
    fn test_call_with_and_without_arguments() {
        let tree = parse_expression_tree("m(x, y)").unwrap();
        assert_eq!(tree.kind(), SyntaxKind::CallExpr);
        assert_eq!(kinds(&tree), vec![SyntaxKind::Ident, SyntaxKind::ArgList]);
        assert_eq!(tree.child(SyntaxKind::ArgList).unwrap().children().len(), 2);

        let tree = parse_expression_tree("m()").unwrap();
        assert_eq!(kinds(&tree), vec![SyntaxKind::Ident]);
    }

    #[test]
    fn test_parenthesized_expression_is_kept_in_tree() {
        let tree = parse_expression_tree("(a + b) * c").unwrap();
        let left = &tree.children()[0];
        assert_eq!(left.kind(), SyntaxKind::ParenExpr);
        assert_eq!(left.text(), "(a + b)");
    }

    #[test]
    fn test_unsupported_operators_still_parse() {
        for source in ["a / b", "a % b", "a < b", "a == b", "a && b", "a || b"] {
            let tree = parse_expression_tree(source).unwrap();
            assert_eq!(tree.kind(), SyntaxKind::BinaryExpr, "{}", source);
        }
    }

    #[test]
    fn test_if_with_else_if_chain() {
        let tree =
            parse_statement_tree("if (a) { x = 1; } else if (b) { x = 2; } else { x = 3; }")
                .unwrap();
        assert_eq!(tree.kind(), SyntaxKind::IfStmt);
        assert_eq!(
            kinds(&tree),
            vec![
                SyntaxKind::LocationExpr,
                SyntaxKind::Block,
                SyntaxKind::ElseIfClause,
                SyntaxKind::ElseClause
            ]
        );
    }

    #[test]
    fn test_return_with_and_without_value() {
        let tree = parse_statement_tree("return x;").unwrap();
        assert_eq!(kinds(&tree), vec![SyntaxKind::LocationExpr]);

        let tree = parse_statement_tree("return;").unwrap();
        assert!(tree.children().is_empty());
    }

    #[test]
    fn test_program_declarations() {
        let tree = parse_program_tree(
            "int g = 1;\nint add(int a, int b) { return a + b; }\nvoid main() { }",
        )
        .unwrap();
        assert_eq!(tree.kind(), SyntaxKind::Program);
        assert_eq!(
            kinds(&tree),
            vec![
                SyntaxKind::VarDecl,
                SyntaxKind::FuncDecl,
                SyntaxKind::FuncDecl
            ]
        );

        let add = &tree.children()[1];
        assert_eq!(add.child(SyntaxKind::Ident).unwrap().text(), "add");
        assert_eq!(add.child(SyntaxKind::ParamList).unwrap().children().len(), 2);

        let main = &tree.children()[2];
        assert!(main.child(SyntaxKind::ParamList).is_none());
    }

    #[test]
    fn test_empty_program() {
        let tree = parse_program_tree("").unwrap();
        assert_eq!(tree.kind(), SyntaxKind::Program);
        assert!(tree.children().is_empty());
    }

    #[test]
    fn test_missing_semicolon_is_a_syntax_error() {
        let errors = parse_statement_tree("x = 3").unwrap_err();
        assert!(!errors.is_empty());
    }

    #[test]
    fn test_unrecognized_character_is_a_syntax_error() {
        let errors = parse_expression_tree("x $ y").unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].span, 2..3);
        assert!(errors[0].message.contains('$'));
    }

    #[test]
    fn test_unterminated_block_comment_is_a_syntax_error() {
        let errors = parse_program_tree("int x;\n/* never closed").unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].span, 7..22);
        assert_eq!(errors[0].message, "unterminated block comment");
    }

    #[test]
    fn test_trailing_input_is_rejected() {
        assert!(parse_expression_tree("x y").is_err());
        assert!(parse_statement_tree("break; break;").is_err());
    }
}
