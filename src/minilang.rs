//! Main module for minilang library functionality
//!
//! The entry points here chain parsing and building for callers that start from
//! source text. Callers that already hold a [`SyntaxNode`](parsing::SyntaxNode)
//! go to [`building`] directly.

pub mod ast;
pub mod building;
pub mod formats;
pub mod lexing;
pub mod parsing;
pub mod testing;

use thiserror::Error;

use ast::{Expression, Program, SourceLocation, Statement};
use building::{BuildError, BuildOptions};
use parsing::SyntaxError;

/// Anything that stops source text from becoming an AST
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FrontendError {
    #[error("{} syntax error(s)", .0.len())]
    Syntax(Vec<SyntaxError>),
    #[error(transparent)]
    Build(#[from] BuildError),
}

impl FrontendError {
    /// One line per error, each prefixed with its `line:column` in `source`
    pub fn render(&self, source: &str) -> String {
        let locator = SourceLocation::new(source);
        let at = |span: &std::ops::Range<usize>| locator.byte_to_position(span.start);
        match self {
            FrontendError::Syntax(errors) => errors
                .iter()
                .map(|e| format!("{}: syntax error: {}", at(&e.span), e.message))
                .collect::<Vec<_>>()
                .join("\n"),
            FrontendError::Build(err) => format!("{}: {}", at(&err.span()), err),
        }
    }
}

impl From<Vec<SyntaxError>> for FrontendError {
    fn from(errors: Vec<SyntaxError>) -> Self {
        FrontendError::Syntax(errors)
    }
}

/// Parse and build a whole compilation unit with default options
pub fn parse_program(source: &str) -> Result<Program, FrontendError> {
    parse_program_with(source, &BuildOptions::default())
}

pub fn parse_program_with(source: &str, options: &BuildOptions) -> Result<Program, FrontendError> {
    let tree = parsing::parse_program_tree(source)?;
    Ok(building::build_program(&tree, options)?)
}

/// Parse and build a single statement
pub fn parse_statement(source: &str) -> Result<Statement, FrontendError> {
    let tree = parsing::parse_statement_tree(source)?;
    Ok(building::build_statement(&tree, &BuildOptions::default())?)
}

/// Parse and build a single expression
pub fn parse_expression(source: &str) -> Result<Expression, FrontendError> {
    let tree = parsing::parse_expression_tree(source)?;
    Ok(building::build_expression(&tree)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::minilang::ast::Operator;

    #[test]
    fn test_parse_expression_end_to_end() {
        assert_eq!(
            parse_expression("1 - 2 - 3").unwrap(),
            Expression::binary(
                Expression::binary(Expression::int(1), Operator::Sub, Expression::int(2)),
                Operator::Sub,
                Expression::int(3),
            )
        );
    }

    #[test]
    fn test_syntax_errors_are_not_build_errors() {
        let err = parse_program("int x = ;").unwrap_err();
        assert!(matches!(err, FrontendError::Syntax(ref errors) if !errors.is_empty()));
    }

    #[test]
    fn test_render_build_error_position() {
        let source = "int main() {\n  return 4 / 2;\n}";
        let err = parse_program(source).unwrap_err();
        assert_eq!(err.render(source), "2:12: unsupported operator `/`");
    }

    #[test]
    fn test_render_syntax_error_position() {
        let source = "int x;\nint y = 1 $ 2;";
        let err = parse_program(source).unwrap_err();
        let rendered = err.render(source);
        assert!(rendered.starts_with("2:11: syntax error: unrecognized input `$`"));
    }
}
