//! Parser combinators for the minilang grammar.
//!
//! Every rule produces a [`SyntaxNode`] of the matching [`SyntaxKind`]; no rule
//! interprets what it matched. Binary operators are accepted at every precedence
//! level the language reserves, including ones the AST cannot represent.

use chumsky::prelude::*;
use std::ops::Range;
use std::sync::Arc;

use super::syntax_tree::{SyntaxKind, SyntaxNode};
use crate::minilang::lexing::Token;

/// Type alias for parser error
pub(crate) type ParserError = Simple<Token>;

/// Helper to extract text from source using a span
pub(crate) fn extract_text(source: &str, span: &Range<usize>) -> String {
    if span.start >= span.end || span.end > source.len() {
        return String::new();
    }
    source[span.start..span.end].to_string()
}

/// Parse a single token into a leaf carrying its source text
fn leaf(
    source: &Arc<String>,
    token: Token,
    kind: SyntaxKind,
) -> impl Parser<Token, SyntaxNode, Error = ParserError> + Clone {
    let source = Arc::clone(source);
    just(token).map_with_span(move |_, span: Range<usize>| {
        let text = extract_text(&source, &span);
        SyntaxNode::leaf(kind, span, text)
    })
}

/// Builds an inner node of `kind` from collected children and the matched span
fn node(
    source: &Arc<String>,
    kind: SyntaxKind,
) -> impl Fn(Vec<SyntaxNode>, Range<usize>) -> SyntaxNode + Clone {
    let source = Arc::clone(source);
    move |children, span| {
        let text = extract_text(&source, &span);
        SyntaxNode::branch(kind, span, text, children)
    }
}

/// One left-associative precedence level: `operand (op operand)*`
fn binary_level<'a, P>(
    source: &Arc<String>,
    operand: P,
    operators: &'static [Token],
) -> BoxedParser<'a, Token, SyntaxNode, ParserError>
where
    P: Parser<Token, SyntaxNode, Error = ParserError> + Clone + 'a,
{
    let op_source = Arc::clone(source);
    let operator = filter::<Token, _, ParserError>(move |t: &Token| operators.contains(t))
        .map_with_span(move |_, span: Range<usize>| {
            let text = extract_text(&op_source, &span);
            SyntaxNode::leaf(SyntaxKind::Operator, span, text)
        });

    let source = Arc::clone(source);
    operand
        .clone()
        .then(operator.then(operand).repeated())
        .foldl(move |left, (op, right)| {
            let span = left.span().start..right.span().end;
            let text = extract_text(&source, &span);
            SyntaxNode::branch(SyntaxKind::BinaryExpr, span, text, vec![left, op, right])
        })
        .boxed()
}

/// `type := 'int' | 'bool' | 'void'`
pub(crate) fn type_annotation(
    source: &Arc<String>,
) -> impl Parser<Token, SyntaxNode, Error = ParserError> + Clone {
    choice((
        leaf(source, Token::Int, SyntaxKind::IntKw),
        leaf(source, Token::Bool, SyntaxKind::BoolKw),
        leaf(source, Token::Void, SyntaxKind::VoidKw),
    ))
    .map(|keyword| vec![keyword])
    .map_with_span(node(source, SyntaxKind::Type))
}

/// Full expression grammar, lowest precedence (`||`) first
pub(crate) fn expression<'a>(
    source: &Arc<String>,
) -> impl Parser<Token, SyntaxNode, Error = ParserError> + Clone + 'a {
    let source = Arc::clone(source);
    recursive(move |expr| {
        let ident = leaf(&source, Token::Ident, SyntaxKind::Ident);

        let int_literal = leaf(&source, Token::IntLiteral, SyntaxKind::IntLiteral);
        let bool_literal = leaf(&source, Token::True, SyntaxKind::BoolLiteral)
            .or(leaf(&source, Token::False, SyntaxKind::BoolLiteral));

        let args = expr
            .clone()
            .separated_by(just(Token::Comma))
            .at_least(1)
            .map_with_span(node(&source, SyntaxKind::ArgList));

        let call = ident
            .clone()
            .then(
                args.or_not()
                    .delimited_by(just(Token::OpenParen), just(Token::CloseParen)),
            )
            .map(|(name, args)| {
                let mut children = vec![name];
                children.extend(args);
                children
            })
            .map_with_span(node(&source, SyntaxKind::CallExpr));

        let location = ident
            .map(|name| vec![name])
            .map_with_span(node(&source, SyntaxKind::LocationExpr));

        let parenthesized = expr
            .delimited_by(just(Token::OpenParen), just(Token::CloseParen))
            .map(|inner| vec![inner])
            .map_with_span(node(&source, SyntaxKind::ParenExpr));

        let atom = choice((int_literal, bool_literal, call, location, parenthesized)).boxed();

        let term = binary_level(&source, atom, &[Token::Star, Token::Slash, Token::Percent]);
        let additive = binary_level(&source, term, &[Token::Plus, Token::Minus]);
        let relational = binary_level(
            &source,
            additive,
            &[
                Token::Less,
                Token::LessEqual,
                Token::Greater,
                Token::GreaterEqual,
            ],
        );
        let equality = binary_level(&source, relational, &[Token::EqualEqual, Token::NotEqual]);
        let and = binary_level(&source, equality, &[Token::AndAnd]);
        binary_level(&source, and, &[Token::OrOr])
    })
}

/// `var_decl := type IDENT ('=' expr)? ';'`
pub(crate) fn var_decl<'a, E>(
    source: &Arc<String>,
    expr: E,
) -> impl Parser<Token, SyntaxNode, Error = ParserError> + Clone + 'a
where
    E: Parser<Token, SyntaxNode, Error = ParserError> + Clone + 'a,
{
    type_annotation(source)
        .then(leaf(source, Token::Ident, SyntaxKind::Ident))
        .then(just(Token::Assign).ignore_then(expr).or_not())
        .then_ignore(just(Token::Semicolon))
        .map(|((ty, name), initializer)| {
            let mut children = vec![ty, name];
            children.extend(initializer);
            children
        })
        .map_with_span(node(source, SyntaxKind::VarDecl))
}

/// Statement alternatives, parameterized over the block parser so blocks can nest
pub(crate) fn statement_with<'a, E, B>(
    source: &Arc<String>,
    expr: E,
    block: B,
) -> impl Parser<Token, SyntaxNode, Error = ParserError> + Clone + 'a
where
    E: Parser<Token, SyntaxNode, Error = ParserError> + Clone + 'a,
    B: Parser<Token, SyntaxNode, Error = ParserError> + Clone + 'a,
{
    let condition = expr
        .clone()
        .delimited_by(just(Token::OpenParen), just(Token::CloseParen));

    let assign = leaf(source, Token::Ident, SyntaxKind::Ident)
        .then_ignore(just(Token::Assign))
        .then(expr.clone())
        .then_ignore(just(Token::Semicolon))
        .map(|(target, value)| vec![target, value])
        .map_with_span(node(source, SyntaxKind::AssignStmt));

    let else_if = just(Token::Else)
        .ignore_then(just(Token::If))
        .ignore_then(condition.clone())
        .then(block.clone())
        .map(|(cond, body)| vec![cond, body])
        .map_with_span(node(source, SyntaxKind::ElseIfClause));

    let else_clause = just(Token::Else)
        .ignore_then(block.clone())
        .map(|body| vec![body])
        .map_with_span(node(source, SyntaxKind::ElseClause));

    let if_stmt = just(Token::If)
        .ignore_then(condition.clone())
        .then(block.clone())
        .then(else_if.repeated())
        .then(else_clause.or_not())
        .map(|(((cond, then_block), else_ifs), else_clause)| {
            let mut children = vec![cond, then_block];
            children.extend(else_ifs);
            children.extend(else_clause);
            children
        })
        .map_with_span(node(source, SyntaxKind::IfStmt));

    let while_stmt = just(Token::While)
        .ignore_then(condition)
        .then(block)
        .map(|(cond, body)| vec![cond, body])
        .map_with_span(node(source, SyntaxKind::WhileStmt));

    let return_stmt = just(Token::Return)
        .ignore_then(expr.or_not())
        .then_ignore(just(Token::Semicolon))
        .map(|value| value.into_iter().collect::<Vec<_>>())
        .map_with_span(node(source, SyntaxKind::ReturnStmt));

    let break_stmt = just(Token::Break)
        .then_ignore(just(Token::Semicolon))
        .map(|_| Vec::new())
        .map_with_span(node(source, SyntaxKind::BreakStmt));

    let continue_stmt = just(Token::Continue)
        .then_ignore(just(Token::Semicolon))
        .map(|_| Vec::new())
        .map_with_span(node(source, SyntaxKind::ContinueStmt));

    choice((
        assign,
        if_stmt,
        while_stmt,
        return_stmt,
        break_stmt,
        continue_stmt,
    ))
}

/// `block := '{' (var_decl | statement)* '}'`
pub(crate) fn block<'a, E>(
    source: &Arc<String>,
    expr: E,
) -> impl Parser<Token, SyntaxNode, Error = ParserError> + Clone + 'a
where
    E: Parser<Token, SyntaxNode, Error = ParserError> + Clone + 'a,
{
    let source = Arc::clone(source);
    recursive(move |block| {
        let item = var_decl(&source, expr.clone()).or(statement_with(&source, expr, block));
        item.repeated()
            .delimited_by(just(Token::OpenBrace), just(Token::CloseBrace))
            .map_with_span(node(&source, SyntaxKind::Block))
    })
}

/// A single statement, as it may appear inside a block
pub(crate) fn statement<'a>(
    source: &Arc<String>,
) -> impl Parser<Token, SyntaxNode, Error = ParserError> + Clone + 'a {
    let expr = expression(source);
    statement_with(source, expr.clone(), block(source, expr))
}

/// `func_decl := type IDENT '(' param_list? ')' block`
pub(crate) fn func_decl<'a, B>(
    source: &Arc<String>,
    body: B,
) -> impl Parser<Token, SyntaxNode, Error = ParserError> + Clone + 'a
where
    B: Parser<Token, SyntaxNode, Error = ParserError> + Clone + 'a,
{
    let param = type_annotation(source)
        .then(leaf(source, Token::Ident, SyntaxKind::Ident))
        .map(|(ty, name)| vec![ty, name])
        .map_with_span(node(source, SyntaxKind::Param));

    let params = param
        .separated_by(just(Token::Comma))
        .at_least(1)
        .map_with_span(node(source, SyntaxKind::ParamList));

    type_annotation(source)
        .then(leaf(source, Token::Ident, SyntaxKind::Ident))
        .then(
            params
                .or_not()
                .delimited_by(just(Token::OpenParen), just(Token::CloseParen)),
        )
        .then(body)
        .map(|(((ty, name), params), body)| {
            let mut children = vec![ty, name];
            children.extend(params);
            children.push(body);
            children
        })
        .map_with_span(node(source, SyntaxKind::FuncDecl))
}

/// `program := (var_decl | func_decl)*`
pub(crate) fn program<'a>(
    source: &Arc<String>,
) -> impl Parser<Token, SyntaxNode, Error = ParserError> + Clone + 'a {
    let expr = expression(source);
    let body = block(source, expr.clone());

    func_decl(source, body)
        .or(var_decl(source, expr))
        .repeated()
        .map_with_span(node(source, SyntaxKind::Program))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_text_in_bounds() {
        assert_eq!(extract_text("int x;", &(4..5)), "x");
    }

    #[test]
    fn test_extract_text_empty_or_out_of_bounds() {
        assert_eq!(extract_text("int x;", &(3..3)), "");
        assert_eq!(extract_text("int x;", &(4..40)), "");
    }
}
