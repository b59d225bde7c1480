//! Statement and block building
//!
//! A block's children are split into local declarations and statements, each
//! list keeping source order. `if` always yields an else block: an omitted
//! `else` becomes an empty one, and `else if` clauses fold to the right so that
//! each clause is an `IfElse` sitting alone in the previous clause's else block.

use tracing::trace;

use super::declarations::build_variable;
use super::error::BuildError;
use super::expressions::build_expression;
use super::extraction::{expect_kind, expression_child, optional_expression_child, required_child};
use super::options::BuildOptions;
use crate::minilang::ast::{Block, Expression, Location, Statement};
use crate::minilang::parsing::{SyntaxKind, SyntaxNode};

/// Build a [`Statement`] from any statement node
pub fn build_statement(node: &SyntaxNode, options: &BuildOptions) -> Result<Statement, BuildError> {
    trace!(kind = %node.kind(), span = ?node.span(), "building statement");
    match node.kind() {
        SyntaxKind::AssignStmt => {
            let target = required_child(node, SyntaxKind::Ident, "assignment target")?;
            let value = build_expression(expression_child(node, "assigned value")?)?;
            Ok(Statement::Assignment {
                target: Location::new(target.text()),
                value,
            })
        }
        SyntaxKind::IfStmt => build_if(node, options),
        SyntaxKind::WhileStmt => {
            let cond = build_expression(expression_child(node, "condition")?)?;
            let body = build_block(required_child(node, SyntaxKind::Block, "body")?, options)?;
            Ok(Statement::While { cond, body })
        }
        SyntaxKind::ReturnStmt => match optional_expression_child(node) {
            Some(value) => Ok(Statement::Return {
                value: build_expression(value)?,
            }),
            None => Ok(Statement::ReturnVoid),
        },
        SyntaxKind::BreakStmt => Ok(Statement::Break),
        SyntaxKind::ContinueStmt => Ok(Statement::Continue),
        _ => Err(BuildError::unexpected_node("statement", node)),
    }
}

/// Condition and block of an `if` or `else if`
fn build_branch(
    node: &SyntaxNode,
    options: &BuildOptions,
) -> Result<(Expression, Block), BuildError> {
    let cond = build_expression(expression_child(node, "condition")?)?;
    let body = build_block(required_child(node, SyntaxKind::Block, "block")?, options)?;
    Ok((cond, body))
}

fn build_if(node: &SyntaxNode, options: &BuildOptions) -> Result<Statement, BuildError> {
    let (cond, then_block) = build_branch(node, options)?;

    let else_ifs = node
        .children_of(SyntaxKind::ElseIfClause)
        .map(|clause| build_branch(clause, options))
        .collect::<Result<Vec<_>, _>>()?;

    let final_else = match node.child(SyntaxKind::ElseClause) {
        Some(clause) => build_block(required_child(clause, SyntaxKind::Block, "block")?, options)?,
        None => Block::empty(),
    };

    let else_block = else_ifs
        .into_iter()
        .rev()
        .fold(final_else, |else_block, (cond, body)| {
            Block::with_statements(vec![Statement::if_else(cond, body, else_block)])
        });

    Ok(Statement::if_else(cond, then_block, else_block))
}

/// Build a [`Block`], separating local declarations from statements
pub fn build_block(node: &SyntaxNode, options: &BuildOptions) -> Result<Block, BuildError> {
    expect_kind(node, SyntaxKind::Block, "block")?;

    let mut locals = Vec::new();
    let mut statements = Vec::new();
    for child in node.children() {
        match child.kind() {
            SyntaxKind::VarDecl => {
                locals.push(build_variable(child, options.keep_local_initializers())?)
            }
            kind if kind.is_statement() => statements.push(build_statement(child, options)?),
            _ => return Err(BuildError::unexpected_node("declaration or statement", child)),
        }
    }

    Ok(Block::new(locals, statements))
}
