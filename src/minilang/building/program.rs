//! Program assembly

use tracing::debug;

use super::declarations::{build_function, build_variable};
use super::error::BuildError;
use super::extraction::expect_kind;
use super::options::BuildOptions;
use crate::minilang::ast::Program;
use crate::minilang::parsing::{SyntaxKind, SyntaxNode};

/// Build a [`Program`] from the root of a parse.
///
/// Globals and functions are collected into separate lists, each in source
/// order. Global initializers are always kept, whatever the local policy.
pub fn build_program(root: &SyntaxNode, options: &BuildOptions) -> Result<Program, BuildError> {
    expect_kind(root, SyntaxKind::Program, "program")?;

    let mut variables = Vec::new();
    let mut functions = Vec::new();
    for decl in root.children() {
        match decl.kind() {
            SyntaxKind::VarDecl => variables.push(build_variable(decl, true)?),
            SyntaxKind::FuncDecl => functions.push(build_function(decl, options)?),
            _ => return Err(BuildError::unexpected_node("declaration", decl)),
        }
    }

    debug!(
        variables = variables.len(),
        functions = functions.len(),
        "assembled program"
    );
    Ok(Program::new(variables, functions))
}
