//! Declaration building: variables, parameters and functions

use tracing::trace;

use super::error::BuildError;
use super::expressions::build_expression;
use super::extraction::{expect_kind, optional_expression_child, required_child};
use super::options::BuildOptions;
use super::statements::build_block;
use super::types::resolve_type;
use crate::minilang::ast::{Function, Variable};
use crate::minilang::parsing::{SyntaxKind, SyntaxNode};

/// Build a [`Variable`] from a `var_decl` node.
///
/// When `keep_initializer` is false the initializer subtree is skipped
/// entirely, so errors inside it are never reported.
pub fn build_variable(node: &SyntaxNode, keep_initializer: bool) -> Result<Variable, BuildError> {
    expect_kind(node, SyntaxKind::VarDecl, "variable declaration")?;
    let ty = resolve_type(required_child(node, SyntaxKind::Type, "type")?)?;
    let name = required_child(node, SyntaxKind::Ident, "name")?.text();

    let initializer = match optional_expression_child(node) {
        Some(expr) if keep_initializer => Some(build_expression(expr)?),
        _ => None,
    };

    Ok(Variable::new(name, ty).with_initializer(initializer))
}

fn build_param(node: &SyntaxNode) -> Result<Variable, BuildError> {
    expect_kind(node, SyntaxKind::Param, "parameter")?;
    let ty = resolve_type(required_child(node, SyntaxKind::Type, "type")?)?;
    let name = required_child(node, SyntaxKind::Ident, "name")?.text();
    Ok(Variable::new(name, ty))
}

/// Build a [`Function`] from a `func_decl` node.
///
/// The name is the identifier token alone, never the surrounding signature.
pub fn build_function(node: &SyntaxNode, options: &BuildOptions) -> Result<Function, BuildError> {
    expect_kind(node, SyntaxKind::FuncDecl, "function declaration")?;
    let return_type = resolve_type(required_child(node, SyntaxKind::Type, "return type")?)?;
    let name = required_child(node, SyntaxKind::Ident, "name")?.text();

    let params = match node.child(SyntaxKind::ParamList) {
        Some(list) => list
            .children()
            .iter()
            .map(build_param)
            .collect::<Result<Vec<_>, _>>()?,
        None => Vec::new(),
    };

    let body = build_block(required_child(node, SyntaxKind::Block, "body")?, options)?;
    trace!(function = name, params = params.len(), "built function");

    Ok(Function::new(return_type, name, params, body))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::minilang::ast::{Block, Expression, Operator, Statement, Type};
    use crate::minilang::parsing::parse_program_tree;

    fn first_decl(source: &str) -> SyntaxNode {
        let tree = parse_program_tree(source).expect("source should parse");
        tree.children()[0].clone()
    }

    #[test]
    fn test_variable_with_and_without_initializer() {
        let decl = first_decl("int x = 3;");
        assert_eq!(
            build_variable(&decl, true).unwrap(),
            Variable::new("x", Type::Int).with_initializer(Some(Expression::int(3)))
        );
        assert_eq!(build_variable(&decl, false).unwrap(), Variable::new("x", Type::Int));
        assert_eq!(
            build_variable(&first_decl("bool flag;"), true).unwrap(),
            Variable::new("flag", Type::Bool)
        );
    }

    #[test]
    fn test_function_name_is_identifier_only() {
        let decl = first_decl("int add(int a, int b) { return a + b; }");
        let function = build_function(&decl, &BuildOptions::default()).unwrap();
        assert_eq!(function.name, "add");
        assert_eq!(function.return_type, Type::Int);
        assert_eq!(
            function.params,
            vec![Variable::new("a", Type::Int), Variable::new("b", Type::Int)]
        );
        assert_eq!(
            function.body,
            Block::with_statements(vec![Statement::ret(Expression::binary(
                Expression::location("a"),
                Operator::Add,
                Expression::location("b"),
            ))])
        );
    }

    #[test]
    fn test_function_without_params() {
        let decl = first_decl("void main() { }");
        let function = build_function(&decl, &BuildOptions::default()).unwrap();
        assert_eq!(function.name, "main");
        assert_eq!(function.return_type, Type::Void);
        assert!(function.params.is_empty());
        assert!(function.body.is_empty());
    }

    #[test]
    fn test_void_parameter_type_is_accepted() {
        let decl = first_decl("int f(void v) { return 0; }");
        let function = build_function(&decl, &BuildOptions::default()).unwrap();
        assert_eq!(function.params, vec![Variable::new("v", Type::Void)]);
    }

    #[test]
    fn test_wrong_node_kind() {
        let decl = first_decl("int x;");
        assert!(matches!(
            build_function(&decl, &BuildOptions::default()),
            Err(BuildError::UnexpectedNode { .. })
        ));
    }
}
