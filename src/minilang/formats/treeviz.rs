//! Treeviz formatter for the AST
//!
//! One line per node, so a tree can be scanned top to bottom and diffed line by
//! line. Nesting is drawn with `├─`/`└─` connectors and `│ ` rails:
//!
//! ```text
//! ├─ Variable: int limit = 10
//! │ └─ IntConstant: 10
//! └─ Function: int main()
//!   └─ Block: 0 locals, 1 statements
//!     └─ Return: limit
//!       └─ Location: limit
//! ```
//!
//! Each line is `<prefix><connector> <node_type>: <label>`, with the label cut
//! to a fixed number of characters followed by `...`. Nodes with an empty label
//! print the node type alone.
//!
//! Children per node:
//!     Program: globals, then functions (printed at the top level)
//!     Variable: its initializer, if any
//!     Function: parameters, then body
//!     Block: locals, then statements
//!     Assignment: value
//!     IfElse: condition, then block, else block
//!     While: condition, body
//!     Return: value
//!     Binary: left, right
//!     FunctionCall: arguments

use super::registry::{FormatError, Formatter};
use crate::minilang::ast::{AstNode, Block, Expression, Function, Program, Statement, Variable};

pub const DEFAULT_LABEL_WIDTH: usize = 30;

/// Borrowed view over every node type, so the walker is a single function
#[derive(Clone, Copy)]
enum Node<'a> {
    Variable(&'a Variable),
    Function(&'a Function),
    Block(&'a Block),
    Statement(&'a Statement),
    Expression(&'a Expression),
}

impl<'a> Node<'a> {
    fn as_ast_node(self) -> &'a dyn AstNode {
        match self {
            Node::Variable(n) => n,
            Node::Function(n) => n,
            Node::Block(n) => n,
            Node::Statement(n) => n,
            Node::Expression(n) => n,
        }
    }

    fn children(self) -> Vec<Node<'a>> {
        match self {
            Node::Variable(v) => v.initializer.iter().map(Node::Expression).collect(),
            Node::Function(f) => f
                .params
                .iter()
                .map(Node::Variable)
                .chain(std::iter::once(Node::Block(&f.body)))
                .collect(),
            Node::Block(b) => b
                .locals
                .iter()
                .map(Node::Variable)
                .chain(b.statements.iter().map(Node::Statement))
                .collect(),
            Node::Statement(s) => match s {
                Statement::Assignment { value, .. } => vec![Node::Expression(value)],
                Statement::IfElse {
                    cond,
                    then_block,
                    else_block,
                } => vec![
                    Node::Expression(cond),
                    Node::Block(then_block),
                    Node::Block(else_block),
                ],
                Statement::While { cond, body } => {
                    vec![Node::Expression(cond), Node::Block(body)]
                }
                Statement::Return { value } => vec![Node::Expression(value)],
                Statement::ReturnVoid | Statement::Break | Statement::Continue => Vec::new(),
            },
            Node::Expression(e) => match e {
                Expression::Binary { left, right, .. } => {
                    vec![Node::Expression(left), Node::Expression(right)]
                }
                Expression::FunctionCall { args, .. } => args.iter().map(Node::Expression).collect(),
                _ => Vec::new(),
            },
        }
    }
}

fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() > max_chars {
        let mut truncated = s.chars().take(max_chars).collect::<String>();
        truncated.push_str("...");
        truncated
    } else {
        s.to_string()
    }
}

/// Render with the default label width
pub fn to_treeviz_str(program: &Program) -> String {
    render(program, DEFAULT_LABEL_WIDTH)
}

fn render(program: &Program, label_width: usize) -> String {
    let top: Vec<Node> = program
        .variables
        .iter()
        .map(Node::Variable)
        .chain(program.functions.iter().map(Node::Function))
        .collect();

    let mut result = String::new();
    append_children(&mut result, &top, "", label_width);
    result
}

fn append_node(result: &mut String, node: &Node, prefix: &str, is_last: bool, width: usize) {
    let connector = if is_last { "└─" } else { "├─" };
    let ast = node.as_ast_node();
    let label = truncate(&ast.display_label(), width);

    if label.is_empty() {
        result.push_str(&format!("{}{} {}\n", prefix, connector, ast.node_type()));
    } else {
        result.push_str(&format!(
            "{}{} {}: {}\n",
            prefix,
            connector,
            ast.node_type(),
            label
        ));
    }

    let new_prefix = format!("{}{}", prefix, if is_last { "  " } else { "│ " });
    append_children(result, &node.children(), &new_prefix, width);
}

fn append_children(result: &mut String, children: &[Node], prefix: &str, width: usize) {
    for (i, child) in children.iter().enumerate() {
        let is_last = i == children.len() - 1;
        append_node(result, child, prefix, is_last, width);
    }
}

/// Treeviz as a registry format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TreevizFormatter {
    label_width: usize,
}

impl TreevizFormatter {
    pub const NAME: &'static str = "treeviz";

    pub fn new(label_width: usize) -> Self {
        Self { label_width }
    }
}

impl Default for TreevizFormatter {
    fn default() -> Self {
        Self::new(DEFAULT_LABEL_WIDTH)
    }
}

impl Formatter for TreevizFormatter {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn serialize(&self, program: &Program) -> Result<String, FormatError> {
        Ok(render(program, self.label_width))
    }

    fn description(&self) -> &str {
        "One line per node tree view"
    }
}
