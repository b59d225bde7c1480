//! Concrete syntax tree produced by the parser
//!
//! The tree mirrors the grammar: one node per matched rule, one leaf per token
//! that carries meaning (identifiers, literals, operators, type keywords).
//! Punctuation is not kept. Nodes know nothing about the AST; the building
//! module decides what each grammar alternative means.

use std::fmt;
use std::ops::Range;

/// Grammar rule or leaf token a [`SyntaxNode`] was produced from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SyntaxKind {
    // Declarations
    Program,
    VarDecl,
    FuncDecl,
    ParamList,
    Param,
    Type,
    Block,

    // Statements
    AssignStmt,
    IfStmt,
    ElseIfClause,
    ElseClause,
    WhileStmt,
    ReturnStmt,
    BreakStmt,
    ContinueStmt,

    // Expressions
    BinaryExpr,
    CallExpr,
    ArgList,
    ParenExpr,
    IntLiteral,
    BoolLiteral,
    LocationExpr,

    // Leaves
    Operator,
    Ident,
    IntKw,
    BoolKw,
    VoidKw,
}

impl SyntaxKind {
    /// Rule name as it reads in the grammar
    pub fn name(&self) -> &'static str {
        match self {
            SyntaxKind::Program => "program",
            SyntaxKind::VarDecl => "var_decl",
            SyntaxKind::FuncDecl => "func_decl",
            SyntaxKind::ParamList => "param_list",
            SyntaxKind::Param => "param",
            SyntaxKind::Type => "type",
            SyntaxKind::Block => "block",
            SyntaxKind::AssignStmt => "assign",
            SyntaxKind::IfStmt => "if",
            SyntaxKind::ElseIfClause => "else_if",
            SyntaxKind::ElseClause => "else",
            SyntaxKind::WhileStmt => "while",
            SyntaxKind::ReturnStmt => "return",
            SyntaxKind::BreakStmt => "break",
            SyntaxKind::ContinueStmt => "continue",
            SyntaxKind::BinaryExpr => "binary_expr",
            SyntaxKind::CallExpr => "call_expr",
            SyntaxKind::ArgList => "arg_list",
            SyntaxKind::ParenExpr => "paren_expr",
            SyntaxKind::IntLiteral => "int_literal",
            SyntaxKind::BoolLiteral => "bool_literal",
            SyntaxKind::LocationExpr => "location",
            SyntaxKind::Operator => "operator",
            SyntaxKind::Ident => "ident",
            SyntaxKind::IntKw => "int_kw",
            SyntaxKind::BoolKw => "bool_kw",
            SyntaxKind::VoidKw => "void_kw",
        }
    }

    /// Check if this kind is one of the expression alternatives
    pub fn is_expression(&self) -> bool {
        matches!(
            self,
            SyntaxKind::BinaryExpr
                | SyntaxKind::CallExpr
                | SyntaxKind::ParenExpr
                | SyntaxKind::IntLiteral
                | SyntaxKind::BoolLiteral
                | SyntaxKind::LocationExpr
        )
    }

    /// Check if this kind is one of the statement alternatives
    pub fn is_statement(&self) -> bool {
        matches!(
            self,
            SyntaxKind::AssignStmt
                | SyntaxKind::IfStmt
                | SyntaxKind::WhileStmt
                | SyntaxKind::ReturnStmt
                | SyntaxKind::BreakStmt
                | SyntaxKind::ContinueStmt
        )
    }
}

impl fmt::Display for SyntaxKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A node of the concrete syntax tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxNode {
    kind: SyntaxKind,
    span: Range<usize>,
    text: String,
    children: Vec<SyntaxNode>,
}

impl SyntaxNode {
    /// Create a leaf holding the exact source text of a token
    pub fn leaf(kind: SyntaxKind, span: Range<usize>, text: impl Into<String>) -> Self {
        Self {
            kind,
            span,
            text: text.into(),
            children: Vec::new(),
        }
    }

    /// Create an inner node; `text` is the source covered by `span`
    pub fn branch(
        kind: SyntaxKind,
        span: Range<usize>,
        text: impl Into<String>,
        children: Vec<SyntaxNode>,
    ) -> Self {
        Self {
            kind,
            span,
            text: text.into(),
            children,
        }
    }

    pub fn kind(&self) -> SyntaxKind {
        self.kind
    }

    pub fn span(&self) -> Range<usize> {
        self.span.clone()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// All children in source order
    pub fn children(&self) -> &[SyntaxNode] {
        &self.children
    }

    /// Children of the given kind, in source order
    pub fn children_of(&self, kind: SyntaxKind) -> impl Iterator<Item = &SyntaxNode> + '_ {
        self.children.iter().filter(move |c| c.kind == kind)
    }

    /// First child of the given kind
    pub fn child(&self, kind: SyntaxKind) -> Option<&SyntaxNode> {
        self.children_of(kind).next()
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }
}
