//! Testing utilities for AST assertions
//!
//! Checking an AST by matching on nested enums buries the intent of the test
//! under boilerplate:
//!
//! ```rust-example
//! match &program.functions[0].body.statements[0] {
//!     Statement::IfElse { cond, else_block, .. } => {
//!         assert_eq!(*cond, Expression::location("a"));
//!         match &else_block.statements[0] {
//!             Statement::IfElse { .. } => {}
//!             _ => panic!("Expected nested IfElse"),
//!         }
//!     }
//!     _ => panic!("Expected IfElse"),
//! }
//! ```
//!
//! With `assert_ast` the same check reads top down:
//!
//! ```rust-example
//! use minilang::minilang::testing::assert_ast;
//!
//! assert_ast(&program).function(0, |f| {
//!     f.body(|b| {
//!         b.statement(0, |s| {
//!             s.assert_if_else()
//!                 .cond(|c| c.location("a"))
//!                 .else_block(|e| {
//!                     e.statement(0, |s| {
//!                         s.assert_if_else();
//!                     });
//!                 });
//!         });
//!     });
//! });
//! ```
//!
//! A failed assertion panics with the path to the offending node, e.g.
//! `functions[0].body.statements[0]: Expected While, found Assignment(x = 1)`.

mod ast_assertions;

pub use ast_assertions::{
    assert_ast, AssignmentAssertion, BinaryAssertion, BlockAssertion, CallAssertion,
    ConditionalAssertion, ExpressionAssertion, FunctionAssertion, ProgramAssertion,
    StatementAssertion, VariableAssertion,
};
