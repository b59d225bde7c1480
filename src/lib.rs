//! # minilang
//!
//! A front end for the minilang language: typed globals, functions, `if`/`while`
//! control flow and integer/boolean expressions.
//!
//! Pipeline
//!
//! ```text
//! source text → lexing → parsing (concrete syntax tree) → building → ast::Program
//! ```
//!
//! The parser is deliberately generic: it produces one [`SyntaxNode`] per matched
//! grammar rule and knows nothing about the AST. All of the mapping from grammar
//! alternatives to typed nodes happens in [`building`], which only needs a
//! `SyntaxNode` tree and can therefore be fed by any other parser as well.
//!
//! For testing guidelines, see the [testing module](minilang::testing).
//!
//! [`SyntaxNode`]: minilang::parsing::SyntaxNode
//! [`building`]: minilang::building

pub mod minilang;
