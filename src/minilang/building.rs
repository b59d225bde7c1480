//! AST construction for minilang
//!
//! Walks a concrete syntax tree produced by [`parsing`](crate::minilang::parsing)
//! and builds the typed AST in one pass. The tree is only read, never modified,
//! and building it twice yields equal results.
//!
//! ## Modules
//!
//! - `types` - Type keyword resolution
//! - `expressions` - Expressions and operator resolution
//! - `statements` - Statements and blocks, including `else if` folding
//! - `declarations` - Variables, parameters and functions
//! - `program` - The compilation unit
//! - `options` - Build-time knobs
//! - `error` - Construction errors
//!
//! The first error stops the build; no partial AST is produced.

pub mod declarations;
pub mod error;
pub mod expressions;
mod extraction;
pub mod options;
pub mod program;
pub mod statements;
pub mod types;

pub use declarations::{build_function, build_variable};
pub use error::{BuildError, LiteralKind};
pub use expressions::{build_expression, resolve_operator};
pub use options::{BuildOptions, LocalInitializers};
pub use program::build_program;
pub use statements::{build_block, build_statement};
pub use types::resolve_type;
