//! Element-specific AST node definitions for minilang
//!
//! Program and Function are the declaration level. Block owns locals and
//! statements. Statement and Expression are closed tagged unions. Type and
//! Operator are the two closed vocabularies.
//!
//! All nodes are plain owned values: a parent owns its children outright and no
//! node refers back to its parent.

pub mod block;
pub mod expression;
pub mod function;
pub mod program;
pub mod statement;
pub mod types;
pub mod variable;

pub use block::Block;
pub use expression::{Expression, Location};
pub use function::Function;
pub use program::Program;
pub use statement::Statement;
pub use types::{Operator, Type};
pub use variable::Variable;
