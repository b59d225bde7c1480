//! AST definitions for minilang
//!
//! The AST is what later compiler stages consume: a typed, immutable tree built
//! in a single pass from the concrete syntax tree.
//!
//! ## Modules
//!
//! - `elements` - Program, Function, Variable, Block, Statement, Expression, Type, Operator
//! - `traits` - Uniform node inspection
//! - `position` - Byte offset to line/column conversion

pub mod elements;
pub mod position;
pub mod traits;

pub use elements::{
    Block, Expression, Function, Location, Operator, Program, Statement, Type, Variable,
};
pub use position::{Position, SourceLocation};
pub use traits::AstNode;
