//! Output formats for the AST
//!
//! - treeviz: a one line per node tree view for humans and snapshot tests
//! - json / yaml: the serde shape of the AST for tooling

pub mod registry;
pub mod serialized;
pub mod treeviz;

pub use registry::{FormatError, FormatRegistry, Formatter};
pub use serialized::{JsonFormatter, YamlFormatter};
pub use treeviz::{to_treeviz_str, TreevizFormatter};
