//! AST traits - Common interfaces for uniform node access

/// Common interface for all AST nodes
pub trait AstNode {
    /// Variant name of the node, e.g. `"IfElse"`
    fn node_type(&self) -> &'static str;
    /// Short human-readable summary used by tree renderers
    fn display_label(&self) -> String;
}
