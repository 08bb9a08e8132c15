#![deny(missing_docs)]
//! mdcallout core: the document tree, the markdown-rs adapter, and the
//! transform pipeline the callout plugin plugs into.

/// Core error and diagnostic types.
pub mod error;
/// Conversion from markdown-rs MDAST.
pub mod mdast;
/// Markdown parsing utilities and extension hooks.
pub mod parse;
/// Plain-text flattening of tree nodes.
pub mod text;
/// Typed document tree.
#[allow(missing_docs)]
pub mod tree;
/// Traversal helpers.
pub mod visit;

pub use error::{CalloutError, ParseDiagnostics, ParseWarning, SourceLocation};
pub use parse::{
    AstTransform, ParseOptions, ParseOutput, ParserPipeline, parse_tree, parse_tree_with_options,
};
pub use tree::{Blockquote, Data, Node};
pub use visit::visit_blockquotes_mut;
