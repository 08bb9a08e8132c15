//! Callout transform.
//!
//! - `marker`: recognizes `[!type]±title` on a paragraph's first line.
//! - `resolve`: maps type tokens to table entries, falling back to `note`.
//! - `markup`: builds the title/content markup.
//! - `callout`: the block quote rewriter and its tree transform.

/// Block quote rewriter.
pub mod callout;
/// Title/content markup.
pub mod markup;
/// Marker recognition.
pub mod marker;
/// Callout type resolution.
pub mod resolve;

pub use callout::Callouts;
pub use marker::{CalloutMarker, FoldSign, parse_marker};
pub use resolve::{CalloutResolver, ResolvedCallout};
