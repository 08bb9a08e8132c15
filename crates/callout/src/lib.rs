#![deny(missing_docs)]
//! Obsidian-style callouts for markdown trees.
//!
//! A block quote whose first line reads `[!type]` (optionally followed by
//! `+` or `-` and a title) becomes a callout: its first paragraph is
//! replaced by title/content markup and the block quote gains `class` and
//! `data-*` attributes for styling.
//!
//! ```
//! use mdcallout::{CalloutConfig, process};
//!
//! let rendered = process("> [!tip] Try this", &CalloutConfig::default()).unwrap();
//! assert!(rendered.html.starts_with(r#"<blockquote class="callout-tip" data-callout="tip""#));
//! ```

/// Options, validated configuration, and built-in defaults.
pub mod config;
/// HTML rendering of document trees.
pub mod renderer;
/// The callout tree transform.
pub mod transform;

pub use config::{CalloutConfig, CalloutOptions, TitleTextTransform};
pub use renderer::render_html;
pub use transform::Callouts;

use mdcallout_core::{CalloutError, ParseDiagnostics, ParseOptions, ParseOutput, ParserPipeline};

/// HTML output of [`process`], with warnings raised while transforming.
#[derive(Debug, Clone, PartialEq)]
pub struct Rendered {
    /// Rendered document.
    pub html: String,
    /// Non-fatal warnings (unknown callout types).
    pub diagnostics: ParseDiagnostics,
}

/// Parses markdown and applies the callout transform, returning the tree.
pub fn transform(input: &str, config: &CalloutConfig) -> Result<ParseOutput, CalloutError> {
    transform_with_options(input, &ParseOptions::default(), config)
}

/// Like [`transform`], with explicit parser options.
pub fn transform_with_options(
    input: &str,
    options: &ParseOptions,
    config: &CalloutConfig,
) -> Result<ParseOutput, CalloutError> {
    let mut pipeline = ParserPipeline::new(options.to_markdown());
    pipeline.add_ast_transform(Callouts::new(config.clone()));
    pipeline.parse(input)
}

/// Parses markdown, applies the callout transform, and renders HTML.
pub fn process(input: &str, config: &CalloutConfig) -> Result<Rendered, CalloutError> {
    process_with_options(input, &ParseOptions::default(), config)
}

/// Like [`process`], with explicit parser options.
pub fn process_with_options(
    input: &str,
    options: &ParseOptions,
    config: &CalloutConfig,
) -> Result<Rendered, CalloutError> {
    let output = transform_with_options(input, options, config)?;
    Ok(Rendered {
        html: render_html(&output.root),
        diagnostics: output.diagnostics,
    })
}
