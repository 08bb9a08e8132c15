//! Markdown parsing utilities and extension hooks.

use crate::mdast::from_mdast;
use crate::tree::Node;
use crate::{CalloutError, ParseDiagnostics};
use markdown::message::{Message, Place};

/// Parser options for building markdown-rs parse options.
#[derive(Clone, Copy, Debug)]
pub struct ParseOptions {
    /// Enable GitHub Flavored Markdown constructs.
    pub gfm: bool,
    /// Enable YAML frontmatter parsing.
    pub frontmatter: bool,
    /// Allow raw HTML nodes in the AST.
    pub raw_html: bool,
}

impl ParseOptions {
    /// Markdown-friendly defaults.
    pub const fn markdown() -> Self {
        Self {
            gfm: true,
            frontmatter: true,
            raw_html: false,
        }
    }

    /// Convert to markdown-rs `ParseOptions`.
    pub fn to_markdown(self) -> markdown::ParseOptions {
        let mut constructs = markdown::Constructs {
            frontmatter: self.frontmatter,
            html_flow: self.raw_html,
            html_text: self.raw_html,
            ..Default::default()
        };

        if self.gfm {
            // Footnotes have no tree counterpart; `[^1]` stays literal text.
            constructs.gfm_autolink_literal = true;
            constructs.gfm_strikethrough = true;
            constructs.gfm_table = true;
            constructs.gfm_task_list_item = true;
        }

        markdown::ParseOptions {
            constructs,
            ..markdown::ParseOptions::default()
        }
    }
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self::markdown()
    }
}

/// Trait for mutating the parsed tree after parsing.
pub trait AstTransform {
    /// Mutate the tree in place, recording non-fatal findings in `diagnostics`.
    fn transform(&self, root: &mut Node, diagnostics: &mut ParseDiagnostics);
}

impl<F> AstTransform for F
where
    F: Fn(&mut Node, &mut ParseDiagnostics),
{
    fn transform(&self, root: &mut Node, diagnostics: &mut ParseDiagnostics) {
        (self)(root, diagnostics)
    }
}

/// Tree produced by [`ParserPipeline::parse`], with the diagnostics its
/// transforms reported.
#[derive(Debug, Clone, PartialEq)]
pub struct ParseOutput {
    /// Transformed document root.
    pub root: Node,
    /// Warnings collected from every transform.
    pub diagnostics: ParseDiagnostics,
}

/// Configurable parsing pipeline with optional transforms.
pub struct ParserPipeline {
    options: markdown::ParseOptions,
    ast_transforms: Vec<Box<dyn AstTransform>>,
}

impl ParserPipeline {
    /// Create a new pipeline from markdown-rs parse options.
    pub fn new(options: markdown::ParseOptions) -> Self {
        Self {
            options,
            ast_transforms: Vec::new(),
        }
    }

    /// Add an AST transform. Transforms run in insertion order.
    pub fn add_ast_transform<T: AstTransform + 'static>(&mut self, transform: T) {
        self.ast_transforms.push(Box::new(transform));
    }

    /// Parse markdown into a tree and run the configured transforms over it.
    pub fn parse(&self, input: &str) -> Result<ParseOutput, CalloutError> {
        let mut root = parse_tree_with_options(input, &self.options)?;
        let mut diagnostics = ParseDiagnostics::new();
        for transform in &self.ast_transforms {
            transform.transform(&mut root, &mut diagnostics);
        }

        Ok(ParseOutput { root, diagnostics })
    }
}

impl Default for ParserPipeline {
    fn default() -> Self {
        Self::new(ParseOptions::default().to_markdown())
    }
}

/// Parse markdown into a tree using core options.
pub fn parse_tree(input: &str, options: &ParseOptions) -> Result<Node, CalloutError> {
    parse_tree_with_options(input, &options.to_markdown())
}

/// Parse markdown into a tree using markdown-rs `ParseOptions`.
pub fn parse_tree_with_options(
    input: &str,
    options: &markdown::ParseOptions,
) -> Result<Node, CalloutError> {
    let mdast = markdown::to_mdast(input, options).map_err(|err| {
        let (line, column) = message_point(&err);
        CalloutError::parse_error(err.to_string(), line, column)
    })?;

    Ok(from_mdast(mdast).unwrap_or_else(|| Node::root(Vec::new())))
}

fn message_point(message: &Message) -> (usize, usize) {
    match message.place.as_deref() {
        Some(Place::Point(point)) => (point.line, point.column),
        Some(Place::Position(position)) => (position.start.line, position.start.column),
        None => (1, 1),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ParseWarning, SourceLocation};
    use crate::tree::Blockquote;
    use crate::visit::visit_blockquotes_mut;

    #[test]
    fn empty_input_parses_to_empty_root() {
        let root = parse_tree("", &ParseOptions::default()).unwrap();
        assert_eq!(root.children().map(Vec::len), Some(0));
    }

    #[test]
    fn raw_html_disabled_by_default() {
        let root = parse_tree("<div>hi</div>", &ParseOptions::default()).unwrap();
        let children = root.children().unwrap();
        assert!(!matches!(children[0], Node::Html(_)));

        let options = ParseOptions {
            raw_html: true,
            ..ParseOptions::default()
        };
        let root = parse_tree("<div>hi</div>", &options).unwrap();
        assert!(matches!(root.children().unwrap()[0], Node::Html(_)));
    }

    #[test]
    fn footnote_syntax_stays_literal() {
        let root = parse_tree("Note[^1].", &ParseOptions::default()).unwrap();
        let children = root.children().unwrap();
        assert_eq!(crate::text::to_string(&children[0]), "Note[^1].");
    }

    #[test]
    fn adapter_errors_carry_message_location() {
        let message = Message {
            place: Some(Box::new(Place::Point(markdown::unist::Point::new(3, 7, 20)))),
            reason: "Unexpected end of file".to_string(),
            rule_id: Box::new("unexpected-eof".to_string()),
            source: Box::new("markdown-rs".to_string()),
        };
        assert_eq!(message_point(&message), (3, 7));

        let unplaced = Message { place: None, ..message };
        assert_eq!(message_point(&unplaced), (1, 1));
    }

    #[test]
    fn pipeline_runs_transforms_in_order() {
        let mut pipeline = ParserPipeline::default();
        pipeline.add_ast_transform(|root: &mut Node, _: &mut ParseDiagnostics| {
            visit_blockquotes_mut(root, &mut |quote: &mut Blockquote| {
                quote.data.set("class", "first");
            });
        });
        pipeline.add_ast_transform(|root: &mut Node, diagnostics: &mut ParseDiagnostics| {
            visit_blockquotes_mut(root, &mut |quote: &mut Blockquote| {
                if quote.data.get("class") == Some("first") {
                    diagnostics.add_warning(ParseWarning::UnknownCalloutType {
                        location: quote.position.clone(),
                        name: "seen".to_string(),
                        fallback: "note".to_string(),
                    });
                }
            });
        });

        let output = pipeline.parse("> quoted").unwrap();
        assert_eq!(output.diagnostics.count(), 1);
        assert_eq!(
            output.diagnostics.warnings[0].location(),
            Some(&SourceLocation::new(1, 1))
        );
    }
}
