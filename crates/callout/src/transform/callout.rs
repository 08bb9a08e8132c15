//! Block quote to callout rewriting.

use super::marker::parse_marker;
use super::markup::callout_markup;
use super::resolve::CalloutResolver;
use crate::config::CalloutConfig;
use mdcallout_core::tree::Html;
use mdcallout_core::{
    AstTransform, Blockquote, Node, ParseDiagnostics, ParseWarning, text, visit_blockquotes_mut,
};

/// Tree transform turning `> [!type] title` block quotes into callouts.
///
/// For each block quote whose first child is a paragraph opening with a
/// marker, the paragraph is replaced by title/content markup and the block
/// quote is tagged with `class`, `data-{dataAttribute}`, `data-expandable`,
/// and `data-expanded` attributes. Other block quotes are left untouched.
///
/// # Example
///
/// ```
/// use mdcallout::{CalloutConfig, Callouts};
/// use mdcallout_core::{Blockquote, Node, ParseDiagnostics};
///
/// let callouts = Callouts::new(CalloutConfig::default());
/// let mut quote = Blockquote::default();
/// quote.children.push(Node::paragraph(vec![Node::text("[!tip]- Hidden")]));
///
/// let mut diagnostics = ParseDiagnostics::new();
/// assert!(callouts.rewrite_blockquote(&mut quote, &mut diagnostics));
/// assert_eq!(quote.data.get("data-callout"), Some("tip"));
/// assert_eq!(quote.data.get("data-expandable"), Some("true"));
/// assert_eq!(quote.data.get("data-expanded"), Some("false"));
/// ```
#[derive(Debug)]
pub struct Callouts {
    config: CalloutConfig,
    resolver: CalloutResolver,
}

impl Callouts {
    /// Creates the transform for a validated configuration.
    pub fn new(config: CalloutConfig) -> Self {
        let resolver = CalloutResolver::new(config.callouts().clone());
        Self { config, resolver }
    }

    /// Rewrites one block quote in place. Returns false if it is not a callout.
    ///
    /// Nested block quotes are not visited here; [`AstTransform::transform`]
    /// reaches them separately.
    pub fn rewrite_blockquote(
        &self,
        quote: &mut Blockquote,
        diagnostics: &mut ParseDiagnostics,
    ) -> bool {
        let Some(Node::Paragraph(first)) = quote.children.first() else {
            return false;
        };
        let Some(marker) = parse_marker(&text::children_to_string(&first.children)) else {
            return false;
        };
        let position = first.position.clone();

        let resolved = self.resolver.resolve(&marker.callout_type);
        if resolved.fallback {
            let warning = ParseWarning::UnknownCalloutType {
                location: quote.position.clone(),
                name: marker.callout_type.clone(),
                fallback: resolved.kind.clone(),
            };
            log::warn!("{warning}");
            diagnostics.add_warning(warning);
        }

        quote.children[0] = Node::Html(Html {
            value: callout_markup(&self.config, &resolved, &marker),
            position,
        });

        let data_attribute = self.config.data_attribute();
        let class = match self.config.blockquote_class() {
            Some(class) => class.to_string(),
            None => format!("{}-{}", data_attribute, resolved.kind),
        };
        let data = &mut quote.data;
        data.set("class", class);
        data.set(format!("data-{data_attribute}"), &resolved.kind);
        data.set("data-expandable", marker.is_expandable().to_string());
        data.set("data-expanded", marker.is_expanded().to_string());

        log::debug!(
            "rewrote block quote as '{}' callout (expandable: {})",
            resolved.kind,
            marker.is_expandable()
        );
        true
    }
}

impl Default for Callouts {
    fn default() -> Self {
        Self::new(CalloutConfig::default())
    }
}

impl AstTransform for Callouts {
    fn transform(&self, root: &mut Node, diagnostics: &mut ParseDiagnostics) {
        visit_blockquotes_mut(root, &mut |quote: &mut Blockquote| {
            self.rewrite_blockquote(quote, diagnostics);
        });
    }
}
