//! HTML rendering of (transformed) document trees.
//!
//! Blocks are concatenated without separators. Attributes set in a node's
//! [`mdcallout_core::Data`] are emitted in key order, so output is stable.

/// Output buffer and scope tracking.
pub mod context;
/// Per-node rendering.
pub mod render;

use context::Context;
use mdcallout_core::Node;

/// Renders a tree to an HTML string.
pub fn render_html(node: &Node) -> String {
    let mut ctx = Context::new();
    render::render_node(node, &mut ctx);
    ctx.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use mdcallout_core::{ParseDiagnostics, ParseOptions, ParserPipeline, parse_tree};

    fn html(markdown: &str) -> String {
        render_html(&parse_tree(markdown, &ParseOptions::default()).unwrap())
    }

    #[test]
    fn paragraph_with_inline_markup() {
        insta::assert_snapshot!(
            html("Some *em*, **strong**, ~~del~~ and `code`."),
            @"<p>Some <em>em</em>, <strong>strong</strong>, <del>del</del> and <code>code</code>.</p>"
        );
    }

    #[test]
    fn escapes_text() {
        assert_eq!(html("a &lt; b"), "<p>a &lt; b</p>");
        assert_eq!(html("1 < 2"), "<p>1 &lt; 2</p>");
    }

    #[test]
    fn plain_blockquote() {
        assert_eq!(
            html("> quoted\n> text"),
            "<blockquote><p>quoted\ntext</p></blockquote>"
        );
    }

    #[test]
    fn tight_and_loose_lists() {
        assert_eq!(html("- a\n- b"), "<ul><li>a</li><li>b</li></ul>");
        assert_eq!(
            html("- a\n\n- b"),
            "<ul><li><p>a</p></li><li><p>b</p></li></ul>"
        );
        assert_eq!(html("3. c"), r#"<ol start="3"><li>c</li></ol>"#);
    }

    #[test]
    fn task_list_items() {
        let out = html("- [x] done\n- [ ] open");
        assert!(out.starts_with(r#"<ul><li class="task-list-item"><input type="checkbox" disabled checked /> "#));
        assert!(out.contains(r#"<input type="checkbox" disabled /> "#));
        assert!(out.contains("done</li>"));
    }

    #[test]
    fn code_block_with_language() {
        assert_eq!(
            html("```rust\nlet x = 1 < 2;\n```"),
            "<pre><code class=\"language-rust\">let x = 1 &lt; 2;\n</code></pre>"
        );
    }

    #[test]
    fn links_and_images() {
        assert_eq!(
            html(r#"[site](https://example.com "Title")"#),
            r#"<p><a href="https://example.com" title="Title">site</a></p>"#
        );
        assert_eq!(
            html("![alt text](/img.png)"),
            r#"<p><img src="/img.png" alt="alt text" /></p>"#
        );
    }

    #[test]
    fn headings_and_breaks() {
        assert_eq!(html("## Title"), "<h2>Title</h2>");
        assert_eq!(html("a\n\n***"), "<p>a</p><hr />");
    }

    #[test]
    fn tables_with_alignment() {
        assert_eq!(
            html("| a | b | c |\n| :- | :-: | - |\n| 1 | 2 | 3 |"),
            concat!(
                "<table><thead><tr>",
                r#"<th align="left">a</th><th align="center">b</th><th>c</th>"#,
                "</tr></thead><tbody><tr>",
                r#"<td align="left">1</td><td align="center">2</td><td>3</td>"#,
                "</tr></tbody></table>",
            )
        );
        assert_eq!(
            html("| *x* |\n| --- |"),
            "<table><thead><tr><th><em>x</em></th></tr></thead></table>"
        );
    }

    #[test]
    fn paragraph_and_heading_data_from_transforms() {
        let mut pipeline = ParserPipeline::default();
        pipeline.add_ast_transform(|root: &mut Node, _: &mut ParseDiagnostics| {
            let Some(children) = root.children_mut() else {
                return;
            };
            for child in children {
                match child {
                    Node::Heading(heading) => heading.data.set("id", "intro"),
                    Node::Paragraph(para) => para.data.set("class", "lead"),
                    _ => {}
                }
            }
        });
        let output = pipeline.parse("# Intro\n\nFirst words.").unwrap();
        assert_eq!(
            render_html(&output.root),
            r#"<h1 id="intro">Intro</h1><p class="lead">First words.</p>"#
        );
    }
}
