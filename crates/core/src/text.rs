//! Plain-text flattening.

use crate::tree::Node;

/// Concatenates the text content of a node and its descendants.
///
/// Literal values (text, inline code, code, raw markup) and image alt text
/// are kept as-is; hard breaks contribute a line feed so callers splitting
/// on lines see the same boundaries as the source.
pub fn to_string(node: &Node) -> String {
    let mut buffer = String::new();
    push_text(node, &mut buffer);
    buffer
}

/// Concatenates the text content of a list of nodes.
pub fn children_to_string(nodes: &[Node]) -> String {
    let mut buffer = String::new();
    for node in nodes {
        push_text(node, &mut buffer);
    }
    buffer
}

fn push_text(node: &Node, buffer: &mut String) {
    match node {
        Node::Text(text) => buffer.push_str(&text.value),
        Node::InlineCode(code) => buffer.push_str(&code.value),
        Node::Code(code) => buffer.push_str(&code.value),
        Node::Html(html) => buffer.push_str(&html.value),
        Node::Image(img) => buffer.push_str(&img.alt),
        Node::Break(_) => buffer.push('\n'),
        Node::ThematicBreak(_) => {}
        parent => {
            if let Some(children) = parent.children() {
                for child in children {
                    push_text(child, buffer);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::{Break, Span};

    #[test]
    fn flattens_nested_inline_content() {
        let para = Node::paragraph(vec![
            Node::text("Hello, "),
            Node::Strong(Span {
                children: vec![Node::text("bold")],
                position: None,
            }),
            Node::text(" world"),
        ]);
        assert_eq!(to_string(&para), "Hello, bold world");
    }

    #[test]
    fn hard_break_becomes_newline() {
        let para = Node::paragraph(vec![
            Node::text("[!tip] Title"),
            Node::Break(Break { position: None }),
            Node::text("Body"),
        ]);
        assert_eq!(to_string(&para), "[!tip] Title\nBody");
    }

    #[test]
    fn empty_parent_is_empty_string() {
        assert_eq!(children_to_string(&[Node::blockquote(vec![])]), "");
    }
}
