//! Tree traversal helpers.

use crate::tree::{Blockquote, Node};

/// Calls `visitor` on every block quote under `node`, in document order.
///
/// A block quote is handed to the visitor before its children are walked,
/// so whatever children the visitor leaves behind (including nested block
/// quotes) are visited afterwards.
pub fn visit_blockquotes_mut<F>(node: &mut Node, visitor: &mut F)
where
    F: FnMut(&mut Blockquote),
{
    if let Node::Blockquote(quote) = node {
        visitor(quote);
    }

    if let Some(children) = node.children_mut() {
        for child in children {
            visit_blockquotes_mut(child, visitor);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text;

    #[test]
    fn visits_in_document_order() {
        let mut root = Node::root(vec![
            Node::blockquote(vec![
                Node::paragraph(vec![Node::text("outer")]),
                Node::blockquote(vec![Node::paragraph(vec![Node::text("inner")])]),
            ]),
            Node::paragraph(vec![Node::text("between")]),
            Node::blockquote(vec![Node::paragraph(vec![Node::text("last")])]),
        ]);

        let mut seen = Vec::new();
        visit_blockquotes_mut(&mut root, &mut |quote: &mut Blockquote| {
            seen.push(text::to_string(&quote.children[0]));
        });

        assert_eq!(seen, vec!["outer", "inner", "last"]);
    }

    #[test]
    fn children_replaced_by_visitor_are_walked() {
        let mut root = Node::root(vec![Node::blockquote(vec![Node::paragraph(vec![])])]);

        let mut count = 0;
        visit_blockquotes_mut(&mut root, &mut |quote: &mut Blockquote| {
            count += 1;
            if count == 1 {
                quote.children.push(Node::blockquote(vec![]));
            }
        });

        assert_eq!(count, 2);
    }
}
