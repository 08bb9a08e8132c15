//! Adapter from the markdown-rs MDAST into [`Node`].

use crate::SourceLocation;
use crate::tree::{
    Align, Blockquote, Break, Code, Data, Heading, Html, Image, InlineCode, Link, List, ListItem,
    Node, Paragraph, Root, Span, Table, TableCell, TableRow, Text, ThematicBreak,
};
use markdown::mdast;
use markdown::unist::Position;

/// Converts a markdown-rs node (and its subtree) into a [`Node`].
///
/// Returns `None` for frontmatter and link definitions, which are not
/// document content. Node kinds without a counterpart in [`Node`]
/// (references, math, MDX) are kept as a [`Node::Text`] holding their
/// flattened text.
pub fn from_mdast(node: mdast::Node) -> Option<Node> {
    let converted = match node {
        mdast::Node::Root(root) => Node::Root(Root {
            children: convert_children(root.children),
            position: location(root.position.as_ref()),
        }),
        mdast::Node::Blockquote(quote) => Node::Blockquote(Blockquote {
            children: convert_children(quote.children),
            position: location(quote.position.as_ref()),
            data: Data::default(),
        }),
        mdast::Node::Paragraph(para) => Node::Paragraph(Paragraph {
            children: convert_children(para.children),
            position: location(para.position.as_ref()),
            data: Data::default(),
        }),
        mdast::Node::Heading(heading) => Node::Heading(Heading {
            children: convert_children(heading.children),
            depth: heading.depth,
            position: location(heading.position.as_ref()),
            data: Data::default(),
        }),
        mdast::Node::List(list) => Node::List(List {
            children: convert_children(list.children),
            ordered: list.ordered,
            start: list.start,
            spread: list.spread,
            position: location(list.position.as_ref()),
        }),
        mdast::Node::ListItem(item) => Node::ListItem(ListItem {
            children: convert_children(item.children),
            spread: item.spread,
            checked: item.checked,
            position: location(item.position.as_ref()),
        }),
        mdast::Node::Code(code) => Node::Code(Code {
            value: code.value,
            lang: code.lang,
            meta: code.meta,
            position: location(code.position.as_ref()),
        }),
        mdast::Node::Html(html) => Node::Html(Html {
            value: html.value,
            position: location(html.position.as_ref()),
        }),
        mdast::Node::ThematicBreak(rule) => Node::ThematicBreak(ThematicBreak {
            position: location(rule.position.as_ref()),
        }),
        mdast::Node::Text(text) => Node::Text(Text {
            value: text.value,
            position: location(text.position.as_ref()),
        }),
        mdast::Node::Emphasis(em) => Node::Emphasis(span(em.children, em.position.as_ref())),
        mdast::Node::Strong(strong) => {
            Node::Strong(span(strong.children, strong.position.as_ref()))
        }
        mdast::Node::Delete(del) => Node::Delete(span(del.children, del.position.as_ref())),
        mdast::Node::InlineCode(code) => Node::InlineCode(InlineCode {
            value: code.value,
            position: location(code.position.as_ref()),
        }),
        mdast::Node::Link(link) => Node::Link(Link {
            children: convert_children(link.children),
            url: link.url,
            title: link.title,
            position: location(link.position.as_ref()),
        }),
        mdast::Node::Image(img) => Node::Image(Image {
            alt: img.alt,
            url: img.url,
            title: img.title,
            position: location(img.position.as_ref()),
        }),
        mdast::Node::Break(br) => Node::Break(Break {
            position: location(br.position.as_ref()),
        }),
        mdast::Node::Table(table) => Node::Table(Table {
            children: convert_children(table.children),
            align: table.align.iter().map(align).collect(),
            position: location(table.position.as_ref()),
        }),
        mdast::Node::TableRow(row) => Node::TableRow(TableRow {
            children: convert_children(row.children),
            position: location(row.position.as_ref()),
        }),
        mdast::Node::TableCell(cell) => Node::TableCell(TableCell {
            children: convert_children(cell.children),
            position: location(cell.position.as_ref()),
        }),
        mdast::Node::Yaml(_) | mdast::Node::Toml(_) | mdast::Node::Definition(_) => return None,
        other => {
            log::debug!("Flattening unsupported markdown node to text: {:?}", other);
            Node::Text(Text {
                position: location(other.position()),
                value: other.to_string(),
            })
        }
    };
    Some(converted)
}

fn convert_children(children: Vec<mdast::Node>) -> Vec<Node> {
    children.into_iter().filter_map(from_mdast).collect()
}

fn span(children: Vec<mdast::Node>, position: Option<&Position>) -> Span {
    Span {
        children: convert_children(children),
        position: location(position),
    }
}

fn align(kind: &mdast::AlignKind) -> Align {
    match kind {
        mdast::AlignKind::Left => Align::Left,
        mdast::AlignKind::Right => Align::Right,
        mdast::AlignKind::Center => Align::Center,
        mdast::AlignKind::None => Align::None,
    }
}

fn location(position: Option<&Position>) -> Option<SourceLocation> {
    position.map(|p| SourceLocation::new(p.start.line, p.start.column))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse::{ParseOptions, parse_tree};

    #[test]
    fn blockquote_keeps_position_and_paragraph() {
        let root = parse_tree("> [!note] Title\n> body", &ParseOptions::default()).unwrap();
        let Node::Root(root) = root else {
            panic!("Expected root");
        };
        let Node::Blockquote(quote) = &root.children[0] else {
            panic!("Expected blockquote, got {:?}", root.children[0]);
        };
        assert_eq!(quote.position, Some(SourceLocation::new(1, 1)));
        assert!(matches!(quote.children[0], Node::Paragraph(_)));
        assert!(quote.data.is_empty());
    }

    #[test]
    fn frontmatter_is_dropped() {
        let root = parse_tree("---\ntitle: x\n---\n\ntext", &ParseOptions::default()).unwrap();
        let children = root.children().unwrap();
        assert_eq!(children.len(), 1);
        assert!(matches!(children[0], Node::Paragraph(_)));
    }

    #[test]
    fn tables_keep_rows_cells_and_alignment() {
        let input = "| a | b |\n| :- | -: |\n| 1 | 2 |";
        let root = parse_tree(input, &ParseOptions::default()).unwrap();
        let children = root.children().unwrap();
        assert_eq!(children.len(), 1);
        let Node::Table(table) = &children[0] else {
            panic!("Expected table, got {:?}", children[0]);
        };
        assert_eq!(table.align, vec![Align::Left, Align::Right]);
        assert_eq!(table.children.len(), 2);
        let Node::TableRow(row) = &table.children[1] else {
            panic!("Expected row");
        };
        assert!(matches!(row.children[0], Node::TableCell(_)));
        assert_eq!(crate::text::to_string(&row.children[1]), "2");
    }

    #[test]
    fn unsupported_nodes_become_text() {
        let input = "[site]\n\n[site]: https://example.com";
        let root = parse_tree(input, &ParseOptions::default()).unwrap();
        let children = root.children().unwrap();
        assert_eq!(children.len(), 1);
        let Node::Paragraph(para) = &children[0] else {
            panic!("Expected paragraph, got {:?}", children[0]);
        };
        match &para.children[0] {
            Node::Text(text) => assert_eq!(text.value, "site"),
            other => panic!("Expected text fallback, got {:?}", other),
        }
    }
}
