//! Typed document tree consumed and produced by the callout transform.
//!
//! The shape follows mdast: every node is a tagged variant, parents own an
//! ordered `children` list, and block-level containers carry a [`Data`]
//! record of renderer hints (HTML attributes) that transforms may fill in.

use crate::SourceLocation;
use serde::Serialize;
use std::collections::BTreeMap;

/// Renderer hints attached to a node.
///
/// `properties` maps HTML attribute names (`class`, `data-*`, ...) to their
/// values. Keys are kept sorted so rendering is deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Data {
    /// HTML attributes to emit on the rendered element.
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub properties: BTreeMap<String, String>,
}

impl Data {
    /// Returns true if no hints are present.
    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    /// Sets a property, replacing any previous value under the same name.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.properties.insert(name.into(), value.into());
    }

    /// Looks up a property value.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.properties.get(name).map(String::as_str)
    }
}

/// A node in the document tree.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Node {
    /// Document root.
    Root(Root),
    /// Block quotation (`> ...`).
    Blockquote(Blockquote),
    /// Paragraph.
    Paragraph(Paragraph),
    /// ATX or setext heading.
    Heading(Heading),
    /// Ordered or unordered list.
    List(List),
    /// List item.
    ListItem(ListItem),
    /// Fenced or indented code block.
    Code(Code),
    /// Raw markup, emitted unescaped by renderers.
    Html(Html),
    /// Thematic break (`---`).
    ThematicBreak(ThematicBreak),
    /// Plain text.
    Text(Text),
    /// Emphasis (`*a*`).
    Emphasis(Span),
    /// Strong emphasis (`**a**`).
    Strong(Span),
    /// Strikethrough (`~~a~~`).
    Delete(Span),
    /// Inline code (`` `a` ``).
    InlineCode(InlineCode),
    /// Link.
    Link(Link),
    /// Image.
    Image(Image),
    /// Hard line break.
    Break(Break),
    /// GFM table; the first row is the header.
    Table(Table),
    /// Table row.
    TableRow(TableRow),
    /// Table cell.
    TableCell(TableCell),
}

/// Document root.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Root {
    pub children: Vec<Node>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<SourceLocation>,
}

/// Block quotation.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Blockquote {
    pub children: Vec<Node>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<SourceLocation>,
    #[serde(skip_serializing_if = "Data::is_empty")]
    pub data: Data,
}

/// Paragraph.
///
/// `data` starts empty; it is there for transforms that want attributes on
/// the rendered `<p>`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Paragraph {
    pub children: Vec<Node>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<SourceLocation>,
    #[serde(skip_serializing_if = "Data::is_empty")]
    pub data: Data,
}

/// Heading with its depth (1-6). Like [`Paragraph`], `data` is filled only
/// by transforms.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Heading {
    pub children: Vec<Node>,
    pub depth: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<SourceLocation>,
    #[serde(skip_serializing_if = "Data::is_empty")]
    pub data: Data,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct List {
    pub children: Vec<Node>,
    pub ordered: bool,
    pub start: Option<u32>,
    pub spread: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<SourceLocation>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ListItem {
    pub children: Vec<Node>,
    pub spread: bool,
    /// `Some` for GFM task list items.
    pub checked: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<SourceLocation>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Code {
    pub value: String,
    pub lang: Option<String>,
    pub meta: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<SourceLocation>,
}

/// Raw markup.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Html {
    pub value: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<SourceLocation>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ThematicBreak {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<SourceLocation>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Text {
    pub value: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<SourceLocation>,
}

/// Inline container shared by emphasis, strong, and delete.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Span {
    pub children: Vec<Node>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<SourceLocation>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InlineCode {
    pub value: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<SourceLocation>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Link {
    pub children: Vec<Node>,
    pub url: String,
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<SourceLocation>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Image {
    pub alt: String,
    pub url: String,
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<SourceLocation>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Break {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<SourceLocation>,
}

/// Column alignment from a table's delimiter row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Align {
    Left,
    Right,
    Center,
    None,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Table {
    pub children: Vec<Node>,
    /// One entry per column.
    pub align: Vec<Align>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<SourceLocation>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableRow {
    pub children: Vec<Node>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<SourceLocation>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableCell {
    pub children: Vec<Node>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<SourceLocation>,
}

impl Node {
    /// Creates a root node.
    pub fn root(children: Vec<Node>) -> Self {
        Node::Root(Root {
            children,
            position: None,
        })
    }

    /// Creates a block quote without position or hints.
    pub fn blockquote(children: Vec<Node>) -> Self {
        Node::Blockquote(Blockquote {
            children,
            ..Default::default()
        })
    }

    /// Creates a paragraph without position or hints.
    pub fn paragraph(children: Vec<Node>) -> Self {
        Node::Paragraph(Paragraph {
            children,
            ..Default::default()
        })
    }

    /// Creates a text node.
    pub fn text(value: impl Into<String>) -> Self {
        Node::Text(Text {
            value: value.into(),
            position: None,
        })
    }

    /// Creates a raw markup node.
    pub fn html(value: impl Into<String>) -> Self {
        Node::Html(Html {
            value: value.into(),
            position: None,
        })
    }

    /// Returns the children of parent nodes, `None` for leaves.
    pub fn children(&self) -> Option<&Vec<Node>> {
        match self {
            Node::Root(x) => Some(&x.children),
            Node::Blockquote(x) => Some(&x.children),
            Node::Paragraph(x) => Some(&x.children),
            Node::Heading(x) => Some(&x.children),
            Node::List(x) => Some(&x.children),
            Node::ListItem(x) => Some(&x.children),
            Node::Emphasis(x) | Node::Strong(x) | Node::Delete(x) => Some(&x.children),
            Node::Link(x) => Some(&x.children),
            Node::Table(x) => Some(&x.children),
            Node::TableRow(x) => Some(&x.children),
            Node::TableCell(x) => Some(&x.children),
            Node::Code(_)
            | Node::Html(_)
            | Node::ThematicBreak(_)
            | Node::Text(_)
            | Node::InlineCode(_)
            | Node::Image(_)
            | Node::Break(_) => None,
        }
    }

    /// Mutable access to the children of parent nodes.
    pub fn children_mut(&mut self) -> Option<&mut Vec<Node>> {
        match self {
            Node::Root(x) => Some(&mut x.children),
            Node::Blockquote(x) => Some(&mut x.children),
            Node::Paragraph(x) => Some(&mut x.children),
            Node::Heading(x) => Some(&mut x.children),
            Node::List(x) => Some(&mut x.children),
            Node::ListItem(x) => Some(&mut x.children),
            Node::Emphasis(x) | Node::Strong(x) | Node::Delete(x) => Some(&mut x.children),
            Node::Link(x) => Some(&mut x.children),
            Node::Table(x) => Some(&mut x.children),
            Node::TableRow(x) => Some(&mut x.children),
            Node::TableCell(x) => Some(&mut x.children),
            Node::Code(_)
            | Node::Html(_)
            | Node::ThematicBreak(_)
            | Node::Text(_)
            | Node::InlineCode(_)
            | Node::Image(_)
            | Node::Break(_) => None,
        }
    }

    /// Start of the node in the source, when known.
    pub fn position(&self) -> Option<&SourceLocation> {
        match self {
            Node::Root(x) => x.position.as_ref(),
            Node::Blockquote(x) => x.position.as_ref(),
            Node::Paragraph(x) => x.position.as_ref(),
            Node::Heading(x) => x.position.as_ref(),
            Node::List(x) => x.position.as_ref(),
            Node::ListItem(x) => x.position.as_ref(),
            Node::Code(x) => x.position.as_ref(),
            Node::Html(x) => x.position.as_ref(),
            Node::ThematicBreak(x) => x.position.as_ref(),
            Node::Text(x) => x.position.as_ref(),
            Node::Emphasis(x) | Node::Strong(x) | Node::Delete(x) => x.position.as_ref(),
            Node::InlineCode(x) => x.position.as_ref(),
            Node::Link(x) => x.position.as_ref(),
            Node::Image(x) => x.position.as_ref(),
            Node::Break(x) => x.position.as_ref(),
            Node::Table(x) => x.position.as_ref(),
            Node::TableRow(x) => x.position.as_ref(),
            Node::TableCell(x) => x.position.as_ref(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn data_set_replaces_existing_value() {
        let mut data = Data::default();
        data.set("class", "a");
        data.set("class", "b");
        assert_eq!(data.get("class"), Some("b"));
        assert_eq!(data.properties.len(), 1);
    }

    #[test]
    fn leaves_have_no_children() {
        assert!(Node::text("x").children().is_none());
        assert!(Node::html("<hr>").children().is_none());
        assert_eq!(
            Node::blockquote(vec![Node::text("x")])
                .children()
                .map(Vec::len),
            Some(1)
        );
    }

    #[test]
    fn serializes_with_type_tag() {
        let mut quote = Blockquote::default();
        quote.data.set("class", "callout-note");
        let json = serde_json::to_value(Node::Blockquote(quote)).unwrap();
        assert_eq!(json["type"], "blockquote");
        assert_eq!(json["data"]["properties"]["class"], "callout-note");

        let json = serde_json::to_value(Node::paragraph(vec![])).unwrap();
        assert!(json.get("data").is_none());
    }
}
