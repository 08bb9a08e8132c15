//! Node-by-node HTML rendering.

use super::context::{Context, Scope};
use mdcallout_core::Node;
use mdcallout_core::tree::{
    Align, Blockquote, Code, Heading, Image, Link, List, ListItem, Paragraph, Table, TableRow,
};

/// Renders a node and its descendants into `ctx`.
pub fn render_node(node: &Node, ctx: &mut Context) {
    match node {
        Node::Root(root) => render_children(&root.children, ctx),
        Node::Blockquote(quote) => render_blockquote(quote, ctx),
        Node::Paragraph(para) => render_paragraph(para, ctx),
        Node::Heading(heading) => render_heading(heading, ctx),
        Node::List(list) => render_list(list, ctx),
        Node::ListItem(item) => render_list_item(item, ctx),
        Node::Code(code) => render_code(code, ctx),
        Node::Html(html) => ctx.push_raw(&html.value),
        Node::ThematicBreak(_) => ctx.push_raw("<hr />"),
        Node::Text(text) => ctx.push_text(&text.value),
        Node::Emphasis(span) => wrap("em", &span.children, ctx),
        Node::Strong(span) => wrap("strong", &span.children, ctx),
        Node::Delete(span) => wrap("del", &span.children, ctx),
        Node::InlineCode(code) => {
            ctx.push_raw("<code>");
            ctx.push_text(&code.value);
            ctx.push_raw("</code>");
        }
        Node::Link(link) => render_link(link, ctx),
        Node::Image(image) => render_image(image, ctx),
        Node::Break(_) => ctx.push_raw("<br />"),
        Node::Table(table) => render_table(table, ctx),
        Node::TableRow(row) => render_table_row(row, &[], false, ctx),
        Node::TableCell(cell) => wrap("td", &cell.children, ctx),
    }
}

fn render_children(children: &[Node], ctx: &mut Context) {
    for child in children {
        render_node(child, ctx);
    }
}

fn wrap(tag: &str, children: &[Node], ctx: &mut Context) {
    ctx.push_raw(&format!("<{tag}>"));
    render_children(children, ctx);
    ctx.push_raw(&format!("</{tag}>"));
}

/// Renders a block quote with any attributes a transform attached.
fn render_blockquote(quote: &Blockquote, ctx: &mut Context) {
    ctx.push_raw("<blockquote");
    ctx.push_attributes(&quote.data);
    ctx.push_raw(">");
    ctx.enter(Scope::Blockquote);
    render_children(&quote.children, ctx);
    ctx.exit();
    ctx.push_raw("</blockquote>");
}

fn render_paragraph(para: &Paragraph, ctx: &mut Context) {
    let in_tight_list = ctx.is_in_tight_list();
    if !in_tight_list {
        ctx.push_raw("<p");
        ctx.push_attributes(&para.data);
        ctx.push_raw(">");
    }

    render_children(&para.children, ctx);

    if !in_tight_list {
        ctx.push_raw("</p>");
    }
}

fn render_heading(heading: &Heading, ctx: &mut Context) {
    let depth = heading.depth.clamp(1, 6);
    ctx.push_raw(&format!("<h{depth}"));
    ctx.push_attributes(&heading.data);
    ctx.push_raw(">");
    render_children(&heading.children, ctx);
    ctx.push_raw(&format!("</h{depth}>"));
}

fn render_list(list: &List, ctx: &mut Context) {
    let tag = if list.ordered { "ol" } else { "ul" };
    match list.start {
        Some(start) if list.ordered && start != 1 => {
            ctx.push_raw(&format!(r#"<{tag} start="{start}">"#));
        }
        _ => ctx.push_raw(&format!("<{tag}>")),
    }
    ctx.enter(Scope::List {
        spread: list.spread,
    });
    render_children(&list.children, ctx);
    ctx.exit();
    ctx.push_raw(&format!("</{tag}>"));
}

fn render_list_item(item: &ListItem, ctx: &mut Context) {
    match item.checked {
        Some(checked) => {
            ctx.push_raw(r#"<li class="task-list-item">"#);
            let checked = if checked { " checked" } else { "" };
            ctx.push_raw(&format!(r#"<input type="checkbox" disabled{checked} /> "#));
        }
        None => ctx.push_raw("<li>"),
    }
    render_children(&item.children, ctx);
    ctx.push_raw("</li>");
}

fn render_table(table: &Table, ctx: &mut Context) {
    ctx.enter(Scope::Table);
    ctx.push_raw("<table><thead>");

    let mut rows = table.children.iter().filter_map(|row| match row {
        Node::TableRow(row) => Some(row),
        _ => None,
    });
    if let Some(head) = rows.next() {
        render_table_row(head, &table.align, true, ctx);
    }
    ctx.push_raw("</thead>");

    let mut body = rows.peekable();
    if body.peek().is_some() {
        ctx.push_raw("<tbody>");
        for row in body {
            render_table_row(row, &table.align, false, ctx);
        }
        ctx.push_raw("</tbody>");
    }

    ctx.push_raw("</table>");
    ctx.exit();
}

fn render_table_row(row: &TableRow, align: &[Align], is_header: bool, ctx: &mut Context) {
    let tag = if is_header { "th" } else { "td" };
    ctx.push_raw("<tr>");
    for (index, cell) in row.children.iter().enumerate() {
        let align = match align.get(index) {
            Some(Align::Left) => r#" align="left""#,
            Some(Align::Right) => r#" align="right""#,
            Some(Align::Center) => r#" align="center""#,
            Some(Align::None) | None => "",
        };
        ctx.push_raw(&format!("<{tag}{align}>"));
        match cell {
            Node::TableCell(cell) => render_children(&cell.children, ctx),
            other => render_node(other, ctx),
        }
        ctx.push_raw(&format!("</{tag}>"));
    }
    ctx.push_raw("</tr>");
}

fn render_code(code: &Code, ctx: &mut Context) {
    ctx.push_raw("<pre><code");
    if let Some(lang) = &code.lang {
        ctx.push_raw(r#" class="language-"#);
        ctx.push_attr_value(lang);
        ctx.push_raw("\"");
    }
    ctx.push_raw(">");
    ctx.push_text(&code.value);
    if !code.value.is_empty() {
        ctx.push_raw("\n");
    }
    ctx.push_raw("</code></pre>");
}

fn render_link(link: &Link, ctx: &mut Context) {
    ctx.push_raw(r#"<a href=""#);
    ctx.push_attr_value(&link.url);
    ctx.push_raw("\"");

    if let Some(title) = &link.title {
        ctx.push_raw(r#" title=""#);
        ctx.push_attr_value(title);
        ctx.push_raw("\"");
    }

    ctx.push_raw(">");
    render_children(&link.children, ctx);
    ctx.push_raw("</a>");
}

fn render_image(image: &Image, ctx: &mut Context) {
    ctx.push_raw(r#"<img src=""#);
    ctx.push_attr_value(&image.url);
    ctx.push_raw(r#"" alt=""#);
    ctx.push_attr_value(&image.alt);
    ctx.push_raw("\"");

    if let Some(title) = &image.title {
        ctx.push_raw(r#" title=""#);
        ctx.push_attr_value(title);
        ctx.push_raw("\"");
    }

    ctx.push_raw(" />");
}
