//! Rendering context for the HTML renderer.

use mdcallout_core::Data;

/// Block scope the renderer is currently inside.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    /// Document root.
    Root,
    /// Inside a list; tight lists render paragraphs without `<p>`.
    List {
        /// Whether the list is loose.
        spread: bool,
    },
    /// Inside a block quote, which resets list tightness.
    Blockquote,
    /// Inside a table.
    Table,
}

/// Output buffer plus the scope stack.
#[derive(Debug)]
pub struct Context {
    html: String,
    stack: Vec<Scope>,
}

impl Context {
    /// Creates an empty context at root scope.
    pub fn new() -> Self {
        Self {
            html: String::with_capacity(1024),
            stack: vec![Scope::Root],
        }
    }

    /// Writes markup unescaped.
    pub fn push_raw(&mut self, s: &str) {
        self.html.push_str(s);
    }

    /// Writes text content, escaping `<`, `>`, and `&`.
    pub fn push_text(&mut self, s: &str) {
        html_escape::encode_text_to_string(s, &mut self.html);
    }

    /// Writes an attribute value meant for a double-quoted attribute.
    pub fn push_attr_value(&mut self, s: &str) {
        html_escape::encode_double_quoted_attribute_to_string(s, &mut self.html);
    }

    /// Writes ` name="value"` for every property in `data`, in key order.
    pub fn push_attributes(&mut self, data: &Data) {
        for (name, value) in &data.properties {
            self.push_raw(" ");
            self.push_raw(name);
            self.push_raw("=\"");
            self.push_attr_value(value);
            self.push_raw("\"");
        }
    }

    /// Returns true if the innermost list-or-quote scope is a tight list.
    pub fn is_in_tight_list(&self) -> bool {
        self.stack
            .iter()
            .rev()
            .find(|scope| matches!(scope, Scope::List { .. } | Scope::Blockquote))
            .is_some_and(|scope| matches!(scope, Scope::List { spread: false }))
    }

    /// Enters a new scope.
    pub fn enter(&mut self, scope: Scope) {
        self.stack.push(scope);
    }

    /// Leaves the current scope.
    pub fn exit(&mut self) -> Option<Scope> {
        self.stack.pop()
    }

    /// Consumes the context, returning the rendered HTML.
    pub fn finish(self) -> String {
        self.html
    }
}

impl Default for Context {
    fn default() -> Self {
        Self::new()
    }
}
