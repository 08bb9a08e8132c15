//! Callout marker recognition.
//!
//! A marker is the first line of a block quote's first paragraph:
//! `[!type]`, an optional `+`/`-` fold sign, then the title.

use once_cell::sync::Lazy;
use regex::Regex;

static MARKER_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\[!([A-Za-z0-9_]+)\]([+-])?(.*)$").expect("callout marker regex is valid")
});

/// Fold sign following the type token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FoldSign {
    /// `+`: expandable, initially expanded.
    Expanded,
    /// `-`: expandable, initially collapsed.
    Collapsed,
}

/// A recognized callout marker and the text that followed it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalloutMarker {
    /// Type token as written (case preserved).
    pub callout_type: String,
    /// Fold sign, if any.
    pub sign: Option<FoldSign>,
    /// Title text after the marker, trimmed; may be empty.
    pub title: String,
    /// Lines after the first, joined with `\n`; may be empty.
    pub content: String,
}

impl CalloutMarker {
    /// True when a fold sign was present.
    pub fn is_expandable(&self) -> bool {
        self.sign.is_some()
    }

    /// True only for the `+` sign.
    pub fn is_expanded(&self) -> bool {
        self.sign == Some(FoldSign::Expanded)
    }
}

/// Matches a marker against the first line of `text`.
///
/// Returns `None` when the first line is not a marker; markers on later
/// lines are ignored.
pub fn parse_marker(text: &str) -> Option<CalloutMarker> {
    let (first_line, content) = text.split_once('\n').unwrap_or((text, ""));
    let caps = MARKER_RE.captures(first_line)?;

    let sign = caps.get(2).map(|sign| match sign.as_str() {
        "+" => FoldSign::Expanded,
        _ => FoldSign::Collapsed,
    });

    Some(CalloutMarker {
        callout_type: caps[1].to_string(),
        sign,
        title: caps
            .get(3)
            .map_or("", |title| title.as_str())
            .trim()
            .to_string(),
        content: content.to_string(),
    })
}
