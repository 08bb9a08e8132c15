//! Default configuration values and the built-in callout table.
//!
//! The table covers the Obsidian callout types and their aliases. Aliases
//! share an icon but keep their own name, so `> [!tldr]` is tagged `tldr`,
//! not `abstract`.

use super::icons;
use std::collections::HashMap;

/// Default attribute name fragment.
pub const DATA_ATTRIBUTE: &str = "callout";
/// Default title wrapper class.
pub const TITLE_CLASS: &str = "callout-title";
/// Default title text tag.
pub const TITLE_TEXT_TAG_NAME: &str = "div";
/// Default title text class.
pub const TITLE_TEXT_CLASS: &str = "callout-title-text";
/// Default icon tag.
pub const ICON_TAG_NAME: &str = "div";
/// Default icon class.
pub const ICON_CLASS: &str = "callout-title-icon";
/// Default content wrapper class.
pub const CONTENT_CLASS: &str = "callout-content";

/// Type used when a marker names a type missing from the table.
pub const FALLBACK_CALLOUT: &str = "note";

const BUILTIN_CALLOUTS: &[(&str, &str)] = &[
    ("note", icons::PENCIL),
    ("abstract", icons::CLIPBOARD_LIST),
    ("summary", icons::CLIPBOARD_LIST),
    ("tldr", icons::CLIPBOARD_LIST),
    ("info", icons::INFO),
    ("todo", icons::CIRCLE_CHECK),
    ("tip", icons::FLAME),
    ("hint", icons::FLAME),
    ("important", icons::FLAME),
    ("success", icons::CHECK),
    ("check", icons::CHECK),
    ("done", icons::CHECK),
    ("question", icons::CIRCLE_HELP),
    ("help", icons::CIRCLE_HELP),
    ("faq", icons::CIRCLE_HELP),
    ("warning", icons::TRIANGLE_ALERT),
    ("caution", icons::TRIANGLE_ALERT),
    ("attention", icons::TRIANGLE_ALERT),
    ("failure", icons::X),
    ("fail", icons::X),
    ("missing", icons::X),
    ("danger", icons::ZAP),
    ("error", icons::ZAP),
    ("bug", icons::BUG),
    ("example", icons::LIST),
    ("quote", icons::QUOTE),
    ("cite", icons::QUOTE),
];

/// Creates the built-in callout table.
///
/// ```
/// use mdcallout::config::defaults::default_callouts;
///
/// let callouts = default_callouts();
/// assert!(callouts.contains_key("note"));
/// assert_eq!(callouts["tldr"], callouts["abstract"]);
/// ```
pub fn default_callouts() -> HashMap<String, String> {
    BUILTIN_CALLOUTS
        .iter()
        .map(|(name, icon)| (name.to_string(), icon.to_string()))
        .collect()
}
