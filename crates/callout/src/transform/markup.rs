//! Title/content markup placed at the top of a rewritten block quote.

use super::marker::CalloutMarker;
use super::resolve::ResolvedCallout;
use crate::config::CalloutConfig;
use std::fmt::Write as _;

/// Builds the markup replacing a callout's first paragraph.
///
/// The title element is omitted when the title is empty and the content
/// wrapper when there is no content. Icon, title, and content are inserted
/// unescaped.
pub fn callout_markup(
    config: &CalloutConfig,
    resolved: &ResolvedCallout,
    marker: &CalloutMarker,
) -> String {
    let mut html = String::new();

    write!(
        html,
        r#"<div class="{}"><{icon_tag} class="{}">{}</{icon_tag}>"#,
        config.title_class,
        config.icon_class,
        resolved.icon,
        icon_tag = config.icon_tag_name,
    )
    .ok();

    if !marker.title.is_empty() {
        write!(
            html,
            r#"<{tag} class="{}">{}</{tag}>"#,
            config.title_text_class,
            config.title_text_transform.apply(&marker.title),
            tag = config.title_text_tag_name,
        )
        .ok();
    }
    html.push_str("</div>");

    if !marker.content.is_empty() {
        write!(
            html,
            r#"<div class="{}">{}</div>"#,
            config.content_class, marker.content
        )
        .ok();
    }

    html
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transform::marker::parse_marker;

    fn resolved() -> ResolvedCallout {
        ResolvedCallout {
            kind: "note".to_string(),
            icon: "<svg/>".to_string(),
            fallback: false,
        }
    }

    #[test]
    fn title_and_content() {
        let marker = parse_marker("[!note] Title\nBody").unwrap();
        let html = callout_markup(&CalloutConfig::default(), &resolved(), &marker);
        assert_eq!(
            html,
            concat!(
                r#"<div class="callout-title"><div class="callout-title-icon"><svg/></div>"#,
                r#"<div class="callout-title-text">Title</div></div>"#,
                r#"<div class="callout-content">Body</div>"#,
            )
        );
    }

    #[test]
    fn empty_title_and_content_are_omitted() {
        let marker = parse_marker("[!note]").unwrap();
        let html = callout_markup(&CalloutConfig::default(), &resolved(), &marker);
        assert_eq!(
            html,
            r#"<div class="callout-title"><div class="callout-title-icon"><svg/></div></div>"#
        );
    }

    #[test]
    fn custom_tags_and_transform() {
        let options = crate::CalloutOptions {
            icon_tag_name: Some("span".to_string()),
            title_text_tag_name: Some("strong".to_string()),
            ..Default::default()
        };
        let config = CalloutConfig::from_options(options)
            .unwrap()
            .with_title_text_transform(|t| t.to_uppercase());
        let marker = parse_marker("[!note] loud").unwrap();
        let html = callout_markup(&config, &resolved(), &marker);
        assert_eq!(
            html,
            concat!(
                r#"<div class="callout-title"><span class="callout-title-icon"><svg/></span>"#,
                r#"<strong class="callout-title-text">LOUD</strong></div>"#,
            )
        );
    }

    #[test]
    fn content_is_not_escaped() {
        let marker = parse_marker("[!note]\n<b>raw</b>").unwrap();
        let html = callout_markup(&CalloutConfig::default(), &resolved(), &marker);
        assert!(html.ends_with(r#"<div class="callout-content"><b>raw</b></div>"#));
    }
}
