//! Callout configuration: the caller-facing options and the validated
//! configuration the transform runs with.

use super::defaults;
use mdcallout_core::CalloutError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// Caller-supplied options, as they arrive from JavaScript or a JSON file.
///
/// Every field is optional; unset fields keep their defaults when merged by
/// [`CalloutConfig::from_options`]. Unknown keys are rejected.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CalloutOptions {
    /// Attribute name fragment: `data-{dataAttribute}` and `{dataAttribute}-{type}`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_attribute: Option<String>,
    /// Fixed class for rewritten block quotes, replacing `{dataAttribute}-{type}`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub blockquote_class: Option<String>,
    /// Class of the title wrapper.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title_class: Option<String>,
    /// Tag name of the title text element.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title_text_tag_name: Option<String>,
    /// Class of the title text element.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title_text_class: Option<String>,
    /// Tag name of the icon element.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon_tag_name: Option<String>,
    /// Class of the icon element.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon_class: Option<String>,
    /// Class of the content wrapper.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_class: Option<String>,
    /// Extra or overriding callout types, mapped to icon markup.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub callouts: Option<HashMap<String, String>>,
}

impl CalloutOptions {
    /// Parses options from a JSON object.
    pub fn from_json(json: &str) -> Result<Self, CalloutError> {
        serde_json::from_str(json)
            .map_err(|err| CalloutError::invalid_config("options", err.to_string()))
    }
}

/// Maps a raw callout title to the text placed in the title element.
///
/// The returned string is inserted into the markup unescaped.
#[derive(Clone)]
pub struct TitleTextTransform(Arc<dyn Fn(&str) -> String + Send + Sync>);

impl TitleTextTransform {
    /// Wraps a title function.
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&str) -> String + Send + Sync + 'static,
    {
        Self(Arc::new(f))
    }

    /// Applies the transform.
    pub fn apply(&self, title: &str) -> String {
        (self.0)(title)
    }
}

impl Default for TitleTextTransform {
    fn default() -> Self {
        Self::new(|title| title.trim().to_string())
    }
}

impl fmt::Debug for TitleTextTransform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("TitleTextTransform(..)")
    }
}

/// Validated configuration consumed by [`crate::Callouts`].
///
/// Built once, from defaults merged with caller options; the callout table
/// always contains `note`, the fallback type.
#[derive(Debug, Clone)]
pub struct CalloutConfig {
    pub(crate) data_attribute: String,
    pub(crate) blockquote_class: Option<String>,
    pub(crate) title_class: String,
    pub(crate) title_text_tag_name: String,
    pub(crate) title_text_class: String,
    pub(crate) title_text_transform: TitleTextTransform,
    pub(crate) icon_tag_name: String,
    pub(crate) icon_class: String,
    pub(crate) content_class: String,
    pub(crate) callouts: HashMap<String, String>,
}

impl Default for CalloutConfig {
    fn default() -> Self {
        Self {
            data_attribute: defaults::DATA_ATTRIBUTE.to_string(),
            blockquote_class: None,
            title_class: defaults::TITLE_CLASS.to_string(),
            title_text_tag_name: defaults::TITLE_TEXT_TAG_NAME.to_string(),
            title_text_class: defaults::TITLE_TEXT_CLASS.to_string(),
            title_text_transform: TitleTextTransform::default(),
            icon_tag_name: defaults::ICON_TAG_NAME.to_string(),
            icon_class: defaults::ICON_CLASS.to_string(),
            content_class: defaults::CONTENT_CLASS.to_string(),
            callouts: defaults::default_callouts(),
        }
    }
}

impl CalloutConfig {
    /// Merges caller options over the defaults.
    ///
    /// Callout keys are lowercased and added to (or override entries of) the
    /// built-in table. Fails on the first invalid value.
    pub fn from_options(options: CalloutOptions) -> Result<Self, CalloutError> {
        let mut config = Self::default();

        if let Some(value) = options.data_attribute {
            validate_name("dataAttribute", &value)?;
            config.data_attribute = value;
        }
        if let Some(value) = options.blockquote_class {
            validate_class("blockquoteClass", &value)?;
            config.blockquote_class = Some(value);
        }
        if let Some(value) = options.title_class {
            validate_class("titleClass", &value)?;
            config.title_class = value;
        }
        if let Some(value) = options.title_text_tag_name {
            validate_tag("titleTextTagName", &value)?;
            config.title_text_tag_name = value;
        }
        if let Some(value) = options.title_text_class {
            validate_class("titleTextClass", &value)?;
            config.title_text_class = value;
        }
        if let Some(value) = options.icon_tag_name {
            validate_tag("iconTagName", &value)?;
            config.icon_tag_name = value;
        }
        if let Some(value) = options.icon_class {
            validate_class("iconClass", &value)?;
            config.icon_class = value;
        }
        if let Some(value) = options.content_class {
            validate_class("contentClass", &value)?;
            config.content_class = value;
        }
        if let Some(callouts) = options.callouts {
            for (name, icon) in callouts {
                validate_callout_name(&name)?;
                config.callouts.insert(name.to_lowercase(), icon);
            }
        }

        Ok(config)
    }

    /// Replaces the title text transform.
    pub fn with_title_text_transform<F>(mut self, transform: F) -> Self
    where
        F: Fn(&str) -> String + Send + Sync + 'static,
    {
        self.title_text_transform = TitleTextTransform::new(transform);
        self
    }

    /// Attribute name fragment used for `data-*` and the default class.
    pub fn data_attribute(&self) -> &str {
        &self.data_attribute
    }

    /// Fixed block quote class, if configured.
    pub fn blockquote_class(&self) -> Option<&str> {
        self.blockquote_class.as_deref()
    }

    /// Callout table keyed by lowercase type name.
    pub fn callouts(&self) -> &HashMap<String, String> {
        &self.callouts
    }
}

fn validate_name(field: &str, value: &str) -> Result<(), CalloutError> {
    if value.is_empty() {
        return Err(CalloutError::invalid_config(field, "must not be empty"));
    }
    if let Some(c) = value
        .chars()
        .find(|c| !(c.is_ascii_alphanumeric() || *c == '-' || *c == '_'))
    {
        return Err(CalloutError::invalid_config(
            field,
            format!("unexpected character '{c}' in \"{value}\""),
        ));
    }
    Ok(())
}

fn validate_tag(field: &str, value: &str) -> Result<(), CalloutError> {
    validate_name(field, value)?;
    if !value.starts_with(|c: char| c.is_ascii_alphabetic()) {
        return Err(CalloutError::invalid_config(
            field,
            format!("tag name \"{value}\" must start with a letter"),
        ));
    }
    Ok(())
}

fn validate_class(field: &str, value: &str) -> Result<(), CalloutError> {
    if let Some(c) = value.chars().find(|c| matches!(c, '"' | '<' | '>')) {
        return Err(CalloutError::invalid_config(
            field,
            format!("unexpected character '{c}' in \"{value}\""),
        ));
    }
    Ok(())
}

fn validate_callout_name(name: &str) -> Result<(), CalloutError> {
    if name.is_empty() || !name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
        return Err(CalloutError::invalid_config(
            "callouts",
            format!("callout name \"{name}\" may only contain letters, digits and '_'"),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_without_options() {
        let config = CalloutConfig::from_options(CalloutOptions::default()).unwrap();
        assert_eq!(config.data_attribute(), "callout");
        assert_eq!(config.blockquote_class(), None);
        assert_eq!(config.title_class, "callout-title");
        assert_eq!(config.title_text_tag_name, "div");
        assert_eq!(config.content_class, "callout-content");
        assert_eq!(config.callouts().len(), 27);
        assert_eq!(config.title_text_transform.apply("  Title  "), "Title");
    }

    #[test]
    fn caller_callouts_merge_over_defaults() {
        let options = CalloutOptions {
            callouts: Some(HashMap::from([
                ("Custom".to_string(), "<i>c</i>".to_string()),
                ("note".to_string(), "<i>n</i>".to_string()),
            ])),
            ..Default::default()
        };
        let config = CalloutConfig::from_options(options).unwrap();
        let callouts = config.callouts();
        assert_eq!(callouts["custom"], "<i>c</i>");
        assert_eq!(callouts["note"], "<i>n</i>");
        assert!(callouts.contains_key("warning"));
        assert!(!callouts.contains_key("Custom"));
        assert_eq!(callouts.len(), 28);
    }

    #[test]
    fn options_from_json() {
        let options = CalloutOptions::from_json(
            r#"{"dataAttribute":"custom-callout","blockquoteClass":"admonition","callouts":{"x":"<b/>"}}"#,
        )
        .unwrap();
        assert_eq!(options.data_attribute.as_deref(), Some("custom-callout"));
        assert_eq!(options.blockquote_class.as_deref(), Some("admonition"));
        assert_eq!(options.callouts.unwrap()["x"], "<b/>");
    }

    #[test]
    fn unknown_option_rejected() {
        let err = CalloutOptions::from_json(r#"{"titleTextTransform":"upper"}"#).unwrap_err();
        assert!(matches!(err, CalloutError::InvalidConfig { ref field, .. } if field == "options"));
        assert!(err.to_string().contains("titleTextTransform"));
    }

    #[test]
    fn empty_tag_name_rejected() {
        let options = CalloutOptions {
            icon_tag_name: Some(String::new()),
            ..Default::default()
        };
        let err = CalloutConfig::from_options(options).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid configuration for `iconTagName`: must not be empty"
        );
    }

    #[test]
    fn tag_name_must_start_with_letter() {
        let options = CalloutOptions {
            title_text_tag_name: Some("1span".to_string()),
            ..Default::default()
        };
        assert!(CalloutConfig::from_options(options).is_err());
    }

    #[test]
    fn data_attribute_rejects_spaces() {
        let options = CalloutOptions {
            data_attribute: Some("my callout".to_string()),
            ..Default::default()
        };
        let err = CalloutConfig::from_options(options).unwrap_err();
        assert!(matches!(err, CalloutError::InvalidConfig { ref field, .. } if field == "dataAttribute"));
    }

    #[test]
    fn class_rejects_quotes() {
        let options = CalloutOptions {
            content_class: Some("a\" onclick=\"x".to_string()),
            ..Default::default()
        };
        assert!(CalloutConfig::from_options(options).is_err());
    }

    #[test]
    fn callout_names_must_be_word_characters() {
        for name in ["", "two words", "dash-ed"] {
            let options = CalloutOptions {
                callouts: Some(HashMap::from([(name.to_string(), String::new())])),
                ..Default::default()
            };
            let err = CalloutConfig::from_options(options).unwrap_err();
            assert!(
                matches!(err, CalloutError::InvalidConfig { ref field, .. } if field == "callouts"),
                "{name:?} should be rejected"
            );
        }
    }

    #[test]
    fn custom_title_transform() {
        let config = CalloutConfig::default().with_title_text_transform(|t| t.to_uppercase());
        assert_eq!(config.title_text_transform.apply("hi"), "HI");
    }
}
