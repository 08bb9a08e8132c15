use mdcallout::{CalloutConfig, CalloutOptions};
use mdcallout_core::ParseWarning;
use mdcallout_core::tree::Node;
use serde::Serialize;
use wasm_bindgen::JsValue;
use wasm_bindgen::prelude::*;

// ============================================================================
// Options
// ============================================================================

/// Reads callout options from JavaScript.
///
/// `undefined` and `null` select the defaults. Anything else must be an
/// object with known camelCase keys; unknown keys and wrongly typed values
/// are rejected rather than ignored.
fn parse_config(options: JsValue) -> Result<CalloutConfig, JsError> {
    if options.is_undefined() || options.is_null() {
        return Ok(CalloutConfig::default());
    }
    let options: CalloutOptions = serde_wasm_bindgen::from_value(options)
        .map_err(|e| JsError::new(&format!("Invalid options: {}", e)))?;
    CalloutConfig::from_options(options).map_err(|e| JsError::new(&e.to_string()))
}

fn to_js<T: Serialize>(value: &T) -> Result<JsValue, JsError> {
    // Plain objects rather than `Map`s, so `data.properties` reads like JSON.
    value
        .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
        .map_err(|e| JsError::new(&format!("Serialization error: {}", e)))
}

// ============================================================================
// Result Types
// ============================================================================

/// Result of [`render`].
#[derive(Debug, Clone, Serialize)]
pub struct RenderResult {
    /// Rendered HTML.
    pub html: String,
    /// Unknown callout types that fell back to `note`.
    pub warnings: Vec<ParseWarning>,
}

/// Result of [`transform`].
#[derive(Debug, Clone, Serialize)]
pub struct TransformResult {
    /// Transformed document tree.
    pub tree: Node,
    /// Unknown callout types that fell back to `note`.
    pub warnings: Vec<ParseWarning>,
}

// ============================================================================
// API
// ============================================================================

/// Renders markdown to HTML with callouts applied.
///
/// # Example (JavaScript)
///
/// ```javascript
/// import { render } from './mdcallout_wasm';
///
/// const { html, warnings } = render("> [!tip] Try this", { iconTagName: "span" });
/// ```
#[wasm_bindgen]
pub fn render(source: &str, options: JsValue) -> Result<JsValue, JsError> {
    let config = parse_config(options)?;
    let rendered =
        mdcallout::process(source, &config).map_err(|e| JsError::new(&e.to_string()))?;

    to_js(&RenderResult {
        html: rendered.html,
        warnings: rendered.diagnostics.warnings,
    })
}

/// Parses markdown and applies callouts, returning the tree instead of HTML.
///
/// Rewritten block quotes carry their attributes in `data.properties`.
#[wasm_bindgen]
pub fn transform(source: &str, options: JsValue) -> Result<JsValue, JsError> {
    let config = parse_config(options)?;
    let output =
        mdcallout::transform(source, &config).map_err(|e| JsError::new(&e.to_string()))?;

    to_js(&TransformResult {
        tree: output.root,
        warnings: output.diagnostics.warnings,
    })
}
