/// Default values and the built-in callout table.
pub mod defaults;
/// Built-in icon markup.
#[allow(missing_docs)]
pub mod icons;
/// Options and validated configuration.
pub mod types;

pub use types::{CalloutConfig, CalloutOptions, TitleTextTransform};
