//! inputmask - cursor-preserving currency masks for live text inputs
//!
//! This crate formats monetary amounts as the user types (digits shift in from
//! the right, thousands are grouped, prefix and suffix stay put), keeps the
//! caret on the same digit across each reformat, and provides the sibling text
//! transforms (uppercase, capitalize, accent stripping, numeric filtering)
//! behind one binding lifecycle.
//!
//! ```
//! use inputmask::FormatConfig;
//!
//! let config = FormatConfig::default()
//!     .with_separators(",", ".")
//!     .with_prefix("R$ ");
//!
//! assert_eq!(config.format("1234567"), "R$ 12.345,67");
//! assert_eq!(config.unformat("R$ 12.345,67"), 12345.67);
//! ```

pub mod binding;
pub mod cursor;
pub mod error;
pub mod filters;
pub mod host;
pub mod options;
pub mod transform;
pub mod value;

mod cache;
mod formatter;
mod locale;
mod normalize;

pub use binding::{
    attach, resolve_target, Attachment, Binding, Directive, DirectiveRegistry, MoneyDirective,
    TransformDirective,
};
pub use cursor::CursorState;
pub use error::{BindError, ConfigError};
pub use locale::Locale;
pub use normalize::{only_numbers, strip_non_numeric};
pub use options::{EmptyValue, FormatConfig, NumericMode};
pub use transform::TransformRule;
pub use value::Value;

/// Format a value for display with the given configuration.
pub fn format<'a>(value: impl Into<Value<'a>>, config: &FormatConfig) -> String {
    config.format(value)
}

/// Recover the amount from display text with the given configuration.
pub fn unformat(text: &str, config: &FormatConfig) -> f64 {
    config.unformat(text)
}
