//! Locale presets for currency masks.

mod builtin;

pub use builtin::Locale;
