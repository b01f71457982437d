//! Error types for configuring and binding masks.

use thiserror::Error;

/// Errors that can occur when reading directive options.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("invalid options JSON: {0}")]
    Json(String),

    #[error("invalid numeric mode '{0}': expected \"integer\" or \"decimal\"")]
    InvalidNumericMode(String),
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        ConfigError::Json(err.to_string())
    }
}

/// Errors that can occur when binding a directive to an element.
///
/// Formatting itself never fails; only binding can.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BindError {
    /// The money mask needs exactly one input to format.
    #[error("money requires 1 input, found {found}")]
    TargetNotUnique { found: usize },

    #[error("element {node} does not exist in the host")]
    UnknownElement { node: u64 },

    #[error("unknown directive '{name}'")]
    UnknownDirective { name: String },

    #[error(transparent)]
    Config(#[from] ConfigError),
}
