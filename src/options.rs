//! Mask configuration.

use serde::Deserialize;

use crate::error::ConfigError;
use crate::locale::Locale;

/// Largest number of decimal places a mask will render.
pub const MAX_PRECISION: i32 = 20;

/// Value shown when a masked field is cleared.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum EmptyValue {
    Number(f64),
    Text(String),
}

impl Default for EmptyValue {
    fn default() -> Self {
        EmptyValue::Text(String::new())
    }
}

impl EmptyValue {
    /// Returns the empty value as a number if it is one, or parses as one.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            EmptyValue::Number(n) => Some(*n),
            EmptyValue::Text(s) => s.trim().parse::<f64>().ok().filter(|n| n.is_finite()),
        }
    }

    /// Renders the empty value the way it is shown in a cleared field.
    pub fn to_text(&self) -> String {
        match self {
            EmptyValue::Number(n) => n.to_string(),
            EmptyValue::Text(s) => s.clone(),
        }
    }
}

impl From<&str> for EmptyValue {
    fn from(s: &str) -> Self {
        EmptyValue::Text(s.to_string())
    }
}

impl From<f64> for EmptyValue {
    fn from(n: f64) -> Self {
        EmptyValue::Number(n)
    }
}

/// Configuration for a currency mask.
///
/// Built once per bound control. Unknown JSON keys are ignored and missing
/// keys take their defaults, so `{"prefix": "R$ "}` is a valid configuration.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FormatConfig {
    #[serde(alias = "decimal")]
    pub decimal_separator: String,
    #[serde(alias = "thousands")]
    pub thousands_separator: String,
    /// Requested decimal places. Read through [`FormatConfig::decimals`].
    pub precision: i32,
    pub prefix: String,
    pub suffix: String,
    pub empty_value: EmptyValue,
}

impl Default for FormatConfig {
    fn default() -> Self {
        FormatConfig {
            decimal_separator: ".".to_string(),
            thousands_separator: ",".to_string(),
            precision: 2,
            prefix: String::new(),
            suffix: String::new(),
            empty_value: EmptyValue::default(),
        }
    }
}

impl FormatConfig {
    /// Parse a configuration from a JSON options object.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// A currency configuration using the separators and symbol of `locale`.
    pub fn for_locale(locale: &Locale) -> Self {
        FormatConfig {
            decimal_separator: locale.decimal_separator.to_string(),
            thousands_separator: locale.thousands_separator.to_string(),
            prefix: format!("{} ", locale.currency_symbol),
            ..FormatConfig::default()
        }
    }

    /// Number of decimal places actually used, clamped to `0..=20`.
    pub fn decimals(&self) -> usize {
        self.precision.clamp(0, MAX_PRECISION) as usize
    }

    pub fn with_precision(mut self, precision: i32) -> Self {
        self.precision = precision;
        self
    }

    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    pub fn with_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = suffix.into();
        self
    }

    pub fn with_separators(
        mut self,
        decimal: impl Into<String>,
        thousands: impl Into<String>,
    ) -> Self {
        self.decimal_separator = decimal.into();
        self.thousands_separator = thousands.into();
        self
    }

    pub fn with_empty_value(mut self, empty: impl Into<EmptyValue>) -> Self {
        self.empty_value = empty.into();
        self
    }

    /// Length of the prefix in characters.
    pub(crate) fn prefix_len(&self) -> usize {
        self.prefix.chars().count()
    }

    /// Length of the suffix in characters.
    pub(crate) fn suffix_len(&self) -> usize {
        self.suffix.chars().count()
    }
}

/// Which characters the numeric directive keeps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NumericMode {
    /// Digits only; decimal keys are rejected before they reach the field.
    Integer,
    /// Digits plus `.` and `,`.
    #[default]
    Decimal,
}

impl std::str::FromStr for NumericMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "integer" => Ok(NumericMode::Integer),
            "decimal" => Ok(NumericMode::Decimal),
            other => Err(ConfigError::InvalidNumericMode(other.to_string())),
        }
    }
}
