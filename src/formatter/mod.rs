//! Currency formatting engine

mod money;

pub(crate) use money::{add_thousands_separator, split_scaled};

use crate::normalize::only_numbers;
use crate::options::FormatConfig;
use crate::value::Value;

impl FormatConfig {
    /// Format a value for display.
    ///
    /// Digits shift in from the right like a calculator tape: with precision 2,
    /// `"1"` becomes `0.01`, `"12"` becomes `0.12` and so on. Separators, prefix
    /// and suffix already present in text input are ignored, so formatting an
    /// already formatted string yields the same amount again, even when the
    /// prefix or suffix contains digits.
    ///
    /// This never fails. An empty value yields the configured empty value.
    pub fn format<'a>(&self, value: impl Into<Value<'a>>) -> String {
        let value = value.into();
        if value.is_empty() {
            return self.empty_value.to_text();
        }
        let rendered;
        let text = match value {
            Value::Text(s) => self.strip_affixes(s),
            Value::Number(n) => {
                rendered = render_fixed(n, self.decimals());
                rendered.as_str()
            }
            Value::Empty => return self.empty_value.to_text(),
        };

        let negative = if text.contains('-') { "-" } else { "" };
        let numbers = only_numbers(text);
        let (integer, decimal) = split_scaled(&numbers, self.decimals());
        let integer = add_thousands_separator(&integer, &self.thousands_separator);

        let mut result = String::with_capacity(
            self.prefix.len() + integer.len() + decimal.len() + self.suffix.len() + 2,
        );
        result.push_str(&self.prefix);
        result.push_str(negative);
        result.push_str(&integer);
        if !decimal.is_empty() {
            result.push_str(&self.decimal_separator);
            result.push_str(&decimal);
        }
        result.push_str(&self.suffix);
        result
    }

    /// Recover the numeric amount from display text.
    ///
    /// Uses the same scaling as [`FormatConfig::format`], so
    /// `unformat(format(x)) == unformat(x)`. Empty text yields the empty value
    /// when it is numeric, otherwise `0.0`.
    pub fn unformat(&self, text: &str) -> f64 {
        if text.is_empty() {
            return self.empty_value.as_number().unwrap_or(0.0);
        }
        let text = self.strip_affixes(text);
        let sign = if text.contains('-') { -1.0 } else { 1.0 };
        let numbers = only_numbers(text);
        let (integer, decimal) = split_scaled(&numbers, self.decimals());
        let magnitude = if decimal.is_empty() {
            integer.parse::<f64>()
        } else {
            format!("{}.{}", integer, decimal).parse::<f64>()
        };
        magnitude.unwrap_or(0.0) * sign
    }

    /// The part of `text` between the configured prefix and suffix. Affixes
    /// that are not present are left alone.
    pub(crate) fn strip_affixes<'t>(&self, text: &'t str) -> &'t str {
        let text = text.strip_prefix(self.prefix.as_str()).unwrap_or(text);
        text.strip_suffix(self.suffix.as_str()).unwrap_or(text)
    }
}

/// Render a number with a fixed count of decimals, dropping the sign of zero.
pub(crate) fn render_fixed(value: f64, decimals: usize) -> String {
    let value = if value == 0.0 { 0.0 } else { value };
    format!("{:.*}", decimals, value)
}
