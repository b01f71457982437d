//! Read-only display filters.
//!
//! These format stored values for display next to masked fields: amounts,
//! postal codes, phone numbers and tax ids. Values that do not have the
//! expected shape are passed through untouched.

use crate::formatter::{add_thousands_separator, split_scaled};
use crate::locale::Locale;
use crate::normalize::only_numbers;
use crate::options::FormatConfig;
use crate::value::Value;

fn as_number(value: Value<'_>) -> Option<f64> {
    match value {
        Value::Number(n) => Some(n),
        Value::Text(s) => s.trim().parse::<f64>().ok(),
        Value::Empty => None,
    }
    .filter(|n| n.is_finite())
}

fn passthrough(value: Value<'_>) -> String {
    match value {
        Value::Number(n) => n.to_string(),
        Value::Text(s) => s.to_string(),
        Value::Empty => String::new(),
    }
}

/// Brazilian real with two decimals, e.g. `R$ 1.234,50`.
///
/// Returns `default` when the value is not a finite number.
pub fn currency<'a>(value: impl Into<Value<'a>>, default: &str) -> String {
    match as_number(value.into()) {
        Some(n) => FormatConfig::for_locale(&Locale::pt_br()).format(n),
        None => default.to_string(),
    }
}

/// A number with Brazilian grouping and up to two decimals, optionally
/// decorated: `decimal(1234.5, "kg", "")` is `"1.234,5 kg"`.
///
/// Zero and non-numeric values are returned as they are.
pub fn decimal<'a>(value: impl Into<Value<'a>>, suffix: &str, prefix: &str) -> String {
    let value = value.into();
    let n = match as_number(value) {
        Some(n) if n != 0.0 => n,
        _ => return passthrough(value),
    };

    let locale = Locale::pt_br();
    let cents = format!("{:.2}", n.abs());
    let (integer, decimals) = split_scaled(&only_numbers(&cents), 2);
    let mut number = add_thousands_separator(&integer, &locale.thousands_separator.to_string());
    let decimals = decimals.trim_end_matches('0');
    if !decimals.is_empty() {
        number.push(locale.decimal_separator);
        number.push_str(decimals);
    }
    if n < 0.0 && number.chars().any(|c| c.is_ascii_digit() && c != '0') {
        number.insert(0, '-');
    }

    let mut parts: Vec<&str> = Vec::with_capacity(3);
    if !prefix.is_empty() {
        parts.push(prefix);
    }
    parts.push(number.as_str());
    if !suffix.is_empty() {
        parts.push(suffix);
    }
    parts.join(" ")
}

/// Lay `digits` out over `pattern`, where each `#` takes the next digit.
fn apply_pattern(digits: &str, pattern: &str) -> String {
    let mut digits = digits.chars();
    pattern
        .chars()
        .filter_map(|p| if p == '#' { digits.next() } else { Some(p) })
        .collect()
}

fn all_digits(value: &str) -> bool {
    value.bytes().all(|b| b.is_ascii_digit())
}

/// Brazilian postal code: `12345678` becomes `12.345-678`.
pub fn cep(value: &str) -> String {
    if value.len() == 8 && all_digits(value) {
        apply_pattern(value, "##.###-###")
    } else {
        value.to_string()
    }
}

/// Brazilian phone number with area code, landline (10 digits) or mobile
/// (11 digits).
pub fn phone(value: &str) -> String {
    if !all_digits(value) {
        return value.to_string();
    }
    match value.len() {
        10 => apply_pattern(value, "(##) ####-####"),
        11 => apply_pattern(value, "(##) #####-####"),
        _ => value.to_string(),
    }
}

/// CPF (11 digits) or CNPJ (14 digits) punctuation. Does not validate check
/// digits.
pub fn cpf_cnpj(value: &str) -> String {
    if !all_digits(value) {
        return value.to_string();
    }
    match value.len() {
        11 => apply_pattern(value, "###.###.###-##"),
        14 => apply_pattern(value, "##.###.###/####-##"),
        _ => value.to_string(),
    }
}

#[cfg(feature = "chrono")]
mod dates {
    use chrono::{DateTime, NaiveDate, NaiveDateTime};
    use std::fmt::Write;

    pub const DATE_PATTERN: &str = "%d/%m/%Y";
    pub const TIMESTAMP_PATTERN: &str = "%d/%m/%Y %H:%M:%S";

    fn parse_iso(value: &str) -> Option<NaiveDateTime> {
        if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
            return Some(dt.naive_local());
        }
        for fmt in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M:%S%.f"] {
            if let Ok(dt) = NaiveDateTime::parse_from_str(value, fmt) {
                return Some(dt);
            }
        }
        NaiveDate::parse_from_str(value, "%Y-%m-%d")
            .ok()
            .and_then(|d| d.and_hms_opt(0, 0, 0))
    }

    pub fn render(value: &str, pattern: &str) -> String {
        let Some(dt) = parse_iso(value.trim()) else {
            return String::new();
        };
        let mut out = String::new();
        // A bad pattern makes the formatter error instead of panicking here.
        if write!(out, "{}", dt.format(pattern)).is_err() {
            return String::new();
        }
        out
    }
}

/// Format an ISO-8601 date, by default as `dd/mm/yyyy`.
///
/// Empty or unparseable input (or an invalid pattern) yields `""`.
#[cfg(feature = "chrono")]
pub fn date(value: &str, pattern: Option<&str>) -> String {
    dates::render(value, pattern.unwrap_or(dates::DATE_PATTERN))
}

/// Format an ISO-8601 timestamp, by default as `dd/mm/yyyy HH:MM:SS`.
#[cfg(feature = "chrono")]
pub fn timestamp(value: &str, pattern: Option<&str>) -> String {
    dates::render(value, pattern.unwrap_or(dates::TIMESTAMP_PATTERN))
}
