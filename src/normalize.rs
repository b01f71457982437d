//! Digit extraction.

use crate::options::NumericMode;

/// Keep only ASCII digits, returning `"0"` when none are left.
///
/// ```
/// use inputmask::only_numbers;
///
/// assert_eq!(only_numbers("R$ 1.234,56"), "123456");
/// assert_eq!(only_numbers("abc"), "0");
/// ```
pub fn only_numbers(input: &str) -> String {
    let digits: String = input.chars().filter(char::is_ascii_digit).collect();
    if digits.is_empty() {
        "0".to_string()
    } else {
        digits
    }
}

/// Filter applied by the numeric directive.
///
/// Unlike [`only_numbers`] an input with no digits stays empty.
pub fn strip_non_numeric(input: &str, mode: NumericMode) -> String {
    input
        .chars()
        .filter(|c| match mode {
            NumericMode::Integer => c.is_ascii_digit(),
            NumericMode::Decimal => c.is_ascii_digit() || *c == '.' || *c == ',',
        })
        .collect()
}
