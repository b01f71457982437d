//! Digit scaling and grouping

/// Split a digit string into integer and decimal parts after dividing it by
/// `10^decimals`.
///
/// The division is done on the digits themselves, so inputs longer than an
/// `f64` can represent keep every digit. Leading zeros of the integer part are
/// dropped; at least one integer digit is always returned.
pub(crate) fn split_scaled(digits: &str, decimals: usize) -> (String, String) {
    let trimmed = digits.trim_start_matches('0');
    let mut padded = String::with_capacity(decimals + 1 + trimmed.len());
    for _ in trimmed.len()..=decimals {
        padded.push('0');
    }
    padded.push_str(trimmed);

    let split_at = padded.len() - decimals;
    let (integer, decimal) = padded.split_at(split_at);
    (integer.to_string(), decimal.to_string())
}

/// Insert `separator` between every group of three digits, counting from the
/// right.
pub(crate) fn add_thousands_separator(integer: &str, separator: &str) -> String {
    let len = integer.chars().count();
    let mut result = String::with_capacity(integer.len() + (len / 3) * separator.len());
    for (i, c) in integer.chars().enumerate() {
        result.push(c);
        let remaining = len - i - 1;
        if remaining > 0 && remaining % 3 == 0 {
            result.push_str(separator);
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn split(digits: &str, decimals: usize) -> (String, String) {
        split_scaled(digits, decimals)
    }

    fn s(text: &str) -> String {
        text.to_string()
    }

    #[test]
    fn test_split_scaled() {
        assert_eq!(split("1234567", 2), (s("12345"), s("67")));
        assert_eq!(split("1", 2), (s("0"), s("01")));
        assert_eq!(split("0", 2), (s("0"), s("00")));
        assert_eq!(split("000123", 2), (s("1"), s("23")));
        assert_eq!(split("42", 0), (s("42"), s("")));
        assert_eq!(split("0", 0), (s("0"), s("")));
    }

    #[test]
    fn test_split_scaled_long_input() {
        let (integer, decimal) = split("123456789012345678901234567890", 20);
        assert_eq!(integer, "1234567890");
        assert_eq!(decimal, "12345678901234567890");
    }

    #[test]
    fn test_add_thousands_separator() {
        assert_eq!(add_thousands_separator("0", "."), "0");
        assert_eq!(add_thousands_separator("123", "."), "123");
        assert_eq!(add_thousands_separator("1234", "."), "1.234");
        assert_eq!(add_thousands_separator("1234567", ","), "1,234,567");
        assert_eq!(add_thousands_separator("123456", " "), "123 456");
        assert_eq!(add_thousands_separator("1234567", ""), "1234567");
    }
}
