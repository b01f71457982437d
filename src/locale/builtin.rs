//! Built-in locale data.

/// Separators and currency symbol for a locale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Locale {
    pub decimal_separator: char,
    pub thousands_separator: char,
    pub currency_symbol: &'static str,
}

impl Default for Locale {
    fn default() -> Self {
        Self::en_us()
    }
}

impl Locale {
    /// US English locale.
    pub fn en_us() -> Self {
        Locale {
            decimal_separator: '.',
            thousands_separator: ',',
            currency_symbol: "$",
        }
    }

    /// Brazilian Portuguese locale (Brazilian real).
    pub fn pt_br() -> Self {
        Locale {
            decimal_separator: ',',
            thousands_separator: '.',
            currency_symbol: "R$",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::FormatConfig;

    #[test]
    fn test_pt_br_config() {
        let cfg = FormatConfig::for_locale(&Locale::pt_br());
        assert_eq!(cfg.prefix, "R$ ");
        assert_eq!(cfg.decimal_separator, ",");
        assert_eq!(cfg.thousands_separator, ".");
    }
}
