//! Pure text rules applied by the transform directives.

use std::fmt;

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

use crate::host::{Event, Key};
use crate::normalize::strip_non_numeric;
use crate::options::NumericMode;

/// A pure `&str -> String` rewrite applied on every edit.
///
/// Every built-in rule is idempotent: applying it to its own output changes
/// nothing, which is what stops the synthetic re-notification from looping.
#[derive(Clone, Copy)]
pub enum TransformRule {
    Uppercase,
    /// Lowercase everything, then uppercase the first letter of each
    /// space-separated word.
    Capitalize,
    /// Remove diacritics (`"ação"` becomes `"acao"`).
    Unaccent,
    UnaccentUppercase,
    Numeric(NumericMode),
    /// A caller-supplied rule. It should be idempotent.
    Custom(fn(&str) -> String),
}

impl fmt::Debug for TransformRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransformRule::Uppercase => f.write_str("Uppercase"),
            TransformRule::Capitalize => f.write_str("Capitalize"),
            TransformRule::Unaccent => f.write_str("Unaccent"),
            TransformRule::UnaccentUppercase => f.write_str("UnaccentUppercase"),
            TransformRule::Numeric(mode) => f.debug_tuple("Numeric").field(mode).finish(),
            TransformRule::Custom(_) => f.write_str("Custom"),
        }
    }
}

impl TransformRule {
    pub fn apply(&self, value: &str) -> String {
        match self {
            TransformRule::Uppercase => value.to_uppercase(),
            TransformRule::Capitalize => capitalize(value),
            TransformRule::Unaccent => unaccent(value),
            TransformRule::UnaccentUppercase => unaccent(value).to_uppercase(),
            TransformRule::Numeric(mode) => strip_non_numeric(value, *mode),
            TransformRule::Custom(rule) => rule(value),
        }
    }

    /// Whether this rule also inspects `keydown` events.
    pub fn filters_keys(&self) -> bool {
        matches!(self, TransformRule::Numeric(NumericMode::Integer))
    }

    /// Returns true if the key in `event` should never reach the field.
    ///
    /// Integer-only fields reject decimal keys up front; stripping them after
    /// the fact would make the character flash in the control.
    pub fn rejects_key(&self, event: &Event) -> bool {
        if !self.filters_keys() || event.ctrl || event.meta {
            return false;
        }
        matches!(
            event.key,
            Some(Key::Char(',')) | Some(Key::Char('.')) | Some(Key::KeypadDecimal)
        )
    }
}

/// Strip diacritics by decomposing, dropping combining marks and standalone
/// accent characters, and recomposing what is left.
pub fn unaccent(value: &str) -> String {
    value
        .nfd()
        .filter(|c| !is_combining_mark(*c) && !is_spacing_diacritic(*c))
        .nfc()
        .collect()
}

/// Accents written on their own, such as `´` or `^`, and the spacing
/// modifier letters.
fn is_spacing_diacritic(c: char) -> bool {
    matches!(
        c,
        '^' | '`' | '\u{a8}' | '\u{af}' | '\u{b4}' | '\u{b7}' | '\u{b8}' | '\u{2b0}'..='\u{2ff}'
    )
}

/// Capitalize each space-separated word and lowercase the rest.
pub fn capitalize(value: &str) -> String {
    let lower = value.to_lowercase();
    let mut result = String::with_capacity(lower.len());
    for (i, word) in lower.split(' ').enumerate() {
        if i > 0 {
            result.push(' ');
        }
        let mut chars = word.chars();
        if let Some(first) = chars.next() {
            let mut upper = first.to_uppercase();
            // Letters like 'ß' uppercase to two characters; keep them as they
            // are so the rule stays idempotent.
            match (upper.next(), upper.next()) {
                (Some(single), None) => result.push(single),
                _ => result.push(first),
            }
            result.push_str(chars.as_str());
        }
    }
    result
}
