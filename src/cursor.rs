//! Caret translation across a reformat.
//!
//! Grouping separators appear and disappear on the left side of the number,
//! while users mostly type near the decimals. Tracking the caret as a distance
//! from the end of the text keeps it on the same digit when the left side of
//! the string changes length.

use crate::options::FormatConfig;

/// Caret position counted in characters from the end of the text.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct CursorState {
    pub position_from_end: usize,
}

impl CursorState {
    /// Capture the caret at character index `caret` in `text`.
    pub fn from_caret(text: &str, caret: usize) -> Self {
        let len = text.chars().count();
        CursorState {
            position_from_end: len.saturating_sub(caret),
        }
    }

    /// Caret index in `formatted` that keeps the same distance from the end,
    /// clamped so it never lands inside the suffix or before the first
    /// character after the prefix.
    pub fn reposition(&self, formatted: &str, config: &FormatConfig) -> usize {
        let len = formatted.chars().count();
        let from_end = self.position_from_end.max(config.suffix_len());
        let caret = len.saturating_sub(from_end);
        caret.max(config.prefix_len() + 1).min(len)
    }
}

/// Where the caret goes when a masked control gains focus: right before the
/// suffix.
pub fn focus_caret(formatted: &str, config: &FormatConfig) -> usize {
    formatted
        .chars()
        .count()
        .saturating_sub(config.suffix_len())
}
