//! Text selection representation.

/// A selection inside a text control, as character indices.
///
/// The range is always normalized such that `start <= end`. A collapsed
/// selection is a plain caret.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct SelectionRange {
    /// First selected character (inclusive).
    pub start: usize,
    /// End of the selection (exclusive).
    pub end: usize,
}

impl SelectionRange {
    /// Create a new selection range, normalized so `start <= end`.
    #[inline]
    pub fn new(a: usize, b: usize) -> Self {
        Self {
            start: a.min(b),
            end: a.max(b),
        }
    }

    /// A collapsed selection at `position`.
    #[inline]
    pub fn caret(position: usize) -> Self {
        Self::new(position, position)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Shrink the range so it fits in a text of `len` characters.
    #[inline]
    pub fn clamp(self, len: usize) -> Self {
        Self::new(self.start.min(len), self.end.min(len))
    }
}
