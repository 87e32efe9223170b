//! Caret position for the single-line editor.

/// Zero-width insertion point, stored as a codepoint index into the buffer.
///
/// Invariant (maintained by `EditableState`): `0 <= index <= buffer.len()`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Caret {
    pub index: usize,
}

impl Caret {
    pub const fn new(index: usize) -> Self {
        Self { index }
    }

    pub const fn start() -> Self {
        Self { index: 0 }
    }

    /// Clamp a requested index into `[0, len]`.
    /// Returns the clamped index and whether the request was out of range.
    pub fn clamp_request(requested: usize, len: usize) -> (usize, bool) {
        if requested > len {
            (len, true)
        } else {
            (requested, false)
        }
    }

    /// Step one codepoint left; false at the start
    pub fn step_left(&mut self) -> bool {
        if self.index > 0 {
            self.index -= 1;
            true
        } else {
            false
        }
    }

    /// Step one codepoint right; false at `len`
    pub fn step_right(&mut self, len: usize) -> bool {
        if self.index < len {
            self.index += 1;
            true
        } else {
            false
        }
    }
}

impl From<usize> for Caret {
    fn from(index: usize) -> Self {
        Self::new(index)
    }
}
