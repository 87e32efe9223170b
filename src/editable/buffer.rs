//! Edit buffer: the ordered codepoint sequence behind a single-line field.
//!
//! Positions are codepoint indices, not byte offsets. The buffer enforces
//! its [`EditConstraints`] on every insertion, so it never holds a codepoint
//! the filter would reject.

use std::ops::Range;

use super::constraints::EditConstraints;

/// Single-line text buffer backed by `String`, indexed by codepoint.
#[derive(Debug, Clone, Default)]
pub struct EditBuffer {
    text: String,
    len: usize,
    constraints: EditConstraints,
}

impl EditBuffer {
    pub fn new(constraints: EditConstraints) -> Self {
        Self {
            text: String::new(),
            len: 0,
            constraints,
        }
    }

    /// Create a buffer holding the accepted codepoints of `s`
    pub fn from_text(s: &str, constraints: EditConstraints) -> Self {
        let mut buf = Self::new(constraints);
        buf.set_content(s);
        buf
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn constraints(&self) -> &EditConstraints {
        &self.constraints
    }

    /// Length in codepoints
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Codepoint at `index`, None if out of bounds
    pub fn char_at(&self, index: usize) -> Option<char> {
        self.text.chars().nth(index)
    }

    /// Codepoints in `range` (clamped to the buffer)
    pub fn slice(&self, range: Range<usize>) -> String {
        let start = range.start.min(self.len);
        let end = range.end.min(self.len).max(start);
        self.text.chars().skip(start).take(end - start).collect()
    }

    /// Everything before `index`
    pub fn prefix(&self, index: usize) -> &str {
        &self.text[..self.char_to_byte(index)]
    }

    /// Whether `ch` would be accepted at the current length
    pub fn accepts(&self, ch: char) -> bool {
        self.constraints.is_char_allowed(ch)
            && !self.constraints.would_exceed_max_length(self.len, 1)
    }

    /// Insert `ch` at codepoint `position`.
    ///
    /// Returns false and leaves the buffer untouched when the codepoint is
    /// rejected by the filter or the length cap.
    pub fn insert(&mut self, ch: char, position: usize) -> bool {
        if !self.accepts(ch) {
            return false;
        }
        let byte_offset = self.char_to_byte(position.min(self.len));
        self.text.insert(byte_offset, ch);
        self.len += 1;
        true
    }

    /// Remove the codepoint at `position`, returning it.
    ///
    /// Callers validate `position` first; out-of-range requests are ignored.
    pub fn delete(&mut self, position: usize) -> Option<char> {
        if position >= self.len {
            return None;
        }
        let byte_offset = self.char_to_byte(position);
        let ch = self.text.remove(byte_offset);
        self.len -= 1;
        Some(ch)
    }

    /// Replace everything; returns how many codepoints were filtered out
    pub fn set_content(&mut self, text: &str) -> usize {
        self.text.clear();
        self.len = 0;
        let mut rejected = 0;
        for ch in text.chars() {
            if !self.insert(ch, self.len) {
                rejected += 1;
            }
        }
        rejected
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.len = 0;
    }

    /// Convert codepoint index to byte offset
    fn char_to_byte(&self, char_offset: usize) -> usize {
        self.text
            .char_indices()
            .nth(char_offset)
            .map(|(i, _)| i)
            .unwrap_or(self.text.len())
    }
}
