//! Highlight (selection) tracking for the single-line editor.
//!
//! A highlight only ever grows leftward from the position where it began:
//! each selecting move covers one more codepoint before `start`. The covered
//! codepoints are mirrored into a shadow string and their advance widths are
//! accumulated, so renderers never have to re-measure the selection.

use std::ops::Range;

/// Selection range with cached shadow text and pixel width.
///
/// Inactive highlights have `count == 0`, an empty shadow, and `start`
/// parked on the caret.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Highlight {
    active: bool,
    start: usize,
    count: usize,
    width: i32,
    shadow: String,
}

impl Highlight {
    /// Inactive highlight anchored at `at`
    pub fn collapsed(at: usize) -> Self {
        Self {
            active: false,
            start: at,
            count: 0,
            width: 0,
            shadow: String::new(),
        }
    }

    /// Deactivate and re-anchor at `at`
    pub fn reset(&mut self, at: usize) {
        self.active = false;
        self.start = at;
        self.count = 0;
        self.width = 0;
        self.shadow.clear();
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// First selected index (or the anchor when inactive)
    pub fn start(&self) -> usize {
        self.start
    }

    /// Number of selected codepoints
    pub fn count(&self) -> usize {
        self.count
    }

    /// One past the last selected index
    pub fn end(&self) -> usize {
        self.start + self.count
    }

    pub fn range(&self) -> Range<usize> {
        self.start..self.end()
    }

    /// Accumulated advance width of the selected codepoints
    pub fn width(&self) -> i32 {
        self.width
    }

    /// Selected codepoints, in buffer order
    pub fn shadow(&self) -> &str {
        &self.shadow
    }

    pub fn can_grow_left(&self) -> bool {
        self.start > 0
    }

    /// Cover the codepoint just before `start`.
    ///
    /// `covered` must be the buffer codepoint at `start - 1`.
    pub fn grow_left(&mut self, covered: char, glyph_width: i32) -> bool {
        if !self.can_grow_left() {
            return false;
        }
        self.active = true;
        self.start -= 1;
        self.count += 1;
        self.width += glyph_width;
        self.shadow.insert(0, covered);
        true
    }

    /// Check if an index is within the selection
    pub fn contains(&self, index: usize) -> bool {
        self.active && index >= self.start && index < self.end()
    }
}
