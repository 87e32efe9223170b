//! Horizontal scroll offset for a single-line edit rectangle.
//!
//! All values are pixels. The tracked boundary (caret, or the leading edge of
//! an active highlight) is measured from the start of the buffer; the scroll
//! offset is subtracted from it to get the on-screen position inside the
//! edit rectangle.

use serde::{Deserialize, Serialize};

use crate::geometry::Rect;

/// Anchor edge for drawing text inside the edit rectangle
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextAlign {
    #[default]
    Left,
    Right,
}

impl TextAlign {
    /// Default alignment for a layout direction
    pub fn for_direction(rtl: bool) -> Self {
        if rtl {
            TextAlign::Right
        } else {
            TextAlign::Left
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScrollState {
    /// Pixels of text hidden off the left edge
    pub offset: i32,
    /// Configured alignment
    pub align: TextAlign,
    /// Alignment currently used for drawing (falls back to `Left` on overflow)
    pub draw_align: TextAlign,
    /// Width of the edit rectangle
    pub edit_width: i32,
}

impl ScrollState {
    pub fn new(align: TextAlign, edit_width: i32) -> Self {
        Self {
            offset: 0,
            align,
            draw_align: align,
            edit_width,
        }
    }

    /// Smallest offset that shows the end of a `full_width` string with room
    /// for a caret after its last glyph
    pub fn fill_offset(&self, full_width: i32) -> i32 {
        (full_width - self.edit_width + 1).max(0)
    }

    /// Bring `boundary` (pixels from buffer start) into `[0, edit_width)`
    /// and refresh `draw_align`.
    ///
    /// While a highlight is active only the left/right scrolls apply; the
    /// snap back to fill the rectangle waits until the highlight is gone.
    /// Returns true when the offset changed.
    pub fn adjust(&mut self, boundary: i32, full_width: i32, highlight_active: bool) -> bool {
        if self.edit_width <= 0 {
            return false;
        }

        let before = self.offset;
        let relative = boundary - self.offset;

        if relative < 0 {
            // Scroll left by the deficit
            self.offset += relative;
        } else if relative >= self.edit_width {
            // Scroll right so the boundary lands on the last visible column
            self.offset += relative - self.edit_width + 1;
        } else if !highlight_active
            && self.offset > 0
            && full_width - self.offset < self.edit_width
        {
            self.offset = self.fill_offset(full_width);
        }

        self.draw_align = self.effective_align(full_width);
        self.offset != before
    }

    /// Recompute after a geometry change
    pub fn reflow(&mut self, full_width: i32, edit_width: i32) {
        self.edit_width = edit_width;
        if full_width - edit_width < 0 {
            self.offset = 0;
            self.draw_align = self.align;
        } else {
            self.offset = self.fill_offset(full_width);
            self.draw_align = TextAlign::Left;
        }
    }

    /// Width of the text that remains visible after scrolling
    pub fn visible_width(&self, full_width: i32) -> i32 {
        full_width - self.offset
    }

    /// Screen x where buffer position 0 would be drawn (before subtracting the offset).
    ///
    /// Right-aligned text hugs the right edge until it overflows, then behaves
    /// like left-aligned text.
    pub fn origin_x(&self, full_width: i32, edit_rect: Rect) -> i32 {
        match self.align {
            TextAlign::Left => edit_rect.left(),
            TextAlign::Right => {
                let visible = self.visible_width(full_width).min(edit_rect.width);
                edit_rect.right() - visible
            }
        }
    }

    /// Alignment to draw with for a given string width
    pub fn effective_align(&self, full_width: i32) -> TextAlign {
        if self.visible_width(full_width) > self.edit_width {
            TextAlign::Left
        } else {
            self.align
        }
    }
}
