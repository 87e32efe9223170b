//! Render queries
//!
//! Everything a renderer needs to draw the field, in host coordinates.
//! Nothing here mutates the field.

use std::ops::Range;

use crate::geometry::Rect;
use crate::metrics::{FontStyle, Metrics};

use super::{EditField, EditMode};

/// The glyph cell under the caret, used to erase a drawn caret
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CaretGlyph {
    /// Codepoint under the caret, or a space at the end of the buffer
    pub ch: char,
    pub rect: Rect,
}

impl EditField {
    /// Screen x of buffer index 0 before scrolling is applied
    fn text_origin_x(&self, metrics: &dyn Metrics) -> i32 {
        let full = self.state.full_width(metrics);
        self.state.scroll.origin_x(full, self.abs_edit_rect())
    }

    /// The edit rect does not fit vertically inside the bounds
    fn edit_rect_clipped(&self) -> bool {
        self.edit_rect.top() < 0 || self.edit_rect.bottom() > self.bounds.height
    }

    /// One-pixel caret bar; None when the edit rect falls outside the bounds
    pub fn caret_rect(&self, metrics: &dyn Metrics) -> Option<Rect> {
        if self.edit_rect_clipped() {
            return None;
        }
        let area = self.abs_edit_rect();
        let x = self.text_origin_x(metrics) + self.state.caret_offset(metrics);
        Some(Rect::new(x, area.top(), 1, area.height))
    }

    /// Highlight rectangle, clipped to the edit rect when it overflows.
    ///
    /// None without an active highlight.
    pub fn highlight_rect(&self, metrics: &dyn Metrics) -> Option<Rect> {
        if !self.state.has_highlight() || self.edit_rect_clipped() {
            return None;
        }
        let (rect, _) = self.highlight_geometry(metrics);
        Some(rect)
    }

    /// Text to draw inside [`highlight_rect`](Self::highlight_rect).
    ///
    /// The selected text when the highlight fits; otherwise the longest run
    /// from the highlight start that fits the clipped rectangle.
    pub fn highlight_display_text(&self, metrics: &dyn Metrics) -> Option<String> {
        if !self.state.has_highlight() {
            return None;
        }
        let (rect, overflows) = self.highlight_geometry(metrics);
        if !overflows {
            return Some(self.state.selected_text().to_string());
        }

        let start = self.state.highlight().start();
        let font = self.state.font;
        let mut width = 0;
        let mut end = start;
        let mut prev: Option<char> = None;
        while let Some(ch) = self.state.buffer.char_at(end) {
            let advance = glyph_advance(metrics, prev, ch, font);
            if width + advance > rect.width {
                break;
            }
            width += advance;
            prev = Some(ch);
            end += 1;
        }
        Some(self.state.buffer.slice(start..end))
    }

    /// Highlight rect plus whether it had to be clipped
    fn highlight_geometry(&self, metrics: &dyn Metrics) -> (Rect, bool) {
        let area = self.abs_edit_rect();
        let highlight = self.state.highlight();
        let right = self.text_origin_x(metrics)
            + self.state.prefix_width(highlight.end(), metrics)
            - self.state.scroll.offset;
        let left = right - highlight.width();

        if left < area.left() || right > area.right() {
            let rect = Rect::from_edges(left, area.top(), area.right(), area.bottom()).clip(&area);
            (rect, true)
        } else {
            (Rect::from_edges(left, area.top(), right, area.bottom()), false)
        }
    }

    /// Codepoints of `range`, clamped to the buffer
    pub fn visible_substring(&self, range: Range<usize>) -> String {
        self.state.buffer.slice(range)
    }

    /// Index range of codepoints at least partly inside the edit rect
    pub fn visible_range(&self, metrics: &dyn Metrics) -> Range<usize> {
        let offset = self.state.scroll.offset;
        let limit = offset + self.edit_rect.width;
        let font = self.state.font;

        let mut x = 0;
        let mut start = None;
        let mut end = 0;
        let mut prev: Option<char> = None;
        for (index, ch) in self.state.text().chars().enumerate() {
            let advance = glyph_advance(metrics, prev, ch, font);
            let right = x + advance;
            if right > offset && x < limit {
                start.get_or_insert(index);
                end = index + 1;
            }
            if x >= limit {
                break;
            }
            x = right;
            prev = Some(ch);
        }

        match start {
            Some(start) => start..end,
            None => self.state.caret()..self.state.caret(),
        }
    }

    /// Text currently shown in the edit rect
    pub fn visible_text(&self, metrics: &dyn Metrics) -> String {
        self.visible_substring(self.visible_range(metrics))
    }

    /// Whether the caret bar should be drawn right now.
    ///
    /// An active highlight replaces the caret.
    pub fn is_caret_visible(&self) -> bool {
        self.enabled
            && self.visible
            && self.mode == EditMode::Editing
            && !self.state.has_highlight()
            && self.blink.visible
    }

    /// Glyph cell at the caret with its x adjusted for kerning, width
    /// clipped to the edit rect. None when nothing of the cell is visible.
    pub fn caret_glyph(&self, metrics: &dyn Metrics) -> Option<CaretGlyph> {
        let caret_rect = self.caret_rect(metrics)?;
        let font = self.state.font;
        let caret = self.state.caret();

        let (ch, x) = match self.state.buffer.char_at(caret) {
            Some(ch) => {
                let kerning = caret
                    .checked_sub(1)
                    .and_then(|i| self.state.buffer.char_at(i))
                    .map_or(0, |prev| metrics.kerning(prev, ch, font));
                (ch, caret_rect.x + kerning)
            }
            None => (' ', caret_rect.x),
        };

        let width = metrics
            .glyph_width(ch, font)
            .min(self.edit_rect.width - self.state.caret_offset(metrics));
        if width <= 0 {
            return None;
        }

        Some(CaretGlyph {
            ch,
            rect: Rect::new(x, caret_rect.y, width, caret_rect.height),
        })
    }
}

fn glyph_advance(
    metrics: &dyn Metrics,
    prev: Option<char>,
    ch: char,
    font: FontStyle,
) -> i32 {
    let kerning = prev.map_or(0, |p| metrics.kerning(p, ch, font));
    kerning + metrics.glyph_width(ch, font)
}
