//! EditableState - buffer, caret, highlight and scroll offset for one field.
//!
//! This is the pure editing state machine: it knows nothing about keys,
//! clipboards or drawing. Every operation that can move the caret or the
//! highlight boundary re-runs the scroll adjustment before returning, so the
//! tracked boundary stays inside the edit rectangle.

use crate::metrics::{FontStyle, Metrics};

use super::buffer::EditBuffer;
use super::constraints::EditConstraints;
use super::cursor::Caret;
use super::messages::{EditAction, MoveTarget};
use super::scroll::{ScrollState, TextAlign};
use super::selection::Highlight;

#[derive(Debug, Clone)]
pub struct EditableState {
    /// The text buffer
    pub buffer: EditBuffer,
    caret: Caret,
    highlight: Highlight,
    /// Horizontal scroll offset and alignment
    pub scroll: ScrollState,
    /// Font used for every width measurement
    pub font: FontStyle,
    /// Set after the first out-of-range caret request has been logged
    caret_warned: bool,
}

impl EditableState {
    pub fn new(constraints: EditConstraints, align: TextAlign, edit_width: i32) -> Self {
        Self {
            buffer: EditBuffer::new(constraints),
            caret: Caret::start(),
            highlight: Highlight::collapsed(0),
            scroll: ScrollState::new(align, edit_width),
            font: FontStyle::default(),
            caret_warned: false,
        }
    }

    /// Set the font (builder pattern)
    pub fn with_font(mut self, font: FontStyle) -> Self {
        self.font = font;
        self
    }

    pub fn text(&self) -> &str {
        self.buffer.as_str()
    }

    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    pub fn caret(&self) -> usize {
        self.caret.index
    }

    pub fn highlight(&self) -> &Highlight {
        &self.highlight
    }

    pub fn has_highlight(&self) -> bool {
        self.highlight.is_active()
    }

    /// Selected text (empty string if no highlight)
    pub fn selected_text(&self) -> &str {
        self.highlight.shadow()
    }

    /// Text a copy operation should place on the clipboard.
    ///
    /// The highlight wins over the whole buffer; None when there is nothing
    /// to copy.
    pub fn copy_text(&self) -> Option<String> {
        if self.highlight.is_active() {
            Some(self.highlight.shadow().to_string())
        } else if !self.buffer.is_empty() {
            Some(self.buffer.as_str().to_string())
        } else {
            None
        }
    }

    /// Drop the highlight and re-anchor it on the caret
    pub fn clear_highlight(&mut self) {
        self.highlight.reset(self.caret.index);
    }

    /// Replace the whole buffer; the caret returns to 0 and the highlight is
    /// dropped. Returns how many codepoints were filtered out.
    pub fn set_content(&mut self, text: &str, metrics: &dyn Metrics) -> usize {
        let rejected = self.buffer.set_content(text);
        if rejected > 0 {
            tracing::debug!("Filtered {} codepoint(s) from new content", rejected);
        }
        self.caret = Caret::start();
        self.clear_highlight();
        self.scroll.offset = 0;
        self.adjust_offset(metrics);
        rejected
    }

    /// Move the caret to `index`, dropping any highlight.
    ///
    /// Indices past the end are clamped; the first such request is logged.
    pub fn set_caret(&mut self, index: usize, metrics: &dyn Metrics) {
        let (index, out_of_range) = Caret::clamp_request(index, self.buffer.len());
        if out_of_range && !self.caret_warned {
            tracing::warn!(
                "Caret index out of range, clamped to {} (len {})",
                index,
                self.buffer.len()
            );
            self.caret_warned = true;
        }
        self.caret = Caret::new(index);
        self.clear_highlight();
        self.adjust_offset(metrics);
    }

    /// Apply an action; returns true if buffer, caret or highlight changed
    pub fn apply(&mut self, action: &EditAction, metrics: &dyn Metrics) -> bool {
        match action {
            EditAction::Move(target) => self.move_caret(*target, metrics),
            EditAction::SelectLeft => self.extend_highlight_left(metrics),
            EditAction::ClearHighlight => {
                let was_active = self.highlight.is_active();
                self.clear_highlight();
                was_active
            }
            EditAction::InsertChar(ch) => self.insert_char(*ch, metrics),
            EditAction::Paste(text) => self.paste(text, metrics),
            EditAction::DeleteBackward => self.delete_backward(metrics),
            EditAction::DeleteForward => self.delete_forward(metrics),
            EditAction::DeleteHighlight => {
                let changed = self.delete_highlight();
                self.adjust_offset(metrics);
                changed
            }
        }
    }
}

// =============================================================================
// Movement Operations
// =============================================================================

impl EditableState {
    pub fn move_caret(&mut self, target: MoveTarget, metrics: &dyn Metrics) -> bool {
        let before = self.caret;
        let had_highlight = self.highlight.is_active();
        let len = self.buffer.len();

        match target {
            MoveTarget::Left => {
                self.caret.step_left();
            }
            MoveTarget::Right => {
                self.caret.step_right(len);
            }
            MoveTarget::Home => self.caret = Caret::start(),
            MoveTarget::End => self.caret = Caret::new(len),
        }

        self.clear_highlight();
        self.adjust_offset(metrics);
        self.caret != before || had_highlight
    }

    pub fn move_left(&mut self, metrics: &dyn Metrics) -> bool {
        self.move_caret(MoveTarget::Left, metrics)
    }

    pub fn move_right(&mut self, metrics: &dyn Metrics) -> bool {
        self.move_caret(MoveTarget::Right, metrics)
    }

    pub fn move_home(&mut self, metrics: &dyn Metrics) -> bool {
        self.move_caret(MoveTarget::Home, metrics)
    }

    pub fn move_end(&mut self, metrics: &dyn Metrics) -> bool {
        self.move_caret(MoveTarget::End, metrics)
    }

    /// Grow the highlight by the codepoint left of its start.
    ///
    /// A fresh highlight starts at the caret. The caret itself stays put.
    /// Returns false when the highlight already reaches index 0.
    pub fn extend_highlight_left(&mut self, metrics: &dyn Metrics) -> bool {
        if !self.highlight.is_active() {
            self.highlight.reset(self.caret.index);
        }
        if !self.highlight.can_grow_left() {
            return false;
        }
        let Some(covered) = self.buffer.char_at(self.highlight.start() - 1) else {
            return false;
        };
        let width = metrics.glyph_width(covered, self.font);
        self.highlight.grow_left(covered, width);
        self.adjust_offset(metrics);
        true
    }
}

// =============================================================================
// Editing Operations
// =============================================================================

impl EditableState {
    /// Remove the highlighted range and park the caret at its start.
    /// Does not adjust the scroll offset.
    fn delete_highlight(&mut self) -> bool {
        if !self.highlight.is_active() {
            return false;
        }
        let range = self.highlight.range();
        // High end first so lower indices stay valid
        for index in range.clone().rev() {
            self.buffer.delete(index);
        }
        self.caret = Caret::new(range.start);
        self.clear_highlight();
        true
    }

    /// Backspace: removes the highlight, or the codepoint before the caret
    pub fn delete_backward(&mut self, metrics: &dyn Metrics) -> bool {
        let changed = if self.highlight.is_active() {
            self.delete_highlight()
        } else if self.caret.index > 0 {
            self.buffer.delete(self.caret.index - 1);
            self.caret.step_left();
            true
        } else {
            false
        };
        self.clear_highlight();
        self.adjust_offset(metrics);
        changed
    }

    /// Delete: removes the highlight, or the codepoint at the caret
    pub fn delete_forward(&mut self, metrics: &dyn Metrics) -> bool {
        let changed = if self.highlight.is_active() {
            self.delete_highlight()
        } else if self.caret.index < self.buffer.len() {
            self.buffer.delete(self.caret.index);
            true
        } else {
            false
        };
        self.clear_highlight();
        self.adjust_offset(metrics);
        changed
    }

    /// Insert a codepoint at the caret, replacing the highlight if any.
    ///
    /// Returns false (state untouched) when the codepoint is rejected.
    pub fn insert_char(&mut self, ch: char, metrics: &dyn Metrics) -> bool {
        if !self.buffer.constraints().is_char_allowed(ch) {
            return false;
        }

        if self.highlight.is_active() {
            self.delete_highlight();
        } else if !self.buffer.accepts(ch) {
            return false;
        }

        let inserted = self.buffer.insert(ch, self.caret.index);
        if inserted {
            self.caret.step_right(self.buffer.len());
        }
        self.clear_highlight();
        self.adjust_offset(metrics);
        inserted
    }

    /// Insert trimmed `text` at the caret, one codepoint at a time.
    ///
    /// Rejected codepoints are skipped; the caret advances only past accepted
    /// ones. Returns true if anything was inserted or a highlight dropped.
    pub fn paste(&mut self, text: &str, metrics: &dyn Metrics) -> bool {
        let had_highlight = self.highlight.is_active();
        self.clear_highlight();

        let mut inserted = 0;
        for ch in text.trim().chars() {
            if self.buffer.insert(ch, self.caret.index) {
                self.caret.step_right(self.buffer.len());
                inserted += 1;
            }
        }

        self.clear_highlight();
        self.adjust_offset(metrics);
        inserted > 0 || had_highlight
    }

    /// Remove and return the highlighted text (None without a highlight)
    pub fn cut(&mut self, metrics: &dyn Metrics) -> Option<String> {
        if !self.highlight.is_active() {
            return None;
        }
        let text = self.highlight.shadow().to_string();
        self.delete_highlight();
        self.adjust_offset(metrics);
        Some(text)
    }

    /// Empty the buffer
    pub fn clear(&mut self, metrics: &dyn Metrics) {
        self.buffer.clear();
        self.caret = Caret::start();
        self.clear_highlight();
        self.scroll.offset = 0;
        self.adjust_offset(metrics);
    }
}

// =============================================================================
// Scroll / Pixel Queries
// =============================================================================

impl EditableState {
    /// Width of the whole buffer
    pub fn full_width(&self, metrics: &dyn Metrics) -> i32 {
        metrics.string_width(self.buffer.as_str(), self.font)
    }

    /// Width of everything before `index`
    pub fn prefix_width(&self, index: usize, metrics: &dyn Metrics) -> i32 {
        metrics.string_width(self.buffer.prefix(index), self.font)
    }

    /// Buffer index the scroll offset currently follows
    pub fn tracked_boundary(&self) -> usize {
        if self.highlight.is_active() {
            self.highlight.start()
        } else {
            self.caret.index
        }
    }

    /// Keep the tracked boundary inside the edit rectangle.
    /// Returns true if the scroll offset changed.
    pub fn adjust_offset(&mut self, metrics: &dyn Metrics) -> bool {
        let boundary = self.prefix_width(self.tracked_boundary(), metrics);
        let full = self.full_width(metrics);
        self.scroll.adjust(boundary, full, self.highlight.is_active())
    }

    /// Recompute scroll offset and draw alignment for a new edit width
    pub fn reflow(&mut self, edit_width: i32, metrics: &dyn Metrics) {
        let full = self.full_width(metrics);
        self.scroll.reflow(full, edit_width);
        self.adjust_offset(metrics);
    }

    /// Caret x relative to the visible start of the text
    pub fn caret_offset(&self, metrics: &dyn Metrics) -> i32 {
        self.prefix_width(self.caret.index, metrics) - self.scroll.offset
    }

    /// Highlight start x relative to the visible start of the text
    pub fn highlight_offset(&self, metrics: &dyn Metrics) -> i32 {
        self.prefix_width(self.highlight.start(), metrics) - self.scroll.offset
    }
}
