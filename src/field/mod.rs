//! EditField - a single-line edit widget
//!
//! The field owns its editing state, caret blink, keymap and edit session.
//! Everything that belongs to the host (font metrics, clipboard, the command
//! listener, the current time) is passed in per call through [`EditEnv`], so
//! the field can be driven without a windowing backend.

mod capability;
mod input;
mod render;

pub use capability::{
    AbortPolicy, CommandListener, Drawable, EditMode, Focusable, NullListener,
};
pub use render::CaretGlyph;

use std::time::{Duration, Instant};

use crate::clipboard::Clipboard;
use crate::config::FieldConfig;
use crate::editable::{
    CaretBlink, EditConstraints, EditableState, Highlight, TextAlign, DEFAULT_BLINK_INTERVAL,
};
use crate::geometry::Rect;
use crate::keymap::{default_bindings, keymap_for_profile, Keymap, PlatformProfile};
use crate::metrics::{FontStyle, Metrics};

/// Host services for one call into the field
pub struct EditEnv<'a> {
    pub metrics: &'a dyn Metrics,
    pub clipboard: &'a mut dyn Clipboard,
    pub listener: &'a mut dyn CommandListener,
    pub now: Instant,
}

impl<'a> EditEnv<'a> {
    pub fn new(
        metrics: &'a dyn Metrics,
        clipboard: &'a mut dyn Clipboard,
        listener: &'a mut dyn CommandListener,
        now: Instant,
    ) -> Self {
        Self {
            metrics,
            clipboard,
            listener,
            now,
        }
    }
}

#[derive(Debug, Clone)]
pub struct EditField {
    state: EditableState,
    blink: CaretBlink,
    keymap: Keymap,
    /// Id sent with every change notification
    command_id: u32,
    mode: EditMode,
    /// Content captured by `start_edit_mode` or the last commit
    committed: String,
    abort_policy: AbortPolicy,
    /// Widget bounds in host coordinates
    bounds: Rect,
    /// Text area relative to `bounds`
    edit_rect: Rect,
    rtl: bool,
    enabled: bool,
    visible: bool,
    focused: bool,
    dirty: bool,
}

impl EditField {
    /// Field with the standard keymap and an edit rect covering `bounds`
    pub fn new(command_id: u32, bounds: Rect) -> Self {
        let edit_rect = Rect::new(0, 0, bounds.width, bounds.height);
        Self {
            state: EditableState::new(
                EditConstraints::printable(),
                TextAlign::default(),
                edit_rect.width,
            ),
            blink: CaretBlink::new(DEFAULT_BLINK_INTERVAL),
            keymap: Keymap::with_bindings(default_bindings(PlatformProfile::Standard)),
            command_id,
            mode: EditMode::Idle,
            committed: String::new(),
            abort_policy: AbortPolicy::default(),
            bounds,
            edit_rect,
            rtl: false,
            enabled: true,
            visible: true,
            focused: false,
            dirty: true,
        }
    }

    /// Field configured from `config`, with the keymap for its platform
    /// profile (including the user's keymap overrides)
    pub fn from_config(command_id: u32, bounds: Rect, config: &FieldConfig) -> Self {
        Self::new(command_id, bounds)
            .with_keymap(keymap_for_profile(config.effective_platform()))
            .with_constraints(config.constraints())
            .with_rtl(config.rtl)
            .with_align(config.effective_align())
            .with_font(config.font)
            .with_abort_policy(config.abort_policy)
            .with_blink_interval(config.blink_interval())
    }

    pub fn with_keymap(mut self, keymap: Keymap) -> Self {
        self.keymap = keymap;
        self
    }

    /// Replace the validity filter; the buffer is emptied
    pub fn with_constraints(mut self, constraints: EditConstraints) -> Self {
        let font = self.state.font;
        let scroll = self.state.scroll.clone();
        self.state = EditableState::new(constraints, scroll.align, scroll.edit_width).with_font(font);
        self
    }

    pub fn with_align(mut self, align: TextAlign) -> Self {
        self.state.scroll.align = align;
        self.state.scroll.draw_align = align;
        self
    }

    /// Right-to-left layout; also switches the alignment to match
    pub fn with_rtl(mut self, rtl: bool) -> Self {
        self.rtl = rtl;
        self.with_align(TextAlign::for_direction(rtl))
    }

    pub fn with_font(mut self, font: FontStyle) -> Self {
        self.state.font = font;
        self
    }

    pub fn with_abort_policy(mut self, policy: AbortPolicy) -> Self {
        self.abort_policy = policy;
        self
    }

    pub fn with_blink_interval(mut self, interval: Duration) -> Self {
        self.blink.interval = interval;
        self
    }

    /// Text area inside the bounds (relative coordinates)
    pub fn with_edit_rect(mut self, edit_rect: Rect) -> Self {
        self.edit_rect = edit_rect;
        self.state.scroll.edit_width = edit_rect.width;
        self
    }
}

// =============================================================================
// Accessors
// =============================================================================

impl EditField {
    pub fn state(&self) -> &EditableState {
        &self.state
    }

    pub fn text(&self) -> &str {
        self.state.text()
    }

    pub fn caret(&self) -> usize {
        self.state.caret()
    }

    pub fn highlight(&self) -> &Highlight {
        self.state.highlight()
    }

    pub fn has_highlight(&self) -> bool {
        self.state.has_highlight()
    }

    pub fn scroll_offset(&self) -> i32 {
        self.state.scroll.offset
    }

    pub fn mode(&self) -> EditMode {
        self.mode
    }

    pub fn command_id(&self) -> u32 {
        self.command_id
    }

    pub fn keymap(&self) -> &Keymap {
        &self.keymap
    }

    pub fn blink(&self) -> &CaretBlink {
        &self.blink
    }

    pub fn abort_policy(&self) -> AbortPolicy {
        self.abort_policy
    }

    /// Value restored by an abort under [`AbortPolicy::Revert`]
    pub fn committed_text(&self) -> &str {
        &self.committed
    }

    pub fn is_rtl(&self) -> bool {
        self.rtl
    }

    /// Text area relative to the bounds
    pub fn edit_rect(&self) -> Rect {
        self.edit_rect
    }

    /// Text area in host coordinates
    pub fn abs_edit_rect(&self) -> Rect {
        self.edit_rect.translate(self.bounds.x, self.bounds.y)
    }
}

// =============================================================================
// Content and Layout
// =============================================================================

impl EditField {
    /// Replace the content; caret goes to 0 and the highlight is dropped.
    ///
    /// Returns the number of codepoints the validity filter rejected. No
    /// change notification is sent.
    pub fn set_text(&mut self, text: &str, metrics: &dyn Metrics) -> usize {
        let rejected = self.state.set_content(text, metrics);
        self.dirty = true;
        rejected
    }

    /// Move the caret; out-of-range indices are clamped
    pub fn set_caret(&mut self, index: usize, metrics: &dyn Metrics) {
        self.state.set_caret(index, metrics);
        self.dirty = true;
    }

    pub fn clear(&mut self, metrics: &dyn Metrics) {
        self.state.clear(metrics);
        self.dirty = true;
    }

    /// Move/resize the widget and recompute scrolling
    pub fn set_layout(&mut self, bounds: Rect, edit_rect: Rect, metrics: &dyn Metrics) {
        self.bounds = bounds;
        self.edit_rect = edit_rect;
        self.reflow_layout(metrics);
    }

    /// Recompute scroll offset and draw alignment for the current edit rect
    pub fn reflow_layout(&mut self, metrics: &dyn Metrics) {
        self.state.reflow(self.edit_rect.width, metrics);
        self.dirty = true;
    }
}

// =============================================================================
// Edit Session
// =============================================================================

impl EditField {
    /// Begin an edit session, remembering the current content for abort
    pub fn start_edit_mode(&mut self, now: Instant) {
        self.committed = self.state.text().to_string();
        self.mode = EditMode::Editing;
        self.blink.force_visible(now);
        self.dirty = true;
        tracing::debug!("Edit session started ({} chars)", self.state.len());
    }

    /// Accept the buffer as the new committed value
    pub fn end_edit_mode(&mut self) {
        self.state.clear_highlight();
        self.committed = self.state.text().to_string();
        self.mode = EditMode::Committed;
        self.dirty = true;
        tracing::debug!("Edit session committed ({} chars)", self.state.len());
    }

    /// Leave the session without committing.
    ///
    /// Under [`AbortPolicy::Revert`] the committed content is restored.
    /// Returns true if the buffer content changed.
    pub fn abort_edit_mode(&mut self, metrics: &dyn Metrics) -> bool {
        self.state.clear_highlight();
        let reverted = self.abort_policy == AbortPolicy::Revert && self.state.text() != self.committed;
        if reverted {
            let committed = std::mem::take(&mut self.committed);
            self.state.set_content(&committed, metrics);
            self.committed = committed;
        }
        self.mode = EditMode::Aborted;
        self.dirty = true;
        tracing::debug!("Edit session aborted (reverted: {})", reverted);
        reverted
    }
}

// =============================================================================
// Blink
// =============================================================================

impl EditField {
    /// Advance the caret blink; returns true if a redraw is needed
    pub fn tick(&mut self, now: Instant) -> bool {
        if !self.enabled || !self.visible || self.mode != EditMode::Editing {
            return false;
        }
        let toggled = self.blink.tick(now, self.state.has_highlight());
        if toggled {
            self.dirty = true;
        }
        toggled
    }
}

// =============================================================================
// Capabilities
// =============================================================================

impl Drawable for EditField {
    fn bounds(&self) -> Rect {
        self.bounds
    }

    fn is_visible(&self) -> bool {
        self.visible
    }

    fn set_visible(&mut self, visible: bool) {
        if self.visible != visible {
            self.visible = visible;
            self.dirty = true;
        }
    }

    fn is_dirty(&self) -> bool {
        self.dirty
    }

    fn take_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }
}

impl Focusable for EditField {
    fn is_enabled(&self) -> bool {
        self.enabled
    }

    fn set_enabled(&mut self, enabled: bool) {
        if self.enabled != enabled {
            self.enabled = enabled;
            self.dirty = true;
        }
    }

    fn has_focus(&self) -> bool {
        self.focused
    }

    fn focus_gained(&mut self, now: Instant) {
        self.focused = true;
        self.blink.force_visible(now);
        self.dirty = true;
    }

    fn focus_lost(&mut self) {
        self.focused = false;
        self.blink.hide();
        self.dirty = true;
    }
}
