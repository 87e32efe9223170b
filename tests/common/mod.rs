//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use std::time::{Duration, Instant};

use editfield::clipboard::MemoryClipboard;
use editfield::events::InputQueue;
use editfield::field::{CommandListener, EditEnv, EditField};
use editfield::geometry::Rect;
use editfield::keymap::{KeyCode, KeyEvent, Modifiers};
use editfield::metrics::MonospaceMetrics;

/// Advance width of every glyph in tests
pub const GLYPH: i32 = 10;

/// Command id every test field is built with
pub const CMD: u32 = 0xED17;

/// Listener that records every notification
#[derive(Debug, Default)]
pub struct Recorder {
    pub calls: Vec<(u32, u32)>,
}

impl CommandListener for Recorder {
    fn on_command(&mut self, command_id: u32, data: u32) {
        self.calls.push((command_id, data));
    }
}

/// A field plus everything the host normally provides
pub struct TestField {
    pub field: EditField,
    pub metrics: MonospaceMetrics,
    pub clipboard: MemoryClipboard,
    pub listener: Recorder,
    pub now: Instant,
}

impl TestField {
    /// Field 200px wide with `text` and the caret at the end
    pub fn new(text: &str) -> Self {
        Self::with_width(text, 200)
    }

    /// Field `width` px wide with `text` and the caret at the end
    pub fn with_width(text: &str, width: i32) -> Self {
        Self::from_field(EditField::new(CMD, Rect::new(0, 0, width, 20)), text)
    }

    /// Wrap a preconfigured field, set `text` and put the caret at the end
    pub fn from_field(mut field: EditField, text: &str) -> Self {
        let metrics = MonospaceMetrics::new(GLYPH);
        field.set_text(text, &metrics);
        let end = field.state().len();
        field.set_caret(end, &metrics);
        Self {
            field,
            metrics,
            clipboard: MemoryClipboard::new(),
            listener: Recorder::default(),
            now: Instant::now(),
        }
    }

    pub fn press(&mut self, event: KeyEvent) -> bool {
        let mut env = EditEnv::new(&self.metrics, &mut self.clipboard, &mut self.listener, self.now);
        self.field.handle_key(event, &mut env)
    }

    /// Drain `queue` through the field
    pub fn pump(&mut self, queue: &mut InputQueue) -> usize {
        let mut env = EditEnv::new(&self.metrics, &mut self.clipboard, &mut self.listener, self.now);
        self.field.pump(queue, &mut env)
    }

    pub fn key(&mut self, code: KeyCode) -> bool {
        self.press(KeyEvent::key(code))
    }

    pub fn key_with(&mut self, code: KeyCode, mods: Modifiers) -> bool {
        self.press(KeyEvent::key_with_mods(code, mods))
    }

    pub fn ctrl(&mut self, ch: char) -> bool {
        self.press(KeyEvent::char_with_mods(ch, Modifiers::CTRL))
    }

    pub fn shift_left(&mut self) -> bool {
        self.key_with(KeyCode::Left, Modifiers::SHIFT)
    }

    /// Type each character of `text`
    pub fn type_str(&mut self, text: &str) {
        for ch in text.chars() {
            self.press(KeyEvent::char(ch));
        }
    }

    pub fn set_caret(&mut self, index: usize) {
        self.field.set_caret(index, &self.metrics);
    }

    pub fn text(&self) -> &str {
        self.field.text()
    }

    pub fn caret(&self) -> usize {
        self.field.caret()
    }

    /// Number of change notifications received so far
    pub fn notifications(&self) -> usize {
        self.listener.calls.len()
    }

    pub fn advance(&mut self, ms: u64) {
        self.now += Duration::from_millis(ms);
    }

    /// Caret and highlight bounds hold for the current state
    pub fn assert_invariants(&self) {
        let state = self.field.state();
        assert!(state.caret() <= state.len(), "caret past end");
        let highlight = state.highlight();
        if highlight.is_active() {
            assert!(highlight.end() <= state.len(), "highlight past end");
            assert_eq!(highlight.shadow().chars().count(), highlight.count());
        }
    }
}
