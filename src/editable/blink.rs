//! Caret blink timing.
//!
//! Time is always passed in by the caller so the scheduler stays
//! deterministic under test.

use std::time::{Duration, Instant};

/// Default blink half-period
pub const DEFAULT_BLINK_INTERVAL: Duration = Duration::from_millis(300);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaretBlink {
    /// Whether the caret is currently in its "on" phase
    pub visible: bool,
    /// Deadline for the next toggle; `None` until first forced visible
    pub next_toggle: Option<Instant>,
    pub interval: Duration,
}

impl Default for CaretBlink {
    fn default() -> Self {
        Self::new(DEFAULT_BLINK_INTERVAL)
    }
}

impl CaretBlink {
    pub fn new(interval: Duration) -> Self {
        Self {
            visible: false,
            next_toggle: None,
            interval,
        }
    }

    /// Reset blink timer (call after user input)
    pub fn force_visible(&mut self, now: Instant) {
        self.visible = true;
        self.next_toggle = Some(now + self.interval);
    }

    /// Advance the blink state.
    ///
    /// While a highlight is shown the deadline keeps sliding forward so the
    /// caret does not flicker the moment the highlight ends.
    /// Returns true if visibility changed (needs redraw).
    pub fn tick(&mut self, now: Instant, highlight_active: bool) -> bool {
        if highlight_active {
            self.next_toggle = Some(now + self.interval);
            return false;
        }

        match self.next_toggle {
            Some(deadline) if now < deadline => false,
            _ => {
                self.visible = !self.visible;
                self.next_toggle = Some(now + self.interval);
                true
            }
        }
    }

    /// Stop blinking and hide the caret (focus lost)
    pub fn hide(&mut self) {
        self.visible = false;
        self.next_toggle = None;
    }
}
