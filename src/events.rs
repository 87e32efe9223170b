//! Input event queue
//!
//! Hosts push platform key events in; fields read them out in delivery
//! order. The queue is owned by whoever runs the event loop and passed to
//! [`EditField::pump`](crate::field::EditField::pump), so there is no global
//! input state.

use std::collections::{HashSet, VecDeque};

use crate::keymap::{KeyCode, KeyEvent, Modifiers};

/// Pending key-downs plus the set of keys currently held
#[derive(Debug, Clone, Default)]
pub struct InputQueue {
    pending: VecDeque<KeyEvent>,
    pressed: HashSet<KeyCode>,
    mods: Modifiers,
}

impl InputQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a key press.
    ///
    /// Modifier and lock keys only update the held-key state; everything
    /// else is queued. Returns true if the event was queued.
    pub fn push_key_down(&mut self, event: KeyEvent) -> bool {
        self.pressed.insert(event.keycode);
        self.mods = event.mods;

        if event.keycode.is_modifier() {
            return false;
        }
        self.pending.push_back(event);
        true
    }

    /// Record a key release
    pub fn push_key_up(&mut self, keycode: KeyCode, mods: Modifiers) {
        self.pressed.remove(&keycode);
        self.mods = mods;
    }

    /// True while `keycode` is held down
    pub fn is_key_pressed(&self, keycode: KeyCode) -> bool {
        self.pressed.contains(&keycode)
    }

    /// Modifier and lock state from the most recent key event
    pub fn modifiers(&self) -> Modifiers {
        self.mods
    }

    /// True if a key-down is waiting
    pub fn has_pending(&self) -> bool {
        !self.pending.is_empty()
    }

    /// Oldest pending key-down
    pub fn read_key(&mut self) -> Option<KeyEvent> {
        self.pending.pop_front()
    }

    pub fn peek(&self) -> Option<&KeyEvent> {
        self.pending.front()
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Drop pending events and forget held keys (e.g. on focus loss)
    pub fn clear(&mut self) {
        self.pending.clear();
        self.pressed.clear();
    }
}

/// Navigation, function and keypad digit keys.
///
/// These produce no text of their own and need their own encoding when
/// forwarded to text-oriented consumers.
pub fn is_extended_key(keycode: KeyCode) -> bool {
    matches!(
        keycode,
        KeyCode::F(_)
            | KeyCode::Insert
            | KeyCode::Delete
            | KeyCode::Home
            | KeyCode::End
            | KeyCode::PageUp
            | KeyCode::PageDown
            | KeyCode::Left
            | KeyCode::Right
            | KeyCode::Up
            | KeyCode::Down
            | KeyCode::Numpad0
            | KeyCode::Numpad1
            | KeyCode::Numpad2
            | KeyCode::Numpad3
            | KeyCode::Numpad4
            | KeyCode::Numpad5
            | KeyCode::Numpad6
            | KeyCode::Numpad7
            | KeyCode::Numpad8
            | KeyCode::Numpad9
            | KeyCode::NumpadDecimal
    )
}
