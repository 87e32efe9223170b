//! Numeric keypad remapping.
//!
//! With num lock off the keypad acts as a navigation cluster. Events are
//! rewritten before keymap lookup so a keypad key behaves exactly like the
//! navigation key printed on it.

use super::types::{KeyCode, KeyEvent};

/// Outcome of remapping a keypad event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumpadRemap {
    /// Not a remapped keypad key (or num lock is on); use as-is
    Unchanged(KeyEvent),
    /// Rewritten to its navigation equivalent
    Navigation(KeyEvent),
    /// Keypad key with no navigation meaning (keypad 5)
    Dead,
}

/// Navigation key printed on a keypad key
pub fn navigation_equivalent(key: KeyCode) -> Option<KeyCode> {
    match key {
        KeyCode::Numpad0 => Some(KeyCode::Insert),
        KeyCode::Numpad1 => Some(KeyCode::End),
        KeyCode::Numpad2 => Some(KeyCode::Down),
        KeyCode::Numpad3 => Some(KeyCode::PageDown),
        KeyCode::Numpad4 => Some(KeyCode::Left),
        KeyCode::Numpad6 => Some(KeyCode::Right),
        KeyCode::Numpad7 => Some(KeyCode::Home),
        KeyCode::Numpad8 => Some(KeyCode::Up),
        KeyCode::Numpad9 => Some(KeyCode::PageUp),
        KeyCode::NumpadDecimal => Some(KeyCode::Delete),
        _ => None,
    }
}

/// Remap `event` when num lock is off.
///
/// The remapped event carries no text, so it can never fall through to
/// character insertion.
pub fn remap(event: KeyEvent) -> NumpadRemap {
    if event.mods.num_lock() {
        return NumpadRemap::Unchanged(event);
    }
    if event.keycode == KeyCode::Numpad5 {
        return NumpadRemap::Dead;
    }
    match navigation_equivalent(event.keycode) {
        Some(key) => NumpadRemap::Navigation(KeyEvent::new(key, event.mods, 0)),
        None => NumpadRemap::Unchanged(event),
    }
}
