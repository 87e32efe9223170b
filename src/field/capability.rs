//! Capabilities an edit field exposes to its host.
//!
//! The host (a dialog or form) drives the field through these traits instead
//! of a widget base class: drawing state, focus, and the command channel are
//! independent of each other and of the editing state machine.

use serde::{Deserialize, Serialize};

use crate::geometry::Rect;

// =============================================================================
// Command Emission
// =============================================================================

/// Receives change notifications from a field.
///
/// `command_id` is the id the field was constructed with; `data` is always 0
/// for edit notifications.
pub trait CommandListener {
    fn on_command(&mut self, command_id: u32, data: u32);
}

impl<F> CommandListener for F
where
    F: FnMut(u32, u32),
{
    fn on_command(&mut self, command_id: u32, data: u32) {
        (*self)(command_id, data)
    }
}

/// Listener that drops every notification
#[derive(Debug, Default, Clone, Copy)]
pub struct NullListener;

impl CommandListener for NullListener {
    fn on_command(&mut self, _command_id: u32, _data: u32) {}
}

// =============================================================================
// Drawing and Focus
// =============================================================================

pub trait Drawable {
    /// Widget bounds in host coordinates
    fn bounds(&self) -> Rect;
    fn is_visible(&self) -> bool;
    fn set_visible(&mut self, visible: bool);
    /// True when something changed since the last `take_dirty`
    fn is_dirty(&self) -> bool;
    /// Read and clear the redraw flag
    fn take_dirty(&mut self) -> bool;
}

pub trait Focusable {
    fn is_enabled(&self) -> bool;
    fn set_enabled(&mut self, enabled: bool);
    fn has_focus(&self) -> bool;
    fn focus_gained(&mut self, now: std::time::Instant);
    fn focus_lost(&mut self);
}

// =============================================================================
// Edit Session
// =============================================================================

/// Lifecycle of one edit session
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EditMode {
    /// Not editing; key events still edit the buffer
    #[default]
    Idle,
    Editing,
    /// Enter was pressed; the buffer is the new committed value
    Committed,
    /// Escape was pressed
    Aborted,
}

impl EditMode {
    pub fn is_terminal(self) -> bool {
        matches!(self, EditMode::Committed | EditMode::Aborted)
    }
}

/// What Escape does to the buffer
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AbortPolicy {
    /// Restore the content captured when editing started
    #[default]
    Revert,
    /// Leave the buffer as typed
    Keep,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_closure_listener() {
        let mut calls = Vec::new();
        {
            let mut listener = |id: u32, data: u32| calls.push((id, data));
            listener.on_command(7, 0);
            listener.on_command(7, 0);
        }
        assert_eq!(calls, vec![(7, 0), (7, 0)]);
    }

    #[test]
    fn test_terminal_modes() {
        assert!(!EditMode::Idle.is_terminal());
        assert!(!EditMode::Editing.is_terminal());
        assert!(EditMode::Committed.is_terminal());
        assert!(EditMode::Aborted.is_terminal());
    }

    #[test]
    fn test_abort_policy_yaml() {
        let policy: AbortPolicy = serde_yaml::from_str("keep").unwrap();
        assert_eq!(policy, AbortPolicy::Keep);
        assert_eq!(AbortPolicy::default(), AbortPolicy::Revert);
    }
}
