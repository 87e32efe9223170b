//! Keybinding struct representing a mapping from a keystroke to a command

use super::command::Command;
use super::types::Keystroke;

/// A single keybinding mapping one keystroke to a command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Keybinding {
    pub keystroke: Keystroke,
    pub command: Command,
}

impl Keybinding {
    pub const fn new(keystroke: Keystroke, command: Command) -> Self {
        Self { keystroke, command }
    }

    /// Check if this binding matches a keystroke exactly
    pub fn matches(&self, keystroke: &Keystroke) -> bool {
        self.keystroke == *keystroke
    }

    /// Check if this binding removes a default instead of adding one
    pub fn is_unbind(&self) -> bool {
        self.command == Command::Unbound
    }

    /// Get display string for this keybinding
    pub fn display_string(&self) -> String {
        format!("{} → {}", self.keystroke, self.command.display_name())
    }
}
