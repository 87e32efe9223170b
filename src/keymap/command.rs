//! Command enum representing every action a key can trigger in a field
//!
//! Commands are the bridge between keybindings and the editing state
//! machine. Pure editing commands map straight to an [`EditAction`];
//! the rest (commit, abort, clipboard) need the field's surroundings.

use std::str::FromStr;

use crate::editable::{EditAction, MoveTarget};

/// All field commands that can be bound to keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    // ========================================================================
    // Edit session
    // ========================================================================
    /// Accept the buffer and leave edit mode
    Commit,
    /// Discard the edit session
    Abort,

    // ========================================================================
    // Text Editing
    // ========================================================================
    /// Delete character before caret (backspace)
    DeleteBackward,
    /// Delete character at caret (delete)
    DeleteForward,

    // ========================================================================
    // Caret Movement
    // ========================================================================
    MoveLeft,
    MoveRight,
    /// Move caret to start of buffer
    MoveHome,
    /// Move caret to end of buffer
    MoveEnd,
    /// Grow the highlight one codepoint to the left
    SelectLeft,

    // ========================================================================
    // Clipboard
    // ========================================================================
    /// Copy highlight (or whole buffer) to clipboard
    Copy,
    /// Cut highlight to clipboard
    Cut,
    /// Paste from clipboard
    Paste,

    // ========================================================================
    // Special
    // ========================================================================
    /// Explicitly unbound (used to remove default bindings)
    Unbound,
}

impl Command {
    /// Editing action for commands that need nothing but the state machine
    pub fn to_action(self) -> Option<EditAction> {
        use Command::*;

        match self {
            DeleteBackward => Some(EditAction::DeleteBackward),
            DeleteForward => Some(EditAction::DeleteForward),
            MoveLeft => Some(EditAction::Move(MoveTarget::Left)),
            MoveRight => Some(EditAction::Move(MoveTarget::Right)),
            MoveHome => Some(EditAction::Move(MoveTarget::Home)),
            MoveEnd => Some(EditAction::Move(MoveTarget::End)),
            SelectLeft => Some(EditAction::SelectLeft),
            Commit | Abort | Copy | Cut | Paste | Unbound => None,
        }
    }

    /// Check if this command talks to the clipboard
    pub fn is_clipboard(self) -> bool {
        matches!(self, Command::Copy | Command::Cut | Command::Paste)
    }

    /// Check if this command ends the edit session
    pub fn ends_session(self) -> bool {
        matches!(self, Command::Commit | Command::Abort)
    }

    /// Moves that notify the listener even when the caret is already there
    pub fn always_notifies(self) -> bool {
        matches!(self, Command::MoveHome | Command::MoveRight)
    }

    /// Get a display name for this command
    pub fn display_name(self) -> &'static str {
        use Command::*;

        match self {
            Commit => "Commit",
            Abort => "Abort",
            DeleteBackward => "Delete Backward",
            DeleteForward => "Delete Forward",
            MoveLeft => "Move Left",
            MoveRight => "Move Right",
            MoveHome => "Move to Start",
            MoveEnd => "Move to End",
            SelectLeft => "Select Left",
            Copy => "Copy",
            Cut => "Cut",
            Paste => "Paste",
            Unbound => "Unbound",
        }
    }
}

// Parse command names as written in keymap YAML
impl FromStr for Command {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Commit" => Ok(Command::Commit),
            "Abort" => Ok(Command::Abort),
            "DeleteBackward" => Ok(Command::DeleteBackward),
            "DeleteForward" => Ok(Command::DeleteForward),
            "MoveLeft" => Ok(Command::MoveLeft),
            "MoveRight" => Ok(Command::MoveRight),
            "MoveHome" => Ok(Command::MoveHome),
            "MoveEnd" => Ok(Command::MoveEnd),
            "SelectLeft" => Ok(Command::SelectLeft),
            "Copy" => Ok(Command::Copy),
            "Cut" => Ok(Command::Cut),
            "Paste" => Ok(Command::Paste),
            "Unbound" => Ok(Command::Unbound),
            _ => Err(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_to_action_movement() {
        assert_eq!(
            Command::MoveHome.to_action(),
            Some(EditAction::Move(MoveTarget::Home))
        );
        assert_eq!(Command::SelectLeft.to_action(), Some(EditAction::SelectLeft));
    }

    #[test]
    fn test_context_commands_have_no_action() {
        assert_eq!(Command::Paste.to_action(), None);
        assert_eq!(Command::Commit.to_action(), None);
        assert_eq!(Command::Unbound.to_action(), None);
    }

    #[test]
    fn test_parse_command() {
        assert_eq!(Command::from_str("Paste"), Ok(Command::Paste));
        assert_eq!(Command::from_str("MoveEnd"), Ok(Command::MoveEnd));
        assert_eq!(Command::from_str("SaveFile"), Err(()));
    }

    #[test]
    fn test_categories() {
        assert!(Command::Cut.is_clipboard());
        assert!(!Command::MoveLeft.is_clipboard());
        assert!(Command::Abort.ends_session());
        assert!(Command::MoveHome.always_notifies());
        assert!(!Command::MoveEnd.always_notifies());
        assert!(!Command::MoveLeft.always_notifies());
    }
}
