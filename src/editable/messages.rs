//! Message types for the editing state machine.

/// Target for caret movement operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveTarget {
    /// One codepoint left
    Left,
    /// One codepoint right
    Right,
    /// Start of the buffer
    Home,
    /// End of the buffer
    End,
}

/// Editing operation applied to an [`EditableState`](super::EditableState).
///
/// Clipboard reads happen before the message is built, so `Paste` carries
/// the text it inserts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditAction {
    // === Movement ===
    /// Move the caret, dropping any highlight
    Move(MoveTarget),
    /// Grow the highlight one codepoint to the left
    SelectLeft,
    /// Drop the highlight without moving the caret
    ClearHighlight,

    // === Insertion ===
    /// Insert (or replace the highlight with) a single codepoint
    InsertChar(char),
    /// Insert trimmed clipboard text at the caret
    Paste(String),

    // === Deletion ===
    /// Backspace
    DeleteBackward,
    /// Delete
    DeleteForward,
    /// Delete the highlighted range
    DeleteHighlight,
}

impl EditAction {
    /// Check if this action can modify the buffer
    pub fn is_editing(&self) -> bool {
        matches!(
            self,
            EditAction::InsertChar(_)
                | EditAction::Paste(_)
                | EditAction::DeleteBackward
                | EditAction::DeleteForward
                | EditAction::DeleteHighlight
        )
    }

    /// Check if this action keeps an active highlight alive
    pub fn preserves_highlight(&self) -> bool {
        matches!(self, EditAction::SelectLeft)
    }
}
