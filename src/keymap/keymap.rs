//! Keymap struct for storing and looking up keybindings

use std::collections::HashMap;

use super::binding::Keybinding;
use super::command::Command;
use super::types::{KeyCode, KeyEvent, Keystroke, Modifiers};

/// The keymap stores all keybindings and handles lookup
#[derive(Debug, Clone, Default)]
pub struct Keymap {
    /// All registered bindings
    bindings: Vec<Keybinding>,
    /// Fast lookup (index into bindings); first binding for a keystroke wins
    lookup: HashMap<Keystroke, usize>,
}

impl Keymap {
    /// Create an empty keymap
    pub fn new() -> Self {
        Self {
            bindings: Vec::new(),
            lookup: HashMap::new(),
        }
    }

    /// Create a keymap with the given bindings
    pub fn with_bindings(bindings: Vec<Keybinding>) -> Self {
        let mut keymap = Self::new();
        for binding in bindings {
            keymap.add_binding(binding);
        }
        keymap
    }

    /// Add a binding to the keymap. `Unbound` entries are ignored here;
    /// they only matter when merging over defaults.
    pub fn add_binding(&mut self, binding: Keybinding) {
        if binding.is_unbind() {
            return;
        }
        let stroke = Keystroke::new(binding.keystroke.key, binding.keystroke.mods.without_locks());
        let idx = self.bindings.len();
        self.lookup.entry(stroke).or_insert(idx);
        self.bindings.push(binding);
    }

    /// Look up a keystroke.
    ///
    /// Lock modifiers are ignored. An unbound chord falls back to a shorter
    /// one before giving up:
    /// - character keys retry without Shift, so `ctrl+shift+v` pastes like
    ///   `ctrl+v`; they never drop the other modifiers (`ctrl+x` is not `x`)
    /// - named keys retry with only Shift kept, then bare, so
    ///   `ctrl+shift+left` selects and `ctrl+left` moves left
    pub fn lookup(&self, keystroke: &Keystroke) -> Option<Command> {
        let key = keystroke.key;
        let mods = keystroke.mods.without_locks();

        let candidates = if matches!(key, KeyCode::Char(_)) {
            [
                Some(Keystroke::new(key, mods)),
                Some(Keystroke::new(key, mods.difference(Modifiers::SHIFT))),
                None,
            ]
        } else {
            [
                Some(Keystroke::new(key, mods)),
                Some(Keystroke::new(key, mods.intersection(Modifiers::SHIFT))),
                Some(Keystroke::key(key)),
            ]
        };

        candidates
            .into_iter()
            .flatten()
            .find_map(|stroke| self.lookup.get(&stroke))
            .map(|&idx| self.bindings[idx].command)
    }

    /// Look up the command for a key event
    pub fn resolve(&self, event: &KeyEvent) -> Option<Command> {
        self.lookup(&event.keystroke())
    }

    /// Get all bindings
    pub fn bindings(&self) -> &[Keybinding] {
        &self.bindings
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Get the keybinding for a command (first match)
    pub fn binding_for(&self, command: Command) -> Option<&Keybinding> {
        self.bindings.iter().find(|b| b.command == command)
    }

    /// Get display string for a command's keybinding
    pub fn display_for(&self, command: Command) -> Option<String> {
        self.binding_for(command).map(|b| b.keystroke.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctrl_v() -> Keystroke {
        Keystroke::new(KeyCode::Char('v'), Modifiers::CTRL)
    }

    fn shift_left() -> Keystroke {
        Keystroke::new(KeyCode::Left, Modifiers::SHIFT)
    }

    #[test]
    fn test_single_binding_lookup() {
        let keymap = Keymap::with_bindings(vec![Keybinding::new(ctrl_v(), Command::Paste)]);

        assert_eq!(keymap.lookup(&ctrl_v()), Some(Command::Paste));
        assert_eq!(keymap.lookup(&Keystroke::char('v')), None);
    }

    #[test]
    fn test_lock_bits_ignored() {
        let keymap = Keymap::with_bindings(vec![Keybinding::new(ctrl_v(), Command::Paste)]);
        let locked = Keystroke::new(KeyCode::Char('v'), Modifiers::CTRL | Modifiers::CAPS);
        assert_eq!(keymap.lookup(&locked), Some(Command::Paste));
    }

    #[test]
    fn test_named_key_falls_back_to_bare() {
        let keymap = Keymap::with_bindings(vec![
            Keybinding::new(Keystroke::key(KeyCode::Left), Command::MoveLeft),
            Keybinding::new(Keystroke::key(KeyCode::Right), Command::MoveRight),
            Keybinding::new(shift_left(), Command::SelectLeft),
        ]);

        assert_eq!(keymap.lookup(&shift_left()), Some(Command::SelectLeft));
        let shift_right = Keystroke::new(KeyCode::Right, Modifiers::SHIFT);
        assert_eq!(keymap.lookup(&shift_right), Some(Command::MoveRight));
        let ctrl_left = Keystroke::new(KeyCode::Left, Modifiers::CTRL);
        assert_eq!(keymap.lookup(&ctrl_left), Some(Command::MoveLeft));
    }

    #[test]
    fn test_char_key_keeps_non_shift_modifiers() {
        let keymap = Keymap::with_bindings(vec![Keybinding::new(
            Keystroke::char('a'),
            Command::MoveHome,
        )]);
        let ctrl_a = Keystroke::new(KeyCode::Char('a'), Modifiers::CTRL);
        assert_eq!(keymap.lookup(&ctrl_a), None);
    }

    #[test]
    fn test_char_key_drops_shift() {
        let keymap = Keymap::with_bindings(vec![Keybinding::new(ctrl_v(), Command::Paste)]);
        let ctrl_shift_v = Keystroke::new(KeyCode::Char('v'), Modifiers::CTRL | Modifiers::SHIFT);
        assert_eq!(keymap.lookup(&ctrl_shift_v), Some(Command::Paste));

        let alt_shift_v = Keystroke::new(KeyCode::Char('v'), Modifiers::ALT | Modifiers::SHIFT);
        assert_eq!(keymap.lookup(&alt_shift_v), None);
    }

    #[test]
    fn test_named_key_keeps_shift_before_bare() {
        let keymap = Keymap::with_bindings(vec![
            Keybinding::new(Keystroke::key(KeyCode::Left), Command::MoveLeft),
            Keybinding::new(shift_left(), Command::SelectLeft),
        ]);
        let ctrl_shift_left = Keystroke::new(KeyCode::Left, Modifiers::CTRL | Modifiers::SHIFT);
        assert_eq!(keymap.lookup(&ctrl_shift_left), Some(Command::SelectLeft));
        let alt_left = Keystroke::new(KeyCode::Left, Modifiers::ALT);
        assert_eq!(keymap.lookup(&alt_left), Some(Command::MoveLeft));
    }

    #[test]
    fn test_first_binding_wins() {
        let keymap = Keymap::with_bindings(vec![
            Keybinding::new(ctrl_v(), Command::Paste),
            Keybinding::new(ctrl_v(), Command::Copy),
        ]);
        assert_eq!(keymap.lookup(&ctrl_v()), Some(Command::Paste));
    }

    #[test]
    fn test_unbound_is_not_added() {
        let keymap = Keymap::with_bindings(vec![Keybinding::new(ctrl_v(), Command::Unbound)]);
        assert!(keymap.is_empty());
        assert_eq!(keymap.lookup(&ctrl_v()), None);
    }

    #[test]
    fn test_display_for_command() {
        let keymap = Keymap::with_bindings(vec![Keybinding::new(ctrl_v(), Command::Paste)]);
        assert_eq!(keymap.display_for(Command::Paste).as_deref(), Some("Ctrl+V"));
        assert_eq!(keymap.display_for(Command::Cut), None);
    }
}
