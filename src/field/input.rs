//! Key dispatch for an edit field
//!
//! A key event is first passed through the keypad remap, then looked up in
//! the field's keymap. Unbound keys that produce text fall through to
//! character insertion.

use crate::editable::EditAction;
use crate::events::InputQueue;
use crate::keymap::{numpad, Command, KeyEvent, NumpadRemap};
use crate::tracing::FieldSnapshot;

use super::{EditEnv, EditField};

/// Highest codepoint accepted from a key's text value
const MAX_KEY_TEXT: u32 = 256;

/// Result of one dispatch branch
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct Outcome {
    handled: bool,
    /// Buffer, caret or highlight changed (listener is notified)
    changed: bool,
    /// Restart the caret blink in its visible phase
    force_caret: bool,
}

impl Outcome {
    fn unhandled() -> Self {
        Self::default()
    }

    fn handled() -> Self {
        Self {
            handled: true,
            ..Self::default()
        }
    }

    fn edit(changed: bool) -> Self {
        Self {
            handled: true,
            changed,
            force_caret: true,
        }
    }
}

impl EditField {
    /// Dispatch one key-down event.
    ///
    /// Returns false when the field is disabled or nothing handled the key,
    /// so the host can route it elsewhere.
    pub fn handle_key(&mut self, event: KeyEvent, env: &mut EditEnv) -> bool {
        if !self.enabled {
            return false;
        }

        let event = match numpad::remap(event) {
            NumpadRemap::Unchanged(event) | NumpadRemap::Navigation(event) => event,
            NumpadRemap::Dead => {
                tracing::debug!("Ignoring keypad 5 with num lock off");
                return false;
            }
        };

        let before = FieldSnapshot::from_state(&self.state);

        let outcome = match self.keymap.resolve(&event) {
            Some(command) => self.run_command(command, env),
            None => self.insert_typed(&event, env),
        };

        if !outcome.handled {
            return false;
        }

        self.dirty = true;
        if outcome.force_caret || outcome.changed {
            self.blink.force_visible(env.now);
        }
        if outcome.changed {
            env.listener.on_command(self.command_id, 0);
        }

        if let Some(diff) = before.diff(&FieldSnapshot::from_state(&self.state)) {
            tracing::debug!("{} -> {}", event.keystroke(), diff);
        }

        true
    }

    /// Drain `queue` through [`handle_key`](Self::handle_key).
    ///
    /// Returns how many events were handled.
    pub fn pump(&mut self, queue: &mut InputQueue, env: &mut EditEnv) -> usize {
        let mut handled = 0;
        while let Some(event) = queue.read_key() {
            if self.handle_key(event, env) {
                handled += 1;
            }
        }
        handled
    }

    fn run_command(&mut self, command: Command, env: &mut EditEnv) -> Outcome {
        if let Some(action) = command.to_action() {
            let changed = self.state.apply(&action, env.metrics);
            return Outcome::edit(changed || command.always_notifies());
        }

        match command {
            Command::Commit => {
                let had_highlight = self.state.has_highlight();
                self.end_edit_mode();
                Outcome {
                    changed: had_highlight,
                    ..Outcome::handled()
                }
            }
            Command::Abort => {
                let had_highlight = self.state.has_highlight();
                let reverted = self.abort_edit_mode(env.metrics);
                Outcome {
                    changed: had_highlight || reverted,
                    ..Outcome::handled()
                }
            }
            Command::Copy => {
                if let Some(text) = self.state.copy_text() {
                    env.clipboard.set_text(&text);
                }
                Outcome::handled()
            }
            Command::Cut => match self.state.cut(env.metrics) {
                Some(text) => {
                    env.clipboard.set_text(&text);
                    Outcome::edit(true)
                }
                None => Outcome::handled(),
            },
            Command::Paste => {
                let text = if env.clipboard.has_text() {
                    env.clipboard.get_text()
                } else {
                    None
                };
                match text {
                    Some(text) => {
                        let changed = self.state.apply(&EditAction::Paste(text), env.metrics);
                        Outcome {
                            changed,
                            force_caret: changed,
                            ..Outcome::handled()
                        }
                    }
                    None => Outcome::handled(),
                }
            }
            // Unbound is never stored in a keymap
            _ => Outcome::unhandled(),
        }
    }

    /// Default branch: insert the key's text, replacing any highlight.
    ///
    /// Unbound ctrl/meta chords never type. AltGr arrives as ctrl+alt and
    /// still types.
    fn insert_typed(&mut self, event: &KeyEvent, env: &mut EditEnv) -> Outcome {
        let mods = event.mods;
        if (mods.ctrl() && !mods.alt()) || mods.meta() {
            return Outcome::unhandled();
        }
        let Some(ch) = event.text().filter(|&c| (c as u32) < MAX_KEY_TEXT) else {
            return Outcome::unhandled();
        };
        if self.state.apply(&EditAction::InsertChar(ch), env.metrics) {
            Outcome::edit(true)
        } else {
            Outcome::unhandled()
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::{Duration, Instant};

    use super::*;
    use crate::clipboard::MemoryClipboard;
    use crate::geometry::Rect;
    use crate::keymap::{KeyCode, Modifiers};
    use crate::metrics::MonospaceMetrics;

    struct Harness {
        field: EditField,
        metrics: MonospaceMetrics,
        clipboard: MemoryClipboard,
        notifications: Vec<(u32, u32)>,
        now: Instant,
    }

    impl Harness {
        fn new(text: &str) -> Self {
            let metrics = MonospaceMetrics::new(10);
            let mut field = EditField::new(42, Rect::new(0, 0, 200, 20));
            field.set_text(text, &metrics);
            let end = field.state().len();
            field.set_caret(end, &metrics);
            Self {
                field,
                metrics,
                clipboard: MemoryClipboard::new(),
                notifications: Vec::new(),
                now: Instant::now(),
            }
        }

        fn press(&mut self, event: KeyEvent) -> bool {
            let notifications = &mut self.notifications;
            let mut listener = |id: u32, data: u32| notifications.push((id, data));
            let mut env = EditEnv::new(&self.metrics, &mut self.clipboard, &mut listener, self.now);
            self.field.handle_key(event, &mut env)
        }

        fn key(&mut self, code: KeyCode) -> bool {
            self.press(KeyEvent::key(code))
        }
    }

    #[test]
    fn test_backspace_at_end() {
        let mut h = Harness::new("HELLO");
        assert!(h.key(KeyCode::Backspace));
        assert_eq!(h.field.text(), "HELL");
        assert_eq!(h.field.caret(), 4);
        assert_eq!(h.notifications, vec![(42, 0)]);
    }

    #[test]
    fn test_backspace_at_start_is_silent() {
        let mut h = Harness::new("AB");
        h.key(KeyCode::Home);
        h.notifications.clear();

        assert!(h.key(KeyCode::Backspace));
        assert_eq!(h.field.text(), "AB");
        assert!(h.notifications.is_empty());
    }

    #[test]
    fn test_typing_replaces_highlight() {
        let mut h = Harness::new("ABCD");
        h.press(KeyEvent::key_with_mods(KeyCode::Left, Modifiers::SHIFT));
        h.press(KeyEvent::key_with_mods(KeyCode::Left, Modifiers::SHIFT));
        assert_eq!(h.field.highlight().range(), 2..4);

        assert!(h.press(KeyEvent::char('x')));
        assert_eq!(h.field.text(), "ABx");
        assert_eq!(h.field.caret(), 3);
        assert!(!h.field.has_highlight());
    }

    #[test]
    fn test_rejected_character_is_unhandled() {
        let mut h = Harness::new("A");
        assert!(!h.press(KeyEvent::new(KeyCode::Char('\u{7}'), Modifiers::NONE, 7)));
        assert!(!h.press(KeyEvent::new(KeyCode::Char('ā'), Modifiers::NONE, 'ā' as u32)));
        assert_eq!(h.field.text(), "A");
        assert!(h.notifications.is_empty());
    }

    #[test]
    fn test_unbound_named_key_is_unhandled() {
        let mut h = Harness::new("A");
        assert!(!h.key(KeyCode::Tab));
        assert!(!h.key(KeyCode::F(5)));
        assert!(!h.key(KeyCode::PageUp));
    }

    #[test]
    fn test_paste_trims_and_notifies() {
        let mut h = Harness::new("");
        h.clipboard = MemoryClipboard::with_text(" Hi ");
        assert!(h.press(KeyEvent::char_with_mods('v', Modifiers::CTRL)));
        assert_eq!(h.field.text(), "Hi");
        assert_eq!(h.field.caret(), 2);
        assert_eq!(h.notifications.len(), 1);
    }

    #[test]
    fn test_ctrl_shift_v_pastes() {
        let mut h = Harness::new("");
        h.clipboard = MemoryClipboard::with_text("Hi");
        assert!(h.press(KeyEvent::char_with_mods('V', Modifiers::CTRL | Modifiers::SHIFT)));
        assert_eq!(h.field.text(), "Hi");
    }

    #[test]
    fn test_unbound_ctrl_chord_does_not_type() {
        let mut h = Harness::new("A");
        assert!(!h.press(KeyEvent::char_with_mods('q', Modifiers::CTRL)));
        assert!(!h.press(KeyEvent::char_with_mods('q', Modifiers::META)));
        assert_eq!(h.field.text(), "A");

        // AltGr+q on a German layout
        assert!(h.press(KeyEvent::new(
            KeyCode::Char('q'),
            Modifiers::CTRL | Modifiers::ALT,
            '@' as u32
        )));
        assert_eq!(h.field.text(), "A@");
    }

    #[test]
    fn test_home_at_start_still_notifies() {
        let mut h = Harness::new("AB");
        h.key(KeyCode::Home);
        h.notifications.clear();

        assert!(h.key(KeyCode::Home));
        assert_eq!(h.notifications, vec![(42, 0)]);
        assert!(h.key(KeyCode::End));
        h.notifications.clear();
        assert!(h.key(KeyCode::End));
        assert!(h.notifications.is_empty());
    }

    #[test]
    fn test_paste_empty_clipboard_is_handled_noop() {
        let mut h = Harness::new("A");
        assert!(h.press(KeyEvent::char_with_mods('v', Modifiers::CTRL)));
        assert_eq!(h.field.text(), "A");
        assert!(h.notifications.is_empty());
    }

    #[test]
    fn test_copy_whole_buffer() {
        let mut h = Harness::new("copy me");
        assert!(h.press(KeyEvent::char_with_mods('c', Modifiers::CTRL)));
        assert_eq!(h.clipboard.contents(), Some("copy me"));
        assert!(h.notifications.is_empty());
    }

    #[test]
    fn test_cut_highlight() {
        let mut h = Harness::new("abc");
        h.press(KeyEvent::key_with_mods(KeyCode::Left, Modifiers::SHIFT));
        assert!(h.press(KeyEvent::char_with_mods('x', Modifiers::CTRL)));
        assert_eq!(h.clipboard.contents(), Some("c"));
        assert_eq!(h.field.text(), "ab");
        assert_eq!(h.field.caret(), 2);
    }

    #[test]
    fn test_disabled_ignores_keys() {
        let mut h = Harness::new("abc");
        crate::field::Focusable::set_enabled(&mut h.field, false);
        assert!(!h.press(KeyEvent::char('d')));
        assert_eq!(h.field.text(), "abc");
    }

    #[test]
    fn test_keypad_five_is_dead_without_num_lock() {
        let mut h = Harness::new("abc");
        assert!(!h.press(KeyEvent::new(KeyCode::Numpad5, Modifiers::NONE, '5' as u32)));
        assert!(h.press(KeyEvent::new(KeyCode::Numpad5, Modifiers::NUM, '5' as u32)));
        assert_eq!(h.field.text(), "abc5");
    }

    #[test]
    fn test_edit_restarts_blink() {
        let mut h = Harness::new("abc");
        h.field.start_edit_mode(h.now);
        h.now += Duration::from_millis(350);
        h.field.tick(h.now);
        assert!(!h.field.blink().visible);

        h.key(KeyCode::Left);
        assert!(h.field.blink().visible);
        assert_eq!(
            h.field.blink().next_toggle,
            Some(h.now + h.field.blink().interval)
        );
    }
}
