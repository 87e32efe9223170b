//! Adapter to convert winit key events to our KeyEvent type

use winit::keyboard::{Key, KeyCode as WinitKeyCode, ModifiersState, NamedKey, PhysicalKey};

use super::types::{KeyCode, KeyEvent, Keystroke, Modifiers};

/// Convert winit modifier state plus lock bits into our Modifiers.
///
/// winit does not report lock state, so hosts track it themselves and pass
/// it in as `locks` (any of CAPS / NUM / SCROLL).
pub fn modifiers_from_winit(state: ModifiersState, locks: Modifiers) -> Modifiers {
    Modifiers::new(
        state.control_key(),
        state.shift_key(),
        state.alt_key(),
        state.super_key(),
    ) | locks
}

/// Convert winit key event data to a normalized KeyEvent
///
/// Keypad keys are identified by their physical key so the field can remap
/// them when num lock is off. `text` is the text winit produced for the
/// press, if any. Returns None if the key cannot be mapped.
pub fn key_event_from_winit(
    logical_key: &Key,
    physical_key: PhysicalKey,
    text: Option<&str>,
    mods: Modifiers,
) -> Option<KeyEvent> {
    let key_code = numpad_from_physical(physical_key).or_else(|| key_code_from_logical(logical_key))?;

    let ascii = text
        .and_then(|t| t.chars().next())
        .or(match logical_key {
            Key::Character(s) => s.chars().next(),
            Key::Named(NamedKey::Space) => Some(' '),
            _ => None,
        })
        .filter(|c| !c.is_control())
        .map_or(0, |c| c as u32);

    Some(KeyEvent::new(key_code, mods, ascii))
}

/// Convert winit key data to a Keystroke (for keymap lookups without text)
pub fn keystroke_from_winit(
    logical_key: &Key,
    physical_key: PhysicalKey,
    mods: Modifiers,
) -> Option<Keystroke> {
    key_event_from_winit(logical_key, physical_key, None, mods).map(|e| e.keystroke())
}

fn key_code_from_logical(logical_key: &Key) -> Option<KeyCode> {
    match logical_key {
        // Named keys
        Key::Named(named) => match named {
            NamedKey::Enter => Some(KeyCode::Enter),
            NamedKey::Escape => Some(KeyCode::Escape),
            NamedKey::Tab => Some(KeyCode::Tab),
            NamedKey::Backspace => Some(KeyCode::Backspace),
            NamedKey::Delete => Some(KeyCode::Delete),
            NamedKey::Space => Some(KeyCode::Space),

            // Arrows
            NamedKey::ArrowUp => Some(KeyCode::Up),
            NamedKey::ArrowDown => Some(KeyCode::Down),
            NamedKey::ArrowLeft => Some(KeyCode::Left),
            NamedKey::ArrowRight => Some(KeyCode::Right),

            // Navigation
            NamedKey::Home => Some(KeyCode::Home),
            NamedKey::End => Some(KeyCode::End),
            NamedKey::PageUp => Some(KeyCode::PageUp),
            NamedKey::PageDown => Some(KeyCode::PageDown),
            NamedKey::Insert => Some(KeyCode::Insert),

            // Function keys
            NamedKey::F1 => Some(KeyCode::F(1)),
            NamedKey::F2 => Some(KeyCode::F(2)),
            NamedKey::F3 => Some(KeyCode::F(3)),
            NamedKey::F4 => Some(KeyCode::F(4)),
            NamedKey::F5 => Some(KeyCode::F(5)),
            NamedKey::F6 => Some(KeyCode::F(6)),
            NamedKey::F7 => Some(KeyCode::F(7)),
            NamedKey::F8 => Some(KeyCode::F(8)),
            NamedKey::F9 => Some(KeyCode::F(9)),
            NamedKey::F10 => Some(KeyCode::F(10)),
            NamedKey::F11 => Some(KeyCode::F(11)),
            NamedKey::F12 => Some(KeyCode::F(12)),

            // Modifier and lock keys on their own
            NamedKey::Shift => Some(KeyCode::Shift),
            NamedKey::Control => Some(KeyCode::Control),
            NamedKey::Alt => Some(KeyCode::Alt),
            NamedKey::Super | NamedKey::Meta => Some(KeyCode::Meta),
            NamedKey::CapsLock => Some(KeyCode::CapsLock),
            NamedKey::NumLock => Some(KeyCode::NumLock),
            NamedKey::ScrollLock => Some(KeyCode::ScrollLock),

            _ => None,
        },

        // Character keys - normalize to lowercase
        Key::Character(s) => {
            let c = s.chars().next()?;
            Some(KeyCode::Char(c.to_ascii_lowercase()))
        }

        _ => None,
    }
}

fn numpad_from_physical(physical_key: PhysicalKey) -> Option<KeyCode> {
    match physical_key {
        PhysicalKey::Code(code) => match code {
            WinitKeyCode::Numpad0 => Some(KeyCode::Numpad0),
            WinitKeyCode::Numpad1 => Some(KeyCode::Numpad1),
            WinitKeyCode::Numpad2 => Some(KeyCode::Numpad2),
            WinitKeyCode::Numpad3 => Some(KeyCode::Numpad3),
            WinitKeyCode::Numpad4 => Some(KeyCode::Numpad4),
            WinitKeyCode::Numpad5 => Some(KeyCode::Numpad5),
            WinitKeyCode::Numpad6 => Some(KeyCode::Numpad6),
            WinitKeyCode::Numpad7 => Some(KeyCode::Numpad7),
            WinitKeyCode::Numpad8 => Some(KeyCode::Numpad8),
            WinitKeyCode::Numpad9 => Some(KeyCode::Numpad9),
            WinitKeyCode::NumpadAdd => Some(KeyCode::NumpadAdd),
            WinitKeyCode::NumpadSubtract => Some(KeyCode::NumpadSubtract),
            WinitKeyCode::NumpadMultiply => Some(KeyCode::NumpadMultiply),
            WinitKeyCode::NumpadDivide => Some(KeyCode::NumpadDivide),
            WinitKeyCode::NumpadEnter => Some(KeyCode::NumpadEnter),
            WinitKeyCode::NumpadDecimal => Some(KeyCode::NumpadDecimal),
            _ => None,
        },
        PhysicalKey::Unidentified(_) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_character_key() {
        let event = key_event_from_winit(
            &Key::Character("s".into()),
            PhysicalKey::Code(WinitKeyCode::KeyS),
            Some("s"),
            Modifiers::CTRL,
        )
        .expect("should map");

        assert_eq!(event.keycode, KeyCode::Char('s'));
        assert!(event.mods.ctrl());
        assert_eq!(event.text(), Some('s'));
    }

    #[test]
    fn test_uppercase_normalized_text_kept() {
        let event = key_event_from_winit(
            &Key::Character("S".into()),
            PhysicalKey::Code(WinitKeyCode::KeyS),
            Some("S"),
            Modifiers::SHIFT,
        )
        .expect("should map");

        assert_eq!(event.keycode, KeyCode::Char('s'));
        assert_eq!(event.text(), Some('S'));
    }

    #[test]
    fn test_named_key_has_no_text() {
        let event = key_event_from_winit(
            &Key::Named(NamedKey::Enter),
            PhysicalKey::Code(WinitKeyCode::Enter),
            Some("\r"),
            Modifiers::NONE,
        )
        .expect("should map");

        assert_eq!(event.keycode, KeyCode::Enter);
        assert_eq!(event.text(), None);
    }

    #[test]
    fn test_space_produces_text() {
        let event = key_event_from_winit(
            &Key::Named(NamedKey::Space),
            PhysicalKey::Code(WinitKeyCode::Space),
            None,
            Modifiers::NONE,
        )
        .expect("should map");
        assert_eq!(event.text(), Some(' '));
    }

    #[test]
    fn test_numpad_prefers_physical() {
        let event = key_event_from_winit(
            &Key::Character("2".into()),
            PhysicalKey::Code(WinitKeyCode::Numpad2),
            Some("2"),
            Modifiers::NUM,
        )
        .expect("should map");

        assert_eq!(event.keycode, KeyCode::Numpad2);
        assert_eq!(event.text(), Some('2'));
        assert!(event.mods.num_lock());
    }

    #[test]
    fn test_modifier_key_alone() {
        let stroke = keystroke_from_winit(
            &Key::Named(NamedKey::Shift),
            PhysicalKey::Code(WinitKeyCode::ShiftLeft),
            Modifiers::SHIFT,
        )
        .expect("should map");
        assert_eq!(stroke.key, KeyCode::Shift);
    }

    #[test]
    fn test_modifiers_from_winit() {
        let mods = modifiers_from_winit(
            ModifiersState::SHIFT | ModifiersState::CONTROL,
            Modifiers::CAPS,
        );
        assert!(mods.shift());
        assert!(mods.ctrl());
        assert!(mods.caps_lock());
        assert!(!mods.alt());
    }

    #[test]
    fn test_unknown_key() {
        let event = key_event_from_winit(
            &Key::Named(NamedKey::AudioVolumeUp),
            PhysicalKey::Code(WinitKeyCode::AudioVolumeUp),
            None,
            Modifiers::NONE,
        );
        assert!(event.is_none());
    }
}
