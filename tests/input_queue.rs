//! Input queue tests - queued key events pumped through a field

mod common;

use common::TestField;
use editfield::events::{is_extended_key, InputQueue};
use editfield::keymap::{key_event_from_winit, modifiers_from_winit, KeyCode, KeyEvent, Modifiers};
use winit::keyboard::{Key, KeyCode as WinitKeyCode, ModifiersState, NamedKey, PhysicalKey};

#[test]
fn test_pump_processes_in_order() {
    let mut t = TestField::new("");
    let mut queue = InputQueue::new();
    for ch in "abc".chars() {
        queue.push_key_down(KeyEvent::char(ch));
    }
    queue.push_key_down(KeyEvent::key(KeyCode::Left));
    queue.push_key_down(KeyEvent::char('X'));

    let handled = t.pump(&mut queue);

    assert_eq!(handled, 5);
    assert_eq!(t.text(), "abXc");
    assert!(queue.is_empty());
}

#[test]
fn test_pump_skips_modifier_presses() {
    let mut t = TestField::new("");
    let mut queue = InputQueue::new();
    queue.push_key_down(KeyEvent::key_with_mods(KeyCode::Shift, Modifiers::SHIFT));
    queue.push_key_down(KeyEvent::char_with_mods('A', Modifiers::SHIFT));
    queue.push_key_up(KeyCode::Shift, Modifiers::NONE);

    assert_eq!(queue.len(), 1);
    t.pump(&mut queue);
    assert_eq!(t.text(), "A");
}

#[test]
fn test_pump_counts_unhandled() {
    let mut t = TestField::new("a");
    let mut queue = InputQueue::new();
    queue.push_key_down(KeyEvent::key(KeyCode::Tab));
    queue.push_key_down(KeyEvent::key(KeyCode::Backspace));

    assert_eq!(t.pump(&mut queue), 1);
}

#[test]
fn test_winit_events_through_queue() {
    let mut t = TestField::new("");
    let mut queue = InputQueue::new();
    let mods = modifiers_from_winit(ModifiersState::empty(), Modifiers::NUM);

    let presses = [
        (Key::Character("h".into()), PhysicalKey::Code(WinitKeyCode::KeyH), Some("h")),
        (Key::Character("i".into()), PhysicalKey::Code(WinitKeyCode::KeyI), Some("i")),
        (Key::Character("1".into()), PhysicalKey::Code(WinitKeyCode::Numpad1), Some("1")),
        (Key::Named(NamedKey::Enter), PhysicalKey::Code(WinitKeyCode::Enter), Some("\r")),
    ];
    for (key, physical, text) in presses {
        let event = key_event_from_winit(&key, physical, text, mods).unwrap();
        queue.push_key_down(event);
    }

    t.field.start_edit_mode(t.now);
    assert_eq!(t.pump(&mut queue), 4);
    assert_eq!(t.field.committed_text(), "hi1");
}

#[test]
fn test_extended_key_classification() {
    assert!(is_extended_key(KeyCode::Left));
    assert!(is_extended_key(KeyCode::Numpad5));
    assert!(!is_extended_key(KeyCode::Char('a')));
}
