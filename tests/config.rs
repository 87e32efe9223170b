//! Config tests - FieldConfig and keymap files from disk

mod common;

use common::TestField;
use editfield::config::FieldConfig;
use editfield::editable::TextAlign;
use editfield::field::{AbortPolicy, EditField};
use editfield::geometry::Rect;
use editfield::keymap::{
    default_bindings, merge_user_file, Command, KeyCode, KeyEvent, Keymap, Keystroke, Modifiers,
    PlatformProfile,
};

#[test]
fn test_config_roundtrip_through_yaml_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.yaml");
    let config = FieldConfig {
        abort_policy: AbortPolicy::Keep,
        max_length: Some(4),
        ..FieldConfig::default()
    };
    config.save_to(&path).unwrap();

    let loaded = FieldConfig::load_from(&path);
    assert_eq!(loaded, config);
}

#[test]
fn test_max_length_from_config_limits_typing() {
    let config = FieldConfig {
        max_length: Some(3),
        platform: Some(PlatformProfile::Standard),
        ..FieldConfig::default()
    };
    let field = EditField::new(1, Rect::new(0, 0, 200, 20))
        .with_constraints(config.constraints());
    let mut t = TestField::from_field(field, "");

    t.type_str("abcd");
    assert_eq!(t.text(), "abc");
    assert!(!t.press(KeyEvent::char('e')));
}

#[test]
fn test_keep_policy_from_config() {
    let config = FieldConfig {
        abort_policy: AbortPolicy::Keep,
        ..FieldConfig::default()
    };
    let field = EditField::new(1, Rect::new(0, 0, 200, 20)).with_abort_policy(config.abort_policy);
    let mut t = TestField::from_field(field, "draft");
    t.field.start_edit_mode(t.now);
    t.type_str("s");
    t.key(KeyCode::Escape);
    assert_eq!(t.text(), "drafts");
}

#[test]
fn test_rtl_config_aligns_right() {
    let config: FieldConfig = serde_yaml::from_str("rtl: true\n").unwrap();
    assert_eq!(config.effective_align(), TextAlign::Right);
}

#[test]
fn test_user_keymap_overrides_and_unbinds() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("keymap.yaml");
    std::fs::write(
        &path,
        r#"
bindings:
  - key: "ctrl+h"
    command: DeleteBackward
  - key: "down"
    command: Unbound
  - key: "ctrl+a"
    command: MoveHome
    platform: macos
"#,
    )
    .unwrap();

    let bindings =
        merge_user_file(default_bindings(PlatformProfile::Standard), &path, PlatformProfile::Standard)
            .unwrap();
    let keymap = Keymap::with_bindings(bindings);

    assert_eq!(
        keymap.lookup(&Keystroke::char_with_mods('h', Modifiers::CTRL)),
        Some(Command::DeleteBackward)
    );
    assert_eq!(keymap.lookup(&Keystroke::key(KeyCode::Down)), None);
    // macOS-only entry is skipped for the standard profile
    assert_eq!(
        keymap.lookup(&Keystroke::char_with_mods('a', Modifiers::CTRL)),
        None
    );

    let field = EditField::new(1, Rect::new(0, 0, 200, 20)).with_keymap(keymap);
    let mut t = TestField::from_field(field, "abc");
    assert!(t.ctrl('h'));
    assert_eq!(t.text(), "ab");
    assert!(!t.key(KeyCode::Down));
}

#[test]
fn test_invalid_user_keymap_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("keymap.yaml");
    std::fs::write(&path, "bindings:\n  - key: \"hyper+q\"\n    command: Commit\n").unwrap();

    let result = merge_user_file(
        default_bindings(PlatformProfile::Standard),
        &path,
        PlatformProfile::Standard,
    );
    assert!(result.is_err());
}

#[test]
fn test_macos_profile_emacs_moves() {
    let field = EditField::new(1, Rect::new(0, 0, 200, 20))
        .with_keymap(Keymap::with_bindings(default_bindings(PlatformProfile::MacOs)));
    let mut t = TestField::from_field(field, "abc");

    assert!(t.ctrl('a'));
    assert_eq!(t.caret(), 0);
    assert!(t.ctrl('e'));
    assert_eq!(t.caret(), 3);

    t.shift_left();
    assert!(t.press(KeyEvent::char_with_mods('c', Modifiers::META)));
    assert_eq!(t.clipboard.contents(), Some("c"));
}

#[test]
fn test_standard_profile_types_ctrl_letters_as_nothing() {
    let mut t = TestField::new("abc");
    // ctrl+a is not bound on the standard profile and ctrl text is filtered
    assert!(!t.press(KeyEvent::new(KeyCode::Char('a'), Modifiers::CTRL, 0)));
    assert_eq!(t.caret(), 3);
}
