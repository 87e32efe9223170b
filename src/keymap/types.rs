//! Core types for the keymap system: Keystroke, Modifiers, KeyCode, KeyEvent

use std::fmt;

use serde::{Deserialize, Serialize};

/// Modifier keys as a bitfield for efficient storage and comparison.
///
/// The lock bits (caps/num/scroll) describe toggle state, not held keys, and
/// never take part in keybinding matching.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Modifiers(u8);

impl Modifiers {
    pub const NONE: Modifiers = Modifiers(0);
    pub const CTRL: Modifiers = Modifiers(0b0000_0001);
    pub const SHIFT: Modifiers = Modifiers(0b0000_0010);
    pub const ALT: Modifiers = Modifiers(0b0000_0100);
    pub const META: Modifiers = Modifiers(0b0000_1000); // Cmd on macOS, Win on Windows
    pub const CAPS: Modifiers = Modifiers(0b0001_0000);
    pub const NUM: Modifiers = Modifiers(0b0010_0000);
    pub const SCROLL: Modifiers = Modifiers(0b0100_0000);

    const LOCKS: u8 = 0b0111_0000;

    /// Create modifiers from the held-key flags
    pub const fn new(ctrl: bool, shift: bool, alt: bool, meta: bool) -> Self {
        let mut bits = 0u8;
        if ctrl {
            bits |= Self::CTRL.0;
        }
        if shift {
            bits |= Self::SHIFT.0;
        }
        if alt {
            bits |= Self::ALT.0;
        }
        if meta {
            bits |= Self::META.0;
        }
        Modifiers(bits)
    }

    #[inline]
    pub const fn ctrl(self) -> bool {
        self.0 & Self::CTRL.0 != 0
    }

    #[inline]
    pub const fn shift(self) -> bool {
        self.0 & Self::SHIFT.0 != 0
    }

    /// Check if alt/option is held
    #[inline]
    pub const fn alt(self) -> bool {
        self.0 & Self::ALT.0 != 0
    }

    /// Check if meta (cmd/win) is held
    #[inline]
    pub const fn meta(self) -> bool {
        self.0 & Self::META.0 != 0
    }

    #[inline]
    pub const fn caps_lock(self) -> bool {
        self.0 & Self::CAPS.0 != 0
    }

    #[inline]
    pub const fn num_lock(self) -> bool {
        self.0 & Self::NUM.0 != 0
    }

    #[inline]
    pub const fn scroll_lock(self) -> bool {
        self.0 & Self::SCROLL.0 != 0
    }

    /// Check if no modifiers (including locks) are set
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Drop the lock bits, keeping only held modifier keys
    #[inline]
    pub const fn without_locks(self) -> Modifiers {
        Modifiers(self.0 & !Self::LOCKS)
    }

    /// Combine two modifier sets
    #[inline]
    pub const fn union(self, other: Modifiers) -> Modifiers {
        Modifiers(self.0 | other.0)
    }

    /// Modifiers present in both sets
    #[inline]
    pub const fn intersection(self, other: Modifiers) -> Modifiers {
        Modifiers(self.0 & other.0)
    }

    /// This set with the modifiers in `other` removed
    #[inline]
    pub const fn difference(self, other: Modifiers) -> Modifiers {
        Modifiers(self.0 & !other.0)
    }

    /// Check if this contains all modifiers in other
    #[inline]
    pub const fn contains(self, other: Modifiers) -> bool {
        (self.0 & other.0) == other.0
    }

    pub const fn bits(self) -> u8 {
        self.0
    }
}

impl std::ops::BitOr for Modifiers {
    type Output = Modifiers;

    fn bitor(self, rhs: Self) -> Self::Output {
        self.union(rhs)
    }
}

impl fmt::Display for Modifiers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts = Vec::new();
        if self.ctrl() {
            parts.push("Ctrl");
        }
        if self.shift() {
            parts.push("Shift");
        }
        if self.alt() {
            parts.push("Alt");
        }
        if self.meta() {
            parts.push("Meta");
        }
        write!(f, "{}", parts.join("+"))
    }
}

/// Keybinding profile selected when a field is built.
///
/// Replaces compile-time platform checks: the same binary can serve either
/// convention.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlatformProfile {
    #[default]
    Standard,
    #[serde(rename = "macos")]
    MacOs,
}

impl PlatformProfile {
    /// Profile matching the OS this binary runs on
    pub fn detect() -> Self {
        if std::env::consts::OS == "macos" {
            PlatformProfile::MacOs
        } else {
            PlatformProfile::Standard
        }
    }

    /// Name used in keymap YAML `platform:` fields
    pub fn as_str(self) -> &'static str {
        match self {
            PlatformProfile::Standard => "standard",
            PlatformProfile::MacOs => "macos",
        }
    }

    /// Check if a YAML `platform:` value applies to this profile
    pub fn matches(self, platform: &str) -> bool {
        match platform {
            "any" | "all" => true,
            "mac" | "macos" => self == PlatformProfile::MacOs,
            "standard" | "windows" | "linux" | "other" => self == PlatformProfile::Standard,
            _ => false,
        }
    }
}

/// A key code representing a physical or logical key
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum KeyCode {
    /// A character key (normalized to lowercase)
    Char(char),

    // Named keys
    Enter,
    Escape,
    Tab,
    Backspace,
    Delete,
    Space,

    // Arrow keys
    Up,
    Down,
    Left,
    Right,

    // Navigation
    Home,
    End,
    PageUp,
    PageDown,
    Insert,

    // Function keys
    F(u8), // F1-F24

    // Numpad (physical keys)
    Numpad0,
    Numpad1,
    Numpad2,
    Numpad3,
    Numpad4,
    Numpad5,
    Numpad6,
    Numpad7,
    Numpad8,
    Numpad9,
    NumpadAdd,
    NumpadSubtract,
    NumpadMultiply,
    NumpadDivide,
    NumpadEnter,
    NumpadDecimal,

    // Modifier keys pressed on their own
    Shift,
    Control,
    Alt,
    Meta,
    CapsLock,
    NumLock,
    ScrollLock,
}

impl KeyCode {
    /// Check if this is a bare modifier or lock key
    pub fn is_modifier(self) -> bool {
        matches!(
            self,
            KeyCode::Shift
                | KeyCode::Control
                | KeyCode::Alt
                | KeyCode::Meta
                | KeyCode::CapsLock
                | KeyCode::NumLock
                | KeyCode::ScrollLock
        )
    }

    /// Check if this key lives on the numeric keypad
    pub fn is_numpad(self) -> bool {
        matches!(
            self,
            KeyCode::Numpad0
                | KeyCode::Numpad1
                | KeyCode::Numpad2
                | KeyCode::Numpad3
                | KeyCode::Numpad4
                | KeyCode::Numpad5
                | KeyCode::Numpad6
                | KeyCode::Numpad7
                | KeyCode::Numpad8
                | KeyCode::Numpad9
                | KeyCode::NumpadAdd
                | KeyCode::NumpadSubtract
                | KeyCode::NumpadMultiply
                | KeyCode::NumpadDivide
                | KeyCode::NumpadEnter
                | KeyCode::NumpadDecimal
        )
    }
}

impl fmt::Display for KeyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeyCode::Char(c) => write!(f, "{}", c.to_uppercase()),
            KeyCode::Enter => write!(f, "Enter"),
            KeyCode::Escape => write!(f, "Escape"),
            KeyCode::Tab => write!(f, "Tab"),
            KeyCode::Backspace => write!(f, "Backspace"),
            KeyCode::Delete => write!(f, "Delete"),
            KeyCode::Space => write!(f, "Space"),
            KeyCode::Up => write!(f, "Up"),
            KeyCode::Down => write!(f, "Down"),
            KeyCode::Left => write!(f, "Left"),
            KeyCode::Right => write!(f, "Right"),
            KeyCode::Home => write!(f, "Home"),
            KeyCode::End => write!(f, "End"),
            KeyCode::PageUp => write!(f, "PageUp"),
            KeyCode::PageDown => write!(f, "PageDown"),
            KeyCode::Insert => write!(f, "Insert"),
            KeyCode::F(n) => write!(f, "F{}", n),
            KeyCode::Numpad0 => write!(f, "Num0"),
            KeyCode::Numpad1 => write!(f, "Num1"),
            KeyCode::Numpad2 => write!(f, "Num2"),
            KeyCode::Numpad3 => write!(f, "Num3"),
            KeyCode::Numpad4 => write!(f, "Num4"),
            KeyCode::Numpad5 => write!(f, "Num5"),
            KeyCode::Numpad6 => write!(f, "Num6"),
            KeyCode::Numpad7 => write!(f, "Num7"),
            KeyCode::Numpad8 => write!(f, "Num8"),
            KeyCode::Numpad9 => write!(f, "Num9"),
            KeyCode::NumpadAdd => write!(f, "Num+"),
            KeyCode::NumpadSubtract => write!(f, "Num-"),
            KeyCode::NumpadMultiply => write!(f, "Num*"),
            KeyCode::NumpadDivide => write!(f, "Num/"),
            KeyCode::NumpadEnter => write!(f, "NumEnter"),
            KeyCode::NumpadDecimal => write!(f, "Num."),
            KeyCode::Shift => write!(f, "Shift"),
            KeyCode::Control => write!(f, "Ctrl"),
            KeyCode::Alt => write!(f, "Alt"),
            KeyCode::Meta => write!(f, "Meta"),
            KeyCode::CapsLock => write!(f, "CapsLock"),
            KeyCode::NumLock => write!(f, "NumLock"),
            KeyCode::ScrollLock => write!(f, "ScrollLock"),
        }
    }
}

/// A single keystroke: a key with modifiers
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Keystroke {
    pub key: KeyCode,
    pub mods: Modifiers,
}

impl Keystroke {
    /// Create a new keystroke
    pub const fn new(key: KeyCode, mods: Modifiers) -> Self {
        Self { key, mods }
    }

    /// Create a keystroke with no modifiers
    pub const fn key(key: KeyCode) -> Self {
        Self {
            key,
            mods: Modifiers::NONE,
        }
    }

    /// Create a keystroke with a character key
    pub fn char(c: char) -> Self {
        Self {
            key: KeyCode::Char(c.to_ascii_lowercase()),
            mods: Modifiers::NONE,
        }
    }

    /// Create a keystroke with a character and modifiers
    pub fn char_with_mods(c: char, mods: Modifiers) -> Self {
        Self {
            key: KeyCode::Char(c.to_ascii_lowercase()),
            mods,
        }
    }

    /// Same key, no modifiers
    pub const fn bare(self) -> Self {
        Self::key(self.key)
    }
}

impl fmt::Display for Keystroke {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.mods.without_locks().is_empty() {
            write!(f, "{}+{}", self.mods, self.key)
        } else {
            write!(f, "{}", self.key)
        }
    }
}

/// Normalized key-down event delivered to a field.
///
/// `ascii` is the text value the platform produced for the key (0 when the
/// key produces no text); the keycode identifies which key was pressed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct KeyEvent {
    pub keycode: KeyCode,
    pub mods: Modifiers,
    pub ascii: u32,
}

impl KeyEvent {
    pub const fn new(keycode: KeyCode, mods: Modifiers, ascii: u32) -> Self {
        Self {
            keycode,
            mods,
            ascii,
        }
    }

    /// Named key without text
    pub const fn key(keycode: KeyCode) -> Self {
        Self::new(keycode, Modifiers::NONE, 0)
    }

    /// Named key with modifiers and no text
    pub const fn key_with_mods(keycode: KeyCode, mods: Modifiers) -> Self {
        Self::new(keycode, mods, 0)
    }

    /// Character key producing `ch` as text
    pub fn char(ch: char) -> Self {
        Self::new(KeyCode::Char(ch.to_ascii_lowercase()), Modifiers::NONE, ch as u32)
    }

    /// Character key with modifiers (e.g. ctrl+v)
    pub fn char_with_mods(ch: char, mods: Modifiers) -> Self {
        Self::new(KeyCode::Char(ch.to_ascii_lowercase()), mods, ch as u32)
    }

    /// Same event with a different keycode
    pub const fn with_keycode(self, keycode: KeyCode) -> Self {
        Self { keycode, ..self }
    }

    /// Keystroke used for keymap matching (lock bits dropped)
    pub fn keystroke(&self) -> Keystroke {
        Keystroke::new(self.keycode, self.mods.without_locks())
    }

    /// Text produced by the key, if any
    pub fn text(&self) -> Option<char> {
        if self.ascii == 0 {
            None
        } else {
            char::from_u32(self.ascii)
        }
    }
}
