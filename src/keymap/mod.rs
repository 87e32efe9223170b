//! Configurable keyboard mapping for edit fields
//!
//! This module provides a data-driven keybinding system that:
//! - Maps keystrokes to field commands
//! - Selects platform conventions through a runtime [`PlatformProfile`]
//! - Enables user customization via YAML config files
//! - Remaps the numeric keypad to navigation keys when num lock is off
//!
//! # Architecture
//!
//! ```text
//! winit key → KeyEvent → numpad::remap() → Keymap::resolve() → Command → EditAction
//! ```
//!
//! # Loading Keymaps
//!
//! ```ignore
//! // Hardcoded defaults for a profile
//! let keymap = Keymap::with_bindings(default_bindings(PlatformProfile::Standard));
//!
//! // Embedded keymap.yaml merged with the user's overrides
//! let keymap = keymap_for_profile(PlatformProfile::detect());
//! ```

mod binding;
mod command;
mod config;
mod defaults;
#[allow(clippy::module_inception)]
mod keymap;
pub mod numpad;
mod types;
mod winit_adapter;

pub use binding::Keybinding;
pub use command::Command;
pub use config::{load_keymap_file, parse_key_string, parse_keymap_yaml, KeymapError};
pub use defaults::{
    default_bindings, embedded_bindings, get_default_keymap_yaml, keymap_for_profile,
    load_default_keymap, merge_bindings, merge_user_file,
};
pub use keymap::Keymap;
pub use numpad::NumpadRemap;
pub use types::{KeyCode, KeyEvent, Keystroke, Modifiers, PlatformProfile};
pub use winit_adapter::{key_event_from_winit, keystroke_from_winit, modifiers_from_winit};
