//! Default keybindings for the edit field
//!
//! Bindings come from the keymap.yaml embedded at compile time, with a
//! hardcoded table as fallback. User overrides merge on top.

use std::path::Path;

use super::binding::Keybinding;
use super::command::Command;
use super::config::{load_keymap_file, parse_keymap_yaml, KeymapError};
use super::keymap::Keymap;
use super::types::{KeyCode, Keystroke, Modifiers, PlatformProfile};

/// Default keymap YAML embedded at compile time
const DEFAULT_KEYMAP_YAML: &str = include_str!("../../keymap.yaml");

/// Get the embedded default keymap YAML
pub fn get_default_keymap_yaml() -> &'static str {
    DEFAULT_KEYMAP_YAML
}

/// Load and merge keymaps: defaults + user overrides
///
/// Loading order (each layer overrides the previous):
/// 1. Embedded default keymap (compiled into the library)
/// 2. User config at `<config dir>/editfield/keymap.yaml`
///
/// User bindings with `command: Unbound` remove matching default bindings.
pub fn load_default_keymap(profile: PlatformProfile) -> Vec<Keybinding> {
    let bindings = embedded_bindings(profile);

    let Some(user_path) = crate::config_paths::keymap_file() else {
        return bindings;
    };
    if !user_path.exists() {
        return bindings;
    }

    match merge_user_file(bindings.clone(), &user_path, profile) {
        Ok(merged) => merged,
        Err(e) => {
            tracing::warn!("Failed to load user keymap from {}: {}", user_path.display(), e);
            bindings
        }
    }
}

/// Embedded defaults for `profile`, falling back to the hardcoded table
pub fn embedded_bindings(profile: PlatformProfile) -> Vec<Keybinding> {
    match parse_keymap_yaml(DEFAULT_KEYMAP_YAML, profile) {
        Ok(b) => {
            tracing::debug!(
                "Loaded embedded {} keymap ({} bindings)",
                profile.as_str(),
                b.len()
            );
            b
        }
        Err(e) => {
            tracing::warn!(
                "Failed to parse embedded keymap: {}, using hardcoded defaults",
                e
            );
            default_bindings(profile)
        }
    }
}

/// Merge bindings from a user keymap file over `base`
pub fn merge_user_file(
    base: Vec<Keybinding>,
    path: &Path,
    profile: PlatformProfile,
) -> Result<Vec<Keybinding>, KeymapError> {
    let user = load_keymap_file(path, profile)?;
    tracing::info!(
        "Merging user keymap from {} ({} bindings)",
        path.display(),
        user.len()
    );
    Ok(merge_bindings(base, user))
}

/// Build the keymap a field should use for `profile`
pub fn keymap_for_profile(profile: PlatformProfile) -> Keymap {
    Keymap::with_bindings(load_default_keymap(profile))
}

/// Merge user bindings over base bindings
///
/// - A user binding for an existing keystroke replaces it
/// - `Unbound` removes every base binding for that keystroke
/// - Anything else is appended
pub fn merge_bindings(base: Vec<Keybinding>, user: Vec<Keybinding>) -> Vec<Keybinding> {
    let mut result = base;

    for user_binding in user {
        if user_binding.is_unbind() {
            result.retain(|b| b.keystroke != user_binding.keystroke);
            continue;
        }

        match result
            .iter()
            .position(|b| b.keystroke == user_binding.keystroke)
        {
            Some(idx) => result[idx] = user_binding,
            None => result.push(user_binding),
        }
    }

    result
}

/// Hardcoded default bindings, mirroring the embedded keymap.yaml
pub fn default_bindings(profile: PlatformProfile) -> Vec<Keybinding> {
    let none = Modifiers::NONE;
    let ctrl = Modifiers::CTRL;
    let meta = Modifiers::META;

    let mut bindings = vec![
        // Edit session
        bind(KeyCode::Enter, none, Command::Commit),
        bind(KeyCode::NumpadEnter, none, Command::Commit),
        bind(KeyCode::Escape, none, Command::Abort),
        // Deletion
        bind(KeyCode::Backspace, none, Command::DeleteBackward),
        bind(KeyCode::Delete, none, Command::DeleteForward),
        // Movement
        bind(KeyCode::Left, none, Command::MoveLeft),
        bind(KeyCode::Right, none, Command::MoveRight),
        bind(KeyCode::Home, none, Command::MoveHome),
        bind(KeyCode::Up, none, Command::MoveHome),
        bind(KeyCode::End, none, Command::MoveEnd),
        bind(KeyCode::Down, none, Command::MoveEnd),
        // Selection
        bind(KeyCode::Left, Modifiers::SHIFT, Command::SelectLeft),
        // Clipboard
        bind(KeyCode::Char('c'), ctrl, Command::Copy),
        bind(KeyCode::Char('x'), ctrl, Command::Cut),
        bind(KeyCode::Char('v'), ctrl, Command::Paste),
    ];

    if profile == PlatformProfile::MacOs {
        bindings.extend([
            bind(KeyCode::Char('c'), meta, Command::Copy),
            bind(KeyCode::Char('x'), meta, Command::Cut),
            bind(KeyCode::Char('v'), meta, Command::Paste),
            bind(KeyCode::Char('a'), ctrl, Command::MoveHome),
            bind(KeyCode::Char('e'), ctrl, Command::MoveEnd),
        ]);
    }

    bindings
}

fn bind(key: KeyCode, mods: Modifiers, command: Command) -> Keybinding {
    Keybinding::new(Keystroke::new(key, mods), command)
}
