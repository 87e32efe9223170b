//! editfield - single-line text edit widget
//!
//! This crate provides the editing state machine, keybindings and render
//! queries for a one-line text field. Drawing, fonts and the clipboard stay
//! with the host and are reached through small traits.

pub mod clipboard;
pub mod config;
pub mod config_paths;
pub mod editable;
pub mod events;
pub mod field;
pub mod geometry;
pub mod keymap;
pub mod metrics;
pub mod tracing;

// Re-export commonly used types
pub use clipboard::{Clipboard, MemoryClipboard, SystemClipboard};
pub use config::FieldConfig;
pub use editable::{EditConstraints, EditableState, TextAlign};
pub use events::InputQueue;
pub use field::{AbortPolicy, CommandListener, EditEnv, EditField, EditMode};
pub use geometry::Rect;
pub use keymap::{Command, KeyCode, KeyEvent, Keymap, Modifiers, PlatformProfile};
pub use metrics::{FontStyle, FontdueMetrics, Metrics, MonospaceMetrics};
