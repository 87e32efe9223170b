//! Field configuration persistence
//!
//! Stores field preferences in `~/.config/editfield/config.yaml`

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::editable::{EditConstraints, TextAlign};
use crate::field::AbortPolicy;
use crate::keymap::PlatformProfile;
use crate::metrics::FontStyle;

/// Edit field configuration that persists across sessions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldConfig {
    /// Caret blink half-period in milliseconds
    #[serde(default = "default_blink_interval_ms")]
    pub blink_interval_ms: u64,

    /// Text alignment; derived from `rtl` when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub align: Option<TextAlign>,

    /// Right-to-left layout
    #[serde(default)]
    pub rtl: bool,

    /// Keybinding profile; detected from the running OS when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub platform: Option<PlatformProfile>,

    #[serde(default)]
    pub font: FontStyle,

    /// What Escape does to the buffer
    #[serde(default)]
    pub abort_policy: AbortPolicy,

    /// Optional cap on the buffer length in codepoints
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_length: Option<usize>,
}

fn default_blink_interval_ms() -> u64 {
    300
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            blink_interval_ms: default_blink_interval_ms(),
            align: None,
            rtl: false,
            platform: None,
            font: FontStyle::default(),
            abort_policy: AbortPolicy::default(),
            max_length: None,
        }
    }
}

impl FieldConfig {
    /// Load config from disk, or return defaults if not found
    pub fn load() -> Self {
        let Some(path) = crate::config_paths::config_file() else {
            tracing::debug!("No config directory available, using defaults");
            return Self::default();
        };
        Self::load_from(&path)
    }

    /// Load config from `path`; any failure falls back to defaults
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            tracing::debug!(
                "Config file not found at {}, using defaults",
                path.display()
            );
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(content) => match serde_yaml::from_str(&content) {
                Ok(config) => {
                    tracing::info!("Loaded config from {}", path.display());
                    config
                }
                Err(e) => {
                    tracing::warn!("Failed to parse config at {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!("Failed to read config at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Save config to disk
    ///
    /// Creates the config directory if it doesn't exist.
    pub fn save(&self) -> Result<(), String> {
        let path = crate::config_paths::config_file()
            .ok_or_else(|| "No config directory available".to_string())?;
        self.save_to(&path)
    }

    /// Save config to `path`, creating parent directories
    pub fn save_to(&self, path: &Path) -> Result<(), String> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create config directory: {}", e))?;
        }

        let content = serde_yaml::to_string(self)
            .map_err(|e| format!("Failed to serialize config: {}", e))?;

        std::fs::write(path, content)
            .map_err(|e| format!("Failed to write config to {}: {}", path.display(), e))?;

        tracing::info!("Saved config to {}", path.display());
        Ok(())
    }

    pub fn blink_interval(&self) -> Duration {
        Duration::from_millis(self.blink_interval_ms)
    }

    /// Configured alignment, defaulting to right for RTL layouts
    pub fn effective_align(&self) -> TextAlign {
        self.align.unwrap_or(TextAlign::for_direction(self.rtl))
    }

    /// Configured profile, or the one matching the running OS
    pub fn effective_platform(&self) -> PlatformProfile {
        self.platform.unwrap_or_else(PlatformProfile::detect)
    }

    /// Buffer constraints implied by this config
    pub fn constraints(&self) -> EditConstraints {
        match self.max_length {
            Some(max) => EditConstraints::with_max_length(max),
            None => EditConstraints::printable(),
        }
    }
}
