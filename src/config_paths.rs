//! Centralized configuration paths for editfield
//!
//! All config files live under:
//! - Unix/macOS: `~/.config/editfield/`
//! - Windows: `%APPDATA%\editfield\`

use std::{
    env, fs,
    path::{Path, PathBuf},
};

const APP_DIR: &str = "editfield";

/// Prefix of the daily-rotated log files
pub const LOG_FILE_PREFIX: &str = "editfield.log";

/// Base config directory for editfield
///
/// Unix/macOS:
///   - If XDG_CONFIG_HOME is set: `$XDG_CONFIG_HOME/editfield`
///   - Else: `~/.config/editfield`
///
/// Windows:
///   - `%APPDATA%\editfield`
pub fn config_dir() -> Option<PathBuf> {
    #[cfg(target_os = "windows")]
    {
        env::var("APPDATA")
            .ok()
            .map(|appdata| PathBuf::from(appdata).join(APP_DIR))
    }

    #[cfg(not(target_os = "windows"))]
    {
        env::var_os("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .or_else(|| dirs::home_dir().map(|h| h.join(".config")))
            .map(|config| config.join(APP_DIR))
    }
}

/// `~/.config/editfield/config.yaml`
pub fn config_file() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("config.yaml"))
}

/// `~/.config/editfield/keymap.yaml`
pub fn keymap_file() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("keymap.yaml"))
}

/// `~/.config/editfield/logs/`
pub fn logs_dir() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("logs"))
}

/// Most recent log file in `dir` (e.g. `editfield.log.2026-10-17`).
///
/// Daily rotation names files `editfield.log.YYYY-MM-DD`, which sort
/// naturally; falls back to the bare prefix when none exist yet.
pub fn latest_log_in(dir: &Path) -> PathBuf {
    let mut log_files: Vec<PathBuf> = fs::read_dir(dir)
        .map(|entries| {
            entries
                .filter_map(|entry| entry.ok())
                .map(|entry| entry.path())
                .filter(|path| {
                    path.file_name()
                        .and_then(|n| n.to_str())
                        .is_some_and(|n| n.starts_with(LOG_FILE_PREFIX))
                })
                .collect()
        })
        .unwrap_or_default();

    // Newest first
    log_files.sort_by(|a, b| b.cmp(a));

    log_files
        .into_iter()
        .next()
        .unwrap_or_else(|| dir.join(LOG_FILE_PREFIX))
}

/// Returns the most recent log file in `~/.config/editfield/logs/`
pub fn log_file() -> Option<PathBuf> {
    logs_dir().map(|dir| latest_log_in(&dir))
}

fn ensure_dir(path: &Path) -> Result<(), String> {
    fs::create_dir_all(path)
        .map_err(|e| format!("Failed to create directory {}: {}", path.display(), e))
}

/// Ensure the base config dir exists, returning it
pub fn ensure_config_dir() -> Result<PathBuf, String> {
    let dir = config_dir().ok_or_else(|| "No config directory available".to_string())?;
    ensure_dir(&dir)?;
    Ok(dir)
}

/// Ensure logs dir exists, returning it
pub fn ensure_logs_dir() -> Result<PathBuf, String> {
    let config = ensure_config_dir()?;
    let logs = config.join("logs");
    ensure_dir(&logs)?;
    Ok(logs)
}
