//! Debug tracing infrastructure for development diagnostics
//!
//! Provides structured logging plus a lightweight snapshot of field state
//! so each dispatched command can log exactly what it changed.
//!
//! # Usage
//!
//! Configure via RUST_LOG environment variable:
//! - `RUST_LOG=debug` - all debug logs
//! - `RUST_LOG=editfield::field=debug` - module-level filtering
//!
//! # Log Files
//!
//! Logs are written to `~/.config/editfield/logs/editfield.log` with daily
//! rotation. File logging uses debug level by default.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use crate::editable::EditableState;

/// Initialize tracing subscriber with console and file logging
///
/// Console output respects RUST_LOG (default `warn`). Returns an error if a
/// global subscriber is already installed.
pub fn init() -> Result<(), String> {
    let console_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    // Console layer - respects RUST_LOG
    let console_layer = fmt::layer()
        .with_target(true)
        .with_line_number(true)
        .with_filter(console_filter);

    // File layer - always debug level for troubleshooting
    let file_layer = match crate::config_paths::ensure_logs_dir() {
        Ok(logs_dir) => {
            let file_appender =
                tracing_appender::rolling::daily(logs_dir, crate::config_paths::LOG_FILE_PREFIX);
            Some(
                fmt::layer()
                    .with_writer(file_appender)
                    .with_ansi(false)
                    .with_target(true)
                    .with_line_number(true)
                    .with_filter(EnvFilter::new("debug")),
            )
        }
        Err(e) => {
            eprintln!("Warning: Could not initialize file logging: {}", e);
            None
        }
    };

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .try_init()
        .map_err(|e| format!("Failed to install tracing subscriber: {}", e))
}

/// Lightweight snapshot of buffer/caret/highlight state for diffing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSnapshot {
    pub len: usize,
    pub caret: usize,
    /// `(start, count)` of an active highlight
    pub highlight: Option<(usize, usize)>,
    pub scroll_offset: i32,
}

impl FieldSnapshot {
    pub fn from_state(state: &EditableState) -> Self {
        let h = state.highlight();
        Self {
            len: state.len(),
            caret: state.caret(),
            highlight: h.is_active().then(|| (h.start(), h.count())),
            scroll_offset: state.scroll.offset,
        }
    }

    /// Generate a diff description between two snapshots
    pub fn diff(&self, other: &FieldSnapshot) -> Option<String> {
        let mut changes = Vec::new();

        if self.len != other.len {
            changes.push(format!("len: {} → {}", self.len, other.len));
        }
        if self.caret != other.caret {
            changes.push(format!("caret: {} → {}", self.caret, other.caret));
        }
        if self.highlight != other.highlight {
            let status = match other.highlight {
                Some((start, count)) => format!("highlight {}+{}", start, count),
                None => "highlight cleared".to_string(),
            };
            changes.push(status);
        }
        if self.scroll_offset != other.scroll_offset {
            changes.push(format!(
                "scroll: {} → {}",
                self.scroll_offset, other.scroll_offset
            ));
        }

        if changes.is_empty() {
            None
        } else {
            Some(changes.join("; "))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snap(len: usize, caret: usize, highlight: Option<(usize, usize)>) -> FieldSnapshot {
        FieldSnapshot {
            len,
            caret,
            highlight,
            scroll_offset: 0,
        }
    }

    #[test]
    fn test_diff_none_when_equal() {
        let a = snap(3, 1, None);
        assert_eq!(a.diff(&a.clone()), None);
    }

    #[test]
    fn test_diff_describes_changes() {
        let before = snap(5, 5, None);
        let after = snap(4, 4, None);
        assert_eq!(
            before.diff(&after).as_deref(),
            Some("len: 5 → 4; caret: 5 → 4")
        );
    }

    #[test]
    fn test_diff_highlight_transitions() {
        let before = snap(4, 4, None);
        let after = snap(4, 4, Some((3, 1)));
        assert_eq!(before.diff(&after).as_deref(), Some("highlight 3+1"));
        assert_eq!(after.diff(&before).as_deref(), Some("highlight cleared"));
    }
}
