//! Clipboard bridge used by copy, cut and paste.
//!
//! Failures never surface as errors: an unavailable clipboard simply has no
//! text, and writes to it are dropped with a warning.

/// Narrow clipboard interface consumed by the field
pub trait Clipboard {
    /// Whether the clipboard currently holds text
    fn has_text(&mut self) -> bool;

    /// Current clipboard text, `None` when empty or unavailable
    fn get_text(&mut self) -> Option<String>;

    /// Replace the clipboard text
    fn set_text(&mut self, text: &str);
}

/// In-process clipboard for tests and headless hosts
#[derive(Debug, Clone, Default)]
pub struct MemoryClipboard {
    text: Option<String>,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self { text: None }
    }

    pub fn with_text(text: &str) -> Self {
        Self {
            text: Some(text.to_string()),
        }
    }

    pub fn contents(&self) -> Option<&str> {
        self.text.as_deref()
    }
}

impl Clipboard for MemoryClipboard {
    fn has_text(&mut self) -> bool {
        self.text.as_ref().is_some_and(|t| !t.is_empty())
    }

    fn get_text(&mut self) -> Option<String> {
        self.text.clone().filter(|t| !t.is_empty())
    }

    fn set_text(&mut self, text: &str) {
        self.text = Some(text.to_string());
    }
}

/// OS clipboard via arboard, opened lazily on first use
#[derive(Default)]
pub struct SystemClipboard {
    inner: Option<arboard::Clipboard>,
}

impl SystemClipboard {
    pub fn new() -> Self {
        Self { inner: None }
    }

    fn handle(&mut self) -> Option<&mut arboard::Clipboard> {
        if self.inner.is_none() {
            match arboard::Clipboard::new() {
                Ok(clipboard) => self.inner = Some(clipboard),
                Err(e) => {
                    tracing::warn!("Clipboard unavailable: {}", e);
                    return None;
                }
            }
        }
        self.inner.as_mut()
    }
}

impl Clipboard for SystemClipboard {
    fn has_text(&mut self) -> bool {
        self.get_text().is_some()
    }

    fn get_text(&mut self) -> Option<String> {
        let clipboard = self.handle()?;
        clipboard.get_text().ok().filter(|t| !t.is_empty())
    }

    fn set_text(&mut self, text: &str) {
        if let Some(clipboard) = self.handle() {
            if let Err(e) = clipboard.set_text(text.to_string()) {
                tracing::warn!("Failed to write clipboard: {}", e);
            }
        }
    }
}
