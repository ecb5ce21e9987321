//! System clipboard access behind a trait, so tests can record copies.

use std::sync::{Arc, Mutex};

use thiserror::Error;

#[derive(Debug, Error)]
#[error("clipboard unavailable: {0}")]
pub struct ClipboardError(String);

/// Destination for copied text.
pub trait Clipboard: Send {
    /// Replaces the clipboard contents with `text`.
    ///
    /// # Errors
    ///
    /// Returns [`ClipboardError`] when the platform clipboard cannot be
    /// reached.
    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// The platform clipboard via `arboard`.
///
/// A handle is opened per copy: holding one for the whole session keeps an
/// X11/Wayland connection open for no benefit.
#[derive(Debug, Default)]
pub struct SystemClipboard;

impl Clipboard for SystemClipboard {
    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        let mut clipboard =
            arboard::Clipboard::new().map_err(|e| ClipboardError(e.to_string()))?;
        clipboard
            .set_text(text.to_owned())
            .map_err(|e| ClipboardError(e.to_string()))
    }
}

/// In-memory clipboard that remembers every copy. The history is shared
/// between clones so a test can keep a handle after giving one to the app.
#[derive(Debug, Clone, Default)]
pub struct RecordingClipboard {
    copies: Arc<Mutex<Vec<String>>>,
}

impl RecordingClipboard {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything copied so far, oldest first.
    #[must_use]
    pub fn copies(&self) -> Vec<String> {
        self.copies
            .lock()
            .map(|copies| copies.clone())
            .unwrap_or_default()
    }
}

impl Clipboard for RecordingClipboard {
    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        self.copies
            .lock()
            .map_err(|e| ClipboardError(e.to_string()))?
            .push(text.to_owned());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recording_clipboard_shares_history_between_clones() -> anyhow::Result<()> {
        let recorder = RecordingClipboard::new();
        let mut handle = recorder.clone();
        handle.set_text("one")?;
        handle.set_text("two")?;
        assert_eq!(recorder.copies(), vec!["one", "two"]);
        Ok(())
    }
}
