//! Cross-platform clipboard sink using arboard
//!
//! Works on Windows, macOS, and Linux (X11/Wayland).

use super::{ClipboardError, ClipboardSink};

/// Cross-platform clipboard sink using arboard
pub struct ArboardClipboard;

impl ArboardClipboard {
    /// Create a new arboard clipboard sink
    pub fn new() -> Self {
        Self
    }
}

impl Default for ArboardClipboard {
    fn default() -> Self {
        Self::new()
    }
}

impl ClipboardSink for ArboardClipboard {
    fn write(&self, text: &str) -> Result<(), ClipboardError> {
        let mut clipboard = arboard::Clipboard::new()
            .map_err(|e| ClipboardError::Unavailable(e.to_string()))?;

        clipboard
            .set_text(text)
            .map_err(|e| ClipboardError::WriteFailed(e.to_string()))
    }
}
