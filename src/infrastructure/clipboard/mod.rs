//! Clipboard sink infrastructure module
//!
//! Sinks are write-through backends for the page's copy/cut command:
//! when present, a successful command also lands on a real clipboard.

mod arboard;

pub use arboard::ArboardClipboard;

use thiserror::Error;

/// Clipboard sink errors
#[derive(Debug, Clone, Error)]
pub enum ClipboardError {
    #[error("Clipboard unavailable: {0}")]
    Unavailable(String),

    #[error("Failed to write to clipboard: {0}")]
    WriteFailed(String),
}

/// Backend that receives the text of a successful copy/cut command
pub trait ClipboardSink {
    fn write(&self, text: &str) -> Result<(), ClipboardError>;
}

/// Create the default clipboard sink for the current platform
///
/// Uses arboard (cross-platform) as the primary option.
pub fn create_clipboard() -> Box<dyn ClipboardSink> {
    Box::new(ArboardClipboard::new())
}
