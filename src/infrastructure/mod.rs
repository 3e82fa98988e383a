//! Infrastructure layer - Adapter implementations

pub mod clipboard;
pub mod config;
pub mod notification;
pub mod page;

// Re-export common types
pub use clipboard::{create_clipboard, ArboardClipboard, ClipboardError, ClipboardSink};
pub use config::XdgConfigStore;
pub use notification::{CollectingNotifier, ConsoleNotifier};
pub use page::{CommandMode, ElementSpec, MemoryPage};
