//! Port interfaces (traits) for external systems
//!
//! These traits define the boundaries between the application
//! and infrastructure layers.

pub mod config;
pub mod host;
pub mod notifier;
pub mod selection;

// Re-export common types
pub use config::ConfigStore;
pub use host::{ClickHandler, CommandError, HostPage, OffscreenField};
pub use notifier::{ClearSelection, OutcomeEvent, OutcomeKind, OutcomeNotifier};
pub use selection::TextSelector;
