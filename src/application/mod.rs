//! Application layer - Use cases and port interfaces

pub mod ports;
pub mod request;

// Re-export common types
pub use request::{ClipboardRequest, RequestOptions};
