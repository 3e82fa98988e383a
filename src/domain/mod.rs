//! Domain layer - Core value objects
//!
//! Contains value objects and domain errors.
//! This layer has no dependencies on external systems.

pub mod action;
pub mod config;
pub mod element;
pub mod error;

// Re-export common types
pub use action::Action;
pub use config::AppConfig;
pub use element::{Edge, ElementId, ListenerId, ReadingDirection};
pub use error::*;
