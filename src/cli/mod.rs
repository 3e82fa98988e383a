//! CLI layer - argument parsing and command handling

pub mod app;
pub mod args;
pub mod config_cmd;
pub mod presenter;

// Re-export common types
pub use args::{ActionArg, Cli, Commands, ConfigAction, CopyOptions};
