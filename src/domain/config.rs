//! Application configuration value object

use serde::{Deserialize, Serialize};

use crate::domain::action::Action;

/// Application configuration.
/// All fields are optional to support partial configs and merging.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    pub action: Option<String>,
    pub system_clipboard: Option<bool>,
    pub quiet: Option<bool>,
}

impl AppConfig {
    /// Create config with default values
    pub fn defaults() -> Self {
        Self {
            action: Some("copy".to_string()),
            system_clipboard: Some(true),
            quiet: Some(false),
        }
    }

    /// Create an empty config (all None)
    pub fn empty() -> Self {
        Self::default()
    }

    /// Merge this config with another, where other takes precedence.
    /// Only non-None values from other will override this.
    pub fn merge(self, other: Self) -> Self {
        Self {
            action: other.action.or(self.action),
            system_clipboard: other.system_clipboard.or(self.system_clipboard),
            quiet: other.quiet.or(self.quiet),
        }
    }

    /// Get action as parsed Action, or Copy if not set/invalid
    pub fn action_or_default(&self) -> Action {
        self.action
            .as_ref()
            .and_then(|s| s.parse().ok())
            .unwrap_or_default()
    }

    /// Get system clipboard setting, or true if not set
    pub fn system_clipboard_or_default(&self) -> bool {
        self.system_clipboard.unwrap_or(true)
    }

    /// Get quiet setting, or false if not set
    pub fn quiet_or_default(&self) -> bool {
        self.quiet.unwrap_or(false)
    }
}
