//! Clipboard action value object

use std::fmt;
use std::str::FromStr;

use crate::domain::error::InvalidActionError;

/// The requested clipboard operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Action {
    #[default]
    Copy,
    Cut,
}

impl Action {
    /// Get the command name used by the host platform
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Copy => "copy",
            Self::Cut => "cut",
        }
    }
}

impl FromStr for Action {
    type Err = InvalidActionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "copy" => Ok(Self::Copy),
            "cut" => Ok(Self::Cut),
            _ => Err(InvalidActionError {
                input: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
