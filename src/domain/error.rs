//! Domain error types

use thiserror::Error;

/// Error when parsing an action string
#[derive(Debug, Clone, Error)]
#[error("Invalid action: \"{input}\". Use either \"copy\" or \"cut\"")]
pub struct InvalidActionError {
    pub input: String,
}

/// Error raised while validating a clipboard request.
///
/// These are construction-time failures: no selection or command work has
/// happened when one of these is returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RequestError {
    #[error("Invalid target: no such element on the page")]
    UnknownTarget,

    #[error("Invalid target: cannot copy from a disabled element, use \"readonly\" instead of \"disabled\"")]
    CopyFromDisabled,

    #[error("Invalid target: cannot cut text from elements with \"readonly\" or \"disabled\" attributes")]
    CutFromImmutable,

    #[error("Invalid container: no such element on the page")]
    UnknownContainer,
}

/// Error when configuration fails
#[derive(Debug, Clone, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(String),

    #[error("Failed to parse config file: {0}")]
    ParseError(String),

    #[error("Failed to write config file: {0}")]
    WriteError(String),

    #[error("Invalid config value for '{key}': {message}")]
    ValidationError { key: String, message: String },

    #[error("Config file already exists at: {0}")]
    AlreadyExists(String),
}
