//! CLI-specific error types and mappings.
//!
//! Maps load and data source errors to exit codes and user-facing messages.

use authenv_core::{AuthorityLoadError, DataSourceError};
use thiserror::Error;

/// CLI-specific error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Argument parsing error.
    #[error("Invalid arguments: {0}")]
    Arguments(String),

    /// IO error (file not found, permission denied, etc.).
    #[error("IO error: {0}")]
    Io(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Database error.
    #[error("Database error: {0}")]
    Database(String),
}

impl CliError {
    /// Map error to appropriate exit code.
    ///
    /// Exit codes follow sysexits.h where one fits.
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Arguments(_) => 2, // EX_USAGE
            Self::Database(_) => 69, // EX_UNAVAILABLE
            Self::Io(_) => 74,       // EX_IOERR
            Self::Config(_) => 78,   // EX_CONFIG
        }
    }
}

impl From<AuthorityLoadError> for CliError {
    fn from(err: AuthorityLoadError) -> Self {
        match err {
            AuthorityLoadError::Io { .. } => Self::Io(err.to_string()),
            AuthorityLoadError::Yaml(_) | AuthorityLoadError::Json(_) => {
                Self::Config(err.to_string())
            }
        }
    }
}

impl From<DataSourceError> for CliError {
    fn from(err: DataSourceError) -> Self {
        match err {
            DataSourceError::Connect(_) => Self::Database(err.to_string()),
            DataSourceError::Configuration(_) => Self::Config(err.to_string()),
        }
    }
}
