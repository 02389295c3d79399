//! CLI-specific error types and mappings.
//!
//! Every variant is fatal; `main` prints it and exits with [`CliError::exit_code`].

use golog_core::CoreError;
use thiserror::Error;

/// CLI-specific error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Invalid configuration (e.g. unsupported mode).
    #[error("Configuration error: {0}")]
    Config(String),

    /// Log file could not be opened or created.
    #[error("IO error: {0}")]
    Io(String),

    /// Transport failed to start or stopped with an error.
    #[error("Server error: {0}")]
    Server(String),
}

impl CliError {
    /// Map error to a process exit code (see sysexits.h).
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::Config(_) => 78, // EX_CONFIG
            Self::Io(_) => 74,     // EX_IOERR
            Self::Server(_) => 71, // EX_OSERR
        }
    }
}

impl From<CoreError> for CliError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::LogFile(e) => Self::Io(e.to_string()),
            CoreError::Mode(e) => Self::Config(e.to_string()),
            // Raised per request by the HTTP adapter; never during startup.
            CoreError::Validation(e) => Self::Config(e.to_string()),
        }
    }
}
