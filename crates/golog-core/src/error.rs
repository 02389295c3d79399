//! Core error type.

use thiserror::Error;

use crate::domain::ValidationError;
use crate::logfile::LogFileError;
use crate::mode::ModeError;

/// Core error type for semantic domain errors.
///
/// Adapters map this to their own error types (HTTP status codes, CLI exit
/// codes).
#[derive(Debug, Error)]
pub enum CoreError {
    /// Invalid client submission.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Log file could not be opened or created.
    #[error(transparent)]
    LogFile(#[from] LogFileError),

    /// Unsupported configuration value.
    #[error(transparent)]
    Mode(#[from] ModeError),
}
