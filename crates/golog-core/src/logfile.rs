//! Log file bootstrap: open for append, or create.
//!
//! The funnel needs an already-open, write-only, append-mode handle. An
//! existing file is never truncated; a missing one is created. Any other open
//! failure is fatal to startup and reported as a [`LogFileError`].

use std::fs::{File, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Default log file path, relative to the working directory.
pub const DEFAULT_LOG_FILE: &str = "log.txt";

/// Errors that can occur while opening the log file.
#[derive(Debug, Error)]
pub enum LogFileError {
    /// The file exists but could not be opened for appending.
    #[error("failed to open log file {path}: {reason}")]
    Open { path: PathBuf, reason: String },

    /// The file did not exist and could not be created.
    #[error("failed to create log file {path}: {reason}")]
    Create { path: PathBuf, reason: String },
}

/// Result of trying to open an existing log file.
#[derive(Debug)]
pub enum OpenOutcome {
    /// Opened write-only in append mode.
    Opened(File),
    /// Nothing exists at the path.
    NotFound,
    /// The path exists (or may exist) but opening failed.
    Failed(io::Error),
}

/// Open an existing file write-only in append mode, without creating it.
pub fn open_existing(path: &Path) -> OpenOutcome {
    match OpenOptions::new().append(true).open(path) {
        Ok(file) => OpenOutcome::Opened(file),
        Err(e) if e.kind() == io::ErrorKind::NotFound => OpenOutcome::NotFound,
        Err(e) => OpenOutcome::Failed(e),
    }
}

/// Open `path` for appending, creating it if it does not exist.
pub fn open_or_create(path: &Path) -> Result<File, LogFileError> {
    match open_existing(path) {
        OpenOutcome::Opened(file) => {
            tracing::debug!(path = %path.display(), "opened existing log file");
            Ok(file)
        }
        OpenOutcome::NotFound => {
            // create(true) rather than create_new so a file that appears
            // between the two calls is appended to, not rejected.
            let file = OpenOptions::new()
                .append(true)
                .create(true)
                .open(path)
                .map_err(|e| LogFileError::Create {
                    path: path.to_path_buf(),
                    reason: e.to_string(),
                })?;
            tracing::info!(path = %path.display(), "created log file");
            Ok(file)
        }
        OpenOutcome::Failed(e) => Err(LogFileError::Open {
            path: path.to_path_buf(),
            reason: e.to_string(),
        }),
    }
}
