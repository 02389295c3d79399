//! # golog-core
//!
//! Domain types, the submission port and the single-writer funnel behind
//! golog. Transport adapters (`golog-axum`) validate requests into
//! [`LogMessage`]s and hand the resulting [`FormattedLine`]s to a
//! [`LogSinkPort`]; the [`LogFunnel`] is the production implementation and the
//! only code that ever writes the log file.

#![deny(unused_crate_dependencies)]

pub mod domain;
pub mod error;
pub mod funnel;
pub mod logfile;
pub mod mode;
pub mod ports;

// Re-export commonly used types for convenience
pub use domain::{FormattedLine, LogMessage, ValidationError};
pub use error::CoreError;
pub use funnel::{FunnelHandle, LOG_TAG, LogFunnel};
pub use logfile::{DEFAULT_LOG_FILE, LogFileError, OpenOutcome, open_existing, open_or_create};
pub use mode::{DEFAULT_MODE, ModeError, TransportMode};
pub use ports::{LogSinkPort, NoopLogSink};

#[cfg(test)]
use tempfile as _;
#[cfg(test)]
use tokio_test as _;
