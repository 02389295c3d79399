//! Port definitions (trait abstractions) between the core and its adapters.
//!
//! # Design Rules
//!
//! - No transport types (axum, http) in any signature
//! - No filesystem handles cross a port; the funnel owns the log file

pub mod log_sink;

pub use log_sink::{LogSinkPort, NoopLogSink};
