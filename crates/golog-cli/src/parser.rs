//! Main CLI parser and top-level argument handling.

use std::path::PathBuf;

use clap::Parser;
use golog_core::{DEFAULT_LOG_FILE, DEFAULT_MODE};

/// Command-line interface for the golog ingestion server.
///
/// Each option can also come from the environment (or a `.env` file in the
/// working directory).
#[derive(Debug, Parser)]
#[command(name = "golog")]
#[command(about = "Collect client log lines into a single append-only file")]
#[command(version)]
pub struct Cli {
    /// Path to the log file; created if it does not exist
    #[arg(long, env = "GOLOG_LOGFILE", default_value = DEFAULT_LOG_FILE)]
    pub logfile: PathBuf,

    /// Which protocol to listen on (http)
    #[arg(long, env = "GOLOG_MODE", default_value = DEFAULT_MODE)]
    pub mode: String,

    /// Enable verbose/debug diagnostics on stderr
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,
}
