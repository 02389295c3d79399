//! # golog-cli
//!
//! Entry point wiring for the `golog` binary: argument parsing, logging,
//! startup validation and the transport run loop.

#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

#[cfg(test)]
use tempfile as _;

// Used by main.rs binary
use dotenvy as _;

pub mod bootstrap;
pub mod error;
pub mod logging;
pub mod parser;

// Re-export primary types for convenient access
pub use bootstrap::{CliConfig, CliContext, bootstrap, run};
pub use error::CliError;
pub use parser::Cli;
