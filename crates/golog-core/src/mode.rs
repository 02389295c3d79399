//! Transport mode selection.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Default transport selector.
pub const DEFAULT_MODE: &str = "http";

/// Rejected transport selector.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModeError {
    #[error("mode {0:?} not supported")]
    Unsupported(String),
}

/// Transport that feeds client lines into the funnel.
///
/// Only one transport runs per process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TransportMode {
    /// Form-encoded `POST /log` (or `GET /log?…`) over HTTP.
    #[default]
    Http,
}

impl TransportMode {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Http => "http",
        }
    }
}

impl fmt::Display for TransportMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TransportMode {
    type Err = ModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "http" => Ok(Self::Http),
            other => Err(ModeError::Unsupported(other.to_string())),
        }
    }
}
