//! Domain types for client log submissions.

mod message;

pub use message::{FormattedLine, ID_FIELD, LogMessage, MSG_FIELD, ValidationError};
