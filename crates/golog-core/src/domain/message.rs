//! Log message value types.
//!
//! A `LogMessage` is built once per inbound request from the client-supplied
//! `id` and `msg` fields. Its only derived form is the `FormattedLine`, which is
//! both what the client gets back and what the funnel writes.

use std::fmt;

use thiserror::Error;

/// Name of the client identifier field.
pub const ID_FIELD: &str = "id";

/// Name of the message body field.
pub const MSG_FIELD: &str = "msg";

/// Validation failure while building a [`LogMessage`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field was absent or empty.
    #[error("{0} missing")]
    MissingField(&'static str),
}

/// A single client submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogMessage {
    client_id: String,
    body: String,
}

impl LogMessage {
    /// Build a message from possibly-absent request fields.
    ///
    /// The client id is checked first, so a request missing both fields
    /// reports `id missing`.
    pub fn from_fields(
        client_id: Option<String>,
        body: Option<String>,
    ) -> Result<Self, ValidationError> {
        let client_id = client_id
            .filter(|id| !id.is_empty())
            .ok_or(ValidationError::MissingField(ID_FIELD))?;
        let body = body
            .filter(|msg| !msg.is_empty())
            .ok_or(ValidationError::MissingField(MSG_FIELD))?;

        Ok(Self { client_id, body })
    }

    /// Build a message from present fields, rejecting empty strings.
    pub fn new(
        client_id: impl Into<String>,
        body: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        Self::from_fields(Some(client_id.into()), Some(body.into()))
    }

    pub fn client_id(&self) -> &str {
        &self.client_id
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    /// Render the display line, `client <id>: <body>`.
    pub fn format(&self) -> FormattedLine {
        FormattedLine(format!("client {}: {}", self.client_id, self.body))
    }
}

/// Human-readable form of a [`LogMessage`].
///
/// Returned verbatim to the client and handed to the funnel, which stamps it
/// before writing.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FormattedLine(String);

impl FormattedLine {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for FormattedLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&LogMessage> for FormattedLine {
    fn from(message: &LogMessage) -> Self {
        message.format()
    }
}
