//! Log ingestion handler.
//!
//! Accepts the `id` and `msg` form fields from a
//! `application/x-www-form-urlencoded` POST body and from the query string.
//! Body values take precedence. A valid request is formatted, handed to the
//! log sink and echoed back.

use axum::body::Bytes;
use axum::extract::{RawQuery, State};
use axum::http::{HeaderMap, Method};
use golog_core::domain::{ID_FIELD, MSG_FIELD};
use golog_core::{FormattedLine, LogMessage};

use crate::error::HttpError;
use crate::form::{FormPairs, request_pairs};
use crate::state::AppState;

/// Raw form fields as decoded from the request.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct LogArgs {
    pub id: Option<String>,
    pub msg: Option<String>,
}

impl LogArgs {
    /// Pick `id` and `msg` out of decoded pairs. The first occurrence of a
    /// repeated key wins; unknown keys are ignored.
    pub fn from_pairs(pairs: FormPairs) -> Self {
        let mut args = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                ID_FIELD => &mut args.id,
                MSG_FIELD => &mut args.msg,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value);
            }
        }
        args
    }

    /// Validate and format.
    pub fn into_line(self) -> Result<FormattedLine, HttpError> {
        Ok(LogMessage::from_fields(self.id, self.msg)?.format())
    }
}

/// Submit one client line.
///
/// Responds with the formatted line on success. Whether the line is
/// eventually persisted is never reported to the client.
pub async fn submit(
    State(state): State<AppState>,
    method: Method,
    RawQuery(query): RawQuery,
    headers: HeaderMap,
    body: Bytes,
) -> Result<String, HttpError> {
    let pairs = request_pairs(&method, query.as_deref(), &headers, &body)
        .inspect_err(|e| tracing::debug!(error = %e, "rejected log request"))?;

    let line = LogArgs::from_pairs(pairs).into_line()?;
    state.sink.submit(line.clone());
    Ok(line.into_string())
}
