//! Axum-specific error types and mappings.
//!
//! Every client-visible failure is a `400 Bad Request` with a plain-text body
//! describing the problem.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use golog_core::ValidationError;
use thiserror::Error;

/// Axum-specific error type.
#[derive(Debug, Error)]
pub enum HttpError {
    /// Request parameters could not be parsed at all.
    #[error("failed to parse args: {0}")]
    MalformedRequest(String),

    /// Parameters parsed but failed validation.
    #[error("{0}")]
    BadRequest(String),
}

impl HttpError {
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::MalformedRequest(_) | Self::BadRequest(_) => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        (self.status(), self.to_string()).into_response()
    }
}

impl From<ValidationError> for HttpError {
    fn from(err: ValidationError) -> Self {
        Self::BadRequest(err.to_string())
    }
}
