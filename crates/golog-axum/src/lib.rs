//! # golog-axum
//!
//! HTTP ingestion adapter for golog. Clients submit form-encoded `id` and
//! `msg` fields to `/log` in the body or the query string; accepted lines are passed to a
//! [`golog_core::LogSinkPort`] and echoed back as `client <id>: <msg>`.

#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

// Silence unused dev-dependency warnings; used by the integration tests
#[cfg(test)]
use http_body_util as _;
#[cfg(test)]
use mockall as _;
#[cfg(test)]
use tempfile as _;
#[cfg(test)]
use tower as _;

pub mod bootstrap;
pub mod error;
pub mod form;
pub mod handlers;
pub mod routes;
pub mod state;

// Re-export primary types
pub use bootstrap::{AxumContext, DEFAULT_PORT, ServerConfig, bootstrap, serve, start_server};
pub use error::HttpError;
pub use routes::create_router;
pub use state::AppState;
