//! HTTP request handlers for the ingestion server.
//!
//! Handlers are thin: they decode the request, delegate to `golog-core` and
//! hand accepted lines to the sink held in `AppState`.

pub mod log;
