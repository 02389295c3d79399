//! Shared helpers for golog-axum integration tests.

#![allow(dead_code)]

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use tower::ServiceExt;

pub const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// Form-encoded `POST /log`.
pub fn post_form(body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/log")
        .header(header::CONTENT_TYPE, FORM_CONTENT_TYPE)
        .body(Body::from(body.to_string()))
        .unwrap()
}

/// `GET` with the given path and query.
pub fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

/// Drive one request through the router and collect the body as text.
pub async fn send(app: &Router, request: Request<Body>) -> (StatusCode, String) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, String::from_utf8(body.to_vec()).unwrap())
}
