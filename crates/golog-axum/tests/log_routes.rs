//! Integration tests for the `/log` route backed by a real funnel.
//!
//! Each test writes to its own temporary log file and shuts the funnel down
//! before inspecting the file, so every accepted line has been appended.

mod common;

use std::path::Path;
use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use golog_core::{LOG_TAG, LogFunnel, open_or_create};
use golog_axum::{bootstrap, create_router};
use tempfile::TempDir;

use common::{FORM_CONTENT_TYPE, get, post_form, send};

struct Harness {
    app: Router,
    funnel: LogFunnel,
    dir: TempDir,
}

impl Harness {
    fn new() -> Self {
        let dir = tempfile::tempdir().unwrap();
        let file = open_or_create(&dir.path().join("log.txt")).unwrap();
        let funnel = LogFunnel::start_with_echo(file, tokio::io::sink());
        let app = create_router(bootstrap(Arc::new(funnel.handle())));
        Self { app, funnel, dir }
    }

    /// Drop the router, drain the funnel and return the file's lines.
    async fn finish(self) -> Vec<String> {
        let Self { app, funnel, dir } = self;
        drop(app);
        funnel.shutdown().await;
        read_lines(&dir.path().join("log.txt"))
    }
}

fn read_lines(path: &Path) -> Vec<String> {
    std::fs::read_to_string(path)
        .unwrap()
        .lines()
        .map(str::to_string)
        .collect()
}

#[tokio::test]
async fn valid_post_is_acknowledged_and_appended() {
    let harness = Harness::new();

    let (status, body) = send(&harness.app, post_form("id=alice&msg=hello")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "client alice: hello");

    let lines = harness.finish().await;
    assert_eq!(lines.len(), 1);
    assert!(lines[0].starts_with(LOG_TAG));
    assert!(lines[0].ends_with("client alice: hello"));
}

#[tokio::test]
async fn valid_get_query_is_accepted() {
    let harness = Harness::new();

    let (status, body) = send(&harness.app, get("/log?id=bob&msg=hi%20there")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "client bob: hi there");

    let lines = harness.finish().await;
    assert_eq!(lines.len(), 1);
    assert!(lines[0].ends_with("client bob: hi there"));
}

#[tokio::test]
async fn plus_and_percent_escapes_are_decoded() {
    let harness = Harness::new();

    let (status, body) = send(&harness.app, post_form("id=svc%2F1&msg=a+b%26c")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "client svc/1: a b&c");

    harness.finish().await;
}

#[tokio::test]
async fn empty_id_is_rejected_and_nothing_written() {
    let harness = Harness::new();

    let (status, body) = send(&harness.app, post_form("id=&msg=hi")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, "id missing");

    assert!(harness.finish().await.is_empty());
}

#[tokio::test]
async fn missing_id_is_reported_even_without_msg() {
    let harness = Harness::new();

    for form in ["msg=hi", "", "other=1"] {
        let (status, body) = send(&harness.app, post_form(form)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "form {form:?}");
        assert_eq!(body, "id missing", "form {form:?}");
    }

    assert!(harness.finish().await.is_empty());
}

#[tokio::test]
async fn missing_msg_is_rejected() {
    let harness = Harness::new();

    for form in ["id=alice", "id=alice&msg="] {
        let (status, body) = send(&harness.app, post_form(form)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "form {form:?}");
        assert_eq!(body, "msg missing", "form {form:?}");
    }

    assert!(harness.finish().await.is_empty());
}

#[tokio::test]
async fn bad_escape_in_body_is_rejected() {
    let harness = Harness::new();

    let (status, body) = send(&harness.app, post_form("id=alice&msg=%zz")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(
        body.starts_with("failed to parse args: "),
        "unexpected body: {body}"
    );
    assert!(body.contains(r#"invalid URL escape "%zz""#), "unexpected body: {body}");

    assert!(harness.finish().await.is_empty());
}

#[tokio::test]
async fn bad_escape_in_query_is_rejected() {
    let harness = Harness::new();

    let (status, body) = send(&harness.app, get("/log?id=alice&msg=%zz")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(
        body.starts_with("failed to parse args: "),
        "unexpected body: {body}"
    );

    assert!(harness.finish().await.is_empty());
}

#[tokio::test]
async fn post_with_query_only_is_accepted() {
    let harness = Harness::new();

    let request = Request::builder()
        .method("POST")
        .uri("/log?id=alice&msg=hello")
        .body(Body::empty())
        .unwrap();
    let (status, body) = send(&harness.app, request).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "client alice: hello");

    let lines = harness.finish().await;
    assert_eq!(lines.len(), 1);
    assert!(lines[0].ends_with("client alice: hello"));
}

#[tokio::test]
async fn body_value_overrides_query_value() {
    let harness = Harness::new();

    let request = Request::builder()
        .method("POST")
        .uri("/log?id=query&msg=from-query")
        .header(header::CONTENT_TYPE, FORM_CONTENT_TYPE)
        .body(Body::from("msg=from-body"))
        .unwrap();
    let (status, body) = send(&harness.app, request).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "client query: from-body");

    harness.finish().await;
}

#[tokio::test]
async fn non_form_body_is_ignored() {
    let harness = Harness::new();

    let request = Request::builder()
        .method("POST")
        .uri("/log")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(r#"{"id":"alice","msg":"hello"}"#))
        .unwrap();
    let (status, body) = send(&harness.app, request).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, "id missing");

    assert!(harness.finish().await.is_empty());
}

#[tokio::test]
async fn embedded_newline_is_written_verbatim() {
    let harness = Harness::new();

    let (status, body) = send(&harness.app, post_form("id=alice&msg=a%0Ab")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "client alice: a\nb");

    let lines = harness.finish().await;
    assert_eq!(lines.len(), 2);
    assert!(lines[0].starts_with(LOG_TAG));
    assert!(lines[0].ends_with("client alice: a"));
    assert_eq!(lines[1], "b");
}

#[tokio::test]
async fn concurrent_submissions_each_produce_one_line() {
    const CLIENTS: usize = 100;

    let harness = Harness::new();

    let mut tasks = Vec::with_capacity(CLIENTS);
    for n in 0..CLIENTS {
        let app = harness.app.clone();
        tasks.push(tokio::spawn(async move {
            send(&app, post_form(&format!("id=c{n}&msg=payload-{n}"))).await
        }));
    }
    for (n, task) in tasks.into_iter().enumerate() {
        let (status, body) = task.await.unwrap();
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, format!("client c{n}: payload-{n}"));
    }

    let lines = harness.finish().await;
    assert_eq!(lines.len(), CLIENTS);
    for n in 0..CLIENTS {
        let suffix = format!("client c{n}: payload-{n}");
        assert_eq!(
            lines.iter().filter(|l| l.ends_with(&suffix)).count(),
            1,
            "expected exactly one line for {suffix}"
        );
    }
    assert!(lines.iter().all(|l| l.starts_with(LOG_TAG)));
}

#[tokio::test]
async fn restart_appends_after_previous_lines() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("log.txt");

    for (run, id) in ["first", "second"].into_iter().enumerate() {
        let funnel = LogFunnel::start_with_echo(open_or_create(&path).unwrap(), tokio::io::sink());
        let app = create_router(bootstrap(Arc::new(funnel.handle())));

        let (status, _) = send(&app, post_form(&format!("id={id}&msg=run-{run}"))).await;
        assert_eq!(status, StatusCode::OK);

        drop(app);
        funnel.shutdown().await;
    }

    let lines = read_lines(&path);
    assert_eq!(lines.len(), 2);
    assert!(lines[0].ends_with("client first: run-0"));
    assert!(lines[1].ends_with("client second: run-1"));
}

#[tokio::test]
async fn health_endpoint_returns_ok() {
    let harness = Harness::new();

    let (status, body) = send(&harness.app, get("/health")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "OK");

    harness.finish().await;
}

#[tokio::test]
async fn unsupported_method_is_not_allowed() {
    let harness = Harness::new();

    let request = Request::builder()
        .method("DELETE")
        .uri("/log")
        .body(Body::empty())
        .unwrap();
    let (status, _) = send(&harness.app, request).await;
    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);

    assert!(harness.finish().await.is_empty());
}
