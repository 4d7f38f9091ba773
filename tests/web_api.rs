// HTTP API tests — drive the router in-process with tower's oneshot.
//
// No socket is opened; each test builds a fresh router and sends a single
// request through it.

#![cfg(feature = "web")]

use axum::body::{to_bytes, Body};
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use serde_json::Value;
use std::sync::Arc;
use tower::ServiceExt;

use docsim::config::Config;
use docsim::error::SimilarityError;
use docsim::similarity::{Comparison, DocumentComparer};
use docsim::web::{build_router, AppState};

const BOUNDARY: &str = "docsim-test-boundary";

struct Part<'a> {
    field: &'a str,
    file_name: &'a str,
    content_type: &'a str,
    content: &'a str,
}

fn doc<'a>(file_name: &'a str, content: &'a str) -> Part<'a> {
    Part {
        field: "documents",
        file_name,
        content_type: "text/plain",
        content,
    }
}

fn multipart_body(parts: &[Part<'_>]) -> String {
    let mut body = String::new();
    for part in parts {
        body.push_str(&format!(
            "--{BOUNDARY}\r\n\
             Content-Disposition: form-data; name=\"{}\"; filename=\"{}\"\r\n\
             Content-Type: {}\r\n\r\n{}\r\n",
            part.field, part.file_name, part.content_type, part.content
        ));
    }
    body.push_str(&format!("--{BOUNDARY}--\r\n"));
    body
}

fn router(config: Config) -> Router {
    build_router(AppState::new(config)).unwrap()
}

async fn post_compare(app: Router, parts: &[Part<'_>]) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/compare")
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={BOUNDARY}"),
        )
        .body(Body::from(multipart_body(parts)))
        .unwrap();
    send(app, request).await
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, json)
}

// ============================================================
// Health
// ============================================================

#[tokio::test]
async fn health_reports_ok() {
    let request = Request::builder()
        .uri("/api/health")
        .body(Body::empty())
        .unwrap();
    let (status, body) = send(router(Config::default()), request).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "OK");
}

// ============================================================
// Compare: success
// ============================================================

#[tokio::test]
async fn identical_uploads_score_one() {
    let (status, body) = post_compare(
        router(Config::default()),
        &[doc("a.txt", "the cat sat"), doc("b.txt", "The cat sat.")],
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["similarity"], 1.0);
    assert_eq!(body["message"], "Documents similarity score: 1.0000");
}

#[tokio::test]
async fn disjoint_uploads_score_zero() {
    let (status, body) = post_compare(
        router(Config::default()),
        &[doc("a.txt", "apple banana"), doc("b.txt", "car truck")],
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["similarity"], 0.0);
    assert_eq!(body["message"], "Documents similarity score: 0.0000");
}

#[tokio::test]
async fn txt_extension_accepted_without_text_content_type() {
    let mut a = doc("a.txt", "one two");
    a.content_type = "application/octet-stream";
    let (status, _) =
        post_compare(router(Config::default()), &[a, doc("b.txt", "one two")]).await;
    assert_eq!(status, StatusCode::OK);
}

// ============================================================
// Compare: failures
// ============================================================

#[tokio::test]
async fn empty_document_is_unprocessable() {
    let (status, body) = post_compare(
        router(Config::default()),
        &[doc("a.txt", "...!!!"), doc("b.txt", "real words")],
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error"], "empty_document");
    assert!(body["details"].as_str().unwrap().contains("first document"));
}

#[tokio::test]
async fn single_document_is_rejected() {
    let (status, body) =
        post_compare(router(Config::default()), &[doc("a.txt", "only one")]).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "expected_two_documents");
    assert_eq!(body["details"], "Please upload exactly 2 documents");
}

#[tokio::test]
async fn three_documents_are_rejected() {
    let (status, body) = post_compare(
        router(Config::default()),
        &[doc("a.txt", "one"), doc("b.txt", "two"), doc("c.txt", "three")],
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "expected_two_documents");
}

#[tokio::test]
async fn non_text_file_is_rejected() {
    let mut pdf = doc("paper.pdf", "%PDF-1.4");
    pdf.content_type = "application/pdf";
    let (status, body) =
        post_compare(router(Config::default()), &[pdf, doc("b.txt", "words")]).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "unsupported_file_type");
}

#[tokio::test]
async fn unexpected_field_is_rejected() {
    let mut other = doc("a.txt", "words");
    other.field = "attachment";
    let (status, body) =
        post_compare(router(Config::default()), &[other, doc("b.txt", "words")]).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "unexpected_field");
}

#[tokio::test]
async fn oversized_document_is_rejected() {
    let config = Config {
        max_document_bytes: 16,
        ..Config::default()
    };
    let big = "word ".repeat(10);
    let (status, body) =
        post_compare(router(config), &[doc("a.txt", &big), doc("b.txt", "small")]).await;
    assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
    assert_eq!(body["error"], "document_too_large");
}

#[tokio::test]
async fn non_multipart_request_is_rejected() {
    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/compare")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{}"))
        .unwrap();
    let (status, body) = send(router(Config::default()), request).await;
    assert!(status.is_client_error(), "got {status}");
    assert_eq!(body["error"], "invalid_upload");
}

#[tokio::test]
async fn document_over_body_limit_is_too_large() {
    let config = Config {
        max_document_bytes: 16,
        ..Config::default()
    };
    let huge = "word ".repeat(14_000);
    assert!(huge.len() > config.max_body_bytes());

    let (status, body) =
        post_compare(router(config), &[doc("a.txt", &huge), doc("b.txt", "small")]).await;
    assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
    assert_eq!(body["error"], "document_too_large");
}

/// Comparer whose worker dies mid-comparison.
struct CrashingComparer;

impl DocumentComparer for CrashingComparer {
    fn compare(&self, _: &str, _: &str) -> Result<Comparison, SimilarityError> {
        panic!("comparison worker crashed");
    }
}

#[tokio::test]
async fn crashed_worker_is_internal_error() {
    let state = AppState {
        config: Arc::new(Config::default()),
        comparer: Arc::new(CrashingComparer),
    };
    let app = build_router(state).unwrap();
    let (status, body) = post_compare(app, &[doc("a.txt", "one"), doc("b.txt", "two")]).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "comparison_failed");
    assert_eq!(body["details"], "Error processing documents");
}

// ============================================================
// CORS and configuration
// ============================================================

#[tokio::test]
async fn preflight_allows_frontend_origin_with_credentials() {
    let request = Request::builder()
        .method(Method::OPTIONS)
        .uri("/api/compare")
        .header(header::ORIGIN, "http://localhost:3000")
        .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
        .body(Body::empty())
        .unwrap();
    let response = router(Config::default()).oneshot(request).await.unwrap();
    let headers = response.headers();
    assert_eq!(
        headers[header::ACCESS_CONTROL_ALLOW_ORIGIN],
        "http://localhost:3000"
    );
    assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_CREDENTIALS], "true");
}

#[test]
fn invalid_frontend_url_fails_router_build() {
    let config = Config {
        frontend_url: "http://bad\norigin".to_string(),
        ..Config::default()
    };
    assert!(build_router(AppState::new(config)).is_err());
}
