//! End-to-end tests for the HTTP surface.
//!
//! Each test builds the router the binary serves and drives it in-process.

use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::Router;
use chrono::DateTime;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use tower::ServiceExt;

use devops_portal::api::{create_router, AppState};
use devops_portal::Config;

fn app() -> Router {
    create_router(AppState::default())
}

async fn get(app: Router, uri: &str) -> (StatusCode, Vec<u8>) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, body.to_vec())
}

#[tokio::test]
async fn index_page_loads() {
    let (status, body) = get(app(), "/").await;
    let html = String::from_utf8(body).unwrap();

    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("DevOps"));
    assert!(html.contains("Angel Adalberto"));
}

#[tokio::test]
async fn status_endpoint() {
    let (status, body) = get(app(), "/api/status").await;
    assert_eq!(status, StatusCode::OK);

    let data: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(data["status"], "OK");
    assert_eq!(data["environment"], "development");

    let timestamp = data["timestamp"].as_str().expect("timestamp is a string");
    assert!(
        DateTime::parse_from_rfc3339(timestamp).is_ok(),
        "timestamp {} is not a valid date-time",
        timestamp
    );
}

#[tokio::test]
async fn health_endpoint() {
    let (status, body) = get(app(), "/api/health").await;
    assert_eq!(status, StatusCode::OK);

    let data: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(
        data,
        json!({"health": "healthy", "version": "1.0.0", "uptime": "running"})
    );
}

#[tokio::test]
async fn health_endpoint_is_byte_identical_across_calls() {
    let router = app();

    let (_, first) = get(router.clone(), "/api/health").await;
    let (_, second) = get(router, "/api/health").await;

    assert_eq!(first, second);
}

#[tokio::test]
async fn nonexistent_endpoint() {
    let (status, _) = get(app(), "/nonexistent").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn environment_setting_reaches_status_endpoint() {
    let config = Config::from_vars([("ENVIRONMENT", "production")]).unwrap();
    let router = create_router(AppState::from_config(&config));

    let (status, body) = get(router, "/api/status").await;
    assert_eq!(status, StatusCode::OK);

    let data: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(data["environment"], "production");
}
