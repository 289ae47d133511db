//! Health Check and Metrics API Tests

use axum::http::StatusCode;

use crate::common::{education_shelf, TestApp};

/// Test basic health check endpoint returns 200 OK with a status field
#[tokio::test]
async fn test_health_check_returns_ok() {
    let app = TestApp::new().await;

    let (status, body) = app.get("/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
}

/// Test liveness probe endpoint
#[tokio::test]
async fn test_liveness_probe() {
    let app = TestApp::new().await;

    let (status, body) = app.get("/health/live").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "alive");
}

/// Readiness reports the in-memory backend and its book count
#[tokio::test]
async fn test_readiness_probe() {
    let app = TestApp::with_books(education_shelf()).await;

    let (status, body) = app.get("/health/ready").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["storage"]["backend"], "memory");
    assert_eq!(body["storage"]["book_count"], 3);
}

/// Requests show up in the Prometheus output under their route pattern
#[tokio::test]
async fn test_metrics_endpoint_records_requests() {
    let app = TestApp::with_books(education_shelf()).await;
    app.get("/api/v1/book/2").await;

    let (status, text) = app.get_text("/metrics").await;

    assert_eq!(status, StatusCode::OK);
    assert!(text.contains("book_manager_http_requests_total"));
    assert!(text.contains("/api/v1/book/{id}"));
}
