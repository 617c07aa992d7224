mod common;

use axum::http::StatusCode;
use serde_json::Value;

use common::{create_test_app, create_test_app_with_capacity};

#[tokio::test]
async fn test_health_with_in_memory_stores() {
    let app = create_test_app();
    let server = app.server();

    let response = server.get("/health").await;

    assert_eq!(response.status_code(), StatusCode::OK);

    let body: Value = response.json();
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["checks"]["database"]["status"], "ok");
    assert_eq!(body["checks"]["database"]["message"], "In-memory store");
    assert_eq!(body["checks"]["qr_store"]["status"], "ok");
}

#[tokio::test]
async fn test_health_reports_queue_capacity() {
    let app = create_test_app_with_capacity(8);
    let server = app.server();

    server
        .post("/api/link")
        .form(&[("url", "https://example.com/")])
        .await;

    let body: Value = server.get("/health").await.json();

    assert_eq!(body["checks"]["reachability_queue"]["message"], "Free: 7/8");
    assert_eq!(body["checks"]["qr_queue"]["message"], "Free: 8/8");
}

#[tokio::test]
async fn test_health_degraded_when_workers_are_gone() {
    let mut app = create_test_app();
    drop(app.reachability_rx.take());
    let server = app.server();

    let response = server.get("/health").await;

    assert_eq!(response.status_code(), StatusCode::SERVICE_UNAVAILABLE);
    let body: Value = response.json();
    assert_eq!(body["status"], "degraded");
    assert_eq!(body["checks"]["reachability_queue"]["status"], "error");
}
