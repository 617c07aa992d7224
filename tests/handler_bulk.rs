mod common;

use axum::http::StatusCode;
use serde_json::Value;

use common::{BASE_URL, create_test_app};
use qr_shortener::domain::ports::KeyHasher;
use qr_shortener::utils::Sha256KeyHasher;

#[tokio::test]
async fn test_empty_payload_is_ok_and_empty() {
    let app = create_test_app();
    let server = app.server();

    let response = server.post("/api/bulk").form(&[("csv", "")]).await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(body["csv"], "");
}

#[tokio::test]
async fn test_missing_commas_rejected() {
    let app = create_test_app();
    let server = app.server();

    let response = server
        .post("/api/bulk")
        .form(&[("csv", "https://example.com/,alias")])
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert!(body["csv"].as_str().unwrap().contains("missing commas"));
    assert!(app.short_urls.is_empty());
}

#[tokio::test]
async fn test_too_many_commas_rejected() {
    let app = create_test_app();
    let server = app.server();

    let response = server
        .post("/api/fast-bulk")
        .form(&[("csv", "https://example.com/,a,true,,")])
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert!(body["csv"].as_str().unwrap().contains("too many commas"));
}

#[tokio::test]
async fn test_sequential_conversion() {
    let app = create_test_app();
    let server = app.server();

    let csv = "https://a.example/,,\nhttps://b.example/,bee,true\nnot a url,,";
    let response = server.post("/api/bulk").form(&[("csv", csv)]).await;

    assert_eq!(response.status_code(), StatusCode::CREATED);

    let expected = format!(
        "https://a.example/,{base}/{hash}\nhttps://b.example/,{base}/bee,{base}/bee/qr\ninvalid_url\n",
        base = BASE_URL,
        hash = Sha256KeyHasher.hash("https://a.example/"),
    );
    let body: Value = response.json();
    assert_eq!(body["csv"], expected.as_str());
    assert_eq!(app.short_urls.len(), 2);
}

#[tokio::test]
async fn test_fast_conversion_keeps_input_order() {
    let app = create_test_app();
    let server = app.server();

    let rows: Vec<String> = (0..20)
        .map(|i| format!("https://example.com/{i},row{i},"))
        .collect();
    let csv = rows.join("\n");

    let response = server.post("/api/fast-bulk").form(&[("csv", csv)]).await;

    assert_eq!(response.status_code(), StatusCode::CREATED);

    let expected: String = (0..20)
        .map(|i| format!("https://example.com/{i},{BASE_URL}/row{i}\n"))
        .collect();
    let body: Value = response.json();
    assert_eq!(body["csv"], expected.as_str());
}

#[tokio::test]
async fn test_failed_row_does_not_abort_batch() {
    let app = create_test_app();
    let server = app.server();

    server
        .post("/api/link")
        .form(&[("url", "https://taken.example/"), ("alias", "taken")])
        .await;

    let csv = "https://x.example/,taken,\nhttps://y.example/,free,";
    let response = server.post("/api/fast-bulk").form(&[("csv", csv)]).await;

    assert_eq!(response.status_code(), StatusCode::CREATED);
    let body: Value = response.json();
    assert_eq!(
        body["csv"],
        format!("conversion_error\nhttps://y.example/,{BASE_URL}/free\n").as_str()
    );
}
