mod common;

use axum::http::StatusCode;
use serde_json::Value;

use common::{BASE_URL, create_test_app};
use qr_shortener::domain::ports::KeyHasher;
use qr_shortener::domain::repositories::ShortUrlRepository;
use qr_shortener::utils::Sha256KeyHasher;

const TARGET: &str = "https://example.com/some/page";

fn hash(url: &str) -> String {
    Sha256KeyHasher.hash(url)
}

#[tokio::test]
async fn test_create_link_returns_location_and_body() {
    let app = create_test_app();
    let server = app.server();

    let response = server.post("/api/link").form(&[("url", TARGET)]).await;

    assert_eq!(response.status_code(), StatusCode::CREATED);

    let expected = format!("{}/{}", BASE_URL, hash(TARGET));
    assert_eq!(response.header("location").to_str().unwrap(), expected);

    let body: Value = response.json();
    assert_eq!(body["url"], expected.as_str());
    assert!(body["properties"].get("qr").is_none());
}

#[tokio::test]
async fn test_create_link_records_creator_ip_and_sponsor() {
    let app = create_test_app();
    let server = app.server();

    server
        .post("/api/link")
        .form(&[("url", TARGET), ("sponsor", "acme")])
        .await;

    let record = app
        .short_urls
        .find_by_key(&hash(TARGET))
        .await
        .unwrap()
        .unwrap();
    assert_eq!(record.ip.as_deref(), Some("127.0.0.1"));
    assert_eq!(record.sponsor.as_deref(), Some("acme"));
    assert!(!record.qr_enabled);
}

#[tokio::test]
async fn test_repeated_plain_request_returns_same_key() {
    let app = create_test_app();
    let server = app.server();

    let first = server.post("/api/link").form(&[("url", TARGET)]).await;
    let second = server.post("/api/link").form(&[("url", TARGET)]).await;

    assert_eq!(second.status_code(), StatusCode::CREATED);
    assert_eq!(
        first.header("location").to_str().unwrap(),
        second.header("location").to_str().unwrap()
    );
    assert_eq!(app.short_urls.len(), 1);
}

#[tokio::test]
async fn test_qr_request_upgrades_plain_record() {
    let app = create_test_app();
    let server = app.server();

    server.post("/api/link").form(&[("url", TARGET)]).await;
    let response = server
        .post("/api/link")
        .form(&[("url", TARGET), ("qrBool", "true")])
        .await;

    assert_eq!(response.status_code(), StatusCode::CREATED);

    let qr_key = Sha256KeyHasher.qr_key(&hash(TARGET));
    let expected = format!("{}/{}", BASE_URL, qr_key);
    let body: Value = response.json();
    assert_eq!(body["url"], expected.as_str());
    assert_eq!(body["properties"]["qr"], format!("{}/qr", expected).as_str());

    let upgrade = app.short_urls.find_by_key(&qr_key).await.unwrap().unwrap();
    assert!(upgrade.qr_enabled);
    assert_eq!(upgrade.target_url, TARGET);
    assert_eq!(app.short_urls.len(), 2);
}

#[tokio::test]
async fn test_second_qr_request_conflicts() {
    let app = create_test_app();
    let server = app.server();

    let first = server
        .post("/api/link")
        .form(&[("url", TARGET), ("qrBool", "true")])
        .await;
    assert_eq!(first.status_code(), StatusCode::CREATED);

    let second = server
        .post("/api/link")
        .form(&[("url", TARGET), ("qrBool", "true")])
        .await;

    assert_eq!(second.status_code(), StatusCode::CONFLICT);
    let body: Value = second.json();
    assert_eq!(body["error"]["code"], "key_already_exists");
}

#[tokio::test]
async fn test_alias_is_used_as_key() {
    let app = create_test_app();
    let server = app.server();

    let response = server
        .post("/api/link")
        .form(&[("url", TARGET), ("alias", "docs")])
        .await;

    assert_eq!(response.status_code(), StatusCode::CREATED);
    assert_eq!(
        response.header("location").to_str().unwrap(),
        format!("{}/docs", BASE_URL)
    );
    assert!(app.short_urls.find_by_key("docs").await.unwrap().is_some());
}

#[tokio::test]
async fn test_taken_alias_conflicts() {
    let app = create_test_app();
    let server = app.server();

    server
        .post("/api/link")
        .form(&[("url", TARGET), ("alias", "docs")])
        .await;
    let response = server
        .post("/api/link")
        .form(&[("url", "https://other.example.org/"), ("alias", "docs")])
        .await;

    assert_eq!(response.status_code(), StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_alias_with_slash_is_rejected() {
    let app = create_test_app();
    let server = app.server();

    let response = server
        .post("/api/link")
        .form(&[("url", TARGET), ("alias", "a/b")])
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["error"]["code"], "alias_contains_slash");
    assert!(app.short_urls.is_empty());
}

#[tokio::test]
async fn test_invalid_url_is_rejected() {
    let app = create_test_app();
    let server = app.server();

    let response = server
        .post("/api/link")
        .form(&[("url", "not a url")])
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["error"]["code"], "invalid_url");
}

#[tokio::test]
async fn test_status_is_null_until_checked() {
    let app = create_test_app();
    let server = app.server();

    server.post("/api/link").form(&[("url", TARGET)]).await;

    let key = hash(TARGET);
    let response = server.get(&format!("/api/link/{}/status", key)).await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(body["key"], key.as_str());
    assert!(body["reachability_status"].is_null());
}

#[tokio::test]
async fn test_status_of_unknown_key_is_not_found() {
    let app = create_test_app();
    let server = app.server();

    let response = server.get("/api/link/missing/status").await;

    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_link_info_starts_empty() {
    let app = create_test_app();
    let server = app.server();

    server.post("/api/link").form(&[("url", TARGET)]).await;

    let key = hash(TARGET);
    let response = server.get(&format!("/api/link/{}", key)).await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(body["hash"], key.as_str());
    assert_eq!(body["total"], 0);
}

#[tokio::test]
async fn test_creation_enqueues_post_processing_jobs() {
    let mut app = create_test_app();
    let server = app.server();

    server
        .post("/api/link")
        .form(&[("url", TARGET), ("qrBool", "on")])
        .await;

    let reachability = app
        .reachability_rx
        .as_mut()
        .unwrap()
        .dequeue()
        .await
        .unwrap();
    assert_eq!(reachability.key, hash(TARGET));
    assert_eq!(reachability.target_url, TARGET);

    let qr = app.qr_rx.as_mut().unwrap().dequeue().await.unwrap();
    assert_eq!(qr.key, hash(TARGET));
    assert_eq!(qr.short_url, format!("{}/{}", BASE_URL, hash(TARGET)));
}

#[tokio::test]
async fn test_alias_on_foreign_hash_does_not_capture_url() {
    let app = create_test_app();
    let server = app.server();

    let victim_key = hash(TARGET);
    let squat = server
        .post("/api/link")
        .form(&[("url", "https://evil.example/"), ("alias", victim_key.as_str())])
        .await;
    assert_eq!(squat.status_code(), StatusCode::CREATED);

    let plain = server.post("/api/link").form(&[("url", TARGET)]).await;
    assert_eq!(plain.status_code(), StatusCode::CONFLICT);

    let with_qr = server
        .post("/api/link")
        .form(&[("url", TARGET), ("qrBool", "true")])
        .await;
    assert_eq!(with_qr.status_code(), StatusCode::CONFLICT);

    assert_eq!(app.short_urls.len(), 1);
    let qr_key = Sha256KeyHasher.qr_key(&victim_key);
    assert!(app.short_urls.find_by_key(&qr_key).await.unwrap().is_none());
}

#[tokio::test]
async fn test_surrounding_whitespace_maps_to_same_key() {
    let app = create_test_app();
    let server = app.server();

    let padded = server
        .post("/api/link")
        .form(&[("url", format!("  {}\t", TARGET))])
        .await;
    let plain = server.post("/api/link").form(&[("url", TARGET)]).await;

    assert_eq!(padded.status_code(), StatusCode::CREATED);
    assert_eq!(
        padded.header("location").to_str().unwrap(),
        plain.header("location").to_str().unwrap()
    );
    assert_eq!(app.short_urls.len(), 1);

    let record = app
        .short_urls
        .find_by_key(&hash(TARGET))
        .await
        .unwrap()
        .unwrap();
    assert_eq!(record.target_url, TARGET);
}

#[tokio::test]
async fn test_delete_clears_rendered_qr() {
    use qr_shortener::domain::ports::QrStore;

    let app = create_test_app();
    let server = app.server();

    server
        .post("/api/link")
        .form(&[("url", TARGET), ("alias", "gone"), ("qrBool", "true")])
        .await;
    app.qr_store.put("gone", b"<svg/>".to_vec()).await;

    app.state.short_url_service.delete("gone").await.unwrap();

    assert!(app.qr_store.get("gone").await.is_none());
    assert_eq!(
        server.get("/gone/qr").await.status_code(),
        StatusCode::NOT_FOUND
    );
}
