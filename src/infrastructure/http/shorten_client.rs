//! Bulk shorten client calling the service's own HTTP API.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use reqwest::header::LOCATION;
use serde::Deserialize;
use serde_json::json;
use tracing::debug;

use crate::application::services::ShortenClient;
use crate::error::AppError;

#[derive(Deserialize)]
struct CreatedBody {
    url: String,
}

#[derive(Deserialize)]
struct ErrorBody {
    error: ErrorDetail,
}

#[derive(Deserialize)]
struct ErrorDetail {
    code: String,
}

/// [`ShortenClient`] posting each row to `POST {base}/api/link`.
///
/// The short URL is read from the `Location` header, falling back to the
/// `url` field of the body. Only `invalid_url` rejections keep their
/// meaning; every other failure is reported as an internal error.
pub struct HttpShortenClient {
    client: Client,
    endpoint: String,
}

impl HttpShortenClient {
    pub fn new(api_base_url: &str, timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            endpoint: format!("{}/api/link", api_base_url.trim_end_matches('/')),
        })
    }
}

#[async_trait]
impl ShortenClient for HttpShortenClient {
    async fn shorten(
        &self,
        url: &str,
        alias: &str,
        qr_enabled: bool,
    ) -> Result<String, AppError> {
        let qr_flag = if qr_enabled { "true" } else { "false" };
        let form = [("url", url), ("alias", alias), ("qrBool", qr_flag)];

        let response = self
            .client
            .post(&self.endpoint)
            .form(&form)
            .send()
            .await
            .map_err(|e| {
                AppError::internal("Shorten request failed", json!({ "reason": e.to_string() }))
            })?;

        let status = response.status();
        if status.is_success() {
            if let Some(location) = response
                .headers()
                .get(LOCATION)
                .and_then(|v| v.to_str().ok())
            {
                return Ok(location.to_string());
            }

            let body: CreatedBody = response.json().await.map_err(|e| {
                AppError::internal("Malformed shorten response", json!({ "reason": e.to_string() }))
            })?;
            return Ok(body.url);
        }

        let code = response
            .json::<ErrorBody>()
            .await
            .map(|b| b.error.code)
            .unwrap_or_default();
        debug!("Shorten API rejected {} with {} {}", url, status, code);

        if code == "invalid_url" {
            Err(AppError::invalid_url(url))
        } else {
            Err(AppError::internal(
                "Shorten request rejected",
                json!({ "status": status.as_u16(), "code": code }),
            ))
        }
    }
}
