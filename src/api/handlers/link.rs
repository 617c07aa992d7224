//! Handlers for link creation and per-link reads.

use axum::{
    Form, Json,
    extract::{Path, State},
    http::{StatusCode, header},
    response::IntoResponse,
};
use serde_json::json;
use tracing::{error, info};
use validator::Validate;

use crate::api::dto::link::{
    CreateLinkForm, CreatedLinkProperties, CreatedLinkResponse, LinkStatusResponse,
};
use crate::api::extract::ClientIp;
use crate::application::services::ClickSummary;
use crate::error::AppError;
use crate::state::AppState;

/// Creates a short URL.
///
/// # Endpoint
///
/// `POST /api/link` (form: `url`, `sponsor?`, `alias?`, `qrBool?`)
///
/// The creation runs on its own task; its follow-up jobs are queued before
/// the response is sent.
///
/// # Response
///
/// `201 Created` with `Location: <short url>` and
///
/// ```json
/// { "url": "http://localhost:8080/0f115db0", "properties": { "qr": "http://localhost:8080/0f115db0/qr" } }
/// ```
///
/// # Errors
///
/// - 400 `invalid_url`, `alias_contains_slash`, `validation_error`
/// - 409 `key_already_exists`
pub async fn create_link_handler(
    State(state): State<AppState>,
    ClientIp(ip): ClientIp,
    Form(form): Form<CreateLinkForm>,
) -> Result<impl IntoResponse, AppError> {
    form.validate()?;

    let shorten_service = state.shorten_service.clone();
    let properties = form.properties(ip);
    let url = form.url;

    let outcome = tokio::spawn(async move { shorten_service.shorten(&url, properties).await })
        .await
        .map_err(|e| {
            error!("Creation task failed: {}", e);
            AppError::internal("Creation task failed", json!({}))
        })??;

    info!("Created {} -> {}", outcome.record.key, outcome.record.target_url);

    let body = CreatedLinkResponse {
        url: outcome.short_url.clone(),
        properties: CreatedLinkProperties {
            qr: outcome.qr_url,
        },
    };

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, outcome.short_url)],
        Json(body),
    ))
}

/// Returns the click summary of a key.
///
/// # Endpoint
///
/// `GET /api/link/{key}`
///
/// # Errors
///
/// Returns 404 Not Found if the key is unknown.
pub async fn link_info_handler(
    Path(key): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<ClickSummary>, AppError> {
    Ok(Json(state.click_service.summary(&key).await?))
}

/// Returns the cached reachability status of a key.
///
/// # Endpoint
///
/// `GET /api/link/{key}/status`
///
/// `reachability_status` is `null` until the first probe completes.
///
/// # Errors
///
/// Returns 404 Not Found if the key is unknown.
pub async fn link_status_handler(
    Path(key): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<LinkStatusResponse>, AppError> {
    let reachability_status = state.short_url_service.reachability_status(&key).await?;

    Ok(Json(LinkStatusResponse {
        key,
        reachability_status,
    }))
}
