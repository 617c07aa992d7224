//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    http::{HeaderMap, header},
    response::Redirect,
};
use tracing::warn;

use crate::api::extract::ClientIp;
use crate::error::AppError;
use crate::state::AppState;

/// Redirects a key to its target URL.
///
/// # Endpoint
///
/// `GET /{key}`
///
/// # Click Tracking
///
/// The click is recorded on a spawned task with the client IP and the
/// browser/platform parsed from `User-Agent`. Logging failures are reported
/// at `warn` and never affect the redirect.
///
/// # Errors
///
/// Returns 404 Not Found if the key doesn't exist.
pub async fn redirect_handler(
    Path(key): Path<String>,
    State(state): State<AppState>,
    ClientIp(ip): ClientIp,
    headers: HeaderMap,
) -> Result<Redirect, AppError> {
    let record = state.short_url_service.redirect_to(&key).await?;

    let user_agent = headers
        .get(header::USER_AGENT)
        .and_then(|v| v.to_str().ok())
        .map(String::from);

    let click_service = state.click_service.clone();
    tokio::spawn(async move {
        if let Err(e) = click_service
            .log_click(&key, ip, user_agent.as_deref())
            .await
        {
            warn!("Failed to log click for {}: {}", key, e);
        }
    });

    Ok(Redirect::temporary(&record.target_url))
}
