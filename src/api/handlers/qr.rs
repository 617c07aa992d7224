//! Handler for rendered QR images.

use axum::{
    extract::{Path, State},
    http::header,
    response::IntoResponse,
};

use crate::error::AppError;
use crate::infrastructure::qr::SVG_CONTENT_TYPE;
use crate::state::AppState;

/// Serves the QR image of a key.
///
/// # Endpoint
///
/// `GET /{key}/qr`
///
/// # Errors
///
/// - 404 `not_found` if the key is unknown
/// - 404 `qr_not_available` if no QR was requested or it is not rendered yet
pub async fn qr_handler(
    Path(key): Path<String>,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let image = state.qr_service.get_qr(&key).await?;

    Ok(([(header::CONTENT_TYPE, SVG_CONTENT_TYPE)], image))
}
