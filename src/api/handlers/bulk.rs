//! Handlers for CSV bulk conversion.

use axum::{Form, Json, extract::State, http::StatusCode};

use crate::api::dto::bulk::{BulkForm, BulkResponse};
use crate::application::services::BulkOutcome;
use crate::state::AppState;

/// Converts a CSV payload one row at a time.
///
/// # Endpoint
///
/// `POST /api/bulk` (form: `csv`)
///
/// Each row is `target,alias,qrFlag`. Rows that fail are replaced by
/// `invalid_url` or `conversion_error` lines.
///
/// # Response Codes
///
/// - **200 OK**: empty payload, empty `csv`
/// - **201 Created**: converted rows, in input order
/// - **400 Bad Request**: the payload has the wrong comma count
pub async fn bulk_handler(
    State(state): State<AppState>,
    Form(form): Form<BulkForm>,
) -> (StatusCode, Json<BulkResponse>) {
    respond(state.bulk_service.convert(&form.csv).await)
}

/// Converts a CSV payload with rows running concurrently on the bulk pool.
///
/// # Endpoint
///
/// `POST /api/fast-bulk` (form: `csv`)
///
/// Same contract and output order as [`bulk_handler`].
pub async fn fast_bulk_handler(
    State(state): State<AppState>,
    Form(form): Form<BulkForm>,
) -> (StatusCode, Json<BulkResponse>) {
    respond(state.bulk_service.convert_fast(&form.csv).await)
}

fn respond(outcome: BulkOutcome) -> (StatusCode, Json<BulkResponse>) {
    let status = match outcome {
        BulkOutcome::Empty => StatusCode::OK,
        BulkOutcome::Rejected(_) => StatusCode::BAD_REQUEST,
        BulkOutcome::Converted(_) => StatusCode::CREATED,
    };

    (
        status,
        Json(BulkResponse {
            csv: outcome.into_csv(),
        }),
    )
}
