//! API route configuration.

use crate::api::handlers::{
    bulk_handler, create_link_handler, fast_bulk_handler, link_info_handler,
    link_status_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// All `/api` routes.
///
/// # Endpoints
///
/// - `POST /link`              - Create a short URL
/// - `GET  /link/{key}`        - Click summary for a key
/// - `GET  /link/{key}/status` - Reachability status for a key
/// - `POST /bulk`              - Convert a CSV payload row by row
/// - `POST /fast-bulk`         - Convert a CSV payload on the bulk pool
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/link", post(create_link_handler))
        .route("/link/{key}", get(link_info_handler))
        .route("/link/{key}/status", get(link_status_handler))
        .route("/bulk", post(bulk_handler))
        .route("/fast-bulk", post(fast_bulk_handler))
}
