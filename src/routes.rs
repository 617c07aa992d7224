//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /{key}`                   - Redirect to the target URL
//! - `GET  /{key}/qr`                - Rendered QR image
//! - `GET  /health`                  - Health check: store, queues, QR store
//! - `/api/*`                        - Creation, bulk conversion and link info
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Rate limiting** - Per-IP token bucket on `/api`
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::{health_handler, qr_handler, redirect_handler};
use crate::api::middleware::{rate_limit, tracing};
use crate::state::AppState;
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router with all routes and middleware.
///
/// # Arguments
///
/// - `state` - shared application state injected into all handlers
/// - `behind_proxy` - when `true`, rate limiting reads client IP from
///   `X-Forwarded-For` / `X-Real-IP` headers instead of the peer socket address
pub fn app_router(state: AppState, behind_proxy: bool) -> NormalizePath<Router> {
    let api_router = api::routes::api_routes().layer(rate_limit::layer(behind_proxy));

    NormalizePathLayer::trim_trailing_slash().layer(service_router(state, api_router))
}

/// Public routes with `api_router` nested under `/api`, plus request tracing.
///
/// Paths are matched exactly; [`app_router`] adds trailing slash handling.
pub fn service_router(state: AppState, api_router: Router<AppState>) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route("/{key}", get(redirect_handler))
        .route("/{key}/qr", get(qr_handler))
        .nest("/api", api_router)
        .with_state(state)
        .layer(tracing::layer())
}
