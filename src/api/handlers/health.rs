//! Handler for health check endpoint.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::health::{CheckStatus, HealthChecks, HealthResponse};
use crate::domain::queue::JobSender;
use crate::state::AppState;

/// Returns service health status with component checks.
///
/// # Endpoint
///
/// `GET /health`
///
/// # Response Codes
///
/// - **200 OK**: All components healthy
/// - **503 Service Unavailable**: One or more components degraded
///
/// # Components Checked
///
/// 1. **Database**: `SELECT 1`, or reports the in-memory store
/// 2. **Queues**: Open, with free slots out of capacity
/// 3. **QR store**: Backend ping
pub async fn health_handler(
    State(state): State<AppState>,
) -> Result<Json<HealthResponse>, (StatusCode, Json<HealthResponse>)> {
    let database = check_database(&state).await;
    let reachability_queue = check_queue(state.shorten_service.reachability_jobs());
    let qr_queue = check_queue(state.shorten_service.qr_jobs());
    let qr_store = check_qr_store(&state).await;

    let all_healthy =
        database.is_ok() && reachability_queue.is_ok() && qr_queue.is_ok() && qr_store.is_ok();

    let response = HealthResponse {
        status: if all_healthy { "healthy" } else { "degraded" }.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks: HealthChecks {
            database,
            reachability_queue,
            qr_queue,
            qr_store,
        },
    };

    if all_healthy {
        Ok(Json(response))
    } else {
        Err((StatusCode::SERVICE_UNAVAILABLE, Json(response)))
    }
}

async fn check_database(state: &AppState) -> CheckStatus {
    let Some(pool) = &state.db else {
        return CheckStatus::ok("In-memory store");
    };

    match sqlx::query("SELECT 1").execute(pool.as_ref()).await {
        Ok(_) => CheckStatus::ok("Connected"),
        Err(e) => CheckStatus::error(format!("Database error: {}", e)),
    }
}

fn check_queue<T>(queue: &JobSender<T>) -> CheckStatus {
    if queue.is_closed() {
        CheckStatus::error("Queue is closed")
    } else {
        CheckStatus::ok(format!(
            "Free: {}/{}",
            queue.available(),
            queue.max_capacity()
        ))
    }
}

async fn check_qr_store(state: &AppState) -> CheckStatus {
    if state.qr_store.health_check().await {
        CheckStatus::ok("Reachable")
    } else {
        CheckStatus::error("QR store unreachable")
    }
}
