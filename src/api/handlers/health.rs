//! Handler for health check endpoint.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::health::{CheckStatus, HealthChecks, HealthResponse};
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
/// 1. **Database**: Counts gazetteer records
/// 2. **Job Backend**: Checks the job store (Redis PING or in-memory)
/// 3. **Job Queue**: Checks if the worker channel is open and reports capacity
pub async fn health_handler(
    State(state): State<AppState>,
) -> Result<Json<HealthResponse>, (StatusCode, Json<HealthResponse>)> {
    let db_check = check_database(&state).await;

    let backend_check = check_job_backend(&state).await;

    let queue_check = check_job_queue(&state);

    let all_healthy = db_check.is_ok() && backend_check.is_ok() && queue_check.is_ok();

    let response = HealthResponse {
        status: if all_healthy { "healthy" } else { "degraded" }.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks: HealthChecks {
            database: db_check,
            job_backend: backend_check,
            job_queue: queue_check,
        },
    };

    if all_healthy {
        Ok(Json(response))
    } else {
        Err((StatusCode::SERVICE_UNAVAILABLE, Json(response)))
    }
}

async fn check_database(state: &AppState) -> CheckStatus {
    match state.weather_service.city_service().gazetteer_size().await {
        Ok(count) => CheckStatus::ok(format!("Connected, {} cities", count)),
        Err(e) => CheckStatus::error(format!("Database error: {}", e)),
    }
}

async fn check_job_backend(state: &AppState) -> CheckStatus {
    if state.job_queue.store_healthy().await {
        CheckStatus::ok("Job store reachable")
    } else {
        CheckStatus::error("Job store unreachable")
    }
}

fn check_job_queue(state: &AppState) -> CheckStatus {
    if state.job_queue.is_open() {
        CheckStatus::ok(format!("Capacity: {}", state.job_queue.capacity()))
    } else {
        CheckStatus::error("Job queue is closed")
    }
}
