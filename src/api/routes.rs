//! API route configuration.

use crate::api::handlers::{region_results_handler, task_handler, weather_handler};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// Weather pipeline routes.
///
/// # Endpoints
///
/// - `POST /weather`           - Submit a batch of city names
/// - `GET  /tasks/{task_id}`   - Poll a batch
/// - `GET  /results/{region}`  - Read persisted observations for a region
pub fn weather_routes() -> Router<AppState> {
    Router::new()
        .route("/weather", post(weather_handler))
        .route("/tasks/{task_id}", get(task_handler))
        .route("/results/{region}", get(region_results_handler))
}
