//! Handler for task polling endpoint.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::api::dto::task::TaskResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Reports the status of a submitted batch.
///
/// # Endpoint
///
/// `GET /tasks/{task_id}`
///
/// # Response
///
/// ```json
/// {
///   "task_id": "4f7c1f0e-0a7b-4d39-9a47-2f2b0de7f0a1",
///   "status": "complete",
///   "regions": { "Europe": "weather_data/Europe/task_4f7c1f0e-0a7b-4d39-9a47-2f2b0de7f0a1.json" }
/// }
/// ```
///
/// `status` is `running`, `complete` or `failed`; `regions` appears only
/// when complete.
///
/// # Errors
///
/// Returns 404 Not Found if the task id is unknown.
pub async fn task_handler(
    State(state): State<AppState>,
    Path(task_id): Path<String>,
) -> Result<Json<TaskResponse>, AppError> {
    let task = state.weather_service.poll(&task_id).await?;
    Ok(Json(task.into()))
}
