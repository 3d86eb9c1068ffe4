//! Handler for batch submission endpoint.

use axum::{Json, extract::State, extract::rejection::JsonRejection};
use serde_json::json;

use crate::api::dto::weather::{WeatherRequest, WeatherResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Submits a batch of city names for weather retrieval.
///
/// # Endpoint
///
/// `POST /weather`
///
/// # Request Body
///
/// ```json
/// ["Kyiv", "Tokyo", "São Paulo"]
/// ```
///
/// # Response
///
/// ```json
/// { "task_id": "4f7c1f0e-0a7b-4d39-9a47-2f2b0de7f0a1" }
/// ```
///
/// The batch runs in the background; poll `GET /tasks/{task_id}` for its status.
///
/// # Errors
///
/// Returns 400 Bad Request if the body is not a JSON array of strings, or if
/// any entry contains characters other than letters and spaces.
pub async fn weather_handler(
    State(state): State<AppState>,
    payload: Result<Json<WeatherRequest>, JsonRejection>,
) -> Result<Json<WeatherResponse>, AppError> {
    let Json(request) = payload.map_err(|e| {
        AppError::bad_request(
            "Request body must be a JSON array of city names",
            json!({ "reason": e.body_text() }),
        )
    })?;

    let task_id = state.weather_service.submit(&request.cities).await?;

    Ok(Json(WeatherResponse { task_id }))
}
