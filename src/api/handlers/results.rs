//! Handler for region result reads.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::api::dto::results::RegionResultsResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Returns every persisted observation for a region, keyed by city.
///
/// # Endpoint
///
/// `GET /results/{region}`
///
/// # Response
///
/// ```json
/// {
///   "Kyiv": [
///     { "temp": 4.2, "description": "overcast clouds", "time": "2025-03-01T12:00:00Z" }
///   ]
/// }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request for malformed region names and 404 Not Found when
/// the region has no persisted data.
pub async fn region_results_handler(
    State(state): State<AppState>,
    Path(region): Path<String>,
) -> Result<Json<RegionResultsResponse>, AppError> {
    let cities = state.weather_service.region_results(&region).await?;
    Ok(Json(RegionResultsResponse { cities }))
}
