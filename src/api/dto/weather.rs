//! DTOs for batch submission.

use serde::{Deserialize, Serialize};

/// Request body of `POST /weather`: a JSON array of city names.
#[derive(Debug, Deserialize)]
#[serde(transparent)]
pub struct WeatherRequest {
    pub cities: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct WeatherResponse {
    pub task_id: String,
}
