//! Shared application state injected into handlers.

use std::sync::Arc;

use crate::application::services::WeatherService;
use crate::domain::repositories::JobQueue;

#[derive(Clone)]
pub struct AppState {
    pub weather_service: Arc<WeatherService>,
    pub job_queue: Arc<dyn JobQueue>,
}

impl AppState {
    pub fn new(weather_service: Arc<WeatherService>, job_queue: Arc<dyn JobQueue>) -> Self {
        Self {
            weather_service,
            job_queue,
        }
    }
}
