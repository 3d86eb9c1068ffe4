//! Application layer services implementing the batch pipeline.
//!
//! Services consume the domain traits and provide a clean API for HTTP
//! handlers and the background worker.
//!
//! # Available Services
//!
//! - [`services::city_service::CityService`] - Exact and nearest-name city resolution
//! - [`services::batch_fetcher::BatchFetcher`] - Concurrent provider calls for one batch
//! - [`services::weather_service::WeatherService`] - Submission, polling and region reads

pub mod services;
