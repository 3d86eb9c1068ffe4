//! Business logic services for the application layer.

pub mod batch_fetcher;
pub mod city_service;
pub mod weather_service;

pub use batch_fetcher::{BatchFetcher, FetchError};
pub use city_service::CityService;
pub use weather_service::WeatherService;
