//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod health;
pub mod results;
pub mod tasks;
pub mod weather;

pub use health::health_handler;
pub use results::region_results_handler;
pub use tasks::task_handler;
pub use weather::weather_handler;
