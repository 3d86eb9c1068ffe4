//! Core domain entities.
//!
//! - [`City`] - A gazetteer record
//! - [`WeatherObservation`] / [`ProviderOutcome`] - Normalized provider results
//! - [`Task`] - Lifecycle of a submitted batch
//! - [`BatchJob`] / [`JobState`] - Unit of asynchronous work and its recorded state

pub mod city;
pub mod job;
pub mod task;
pub mod weather;

pub use city::{City, NewCity};
pub use job::{BatchJob, JobState};
pub use task::{ArtifactLocations, Task, TaskStatus};
pub use weather::{
    ProviderError, ProviderOutcome, Reading, RegionRecords, RegionResults, StoredObservation,
    UNASSIGNED_REGION, WeatherObservation,
};
