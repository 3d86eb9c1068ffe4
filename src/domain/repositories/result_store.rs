//! Storage trait for persisted batch results.

use crate::domain::entities::{ArtifactLocations, RegionRecords, RegionResults};
use crate::error::AppError;
use async_trait::async_trait;

/// Durable per-region storage of completed batches.
///
/// # Implementations
///
/// - [`crate::infrastructure::storage::FileResultStore`] - JSON files under a data directory
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ResultStore: Send + Sync {
    /// Writes one artifact per region for `task_id`, stamping every record
    /// with a single persistence timestamp.
    ///
    /// Writing the same task again overwrites its artifacts.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on I/O or serialization failures.
    async fn save(
        &self,
        task_id: &str,
        results: &RegionResults,
    ) -> Result<ArtifactLocations, AppError>;

    /// Merges every artifact of `region` into a city-keyed mapping.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(records))` when the region has persisted artifacts
    /// - `Ok(None)` when the region has no persisted data
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on I/O or decode failures.
    async fn load_region(&self, region: &str) -> Result<Option<RegionRecords>, AppError>;
}
