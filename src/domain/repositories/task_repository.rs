//! Repository trait for the task registry.

use crate::domain::entities::{ArtifactLocations, RegionResults, Task};
use crate::error::AppError;
use async_trait::async_trait;

/// Durable registry of submitted batches.
///
/// Terminal transitions are conditional: they only apply to a task that is
/// still `running`. When a task is already terminal, the stored snapshot is
/// returned unchanged, so repeated or concurrent completion checks converge.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgTaskRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Registers a new task in the `running` state.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the id is already registered.
    async fn create(&self, id: &str) -> Result<Task, AppError>;

    /// Finds a task by id.
    async fn find_by_id(&self, id: &str) -> Result<Option<Task>, AppError>;

    /// Moves a running task to `complete`, attaching its results and artifact locations.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the task does not exist.
    async fn mark_complete(
        &self,
        id: &str,
        results: RegionResults,
        locations: ArtifactLocations,
    ) -> Result<Task, AppError>;

    /// Moves a running task to `failed`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the task does not exist.
    async fn mark_failed(&self, id: &str) -> Result<Task, AppError>;
}
