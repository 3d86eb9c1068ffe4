//! Queue trait for dispatching batches to the background worker.

use crate::domain::entities::{City, JobState};
use crate::error::AppError;
use async_trait::async_trait;

/// Asynchronous unit-of-work dispatcher.
///
/// `submit` returns immediately with the job identifier; the batch runs on a
/// background worker. `poll` reports the recorded job state.
///
/// # Implementations
///
/// - [`crate::infrastructure::jobs::ChannelJobQueue`] - bounded channel feeding
///   [`crate::infrastructure::jobs::run_batch_worker`]
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait JobQueue: Send + Sync {
    /// Enqueues a batch and returns its identifier.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the queue is full or closed, or the
    /// job store cannot record the pending job.
    async fn submit(&self, cities: Vec<City>) -> Result<String, AppError>;

    /// Reads the job's state.
    ///
    /// # Returns
    ///
    /// `Ok(None)` when no state is recorded (unknown or expired job).
    async fn poll(&self, job_id: &str) -> Result<Option<JobState>, AppError>;

    /// Drops the job's recorded state once its task is terminal.
    async fn forget(&self, job_id: &str) -> Result<(), AppError>;

    /// Whether the worker side of the queue is still accepting jobs.
    fn is_open(&self) -> bool;

    /// Remaining queue capacity.
    fn capacity(&self) -> usize;

    /// Checks the job store backing the queue.
    async fn store_healthy(&self) -> bool;
}
