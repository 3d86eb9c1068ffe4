//! Storage trait for asynchronous job state.

use crate::domain::entities::JobState;
use async_trait::async_trait;
use thiserror::Error;

/// Errors raised by job store backends.
#[derive(Debug, Error)]
pub enum JobStoreError {
    #[error("Job store connection error: {0}")]
    Connection(String),
    #[error("Job store operation error: {0}")]
    Operation(String),
    #[error("Job state could not be decoded: {0}")]
    Decode(String),
}

/// Result type for job store operations.
pub type JobStoreResult<T> = Result<T, JobStoreError>;

/// Result backend recording the state of every submitted job.
///
/// # Implementations
///
/// - [`crate::infrastructure::jobs::RedisJobStore`] - Redis-backed, entries expire after a TTL
/// - [`crate::infrastructure::jobs::MemoryJobStore`] - In-process map, lost on restart
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait JobStore: Send + Sync {
    /// Records the current state of a job, replacing any previous state.
    async fn put(&self, job_id: &str, state: &JobState) -> JobStoreResult<()>;

    /// Reads the recorded state; `Ok(None)` when the job is unknown or expired.
    async fn get(&self, job_id: &str) -> JobStoreResult<Option<JobState>>;

    /// Drops the recorded state. Removing an unknown job is not an error.
    async fn remove(&self, job_id: &str) -> JobStoreResult<()>;

    /// Checks if the backend is reachable.
    async fn health_check(&self) -> bool;
}
