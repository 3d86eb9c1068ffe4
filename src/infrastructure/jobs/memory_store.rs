//! In-process job store.

use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;
use tracing::debug;

use crate::domain::entities::JobState;
use crate::domain::repositories::{JobStore, JobStoreResult};

/// Job store backed by a map owned by this process.
///
/// Used when Redis is not configured or unreachable at startup. Entries do
/// not expire; they live until the job queue forgets them and are lost on
/// restart.
#[derive(Default)]
pub struct MemoryJobStore {
    jobs: RwLock<HashMap<String, JobState>>,
}

impl MemoryJobStore {
    pub fn new() -> Self {
        debug!("Using in-memory job store");
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.jobs.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.jobs.read().await.is_empty()
    }
}

#[async_trait]
impl JobStore for MemoryJobStore {
    async fn put(&self, job_id: &str, state: &JobState) -> JobStoreResult<()> {
        self.jobs
            .write()
            .await
            .insert(job_id.to_string(), state.clone());
        Ok(())
    }

    async fn get(&self, job_id: &str) -> JobStoreResult<Option<JobState>> {
        Ok(self.jobs.read().await.get(job_id).cloned())
    }

    async fn remove(&self, job_id: &str) -> JobStoreResult<()> {
        self.jobs.write().await.remove(job_id);
        Ok(())
    }

    async fn health_check(&self) -> bool {
        true
    }
}
