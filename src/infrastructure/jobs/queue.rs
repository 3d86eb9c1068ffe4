//! Channel-backed job queue.

use async_trait::async_trait;
use serde_json::json;
use std::sync::Arc;
use tokio::sync::mpsc::{self, error::TrySendError};
use tracing::{debug, error, warn};
use uuid::Uuid;

use crate::domain::entities::{BatchJob, City, JobState};
use crate::domain::repositories::{JobQueue, JobStore};
use crate::error::AppError;

/// Job queue feeding [`run_batch_worker`](super::run_batch_worker) through a
/// bounded mpsc channel.
///
/// A job is recorded as `pending` before it is sent, so the worker's final
/// state always overwrites it. A rejected job has its pending state removed
/// again.
pub struct ChannelJobQueue {
    sender: mpsc::Sender<BatchJob>,
    store: Arc<dyn JobStore>,
}

impl ChannelJobQueue {
    pub fn new(sender: mpsc::Sender<BatchJob>, store: Arc<dyn JobStore>) -> Self {
        Self { sender, store }
    }
}

#[async_trait]
impl JobQueue for ChannelJobQueue {
    async fn submit(&self, cities: Vec<City>) -> Result<String, AppError> {
        let job_id = Uuid::new_v4().to_string();

        self.store
            .put(&job_id, &JobState::Pending)
            .await
            .map_err(|e| {
                error!("Failed to record pending job {}: {}", job_id, e);
                AppError::internal("Job store unavailable", json!({}))
            })?;

        let rejection = match self.sender.try_send(BatchJob::new(job_id.clone(), cities)) {
            Ok(()) => {
                debug!("Job {} queued", job_id);
                return Ok(job_id);
            }
            Err(TrySendError::Full(_)) => {
                error!("Job queue full, rejecting job {}", job_id);
                AppError::internal(
                    "Job queue is full",
                    json!({ "capacity": self.sender.max_capacity() }),
                )
            }
            Err(TrySendError::Closed(_)) => {
                error!("Job queue closed, rejecting job {}", job_id);
                AppError::internal("Job queue is closed", json!({}))
            }
        };

        if let Err(e) = self.store.remove(&job_id).await {
            warn!("Failed to drop rejected job {}: {}", job_id, e);
        }
        Err(rejection)
    }

    async fn poll(&self, job_id: &str) -> Result<Option<JobState>, AppError> {
        self.store.get(job_id).await.map_err(|e| {
            error!("Failed to read job {}: {}", job_id, e);
            AppError::internal("Job store unavailable", json!({}))
        })
    }

    async fn forget(&self, job_id: &str) -> Result<(), AppError> {
        self.store.remove(job_id).await.map_err(|e| {
            error!("Failed to drop job {}: {}", job_id, e);
            AppError::internal("Job store unavailable", json!({}))
        })
    }

    fn is_open(&self) -> bool {
        !self.sender.is_closed()
    }

    fn capacity(&self) -> usize {
        self.sender.capacity()
    }

    async fn store_healthy(&self) -> bool {
        self.store.health_check().await
    }
}
