//! Background worker executing queued batches.

use std::sync::Arc;
use tokio::sync::{Semaphore, mpsc};
use tracing::{error, info, warn};

use crate::application::services::BatchFetcher;
use crate::domain::entities::{BatchJob, JobState};
use crate::domain::repositories::JobStore;

/// Drains `rx` until every sender is dropped, running at most `concurrency`
/// batches at once.
///
/// Each batch ends in `ready` with its region results, or `failed` if the
/// fetch task aborted. Individual provider failures never fail a batch.
pub async fn run_batch_worker(
    mut rx: mpsc::Receiver<BatchJob>,
    fetcher: Arc<BatchFetcher>,
    store: Arc<dyn JobStore>,
    concurrency: usize,
) {
    let permits = Arc::new(Semaphore::new(concurrency.max(1)));
    info!("Batch worker started (concurrency: {})", concurrency.max(1));

    while let Some(job) = rx.recv().await {
        let Ok(permit) = Arc::clone(&permits).acquire_owned().await else {
            break;
        };

        let fetcher = Arc::clone(&fetcher);
        let store = Arc::clone(&store);
        tokio::spawn(async move {
            let _permit = permit;
            process_job(job, fetcher, store).await;
        });
    }

    info!("Batch worker stopped");
}

async fn process_job(job: BatchJob, fetcher: Arc<BatchFetcher>, store: Arc<dyn JobStore>) {
    let BatchJob { task_id, cities } = job;
    info!(task_id = %task_id, cities = cities.len(), "Running batch");

    let fetch = tokio::spawn(async move { fetcher.fetch(&cities).await });
    let state = match fetch.await {
        Ok(results) => JobState::Ready { results },
        Err(e) => {
            error!(task_id = %task_id, "Batch fetch aborted: {}", e);
            JobState::Failed {
                reason: format!("batch fetch aborted: {}", e),
            }
        }
    };

    let Err(e) = store.put(&task_id, &state).await else {
        return;
    };
    error!(task_id = %task_id, "Failed to record job state: {}", e);

    if matches!(state, JobState::Ready { .. }) {
        let failed = JobState::Failed {
            reason: format!("result could not be recorded: {}", e),
        };
        if let Err(e) = store.put(&task_id, &failed).await {
            warn!(task_id = %task_id, "Job state lost: {}", e);
        }
    }
}
