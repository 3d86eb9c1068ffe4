//! Batch submission, task polling and region result retrieval.

use serde_json::json;
use std::sync::Arc;
use tracing::{info, warn};

use crate::application::services::CityService;
use crate::domain::entities::{JobState, RegionRecords, Task};
use crate::domain::repositories::{JobQueue, ResultStore, TaskRepository};
use crate::error::AppError;
use crate::utils::city_name::{validate_city_names, validate_region_name};

/// Orchestrates the request side of the pipeline.
///
/// Nothing here waits for weather providers: submission hands the resolved
/// batch to the [`JobQueue`] and returns, and polling only reads recorded state.
pub struct WeatherService {
    city_service: Arc<CityService>,
    job_queue: Arc<dyn JobQueue>,
    task_repository: Arc<dyn TaskRepository>,
    result_store: Arc<dyn ResultStore>,
}

impl WeatherService {
    /// Creates a new weather service.
    pub fn new(
        city_service: Arc<CityService>,
        job_queue: Arc<dyn JobQueue>,
        task_repository: Arc<dyn TaskRepository>,
        result_store: Arc<dyn ResultStore>,
    ) -> Self {
        Self {
            city_service,
            job_queue,
            task_repository,
            result_store,
        }
    }

    pub fn city_service(&self) -> &CityService {
        &self.city_service
    }

    /// Validates and resolves `names`, then dispatches the batch.
    ///
    /// Returns the task identifier immediately; the batch runs in the background.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] naming the first invalid entry; nothing
    /// is resolved or dispatched then. Returns [`AppError::Internal`] on
    /// repository or queue failures.
    pub async fn submit(&self, names: &[String]) -> Result<String, AppError> {
        validate_city_names(names)?;

        let cities = self.city_service.resolve_all(names).await?;
        info!(
            requested = names.len(),
            resolved = cities.len(),
            "Dispatching weather batch"
        );

        let task_id = self.job_queue.submit(cities).await?;
        self.task_repository.create(&task_id).await?;

        info!("TASK ID: {}", task_id);
        Ok(task_id)
    }

    /// Returns the current snapshot of a task, closing it if its job finished.
    ///
    /// A terminal task is returned as stored, without touching the job queue
    /// or the result store again. Once the terminal status is recorded the
    /// job's state is dropped from the queue.
    ///
    /// A running task whose job state is gone is marked failed. The state
    /// either expired before anyone polled (`JOB_RESULT_TTL_SECONDS`) or was
    /// lost with an in-process store on restart.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] for unknown tasks. Persistence failures
    /// propagate and leave the task `running`, so a later poll retries.
    pub async fn poll(&self, task_id: &str) -> Result<Task, AppError> {
        let task = self
            .task_repository
            .find_by_id(task_id)
            .await?
            .ok_or_else(|| AppError::not_found("Task not found", json!({ "task_id": task_id })))?;

        if task.status.is_terminal() {
            return Ok(task);
        }

        let closed = match self.job_queue.poll(task_id).await? {
            Some(JobState::Pending) => return Ok(task),
            Some(JobState::Ready { results }) => {
                let locations = self.result_store.save(task_id, &results).await?;
                info!(task_id, regions = locations.len(), "Task complete");
                self.task_repository
                    .mark_complete(task_id, results, locations)
                    .await?
            }
            Some(JobState::Failed { reason }) => {
                warn!(task_id, "Task failed: {}", reason);
                self.task_repository.mark_failed(task_id).await?
            }
            None => {
                warn!(
                    task_id,
                    "Job state expired or was lost before completion was observed; marking task failed"
                );
                return self.task_repository.mark_failed(task_id).await;
            }
        };

        // The task row is terminal now, so a failed eviction only costs memory.
        if let Err(e) = self.job_queue.forget(task_id).await {
            warn!(task_id, "Could not drop job state: {}", e);
        }
        Ok(closed)
    }

    /// Reads every persisted observation for `region`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] for malformed region names and
    /// [`AppError::NotFound`] when the region has no persisted data.
    pub async fn region_results(&self, region: &str) -> Result<RegionRecords, AppError> {
        validate_region_name(region)?;

        self.result_store
            .load_region(region)
            .await?
            .ok_or_else(|| {
                info!("{} does not exist or is empty.", region);
                AppError::not_found(
                    "No results stored for region",
                    json!({ "region": region }),
                )
            })
    }
}
