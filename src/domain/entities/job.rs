//! Asynchronous job model shared by the queue, worker and job store.

use serde::{Deserialize, Serialize};

use super::city::City;
use super::weather::RegionResults;

/// One batch handed to the background worker.
#[derive(Debug, Clone)]
pub struct BatchJob {
    pub task_id: String,
    pub cities: Vec<City>,
}

impl BatchJob {
    pub fn new(task_id: String, cities: Vec<City>) -> Self {
        Self { task_id, cities }
    }
}

/// Job state as recorded by the job store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum JobState {
    Pending,
    Ready { results: RegionResults },
    Failed { reason: String },
}

impl JobState {
    pub fn is_finished(&self) -> bool {
        !matches!(self, JobState::Pending)
    }
}
