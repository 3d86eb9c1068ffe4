//! Task entity tracking the lifecycle of one submitted batch.

use chrono::{DateTime, Utc};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use super::weather::RegionResults;

/// Lifecycle status of a task.
///
/// `Running` is the only non-terminal state; `Complete` and `Failed` never
/// transition further.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskStatus {
    Running,
    Complete,
    /// The batch itself aborted, its result could not be recorded, or its job
    /// state expired (or was lost on restart) before any poll observed it.
    /// Per-city provider failures never lead here.
    Failed,
}

impl TaskStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskStatus::Running => "running",
            TaskStatus::Complete => "complete",
            TaskStatus::Failed => "failed",
        }
    }

    pub fn is_terminal(&self) -> bool {
        !matches!(self, TaskStatus::Running)
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TaskStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "running" => Ok(TaskStatus::Running),
            "complete" => Ok(TaskStatus::Complete),
            "failed" => Ok(TaskStatus::Failed),
            other => Err(format!("unknown task status '{other}'")),
        }
    }
}

/// Region name to persisted artifact path.
pub type ArtifactLocations = BTreeMap<String, String>;

/// A tracked batch.
///
/// `results` and `locations` are only present once the task is complete.
#[derive(Debug, Clone, PartialEq)]
pub struct Task {
    pub id: String,
    pub status: TaskStatus,
    pub results: Option<RegionResults>,
    pub locations: Option<ArtifactLocations>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Task {
    /// Creates a task in the `running` state.
    pub fn running(id: String, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            status: TaskStatus::Running,
            results: None,
            locations: None,
            created_at,
            updated_at: created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_round_trip_through_str() {
        for status in [TaskStatus::Running, TaskStatus::Complete, TaskStatus::Failed] {
            assert_eq!(status.as_str().parse::<TaskStatus>().unwrap(), status);
        }
        assert!("done".parse::<TaskStatus>().is_err());
    }

    #[test]
    fn test_terminal_states() {
        assert!(!TaskStatus::Running.is_terminal());
        assert!(TaskStatus::Complete.is_terminal());
        assert!(TaskStatus::Failed.is_terminal());
    }

    #[test]
    fn test_running_task_has_no_payload() {
        let task = Task::running("abc".to_string(), Utc::now());
        assert_eq!(task.status, TaskStatus::Running);
        assert!(task.results.is_none());
        assert!(task.locations.is_none());
        assert_eq!(task.created_at, task.updated_at);
    }
}
