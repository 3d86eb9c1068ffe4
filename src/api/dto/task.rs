//! DTOs for task polling.

use serde::{Deserialize, Serialize};

use crate::domain::entities::{ArtifactLocations, Task, TaskStatus};

/// Task snapshot returned by `GET /tasks/{task_id}`.
///
/// `regions` maps each region to its persisted artifact and is only present
/// once the task is complete.
#[derive(Debug, Serialize, Deserialize)]
pub struct TaskResponse {
    pub task_id: String,
    pub status: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub regions: Option<ArtifactLocations>,
}

impl From<Task> for TaskResponse {
    fn from(task: Task) -> Self {
        let regions = match task.status {
            TaskStatus::Complete => Some(task.locations.unwrap_or_default()),
            TaskStatus::Running | TaskStatus::Failed => None,
        };

        Self {
            task_id: task.id,
            status: task.status.as_str().to_string(),
            regions,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use serde_json::json;

    #[test]
    fn test_running_task_has_no_regions() {
        let response = TaskResponse::from(Task::running("t1".to_string(), Utc::now()));
        let body = serde_json::to_value(&response).unwrap();
        assert_eq!(body, json!({ "task_id": "t1", "status": "running" }));
    }

    #[test]
    fn test_complete_task_lists_regions() {
        let mut task = Task::running("t1".to_string(), Utc::now());
        task.status = TaskStatus::Complete;
        task.locations = Some(ArtifactLocations::from([(
            "Europe".to_string(),
            "weather_data/Europe/task_t1.json".to_string(),
        )]));

        let body = serde_json::to_value(TaskResponse::from(task)).unwrap();
        assert_eq!(body["status"], "complete");
        assert_eq!(body["regions"]["Europe"], "weather_data/Europe/task_t1.json");
    }
}
