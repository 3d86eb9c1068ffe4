//! PostgreSQL implementation of the task registry.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::json;
use sqlx::PgPool;
use sqlx::types::Json;
use std::sync::Arc;

use crate::domain::entities::{ArtifactLocations, RegionResults, Task, TaskStatus};
use crate::domain::repositories::TaskRepository;
use crate::error::AppError;

struct TaskRow {
    id: String,
    status: String,
    results: Option<Json<RegionResults>>,
    locations: Option<Json<ArtifactLocations>>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<TaskRow> for Task {
    type Error = AppError;

    fn try_from(row: TaskRow) -> Result<Self, Self::Error> {
        let status = row.status.parse::<TaskStatus>().map_err(|e| {
            AppError::internal("Corrupt task record", json!({ "id": row.id, "reason": e }))
        })?;

        Ok(Task {
            id: row.id,
            status,
            results: row.results.map(|Json(r)| r),
            locations: row.locations.map(|Json(l)| l),
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

/// PostgreSQL repository for the `tasks` table.
///
/// Terminal updates carry `WHERE status = 'running'`, so only the first
/// observer of a finished job changes the row.
pub struct PgTaskRepository {
    pool: Arc<PgPool>,
}

impl PgTaskRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }

    /// Re-reads a task whose conditional update matched no running row.
    async fn current(&self, id: &str) -> Result<Task, AppError> {
        self.find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Task not found", json!({ "task_id": id })))
    }
}

#[async_trait]
impl TaskRepository for PgTaskRepository {
    async fn create(&self, id: &str) -> Result<Task, AppError> {
        let row = sqlx::query_as!(
            TaskRow,
            r#"
            INSERT INTO tasks (id, status)
            VALUES ($1, 'running')
            RETURNING
                id as "id!",
                status as "status!",
                results as "results?: Json<RegionResults>",
                locations as "locations?: Json<ArtifactLocations>",
                created_at as "created_at!",
                updated_at as "updated_at!"
            "#,
            id
        )
        .fetch_one(self.pool.as_ref())
        .await?;

        row.try_into()
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Task>, AppError> {
        let row = sqlx::query_as!(
            TaskRow,
            r#"
            SELECT
                id,
                status,
                results as "results?: Json<RegionResults>",
                locations as "locations?: Json<ArtifactLocations>",
                created_at,
                updated_at
            FROM tasks
            WHERE id = $1
            "#,
            id
        )
        .fetch_optional(self.pool.as_ref())
        .await?;

        row.map(Task::try_from).transpose()
    }

    async fn mark_complete(
        &self,
        id: &str,
        results: RegionResults,
        locations: ArtifactLocations,
    ) -> Result<Task, AppError> {
        let row = sqlx::query_as!(
            TaskRow,
            r#"
            UPDATE tasks
            SET status = 'complete', results = $2, locations = $3, updated_at = NOW()
            WHERE id = $1 AND status = 'running'
            RETURNING
                id as "id!",
                status as "status!",
                results as "results?: Json<RegionResults>",
                locations as "locations?: Json<ArtifactLocations>",
                created_at as "created_at!",
                updated_at as "updated_at!"
            "#,
            id,
            Json(&results) as _,
            Json(&locations) as _
        )
        .fetch_optional(self.pool.as_ref())
        .await?;

        match row {
            Some(row) => row.try_into(),
            None => self.current(id).await,
        }
    }

    async fn mark_failed(&self, id: &str) -> Result<Task, AppError> {
        let row = sqlx::query_as!(
            TaskRow,
            r#"
            UPDATE tasks
            SET status = 'failed', updated_at = NOW()
            WHERE id = $1 AND status = 'running'
            RETURNING
                id as "id!",
                status as "status!",
                results as "results?: Json<RegionResults>",
                locations as "locations?: Json<ArtifactLocations>",
                created_at as "created_at!",
                updated_at as "updated_at!"
            "#,
            id
        )
        .fetch_optional(self.pool.as_ref())
        .await?;

        match row {
            Some(row) => row.try_into(),
            None => self.current(id).await,
        }
    }
}
