mod common;

use sqlx::PgPool;
use std::sync::Arc;
use weather_aggregator::domain::entities::{ArtifactLocations, RegionResults, TaskStatus};
use weather_aggregator::domain::repositories::TaskRepository;
use weather_aggregator::error::AppError;
use weather_aggregator::infrastructure::persistence::PgTaskRepository;

fn europe() -> (RegionResults, ArtifactLocations) {
    let mut results = RegionResults::new();
    results.insert(
        "Europe".to_string(),
        vec![common::observation("Kyiv", 4.2, "overcast clouds")],
    );
    let locations = ArtifactLocations::from([(
        "Europe".to_string(),
        "weather_data/Europe/task_t1.json".to_string(),
    )]);
    (results, locations)
}

#[sqlx::test]
async fn test_create_task_is_running(pool: PgPool) {
    let repo = PgTaskRepository::new(Arc::new(pool));

    let task = repo.create("t1").await.unwrap();

    assert_eq!(task.id, "t1");
    assert_eq!(task.status, TaskStatus::Running);
    assert!(task.results.is_none());
    assert!(task.locations.is_none());
}

#[sqlx::test]
async fn test_create_duplicate_is_conflict(pool: PgPool) {
    let repo = PgTaskRepository::new(Arc::new(pool));
    repo.create("t1").await.unwrap();

    let err = repo.create("t1").await.unwrap_err();
    assert!(matches!(err, AppError::Conflict { .. }));
}

#[sqlx::test]
async fn test_find_by_id_not_found(pool: PgPool) {
    let repo = PgTaskRepository::new(Arc::new(pool));
    assert!(repo.find_by_id("missing").await.unwrap().is_none());
}

#[sqlx::test]
async fn test_mark_complete_stores_payload(pool: PgPool) {
    let repo = PgTaskRepository::new(Arc::new(pool));
    repo.create("t1").await.unwrap();
    let (results, locations) = europe();

    let task = repo
        .mark_complete("t1", results.clone(), locations.clone())
        .await
        .unwrap();
    assert_eq!(task.status, TaskStatus::Complete);

    let stored = repo.find_by_id("t1").await.unwrap().unwrap();
    assert_eq!(stored.status, TaskStatus::Complete);
    assert_eq!(stored.locations, Some(locations));
    assert_eq!(
        stored.results.unwrap()["Europe"][0].description,
        "overcast clouds"
    );
}

#[sqlx::test]
async fn test_terminal_status_is_final(pool: PgPool) {
    let repo = PgTaskRepository::new(Arc::new(pool));
    repo.create("t1").await.unwrap();
    let (results, locations) = europe();

    let completed = repo
        .mark_complete("t1", results.clone(), locations.clone())
        .await
        .unwrap();

    let after_fail = repo.mark_failed("t1").await.unwrap();
    assert_eq!(after_fail.status, TaskStatus::Complete);
    assert_eq!(after_fail.locations, completed.locations);

    let after_second_complete = repo
        .mark_complete("t1", RegionResults::new(), ArtifactLocations::new())
        .await
        .unwrap();
    assert_eq!(after_second_complete.results, completed.results);
}

#[sqlx::test]
async fn test_mark_failed_unknown_task_is_not_found(pool: PgPool) {
    let repo = PgTaskRepository::new(Arc::new(pool));

    let err = repo.mark_failed("missing").await.unwrap_err();
    assert!(matches!(err, AppError::NotFound { .. }));
}
