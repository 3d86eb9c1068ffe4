#![allow(dead_code)]

use chrono::Utc;
use sqlx::PgPool;
use std::sync::Arc;
use tempfile::TempDir;
use tokio::sync::mpsc;
use weather_aggregator::application::services::{BatchFetcher, CityService, WeatherService};
use weather_aggregator::domain::entities::{BatchJob, City, Reading, WeatherObservation};
use weather_aggregator::domain::providers::WeatherProvider;
use weather_aggregator::domain::repositories::JobQueue;
use weather_aggregator::infrastructure::jobs::{ChannelJobQueue, MemoryJobStore, run_batch_worker};
use weather_aggregator::infrastructure::persistence::{PgCityRepository, PgTaskRepository};
use weather_aggregator::infrastructure::storage::FileResultStore;
use weather_aggregator::state::AppState;

pub async fn insert_city(
    pool: &PgPool,
    city: &str,
    city_ascii: &str,
    country: &str,
    region: Option<&str>,
) -> i64 {
    sqlx::query_scalar(
        r#"
        INSERT INTO cities (city, city_ascii, lat, lng, country, admin_name, region)
        VALUES ($1, $2, 50.45, 30.5236, $3, '', $4)
        RETURNING id
        "#,
    )
    .bind(city)
    .bind(city_ascii)
    .bind(country)
    .bind(region)
    .fetch_one(pool)
    .await
    .unwrap()
}

pub fn test_city(id: i64, name: &str, region: Option<&str>) -> City {
    City::new(
        id,
        name.to_string(),
        name.to_string(),
        50.45,
        30.5236,
        "Ukraine".to_string(),
        String::new(),
        region.map(str::to_string),
    )
}

pub fn observation(city: &str, temp: f64, description: &str) -> WeatherObservation {
    WeatherObservation::new(
        city.to_string(),
        Reading {
            temp,
            description: description.to_string(),
        },
        Utc::now(),
    )
}

/// Application state wired to a real database, an in-memory job store and a
/// temporary result directory.
///
/// Nothing consumes `job_rx`; tests drive job outcomes through `job_store`.
pub struct TestContext {
    pub state: AppState,
    pub job_store: Arc<MemoryJobStore>,
    pub job_rx: mpsc::Receiver<BatchJob>,
    pub data_dir: TempDir,
}

pub fn create_test_state(pool: PgPool) -> TestContext {
    let pool = Arc::new(pool);
    let data_dir = tempfile::tempdir().unwrap();
    let job_store = Arc::new(MemoryJobStore::new());
    let (tx, rx) = mpsc::channel(100);

    let job_queue: Arc<dyn JobQueue> = Arc::new(ChannelJobQueue::new(tx, job_store.clone()));
    let state = build_state(&pool, job_queue, &data_dir);

    TestContext {
        state,
        job_store,
        job_rx: rx,
        data_dir,
    }
}

/// Application state whose batches are executed by a real worker against
/// `providers`.
pub fn create_worker_state(
    pool: PgPool,
    providers: Vec<Arc<dyn WeatherProvider>>,
) -> (AppState, TempDir) {
    let pool = Arc::new(pool);
    let data_dir = tempfile::tempdir().unwrap();
    let job_store = Arc::new(MemoryJobStore::new());
    let (tx, rx) = mpsc::channel(100);

    let fetcher = Arc::new(BatchFetcher::new(reqwest::Client::new(), providers, 4));
    tokio::spawn(run_batch_worker(rx, fetcher, job_store.clone(), 2));

    let job_queue: Arc<dyn JobQueue> = Arc::new(ChannelJobQueue::new(tx, job_store));
    (build_state(&pool, job_queue, &data_dir), data_dir)
}

fn build_state(pool: &Arc<PgPool>, job_queue: Arc<dyn JobQueue>, data_dir: &TempDir) -> AppState {
    let city_service = Arc::new(CityService::new(Arc::new(PgCityRepository::new(
        pool.clone(),
    ))));
    let weather_service = Arc::new(WeatherService::new(
        city_service,
        job_queue.clone(),
        Arc::new(PgTaskRepository::new(pool.clone())),
        Arc::new(FileResultStore::new(data_dir.path())),
    ));

    AppState::new(weather_service, job_queue)
}
