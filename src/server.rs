//! HTTP server initialization and runtime setup.
//!
//! Handles database connections, job store setup, worker spawning, and Axum server lifecycle.

use crate::application::services::{BatchFetcher, CityService, WeatherService};
use crate::config::Config;
use crate::domain::repositories::{JobQueue, JobStore};
use crate::infrastructure::jobs::{ChannelJobQueue, MemoryJobStore, RedisJobStore, run_batch_worker};
use crate::infrastructure::persistence::{PgCityRepository, PgTaskRepository};
use crate::infrastructure::providers::build_providers;
use crate::infrastructure::storage::FileResultStore;
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use sqlx::postgres::PgPoolOptions;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - PostgreSQL connection pool
/// - Apply migrations
/// - Redis job store (or in-memory fallback)
/// - Provider HTTP client and background batch worker
/// - Axum HTTP server
///
/// # Errors
///
/// Returns an error if:
/// - Database connection or migration fails
/// - The provider HTTP client cannot be built
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let pool = PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(Duration::from_secs(config.db_connect_timeout))
        .idle_timeout(Duration::from_secs(config.db_idle_timeout))
        .max_lifetime(Duration::from_secs(config.db_max_lifetime))
        .connect(&config.database_url)
        .await
        .context("Failed to connect to database")?;
    tracing::info!("Connected to database");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .context("Failed to run migrations")?;

    let job_store: Arc<dyn JobStore> = if let Some(redis_url) = &config.redis_url {
        match RedisJobStore::connect(redis_url, config.job_result_ttl_seconds).await {
            Ok(redis) => {
                tracing::info!("Job store: Redis");
                Arc::new(redis)
            }
            Err(e) => {
                tracing::warn!("Failed to connect to Redis: {}. Using in-memory job store.", e);
                Arc::new(MemoryJobStore::new())
            }
        }
    } else {
        tracing::info!("Job store: in-memory");
        Arc::new(MemoryJobStore::new())
    };

    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(config.provider_timeout_seconds))
        .build()
        .context("Failed to build provider HTTP client")?;
    let fetcher = Arc::new(BatchFetcher::new(
        client,
        build_providers(&config),
        config.fetch_concurrency,
    ));
    tracing::info!("Weather providers: {}", fetcher.provider_count());

    let (job_tx, job_rx) = mpsc::channel(config.job_queue_capacity);
    tokio::spawn(run_batch_worker(
        job_rx,
        fetcher,
        job_store.clone(),
        config.job_worker_concurrency,
    ));
    tracing::info!("Batch worker started");

    let pool = Arc::new(pool);
    let city_service = Arc::new(CityService::new(Arc::new(PgCityRepository::new(
        pool.clone(),
    ))));
    let job_queue: Arc<dyn JobQueue> = Arc::new(ChannelJobQueue::new(job_tx, job_store));
    let weather_service = Arc::new(WeatherService::new(
        city_service,
        job_queue.clone(),
        Arc::new(PgTaskRepository::new(pool)),
        Arc::new(FileResultStore::new(config.data_dir.clone())),
    ));

    let state = AppState::new(weather_service, job_queue);

    let app = app_router(state);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        return;
    }
    tracing::info!("Shutdown signal received");
}
