//! Redis-backed job store.

use async_trait::async_trait;
use redis::{AsyncCommands, Client, aio::ConnectionManager};
use tracing::{debug, info};

use crate::domain::entities::JobState;
use crate::domain::repositories::{JobStore, JobStoreError, JobStoreResult};

/// Job store keeping one JSON document per job under `job:<id>`.
///
/// Every write refreshes the entry's TTL, so finished jobs expire
/// `ttl_seconds` after their last state change.
pub struct RedisJobStore {
    client: ConnectionManager,
    ttl_seconds: u64,
    key_prefix: String,
}

impl RedisJobStore {
    /// Connects to Redis and validates the connection with a PING.
    ///
    /// # Errors
    ///
    /// Returns [`JobStoreError::Connection`] if the URL is invalid, the
    /// connection cannot be established, or the PING fails.
    pub async fn connect(redis_url: &str, ttl_seconds: u64) -> JobStoreResult<Self> {
        info!("Connecting to Redis job store");

        let client = Client::open(redis_url).map_err(|e| {
            JobStoreError::Connection(format!("Failed to create Redis client: {}", e))
        })?;

        let manager = ConnectionManager::new(client).await.map_err(|e| {
            JobStoreError::Connection(format!("Failed to connect to Redis: {}", e))
        })?;

        let mut test_conn = manager.clone();
        test_conn
            .ping::<()>()
            .await
            .map_err(|e| JobStoreError::Connection(format!("Redis PING failed: {}", e)))?;

        info!("✓ Connected to Redis job store");

        Ok(Self {
            client: manager,
            ttl_seconds,
            key_prefix: "job:".to_string(),
        })
    }

    fn build_key(&self, job_id: &str) -> String {
        format!("{}{}", self.key_prefix, job_id)
    }
}

#[async_trait]
impl JobStore for RedisJobStore {
    async fn put(&self, job_id: &str, state: &JobState) -> JobStoreResult<()> {
        let key = self.build_key(job_id);
        let payload =
            serde_json::to_string(state).map_err(|e| JobStoreError::Decode(e.to_string()))?;
        let mut conn = self.client.clone();

        conn.set_ex::<_, _, ()>(&key, payload, self.ttl_seconds)
            .await
            .map_err(|e| JobStoreError::Operation(format!("SET {}: {}", key, e)))?;

        debug!("Job SET: {} (TTL: {}s)", job_id, self.ttl_seconds);
        Ok(())
    }

    async fn get(&self, job_id: &str) -> JobStoreResult<Option<JobState>> {
        let key = self.build_key(job_id);
        let mut conn = self.client.clone();

        let payload = conn
            .get::<_, Option<String>>(&key)
            .await
            .map_err(|e| JobStoreError::Operation(format!("GET {}: {}", key, e)))?;

        payload
            .map(|raw| {
                serde_json::from_str(&raw).map_err(|e| JobStoreError::Decode(e.to_string()))
            })
            .transpose()
    }

    async fn remove(&self, job_id: &str) -> JobStoreResult<()> {
        let key = self.build_key(job_id);
        let mut conn = self.client.clone();

        conn.del::<_, ()>(&key)
            .await
            .map_err(|e| JobStoreError::Operation(format!("DEL {}: {}", key, e)))?;

        debug!("Job DEL: {}", job_id);
        Ok(())
    }

    async fn health_check(&self) -> bool {
        let mut conn = self.client.clone();
        conn.ping::<()>().await.is_ok()
    }
}
