//! Asynchronous job execution.
//!
//! A bounded channel carries [`BatchJob`](crate::domain::entities::BatchJob)s
//! from request handlers to the batch worker. Job state lives in a
//! [`JobStore`](crate::domain::repositories::JobStore):
//!
//! - [`RedisJobStore`] - when `REDIS_URL` is configured and reachable
//! - [`MemoryJobStore`] - in-process fallback

pub mod memory_store;
pub mod queue;
pub mod redis_store;
pub mod worker;

pub use memory_store::MemoryJobStore;
pub use queue::ChannelJobQueue;
pub use redis_store::RedisJobStore;
pub use worker::run_batch_worker;
