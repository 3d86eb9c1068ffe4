//! Repository and port trait definitions for the domain layer.
//!
//! These traits abstract storage and dispatch so services can be tested
//! against mocks and backends can be swapped without touching business logic.
//!
//! # Architecture
//!
//! - Traits define the contract for data operations
//! - Implementations live in `crate::infrastructure`
//! - Mock implementations are auto-generated via `mockall` for testing
//!
//! # Available Traits
//!
//! - [`CityRepository`] - Gazetteer lookups and import
//! - [`TaskRepository`] - Task registry
//! - [`ResultStore`] - Per-region result artifacts
//! - [`JobStore`] - Job state backend
//! - [`JobQueue`] - Batch dispatch to the background worker
//!
//! # Testing
//!
//! See integration tests in `tests/repository_*.rs` for usage examples.

pub mod city_repository;
pub mod job_queue;
pub mod job_store;
pub mod result_store;
pub mod task_repository;

pub use city_repository::CityRepository;
pub use job_queue::JobQueue;
pub use job_store::{JobStore, JobStoreError, JobStoreResult};
pub use result_store::ResultStore;
pub use task_repository::TaskRepository;

#[cfg(test)]
pub use city_repository::MockCityRepository;
#[cfg(test)]
pub use job_queue::MockJobQueue;
#[cfg(test)]
pub use job_store::MockJobStore;
#[cfg(test)]
pub use result_store::MockResultStore;
#[cfg(test)]
pub use task_repository::MockTaskRepository;
