//! Infrastructure layer for external integrations.
//!
//! This layer implements interfaces defined by the domain layer, providing
//! concrete implementations for persistence, job execution and provider
//! HTTP payloads.
//!
//! # Modules
//!
//! - [`jobs`] - Job queue, job stores and the batch worker
//! - [`persistence`] - PostgreSQL repository implementations
//! - [`providers`] - Weather provider request builders and parsers
//! - [`storage`] - Per-region result files

pub mod jobs;
pub mod persistence;
pub mod providers;
pub mod storage;
