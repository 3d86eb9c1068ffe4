//! Domain layer containing business entities and ports.
//!
//! # Architecture
//!
//! - [`entities`] - Core data structures (cities, observations, tasks, jobs)
//! - [`repositories`] - Storage and dispatch trait definitions
//! - [`providers`] - Weather provider abstraction
//! - [`regions`] - Country to continent classification
//!
//! # Batch Processing Flow
//!
//! 1. `POST /weather` validates and resolves city names
//! 2. The resolved batch is submitted to a [`repositories::JobQueue`]
//! 3. The background worker fetches weather for every city and records a
//!    [`entities::JobState`] in the [`repositories::JobStore`]
//! 4. The first poll that observes the finished job persists it through the
//!    [`repositories::ResultStore`] and closes the [`entities::Task`]

pub mod entities;
pub mod providers;
pub mod regions;
pub mod repositories;
