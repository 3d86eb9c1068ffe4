//! PostgreSQL repository implementations.
//!
//! Concrete implementations of domain repository traits using SQLx.
//!
//! # Repositories
//!
//! - [`PgCityRepository`] - Gazetteer storage and lookups
//! - [`PgTaskRepository`] - Task registry

pub mod pg_city_repository;
pub mod pg_task_repository;

pub use pg_city_repository::PgCityRepository;
pub use pg_task_repository::PgTaskRepository;
