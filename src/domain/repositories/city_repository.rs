//! Repository trait for gazetteer access.

use crate::domain::entities::{City, NewCity};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for the reference gazetteer.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgCityRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/repository_city.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CityRepository: Send + Sync {
    /// Finds the first record whose native or ASCII name equals `name`,
    /// ignoring case.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_name(&self, name: &str) -> Result<Option<City>, AppError>;

    /// Returns the whole gazetteer in a stable order (ascending id).
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list_all(&self) -> Result<Vec<City>, AppError>;

    /// Inserts records in a single transaction and returns how many were written.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors; nothing is written then.
    async fn insert_many(&self, cities: Vec<NewCity>) -> Result<u64, AppError>;

    /// Counts gazetteer records.
    async fn count(&self) -> Result<i64, AppError>;

    /// Removes every gazetteer record and returns how many were deleted.
    async fn delete_all(&self) -> Result<u64, AppError>;
}
