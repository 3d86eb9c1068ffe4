//! PostgreSQL implementation of the gazetteer repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{City, NewCity};
use crate::domain::repositories::CityRepository;
use crate::error::AppError;

/// PostgreSQL repository for the `cities` table.
pub struct PgCityRepository {
    pool: Arc<PgPool>,
}

impl PgCityRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CityRepository for PgCityRepository {
    async fn find_by_name(&self, name: &str) -> Result<Option<City>, AppError> {
        let city = sqlx::query_as!(
            City,
            r#"
            SELECT id, city, city_ascii, lat, lng, country, admin_name, region
            FROM cities
            WHERE lower(city) = lower($1) OR lower(city_ascii) = lower($1)
            ORDER BY id
            LIMIT 1
            "#,
            name
        )
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(city)
    }

    async fn list_all(&self) -> Result<Vec<City>, AppError> {
        let cities = sqlx::query_as!(
            City,
            r#"
            SELECT id, city, city_ascii, lat, lng, country, admin_name, region
            FROM cities
            ORDER BY id
            "#
        )
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(cities)
    }

    async fn insert_many(&self, cities: Vec<NewCity>) -> Result<u64, AppError> {
        let mut tx = self.pool.begin().await?;
        let mut inserted = 0;

        for city in cities {
            let result = sqlx::query!(
                r#"
                INSERT INTO cities (city, city_ascii, lat, lng, country, admin_name, region)
                VALUES ($1, $2, $3, $4, $5, $6, $7)
                "#,
                city.city,
                city.city_ascii,
                city.lat,
                city.lng,
                city.country,
                city.admin_name,
                city.region
            )
            .execute(&mut *tx)
            .await?;

            inserted += result.rows_affected();
        }

        tx.commit().await?;
        Ok(inserted)
    }

    async fn count(&self) -> Result<i64, AppError> {
        let count = sqlx::query_scalar!(r#"SELECT COUNT(*) as "count!" FROM cities"#)
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(count)
    }

    async fn delete_all(&self) -> Result<u64, AppError> {
        let result = sqlx::query!("DELETE FROM cities")
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected())
    }
}
