//! City name resolution against the gazetteer.

use std::sync::Arc;
use tracing::info;

use crate::domain::entities::City;
use crate::domain::repositories::CityRepository;
use crate::error::AppError;
use crate::utils::city_matcher::find_most_similar;
use crate::utils::text_normalizer::{needs_transliteration, transliterate};

/// Resolves free-text city names to gazetteer records.
///
/// # Resolution Order
///
/// 1. Exact case-insensitive lookup of the name as typed
/// 2. For non-Latin input, exact lookup of its transliteration
/// 3. Nearest match over the whole gazetteer, using the transliterated name
pub struct CityService {
    repository: Arc<dyn CityRepository>,
}

impl CityService {
    /// Creates a new city service.
    pub fn new(repository: Arc<dyn CityRepository>) -> Self {
        Self { repository }
    }

    /// Resolves every name, preserving order and duplicates.
    ///
    /// Names that resolve to nothing are logged and left out. The gazetteer
    /// is loaded at most once per call, and only if some exact lookup missed.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on repository errors.
    pub async fn resolve_all(&self, names: &[String]) -> Result<Vec<City>, AppError> {
        let mut gazetteer: Option<Vec<City>> = None;
        let mut resolved = Vec::with_capacity(names.len());

        for name in names {
            if let Some(city) = self.find_exact(name).await? {
                info!("Found city {} in database.", name);
                resolved.push(city);
                continue;
            }

            if gazetteer.is_none() {
                gazetteer = Some(self.repository.list_all().await?);
            }
            let cities = gazetteer.as_deref().unwrap_or_default();

            match find_most_similar(&transliterate(name), cities) {
                Some(city) => {
                    info!("City {} resolved to {} by similarity.", name, city.city);
                    resolved.push(city.clone());
                }
                None => info!("Could not find {} in database.", name),
            }
        }

        Ok(resolved)
    }

    /// Number of gazetteer records.
    pub async fn gazetteer_size(&self) -> Result<i64, AppError> {
        self.repository.count().await
    }

    async fn find_exact(&self, name: &str) -> Result<Option<City>, AppError> {
        if let Some(city) = self.repository.find_by_name(name).await? {
            return Ok(Some(city));
        }

        if needs_transliteration(name) {
            let latin = transliterate(name);
            if latin != name {
                return self.repository.find_by_name(&latin).await;
            }
        }

        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::MockCityRepository;

    fn city(id: i64, name: &str, ascii: &str, region: Option<&str>) -> City {
        City::new(
            id,
            name.to_string(),
            ascii.to_string(),
            50.0,
            30.0,
            "Ukraine".to_string(),
            String::new(),
            region.map(str::to_string),
        )
    }

    #[tokio::test]
    async fn test_exact_match_skips_fuzzy_scan() {
        let mut repo = MockCityRepository::new();
        let kyiv = city(1, "Kyiv", "Kyiv", Some("Europe"));
        repo.expect_find_by_name()
            .withf(|name| name == "Kyiv")
            .times(2)
            .returning(move |_| Ok(Some(kyiv.clone())));
        repo.expect_list_all().times(0);

        let service = CityService::new(Arc::new(repo));
        let resolved = service
            .resolve_all(&["Kyiv".to_string(), "Kyiv".to_string()])
            .await
            .unwrap();

        assert_eq!(resolved.len(), 2);
        assert!(resolved.iter().all(|c| c.id == 1));
    }

    #[tokio::test]
    async fn test_fuzzy_fallback_loads_gazetteer_once() {
        let mut repo = MockCityRepository::new();
        repo.expect_find_by_name().returning(|_| Ok(None));
        repo.expect_list_all().times(1).returning(|| {
            Ok(vec![
                city(1, "Lviv", "Lviv", Some("Europe")),
                city(2, "Odesa", "Odesa", Some("Europe")),
            ])
        });

        let service = CityService::new(Arc::new(repo));
        let resolved = service
            .resolve_all(&["Lvov".to_string(), "Odessa".to_string()])
            .await
            .unwrap();

        assert_eq!(resolved.iter().map(|c| c.id).collect::<Vec<_>>(), vec![1, 2]);
    }

    #[tokio::test]
    async fn test_unresolved_names_are_dropped() {
        let mut repo = MockCityRepository::new();
        repo.expect_find_by_name().returning(|_| Ok(None));
        repo.expect_list_all().times(1).returning(|| Ok(vec![]));

        let service = CityService::new(Arc::new(repo));
        let resolved = service.resolve_all(&["Atlantis".to_string()]).await.unwrap();

        assert!(resolved.is_empty());
    }

    #[tokio::test]
    async fn test_transliterated_exact_match() {
        let mut repo = MockCityRepository::new();
        let moscow = city(9, "Moscow", "Moskva", Some("Asia"));
        repo.expect_find_by_name()
            .withf(|name| name == "Москва")
            .times(1)
            .returning(|_| Ok(None));
        repo.expect_find_by_name()
            .withf(|name| name == "Moskva")
            .times(1)
            .returning(move |_| Ok(Some(moscow.clone())));
        repo.expect_list_all().times(0);

        let service = CityService::new(Arc::new(repo));
        let resolved = service.resolve_all(&["Москва".to_string()]).await.unwrap();

        assert_eq!(resolved.len(), 1);
        assert_eq!(resolved[0].id, 9);
    }

    #[tokio::test]
    async fn test_repository_error_propagates() {
        let mut repo = MockCityRepository::new();
        repo.expect_find_by_name()
            .returning(|_| Err(AppError::internal("Database error", serde_json::json!({}))));

        let service = CityService::new(Arc::new(repo));
        let result = service.resolve_all(&["Kyiv".to_string()]).await;

        assert!(matches!(result, Err(AppError::Internal { .. })));
    }
}
