//! Gazetteer entry representing a named place.

use serde::{Deserialize, Serialize};

/// A read-only gazetteer record.
///
/// Besides being the matching target, a record selected for a request is the
/// provider-call key (`lat`/`lng`) and the persistence grouping key (`region`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct City {
    pub id: i64,
    /// Name in its native script, as published by the gazetteer.
    pub city: String,
    /// ASCII transliteration of [`City::city`].
    pub city_ascii: String,
    pub lat: f64,
    pub lng: f64,
    pub country: String,
    pub admin_name: String,
    /// Continent-level classification; `None` when the country is unmapped.
    pub region: Option<String>,
}

impl City {
    /// Creates a new City instance.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: i64,
        city: String,
        city_ascii: String,
        lat: f64,
        lng: f64,
        country: String,
        admin_name: String,
        region: Option<String>,
    ) -> Self {
        Self {
            id,
            city,
            city_ascii,
            lat,
            lng,
            country,
            admin_name,
            region,
        }
    }
}

/// Input data for inserting a gazetteer record.
#[derive(Debug, Clone, PartialEq)]
pub struct NewCity {
    pub city: String,
    pub city_ascii: String,
    pub lat: f64,
    pub lng: f64,
    pub country: String,
    pub admin_name: String,
    pub region: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_city_creation() {
        let city = City::new(
            7,
            "Київ".to_string(),
            "Kyiv".to_string(),
            50.45,
            30.5236,
            "Ukraine".to_string(),
            "Kyyiv, Misto".to_string(),
            Some("Europe".to_string()),
        );

        assert_eq!(city.id, 7);
        assert_eq!(city.city_ascii, "Kyiv");
        assert_eq!(city.region.as_deref(), Some("Europe"));
    }
}
