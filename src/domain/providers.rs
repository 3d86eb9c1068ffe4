//! Weather provider abstraction.
//!
//! Every provider integration supplies two things: how to address a city
//! ([`WeatherProvider::request`]) and how to read its payload
//! ([`WeatherProvider::parse`]). Transport is handled once, by
//! [`crate::application::services::BatchFetcher`], so all providers share the
//! same failure isolation.

use serde_json::Value;
use std::fmt;
use std::str::FromStr;

use crate::domain::entities::{City, ProviderOutcome};

/// Statically configured provider selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProviderKind {
    OpenWeather,
    WeatherApi,
}

impl ProviderKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProviderKind::OpenWeather => "openweather",
            ProviderKind::WeatherApi => "weatherapi",
        }
    }
}

impl fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProviderKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "openweather" => Ok(ProviderKind::OpenWeather),
            "weatherapi" => Ok(ProviderKind::WeatherApi),
            other => Err(format!(
                "unknown weather provider '{other}' (expected 'openweather' or 'weatherapi')"
            )),
        }
    }
}

/// An outbound GET request: endpoint plus query parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct ProviderRequest {
    pub url: String,
    pub query: Vec<(&'static str, String)>,
}

/// One external weather data source.
pub trait WeatherProvider: Send + Sync {
    fn kind(&self) -> ProviderKind;

    /// Builds the request for the current weather at `city`.
    fn request(&self, city: &City) -> ProviderRequest;

    /// Normalizes a decoded response body. Never panics on unexpected shapes.
    fn parse(&self, payload: &Value) -> ProviderOutcome;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_kind_parsing() {
        assert_eq!(
            "openweather".parse::<ProviderKind>().unwrap(),
            ProviderKind::OpenWeather
        );
        assert_eq!(
            " WeatherAPI ".parse::<ProviderKind>().unwrap(),
            ProviderKind::WeatherApi
        );
        assert!("darksky".parse::<ProviderKind>().is_err());
    }
}
