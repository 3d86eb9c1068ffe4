//! Concrete weather provider integrations.
//!
//! - [`OpenWeatherProvider`] - OpenWeather One Call 3.0
//! - [`WeatherApiProvider`] - WeatherAPI.com current conditions
//!
//! Providers are selected from configuration by [`build_providers`].

mod openweather;
mod weatherapi;

pub use openweather::OpenWeatherProvider;
pub use weatherapi::WeatherApiProvider;

use serde_json::Value;
use std::sync::Arc;

use crate::config::Config;
use crate::domain::entities::ProviderError;
use crate::domain::providers::{ProviderKind, WeatherProvider};

/// Instantiates every provider enabled in `config`, in configuration order.
pub fn build_providers(config: &Config) -> Vec<Arc<dyn WeatherProvider>> {
    config
        .providers
        .iter()
        .map(|kind| -> Arc<dyn WeatherProvider> {
            match kind {
                ProviderKind::OpenWeather => Arc::new(OpenWeatherProvider::new(
                    config.open_weather_base_url.clone(),
                    config.open_weather_api_key.clone(),
                )),
                ProviderKind::WeatherApi => Arc::new(WeatherApiProvider::new(
                    config.weatherapi_base_url.clone(),
                    config.weatherapi_api_key.clone(),
                )),
            }
        })
        .collect()
}

/// Reads a JSON number, accepting numeric strings as some providers send them.
fn as_number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// Reads an integral status code. Fractional codes are not codes.
fn as_code(value: &Value) -> Option<i64> {
    as_number(value)
        .filter(|n| n.fract() == 0.0 && n.is_finite())
        .map(|n| n as i64)
}

/// Reads `current.<key>` as a temperature.
///
/// A missing or null value is `Ok(None)`; anything non-numeric is a 500
/// naming `path`.
fn read_temperature(
    current: Option<&Value>,
    key: &str,
    path: &str,
) -> Result<Option<f64>, ProviderError> {
    match current.and_then(|c| c.get(key)) {
        None | Some(Value::Null) => Ok(None),
        Some(raw) => as_number(raw)
            .map(Some)
            .ok_or_else(|| ProviderError::new(500, format!("Invalid value at {path}: {raw}"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_as_number() {
        assert_eq!(as_number(&json!(200)), Some(200.0));
        assert_eq!(as_number(&json!("401")), Some(401.0));
        assert_eq!(as_number(&json!(-3.5)), Some(-3.5));
        assert_eq!(as_number(&json!("n/a")), None);
        assert_eq!(as_number(&json!(null)), None);
    }

    #[test]
    fn test_as_code_requires_integral_value() {
        assert_eq!(as_code(&json!(200)), Some(200));
        assert_eq!(as_code(&json!("404")), Some(404));
        assert_eq!(as_code(&json!(200.0)), Some(200));
        assert_eq!(as_code(&json!(200.9)), None);
        assert_eq!(as_code(&json!("200.5")), None);
    }

    #[test]
    fn test_read_temperature() {
        let current = json!({ "temp": 4.2, "bad": [1], "none": null });

        assert_eq!(read_temperature(Some(&current), "temp", "current.temp"), Ok(Some(4.2)));
        assert_eq!(read_temperature(Some(&current), "none", "current.none"), Ok(None));
        assert_eq!(read_temperature(Some(&current), "missing", "current.missing"), Ok(None));
        assert_eq!(read_temperature(None, "temp", "current.temp"), Ok(None));

        let err = read_temperature(Some(&current), "bad", "current.bad").unwrap_err();
        assert_eq!(err.code, 500);
        assert!(err.message.contains("current.bad"));
    }
}
