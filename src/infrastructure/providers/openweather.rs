//! OpenWeather One Call 3.0 integration.

use serde_json::Value;

use super::{as_code, read_temperature};
use crate::domain::entities::{City, ProviderError, ProviderOutcome};
use crate::domain::providers::{ProviderKind, ProviderRequest, WeatherProvider};

const SUCCESS_CODE: i64 = 200;
const TEMP_PATH: &str = "current.temp";

/// Current conditions from `GET {base}/data/3.0/onecall`, metric units.
///
/// # Payload
///
/// ```json
/// { "current": { "temp": 4.2, "weather": [{ "description": "overcast clouds" }] } }
/// ```
///
/// Errors are reported through a top-level `cod` (number or numeric string)
/// with an optional `message`.
#[derive(Debug, Clone)]
pub struct OpenWeatherProvider {
    base_url: String,
    api_key: String,
}

impl OpenWeatherProvider {
    pub fn new(base_url: String, api_key: String) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
        }
    }

    fn declared_error(payload: &Value) -> Option<ProviderError> {
        let cod = payload.get("cod")?;
        let code = as_code(cod).unwrap_or(-1);
        if code == SUCCESS_CODE {
            return None;
        }

        let message = payload
            .get("message")
            .and_then(Value::as_str)
            .unwrap_or("Unknown error.");
        Some(ProviderError::new(code, message))
    }
}

impl WeatherProvider for OpenWeatherProvider {
    fn kind(&self) -> ProviderKind {
        ProviderKind::OpenWeather
    }

    fn request(&self, city: &City) -> ProviderRequest {
        ProviderRequest {
            url: format!("{}/data/3.0/onecall", self.base_url),
            query: vec![
                ("lat", city.lat.to_string()),
                ("lon", city.lng.to_string()),
                ("appid", self.api_key.clone()),
                ("units", "metric".to_string()),
                ("exclude", "minutely,hourly,daily".to_string()),
            ],
        }
    }

    fn parse(&self, payload: &Value) -> ProviderOutcome {
        if let Some(err) = Self::declared_error(payload) {
            return ProviderOutcome::DeclaredError(err);
        }

        let current = payload.get("current");
        let temp = match read_temperature(current, "temp", TEMP_PATH) {
            Ok(temp) => temp,
            Err(err) => return ProviderOutcome::Malformed(err),
        };

        let description = current
            .and_then(|c| c.get("weather"))
            .and_then(Value::as_array)
            .and_then(|conditions| conditions.first())
            .and_then(|first| first.get("description"))
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string();

        ProviderOutcome::from_reading(temp, TEMP_PATH, description)
    }
}
