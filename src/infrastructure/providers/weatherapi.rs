//! WeatherAPI.com integration.

use serde_json::Value;

use super::{as_code, read_temperature};
use crate::domain::entities::{City, ProviderError, ProviderOutcome};
use crate::domain::providers::{ProviderKind, ProviderRequest, WeatherProvider};

const TEMP_PATH: &str = "current.temp_c";

/// Current conditions from `GET {base}/v1/current.json`.
///
/// # Payload
///
/// ```json
/// { "current": { "temp_c": 4.2, "condition": { "text": "Overcast" } } }
/// ```
///
/// Errors are reported as `{ "error": { "code": 1006, "message": "..." } }`.
#[derive(Debug, Clone)]
pub struct WeatherApiProvider {
    base_url: String,
    api_key: String,
}

impl WeatherApiProvider {
    pub fn new(base_url: String, api_key: String) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
        }
    }
}

impl WeatherProvider for WeatherApiProvider {
    fn kind(&self) -> ProviderKind {
        ProviderKind::WeatherApi
    }

    fn request(&self, city: &City) -> ProviderRequest {
        ProviderRequest {
            url: format!("{}/v1/current.json", self.base_url),
            query: vec![
                ("key", self.api_key.clone()),
                ("q", format!("{},{}", city.lat, city.lng)),
                ("aqi", "no".to_string()),
            ],
        }
    }

    fn parse(&self, payload: &Value) -> ProviderOutcome {
        if let Some(error) = payload.get("error").filter(|e| !e.is_null()) {
            let code = error.get("code").and_then(as_code).unwrap_or(-1);
            let message = error
                .get("message")
                .and_then(Value::as_str)
                .unwrap_or("Unknown error.");
            return ProviderOutcome::DeclaredError(ProviderError::new(code, message));
        }

        let current = payload.get("current");
        let temp = match read_temperature(current, "temp_c", TEMP_PATH) {
            Ok(temp) => temp,
            Err(err) => return ProviderOutcome::Malformed(err),
        };

        let description = current
            .and_then(|c| c.get("condition"))
            .and_then(|condition| condition.get("text"))
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string();

        ProviderOutcome::from_reading(temp, TEMP_PATH, description)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::Reading;
    use serde_json::json;

    fn provider() -> WeatherApiProvider {
        WeatherApiProvider::new("https://api.weatherapi.com".to_string(), "secret".to_string())
    }

    #[test]
    fn test_request_uses_coordinates() {
        let city = City::new(
            1,
            "Tokyo".to_string(),
            "Tokyo".to_string(),
            35.6897,
            139.6922,
            "Japan".to_string(),
            "Tōkyō".to_string(),
            Some("Asia".to_string()),
        );
        let request = provider().request(&city);

        assert_eq!(request.url, "https://api.weatherapi.com/v1/current.json");
        assert!(request.query.contains(&("q", "35.6897,139.6922".to_string())));
        assert!(request.query.contains(&("key", "secret".to_string())));
    }

    #[test]
    fn test_parse_success() {
        let payload = json!({
            "location": { "name": "Tokyo" },
            "current": { "temp_c": 18.0, "condition": { "text": "Sunny" } }
        });

        assert_eq!(
            provider().parse(&payload),
            ProviderOutcome::Success(Reading {
                temp: 18.0,
                description: "Sunny".to_string()
            })
        );
    }

    #[test]
    fn test_parse_declared_error() {
        let payload = json!({ "error": { "code": 1006, "message": "No matching location found." } });
        let ProviderOutcome::DeclaredError(err) = provider().parse(&payload) else {
            panic!("expected declared error");
        };
        assert_eq!(err.code, 1006);
        assert_eq!(err.message, "No matching location found.");
    }

    #[test]
    fn test_parse_missing_condition_gives_empty_description() {
        let payload = json!({ "current": { "temp_c": -3 } });
        let ProviderOutcome::Success(reading) = provider().parse(&payload) else {
            panic!("expected success");
        };
        assert_eq!(reading.temp, -3.0);
        assert_eq!(reading.description, "");
    }

    #[test]
    fn test_parse_missing_temperature() {
        let payload = json!({ "current": { "condition": { "text": "Rain" } } });
        let ProviderOutcome::Malformed(err) = provider().parse(&payload) else {
            panic!("expected malformed outcome");
        };
        assert_eq!(err.code, 500);
        assert!(err.message.contains("current.temp_c"));
    }

    #[test]
    fn test_parse_out_of_range() {
        let payload = json!({ "current": { "temp_c": -50 } });
        let ProviderOutcome::Malformed(err) = provider().parse(&payload) else {
            panic!("expected malformed outcome");
        };
        assert_eq!(err.code, 400);
        assert!(err.message.contains("-50"));
    }
}
