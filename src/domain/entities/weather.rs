//! Weather readings and provider outcomes.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Exclusive lower bound for an accepted temperature, in °C.
pub const MIN_TEMPERATURE: f64 = -50.0;
/// Exclusive upper bound for an accepted temperature, in °C.
pub const MAX_TEMPERATURE: f64 = 50.0;

/// Region bucket used for cities whose gazetteer record has no region.
pub const UNASSIGNED_REGION: &str = "null";

/// Observations grouped by region, in submission order within each bucket.
pub type RegionResults = BTreeMap<String, Vec<WeatherObservation>>;

/// Persisted observations for one region keyed by city name.
pub type RegionRecords = BTreeMap<String, Vec<StoredObservation>>;

/// Provider-independent part of a successful reading.
#[derive(Debug, Clone, PartialEq)]
pub struct Reading {
    pub temp: f64,
    pub description: String,
}

/// One successful provider call for one city.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherObservation {
    pub city: String,
    pub temp: f64,
    pub description: String,
    /// Capture time; replaced by the persistence time when written to disk.
    pub time: DateTime<Utc>,
}

impl WeatherObservation {
    pub fn new(city: String, reading: Reading, time: DateTime<Utc>) -> Self {
        Self {
            city,
            temp: reading.temp,
            description: reading.description,
            time,
        }
    }

    /// Drops the city key, producing the record body used in region reads.
    pub fn into_stored(self) -> (String, StoredObservation) {
        (
            self.city,
            StoredObservation {
                temp: self.temp,
                description: self.description,
                time: self.time,
            },
        )
    }
}

/// An observation as returned from region reads, keyed externally by city.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredObservation {
    pub temp: f64,
    pub description: String,
    pub time: DateTime<Utc>,
}

/// Tagged provider failure: machine status code plus human message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProviderError {
    pub code: i64,
    pub message: String,
}

impl ProviderError {
    pub fn new(code: i64, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

/// Result of normalizing one provider payload.
#[derive(Debug, Clone, PartialEq)]
pub enum ProviderOutcome {
    Success(Reading),
    /// The provider itself reported an error code.
    DeclaredError(ProviderError),
    /// The payload lacked required data or carried an implausible reading.
    Malformed(ProviderError),
}

impl ProviderOutcome {
    /// Applies the shared checks every provider funnels through, in order:
    /// missing temperature (500), out-of-range temperature (400), success.
    pub fn from_reading(temp: Option<f64>, temp_path: &str, description: String) -> Self {
        let Some(temp) = temp else {
            return Self::Malformed(ProviderError::new(
                500,
                format!("Missing expected key: {temp_path}"),
            ));
        };

        if !is_plausible_temperature(temp) {
            return Self::Malformed(ProviderError::new(
                400,
                format!("Temperature out of range: {temp}°C"),
            ));
        }

        Self::Success(Reading { temp, description })
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }
}

/// Returns true when `temp` lies strictly inside (-50, 50) °C.
pub fn is_plausible_temperature(temp: f64) -> bool {
    temp > MIN_TEMPERATURE && temp < MAX_TEMPERATURE
}

/// Region bucket key for an optional gazetteer region.
pub fn region_key(region: Option<&str>) -> String {
    region.unwrap_or(UNASSIGNED_REGION).to_string()
}
