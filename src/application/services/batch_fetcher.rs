//! Concurrent multi-provider fetch for one batch of cities.

use chrono::Utc;
use futures::stream::{self, StreamExt};
use reqwest::Client;
use serde_json::Value;
use std::sync::Arc;
use thiserror::Error;
use tracing::{info, warn};

use crate::domain::entities::weather::region_key;
use crate::domain::entities::{City, ProviderOutcome, RegionResults, WeatherObservation};
use crate::domain::providers::{ProviderRequest, WeatherProvider};

/// Transport-level failure of a single provider call.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Transport(reqwest::Error),
    #[error("provider answered HTTP {0}")]
    Status(u16),
    #[error("response body is not valid JSON: {0}")]
    Decode(reqwest::Error),
}

/// Fetches current weather for a batch and groups the results by region.
///
/// # Failure Isolation
///
/// Every city/provider pair is attempted exactly once. Transport failures and
/// provider errors are logged and drop only that pair; the batch always
/// completes with whatever succeeded.
///
/// # Ordering
///
/// Calls run concurrently (bounded by `concurrency`) but results are merged in
/// submission order: city order first, then provider order.
pub struct BatchFetcher {
    client: Client,
    providers: Vec<Arc<dyn WeatherProvider>>,
    concurrency: usize,
}

impl BatchFetcher {
    /// Creates a fetcher. A `concurrency` of zero is treated as one.
    pub fn new(client: Client, providers: Vec<Arc<dyn WeatherProvider>>, concurrency: usize) -> Self {
        Self {
            client,
            providers,
            concurrency: concurrency.max(1),
        }
    }

    pub fn provider_count(&self) -> usize {
        self.providers.len()
    }

    /// Runs the whole batch.
    pub async fn fetch(&self, cities: &[City]) -> RegionResults {
        let calls: Vec<_> = cities
            .iter()
            .flat_map(|city| {
                self.providers.iter().map(move |provider| {
                    fetch_owned(self.client.clone(), city.clone(), Arc::clone(provider))
                })
            })
            .collect();

        let outcomes: Vec<(City, Option<WeatherObservation>)> = stream::iter(calls)
            .buffered(self.concurrency)
            .collect()
            .await;

        let mut results = RegionResults::new();
        for (city, observation) in outcomes {
            if let Some(observation) = observation {
                results
                    .entry(region_key(city.region.as_deref()))
                    .or_default()
                    .push(observation);
            }
        }

        info!(
            cities = cities.len(),
            regions = results.len(),
            observations = results.values().map(Vec::len).sum::<usize>(),
            "Batch fetch finished"
        );

        results
    }
}

/// Owns everything one call needs so the batch future stays `Send`.
async fn fetch_owned(
    client: Client,
    city: City,
    provider: Arc<dyn WeatherProvider>,
) -> (City, Option<WeatherObservation>) {
    let observation = fetch_one(&client, &city, provider.as_ref()).await;
    (city, observation)
}

/// Performs one provider call for one city.
///
/// Returns `None` for any failure; the reason is logged here.
async fn fetch_one(
    client: &Client,
    city: &City,
    provider: &dyn WeatherProvider,
) -> Option<WeatherObservation> {
    let provider_name = provider.kind().as_str();
    info!(city = %city.city, provider = provider_name, "Requesting weather");

    let payload = match send(client, &provider.request(city)).await {
        Ok(payload) => payload,
        Err(e) => {
            warn!(city = %city.city, provider = provider_name, "Error while getting data: {}", e);
            metrics::counter!("weather_fetch_transport_errors_total", "provider" => provider_name)
                .increment(1);
            return None;
        }
    };

    match provider.parse(&payload) {
        ProviderOutcome::Success(reading) => {
            metrics::counter!("weather_observations_total", "provider" => provider_name)
                .increment(1);
            Some(WeatherObservation::new(
                city.city_ascii.clone(),
                reading,
                Utc::now(),
            ))
        }
        ProviderOutcome::DeclaredError(err) | ProviderOutcome::Malformed(err) => {
            warn!(
                city = %city.city,
                provider = provider_name,
                code = err.code,
                "Error while processing data: {}",
                err.message
            );
            metrics::counter!("weather_provider_errors_total", "provider" => provider_name)
                .increment(1);
            None
        }
    }
}

async fn send(client: &Client, request: &ProviderRequest) -> Result<Value, FetchError> {
    // Query strings carry API keys, so URLs are stripped from reqwest errors.
    let response = client
        .get(&request.url)
        .query(&request.query)
        .send()
        .await
        .map_err(|e| FetchError::Transport(e.without_url()))?;

    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Status(status.as_u16()));
    }

    response
        .json::<Value>()
        .await
        .map_err(|e| FetchError::Decode(e.without_url()))
}
