use crate::types::{CurrentConditions, Forecast, RawWeatherPayload, WeatherAlert};
use reqwest::Client;
use std::sync::Arc;
use std::time::Duration;

const REQUEST_TIMEOUT_SECS: u64 = 10;

/// Weather provider errors
#[derive(Debug, thiserror::Error)]
pub enum WeatherError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
    #[error("Provider returned status {0}")]
    Status(reqwest::StatusCode),
}

/// Gateway to the external weather provider.
///
/// Issues two sequential GET requests per fetch: current conditions first,
/// then the 5-day/3-hour forecast. No retry, no backoff, no caching.
#[derive(Debug, Clone)]
pub struct WeatherGateway {
    client: Arc<Client>,
    base_url: String,
    api_key: String,
    units: String,
}

impl WeatherGateway {
    pub fn new(base_url: &str, api_key: &str, units: &str) -> Result<Self, WeatherError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;

        Ok(Self {
            client: Arc::new(client),
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
            units: units.to_string(),
        })
    }

    /// Fetch the raw combined payload for a city.
    ///
    /// Returns `None` on any failure: transport error, non-success status
    /// from the provider, or a payload that doesn't decode. The page layer
    /// shows a generic "not found" either way; callers that need the
    /// distinction can use [`WeatherGateway::try_fetch`].
    pub async fn fetch_raw(&self, city: &str) -> Option<RawWeatherPayload> {
        match self.try_fetch(city).await {
            Ok(raw) => Some(raw),
            Err(e) => {
                tracing::warn!("Error fetching weather data for {}: {}", city, e);
                None
            }
        }
    }

    /// Fetch with an explicit error, for callers and tests that care why.
    pub async fn try_fetch(&self, city: &str) -> Result<RawWeatherPayload, WeatherError> {
        let response = self
            .client
            .get(format!("{}/weather", self.base_url))
            .query(&[
                ("q", city),
                ("appid", self.api_key.as_str()),
                ("units", self.units.as_str()),
            ])
            .send()
            .await?;

        // A failed current-conditions lookup short-circuits; the forecast
        // request is never issued.
        if !response.status().is_success() {
            tracing::debug!(
                "Current conditions for {} returned status {}",
                city,
                response.status()
            );
            return Err(WeatherError::Status(response.status()));
        }

        let current: CurrentConditions = response.json().await?;

        let forecast: Forecast = self
            .client
            .get(format!("{}/forecast", self.base_url))
            .query(&[
                ("q", city),
                ("appid", self.api_key.as_str()),
                ("units", self.units.as_str()),
            ])
            .send()
            .await?
            .json()
            .await?;

        Ok(RawWeatherPayload { current, forecast })
    }

    /// Severe weather alerts for a city.
    ///
    /// Extension point, not a real integration: the alert feed requires the
    /// provider's One Call plan, so this always returns an empty list.
    pub async fn alerts(&self, _city: &str) -> Vec<WeatherAlert> {
        Vec::new()
    }
}
