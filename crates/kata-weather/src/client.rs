//! HTTP clients for the geocoding and current-conditions endpoints.

use crate::types::{CurrentConditions, GeocodeCandidate, GeocodeResponse, WeatherError};
use reqwest::Client;
use std::time::Duration;

const REQUEST_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Clone)]
pub struct WeatherClient {
    client: Client,
    geocode_url: String,
    weather_url: String,
    api_key: String,
}

impl WeatherClient {
    /// Build a client for the given endpoint base URLs. Tests point these at
    /// a mock server.
    pub fn new(geocode_url: &str, weather_url: &str, api_key: &str) -> Result<Self, WeatherError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;

        Ok(Self {
            client,
            geocode_url: geocode_url.to_string(),
            weather_url: weather_url.to_string(),
            api_key: api_key.to_string(),
        })
    }

    /// Geocode a free-text address. An empty vec means the address does not
    /// exist; the caller decides how to report that.
    pub async fn geocode(&self, address: &str) -> Result<Vec<GeocodeCandidate>, WeatherError> {
        tracing::debug!(address, "geocoding address");

        let response = self
            .client
            .get(&self.geocode_url)
            .query(&[("address", address), ("key", &self.api_key)])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(WeatherError::Status(response.status().as_u16()));
        }

        let body: GeocodeResponse = serde_json::from_str(&response.text().await?)?;

        tracing::debug!(candidates = body.results.len(), "geocode complete");
        Ok(body.results)
    }

    /// Fetch current conditions for a coordinate pair.
    pub async fn current_conditions(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<CurrentConditions, WeatherError> {
        tracing::debug!(latitude, longitude, "fetching current conditions");

        let response = self
            .client
            .get(&self.weather_url)
            .query(&[
                ("key", self.api_key.as_str()),
                ("location.latitude", &latitude.to_string()),
                ("location.longitude", &longitude.to_string()),
            ])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(WeatherError::Status(response.status().as_u16()));
        }

        let conditions: CurrentConditions = serde_json::from_str(&response.text().await?)?;
        Ok(conditions)
    }
}
