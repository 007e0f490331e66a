use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use super::{ProviderError, endpoint_url, fetch_json};
use crate::config::WeatherConfig;

pub const PROVIDER: &str = "Weatherbit";

#[derive(Debug, Deserialize)]
struct ForecastResponse {
    data: Vec<ForecastDay>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ForecastDay {
    pub datetime: String,
    pub weather: ForecastSummary,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ForecastSummary {
    pub description: String,
}

#[derive(Clone)]
pub struct WeatherClient {
    client: Client,
    config: WeatherConfig,
}

impl WeatherClient {
    #[must_use]
    pub const fn with_shared_client(client: Client, config: WeatherConfig) -> Self {
        Self { client, config }
    }

    pub async fn daily_forecast(
        &self,
        latitude: &str,
        longitude: &str,
    ) -> Result<Vec<ForecastDay>, ProviderError> {
        let url = endpoint_url(
            PROVIDER,
            &self.config.base_url,
            &[
                ("lat", latitude),
                ("lon", longitude),
                ("key", self.config.api_key.as_str()),
            ],
        )?;

        debug!("Fetching forecast for {}, {}", latitude, longitude);

        let response: ForecastResponse = fetch_json(PROVIDER, self.client.get(url)).await?;
        Ok(response.data)
    }
}
