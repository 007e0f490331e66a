use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{ProviderError, endpoint_url, fetch_json, string_or_number};
use crate::config::GeocodeConfig;
use crate::services::location::Geocoder;

pub const PROVIDER: &str = "LocationIQ";

/// One forward-geocoding match as returned by the provider.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeocodePlace {
    pub display_name: String,
    #[serde(deserialize_with = "string_or_number")]
    pub lat: String,
    #[serde(deserialize_with = "string_or_number")]
    pub lon: String,
}

#[derive(Clone)]
pub struct GeocodeClient {
    client: Client,
    config: GeocodeConfig,
}

impl GeocodeClient {
    #[must_use]
    pub const fn with_shared_client(client: Client, config: GeocodeConfig) -> Self {
        Self { client, config }
    }

    pub async fn search(&self, query: &str) -> Result<Vec<GeocodePlace>, ProviderError> {
        let url = endpoint_url(
            PROVIDER,
            &self.config.base_url,
            &[
                ("key", self.config.api_key.as_str()),
                ("q", query),
                ("format", "json"),
            ],
        )?;

        debug!("Geocoding query: {}", query);

        fetch_json(PROVIDER, self.client.get(url)).await
    }
}

#[async_trait]
impl Geocoder for GeocodeClient {
    async fn geocode(&self, query: &str) -> Result<Vec<GeocodePlace>, ProviderError> {
        self.search(query).await
    }
}
