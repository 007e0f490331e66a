use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use super::{ProviderError, endpoint_url, fetch_json};
use crate::config::TrailsConfig;

pub const PROVIDER: &str = "Hiking Project";

#[derive(Debug, Deserialize)]
struct TrailsResponse {
    trails: Vec<RawTrail>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawTrail {
    pub name: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub length: f64,
    pub url: String,
    /// `"YYYY-MM-DD HH:MM:SS"`
    #[serde(default)]
    pub condition_date: String,
    #[serde(default)]
    pub condition_status: Option<String>,
    #[serde(default)]
    pub condition_details: Option<String>,
    #[serde(default)]
    pub stars: f64,
    #[serde(default)]
    pub star_votes: i64,
    #[serde(default)]
    pub summary: String,
}

#[derive(Clone)]
pub struct TrailsClient {
    client: Client,
    config: TrailsConfig,
}

impl TrailsClient {
    #[must_use]
    pub const fn with_shared_client(client: Client, config: TrailsConfig) -> Self {
        Self { client, config }
    }

    pub async fn nearby(
        &self,
        latitude: &str,
        longitude: &str,
    ) -> Result<Vec<RawTrail>, ProviderError> {
        let max_distance = self.config.max_distance.to_string();
        let url = endpoint_url(
            PROVIDER,
            &self.config.base_url,
            &[
                ("lat", latitude),
                ("lon", longitude),
                ("maxDistance", max_distance.as_str()),
                ("key", self.config.api_key.as_str()),
            ],
        )?;

        debug!("Fetching trails near {}, {}", latitude, longitude);

        let response: TrailsResponse = fetch_json(PROVIDER, self.client.get(url)).await?;
        Ok(response.trails)
    }
}
