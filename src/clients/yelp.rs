use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use super::{ProviderError, endpoint_url, fetch_json};
use crate::config::YelpConfig;

pub const PROVIDER: &str = "Yelp";

#[derive(Debug, Deserialize)]
struct SearchResponse {
    businesses: Vec<YelpBusiness>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct YelpBusiness {
    pub name: String,
    #[serde(default)]
    pub image_url: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub rating: f64,
    pub price: Option<String>,
}

#[derive(Clone)]
pub struct YelpClient {
    client: Client,
    config: YelpConfig,
}

impl YelpClient {
    #[must_use]
    pub const fn with_shared_client(client: Client, config: YelpConfig) -> Self {
        Self { client, config }
    }

    /// Fetches up to `search_limit` listings in one request; callers page locally.
    pub async fn search(
        &self,
        latitude: &str,
        longitude: &str,
    ) -> Result<Vec<YelpBusiness>, ProviderError> {
        let limit = self.config.search_limit.to_string();
        let url = endpoint_url(
            PROVIDER,
            &self.config.base_url,
            &[
                ("latitude", latitude),
                ("longitude", longitude),
                ("term", self.config.term.as_str()),
                ("limit", limit.as_str()),
            ],
        )?;

        debug!("Searching businesses near {}, {}", latitude, longitude);

        let request = self.client.get(url).bearer_auth(&self.config.api_key);
        let response: SearchResponse = fetch_json(PROVIDER, request).await?;
        Ok(response.businesses)
    }
}
