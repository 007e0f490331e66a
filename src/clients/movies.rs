use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use super::{ProviderError, endpoint_url, fetch_json};
use crate::config::MoviesConfig;

pub const PROVIDER: &str = "TMDB";

#[derive(Debug, Deserialize)]
struct SearchResponse {
    results: Vec<TmdbMovie>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TmdbMovie {
    pub title: String,
    #[serde(default)]
    pub overview: String,
    #[serde(default)]
    pub vote_average: f64,
    #[serde(default)]
    pub vote_count: i64,
    pub poster_path: Option<String>,
    #[serde(default)]
    pub popularity: f64,
    pub release_date: Option<String>,
}

#[derive(Clone)]
pub struct MoviesClient {
    client: Client,
    config: MoviesConfig,
}

impl MoviesClient {
    #[must_use]
    pub const fn with_shared_client(client: Client, config: MoviesConfig) -> Self {
        Self { client, config }
    }

    #[must_use]
    pub fn image_base_url(&self) -> &str {
        &self.config.image_base_url
    }

    pub async fn search(&self, query: &str) -> Result<Vec<TmdbMovie>, ProviderError> {
        let url = endpoint_url(
            PROVIDER,
            &self.config.base_url,
            &[("api_key", self.config.api_key.as_str()), ("query", query)],
        )?;

        debug!("Searching movies for: {}", query);

        let response: SearchResponse = fetch_json(PROVIDER, self.client.get(url)).await?;
        Ok(response.results)
    }
}
