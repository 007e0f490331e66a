//! Outbound clients for the third-party data providers.
//!
//! Every client issues exactly one request per call and returns the provider's
//! raw result list. Reshaping into response types happens in [`crate::models`].

pub mod geocode;
pub mod movies;
pub mod trails;
pub mod weather;
pub mod yelp;

use reqwest::{Client, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use std::time::Duration;
use thiserror::Error;
use url::Url;

use crate::config::HttpConfig;

/// Longest slice of an error body kept for logging.
const MAX_ERROR_BODY: usize = 256;

#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("{provider} request failed: {source}")]
    Transport {
        provider: &'static str,
        #[source]
        source: reqwest::Error,
    },

    #[error("{provider} returned {status}: {body}")]
    Status {
        provider: &'static str,
        status: StatusCode,
        body: String,
    },

    #[error("{provider} response could not be decoded: {source}")]
    Decode {
        provider: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("{provider} returned no results")]
    Empty { provider: &'static str },

    #[error("{provider} base URL is invalid: {source}")]
    InvalidUrl {
        provider: &'static str,
        #[source]
        source: url::ParseError,
    },
}

impl ProviderError {
    #[must_use]
    pub const fn provider(&self) -> &'static str {
        match self {
            Self::Transport { provider, .. }
            | Self::Status { provider, .. }
            | Self::Decode { provider, .. }
            | Self::Empty { provider }
            | Self::InvalidUrl { provider, .. } => provider,
        }
    }
}

/// Build the HTTP client shared by every provider so connections are pooled.
pub fn build_shared_http_client(config: &HttpConfig) -> anyhow::Result<Client> {
    Client::builder()
        .timeout(Duration::from_secs(config.request_timeout_seconds))
        .user_agent(config.user_agent.as_str())
        .pool_max_idle_per_host(10)
        .build()
        .map_err(|e| anyhow::anyhow!("Failed to build shared HTTP client: {e}"))
}

pub(crate) fn endpoint_url(
    provider: &'static str,
    base_url: &str,
    params: &[(&str, &str)],
) -> Result<Url, ProviderError> {
    let mut url =
        Url::parse(base_url).map_err(|source| ProviderError::InvalidUrl { provider, source })?;

    url.query_pairs_mut().extend_pairs(params);

    Ok(url)
}

/// Send a prepared request and decode a JSON body, classifying every failure.
pub(crate) async fn fetch_json<T: DeserializeOwned>(
    provider: &'static str,
    request: RequestBuilder,
) -> Result<T, ProviderError> {
    let response = request
        .send()
        .await
        .map_err(|source| ProviderError::Transport { provider, source })?;

    let status = response.status();
    if !status.is_success() {
        let mut body = response.text().await.unwrap_or_default();
        if body.len() > MAX_ERROR_BODY {
            let cut = (0..=MAX_ERROR_BODY)
                .rev()
                .find(|i| body.is_char_boundary(*i))
                .unwrap_or(0);
            body.truncate(cut);
        }
        return Err(ProviderError::Status {
            provider,
            status,
            body,
        });
    }

    let body = response
        .text()
        .await
        .map_err(|source| ProviderError::Transport { provider, source })?;

    serde_json::from_str(&body).map_err(|source| ProviderError::Decode { provider, source })
}

/// Accepts `"47.60"` as well as `47.60`, keeping the provider's textual form.
pub(crate) fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Number(serde_json::Number),
    }

    Ok(match Raw::deserialize(deserializer)? {
        Raw::Text(s) => s,
        Raw::Number(n) => n.to_string(),
    })
}
