//! Cache-aside resolution of city names to coordinates.
//!
//! The store is always consulted first. Only on a miss is the geocoder called,
//! and its first match is written back before being returned. A failed
//! write-back is logged and counted but never fails the request, so callers may
//! receive a location that was not cached.

use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::clients::ProviderError;
use crate::clients::geocode::{GeocodePlace, PROVIDER as GEOCODE_PROVIDER};
use crate::db::Store;
use crate::models::Location;

#[derive(Debug, Error)]
pub enum LocationError {
    #[error("Location store error: {0}")]
    Store(String),

    #[error(transparent)]
    Provider(#[from] ProviderError),
}

/// Read/write access to previously resolved locations.
#[async_trait]
pub trait LocationStore: Send + Sync {
    async fn find_location(&self, search_query: &str) -> anyhow::Result<Option<Location>>;

    async fn insert_location(&self, location: &Location) -> anyhow::Result<()>;
}

/// Forward geocoding against an external provider.
#[async_trait]
pub trait Geocoder: Send + Sync {
    async fn geocode(&self, query: &str) -> Result<Vec<GeocodePlace>, ProviderError>;
}

#[async_trait]
impl LocationStore for Store {
    async fn find_location(&self, search_query: &str) -> anyhow::Result<Option<Location>> {
        Self::find_location(self, search_query).await
    }

    async fn insert_location(&self, location: &Location) -> anyhow::Result<()> {
        Self::insert_location(self, location).await.map(|_| ())
    }
}

#[derive(Clone)]
pub struct LocationResolver {
    store: Arc<dyn LocationStore>,
    geocoder: Arc<dyn Geocoder>,
}

impl LocationResolver {
    #[must_use]
    pub fn new(store: Arc<dyn LocationStore>, geocoder: Arc<dyn Geocoder>) -> Self {
        Self { store, geocoder }
    }

    /// Resolves `search_query` exactly as typed.
    ///
    /// Lookup, geocode and write-back run strictly in that order. Concurrent
    /// misses on the same key are not coordinated and may each insert a row.
    pub async fn resolve(&self, search_query: &str) -> Result<Location, LocationError> {
        let cached = self
            .store
            .find_location(search_query)
            .await
            .map_err(|e| LocationError::Store(e.to_string()))?;

        if let Some(location) = cached {
            debug!(search_query, "Location cache hit");
            metrics::counter!("location_cache_hits_total").increment(1);
            return Ok(location);
        }

        metrics::counter!("location_cache_misses_total").increment(1);

        let place = self
            .geocoder
            .geocode(search_query)
            .await?
            .into_iter()
            .next()
            .ok_or(ProviderError::Empty {
                provider: GEOCODE_PROVIDER,
            })?;

        let location = Location::from_place(search_query, place);

        match self.store.insert_location(&location).await {
            Ok(()) => info!(
                search_query,
                formatted_query = %location.formatted_query,
                "Cached resolved location"
            ),
            Err(e) => {
                warn!(
                    event = "location_cache_write_failed",
                    search_query,
                    error = %e,
                    "Returning uncached location"
                );
                metrics::counter!("location_cache_write_failures_total").increment(1);
            }
        }

        Ok(location)
    }
}
