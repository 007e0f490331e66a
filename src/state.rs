use std::sync::Arc;

use crate::clients::build_shared_http_client;
use crate::clients::geocode::GeocodeClient;
use crate::clients::movies::MoviesClient;
use crate::clients::trails::TrailsClient;
use crate::clients::weather::WeatherClient;
use crate::clients::yelp::YelpClient;
use crate::config::Config;
use crate::db::Store;
use crate::services::LocationResolver;

/// Long-lived handles shared by every request: one store pool, one HTTP client
/// pool behind the provider clients, and the location resolver wired to both.
#[derive(Clone)]
pub struct SharedState {
    pub config: Arc<Config>,

    pub store: Store,

    pub geocode: Arc<GeocodeClient>,

    pub weather: Arc<WeatherClient>,

    pub trails: Arc<TrailsClient>,

    pub movies: Arc<MoviesClient>,

    pub yelp: Arc<YelpClient>,

    pub locations: LocationResolver,
}

impl SharedState {
    pub async fn new(config: Config) -> anyhow::Result<Self> {
        let store = Store::from_config(&config.database).await?;
        Self::with_store(config, store)
    }

    pub fn with_store(config: Config, store: Store) -> anyhow::Result<Self> {
        let http_client = build_shared_http_client(&config.http)?;

        let geocode = Arc::new(GeocodeClient::with_shared_client(
            http_client.clone(),
            config.geocode.clone(),
        ));
        let weather = Arc::new(WeatherClient::with_shared_client(
            http_client.clone(),
            config.weather.clone(),
        ));
        let trails = Arc::new(TrailsClient::with_shared_client(
            http_client.clone(),
            config.trails.clone(),
        ));
        let movies = Arc::new(MoviesClient::with_shared_client(
            http_client.clone(),
            config.movies.clone(),
        ));
        let yelp = Arc::new(YelpClient::with_shared_client(
            http_client,
            config.yelp.clone(),
        ));

        let locations = LocationResolver::new(Arc::new(store.clone()), geocode.clone());

        Ok(Self {
            config: Arc::new(config),
            store,
            geocode,
            weather,
            trails,
            movies,
            yelp,
            locations,
        })
    }
}
