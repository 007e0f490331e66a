use axum::{
    Router,
    http::{HeaderValue, Uri},
    middleware,
    routing::get,
};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::db::Store;
use crate::services::LocationResolver;
use crate::state::SharedState;

mod error;
mod location;
mod movies;
mod observability;
mod trails;
mod validation;
mod weather;
mod yelp;

pub use error::{ApiError, FAILURE_MESSAGE};

/// Greeting served at `/`.
pub const HOME_MESSAGE: &str = "Home Page";

#[derive(Debug, serde::Deserialize)]
pub struct CoordinateParams {
    pub latitude: Option<String>,
    pub longitude: Option<String>,
}

#[derive(Clone)]
pub struct AppState {
    pub shared: Arc<SharedState>,
}

impl AppState {
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.shared.config
    }

    #[must_use]
    pub fn store(&self) -> &Store {
        &self.shared.store
    }

    #[must_use]
    pub fn locations(&self) -> &LocationResolver {
        &self.shared.locations
    }
}

#[must_use]
pub fn create_app_state(shared: Arc<SharedState>) -> Arc<AppState> {
    Arc::new(AppState { shared })
}

pub async fn create_app_state_from_config(config: Config) -> anyhow::Result<Arc<AppState>> {
    let shared = Arc::new(SharedState::new(config).await?);
    Ok(create_app_state(shared))
}

pub fn router(state: Arc<AppState>) -> Router {
    let cors_origins = &state.config().server.cors_allowed_origins;

    let cors_layer = if cors_origins.iter().any(|o| o == "*") {
        CorsLayer::new().allow_origin(Any)
    } else {
        let origins: Vec<HeaderValue> =
            cors_origins.iter().filter_map(|s| s.parse().ok()).collect();
        CorsLayer::new().allow_origin(origins)
    };

    Router::new()
        .route("/", get(home))
        .route("/location", get(location::get_location))
        .route("/weather", get(weather::get_weather))
        .route("/trails", get(trails::get_trails))
        .route("/movies", get(movies::get_movies))
        .route("/yelp", get(yelp::get_businesses))
        .fallback(fallback)
        .method_not_allowed_fallback(fallback)
        .with_state(state)
        .layer(cors_layer.allow_methods(Any).allow_headers(Any))
        .layer(TraceLayer::new_for_http())
        .layer(middleware::from_fn(observability::logging_middleware))
}

async fn home() -> &'static str {
    HOME_MESSAGE
}

/// Unknown paths and methods answer like any other failure.
async fn fallback(uri: Uri) -> ApiError {
    ApiError::NotFound(format!("No route for {uri}"))
}
