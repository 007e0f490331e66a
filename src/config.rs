use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub general: GeneralConfig,

    pub server: ServerConfig,

    pub database: DatabaseConfig,

    pub http: HttpConfig,

    pub geocode: GeocodeConfig,

    pub weather: WeatherConfig,

    pub trails: TrailsConfig,

    pub movies: MoviesConfig,

    pub yelp: YelpConfig,

    pub observability: ObservabilityConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    pub log_level: String,

    /// "pretty" or "json"
    pub log_format: String,

    /// Number of tokio worker threads.
    /// Set to 0 to use the number of CPU cores
    pub worker_threads: usize,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_format: "pretty".to_string(),
            worker_threads: 0,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,

    pub port: u16,

    /// `"*"` allows any origin.
    pub cors_allowed_origins: Vec<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            cors_allowed_origins: vec!["*".to_string()],
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    /// `sqlite:<path>`, `sqlite::memory:` or `postgres://...`
    pub url: String,

    pub max_connections: u32,

    pub min_connections: u32,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: "sqlite:data/city-explorer.db".to_string(),
            max_connections: 5,
            min_connections: 1,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    /// Applied by the shared HTTP client to every provider request.
    pub request_timeout_seconds: u64,

    pub user_agent: String,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            request_timeout_seconds: 30,
            user_agent: format!("CityExplorer/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeocodeConfig {
    pub base_url: String,

    #[serde(skip_serializing)]
    pub api_key: String,
}

impl Default for GeocodeConfig {
    fn default() -> Self {
        Self {
            base_url: "https://us1.locationiq.com/v1/search.php".to_string(),
            api_key: String::new(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WeatherConfig {
    pub base_url: String,

    #[serde(skip_serializing)]
    pub api_key: String,
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.weatherbit.io/v2.0/forecast/daily".to_string(),
            api_key: String::new(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TrailsConfig {
    pub base_url: String,

    #[serde(skip_serializing)]
    pub api_key: String,

    /// Search radius around the coordinates, in miles.
    pub max_distance: u32,
}

impl Default for TrailsConfig {
    fn default() -> Self {
        Self {
            base_url: "https://www.hikingproject.com/data/get-trails".to_string(),
            api_key: String::new(),
            max_distance: 10,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MoviesConfig {
    pub base_url: String,

    #[serde(skip_serializing)]
    pub api_key: String,

    /// Prefix joined with each result's `poster_path`.
    pub image_base_url: String,
}

impl Default for MoviesConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.themoviedb.org/3/search/movie".to_string(),
            api_key: String::new(),
            image_base_url: "https://image.tmdb.org/t/p/w500".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct YelpConfig {
    pub base_url: String,

    #[serde(skip_serializing)]
    pub api_key: String,

    pub term: String,

    /// Number of listings requested from Yelp; pages are sliced locally.
    pub search_limit: u32,
}

impl Default for YelpConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.yelp.com/v3/businesses/search".to_string(),
            api_key: String::new(),
            term: "restaurants".to_string(),
            search_limit: 50,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    pub metrics_enabled: bool,

    /// Port of the standalone Prometheus scrape endpoint.
    pub metrics_port: u16,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            metrics_enabled: false,
            metrics_port: 9464,
        }
    }
}

impl Config {
    /// Loads defaults, then the first config file found, then environment overrides.
    pub fn load(explicit_path: Option<&Path>) -> Result<Self> {
        // A missing .env is the normal case outside development.
        dotenvy::dotenv().ok();

        let mut config = match explicit_path {
            Some(path) => Self::load_from_path(path)?,
            None => Self::load_from_default_paths()?,
        };

        config.apply_env_overrides(|key| std::env::var(key).ok());
        Ok(config)
    }

    fn load_from_default_paths() -> Result<Self> {
        for path in &Self::config_paths() {
            if path.exists() {
                info!("Loading config from: {}", path.display());
                return Self::load_from_path(path);
            }
        }

        info!("No config file found, using defaults");
        Ok(Self::default())
    }

    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Self = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(config)
    }

    fn config_paths() -> Vec<PathBuf> {
        let mut paths = vec![PathBuf::from("config.toml")];

        if let Some(config_dir) = dirs::config_dir() {
            paths.push(config_dir.join("city-explorer").join("config.toml"));
        }

        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(".city-explorer").join("config.toml"));
        }

        paths
    }

    /// Applies the recognised environment variables on top of the loaded values.
    pub fn apply_env_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(port) = lookup("PORT") {
            match port.parse() {
                Ok(port) => self.server.port = port,
                Err(_) => warn!("Ignoring invalid PORT value: {port}"),
            }
        }

        if let Some(url) = lookup("DATABASE_URL") {
            self.database.url = url;
        }

        if let Some(level) = lookup("LOG_LEVEL") {
            self.general.log_level = level;
        }

        let keys = [
            ("GEOCODE_API_KEY", &mut self.geocode.api_key),
            ("WEATHER_API_KEY", &mut self.weather.api_key),
            ("TRAIL_API_KEY", &mut self.trails.api_key),
            ("MOVIE_API_KEY", &mut self.movies.api_key),
            ("YELP_API_KEY", &mut self.yelp.api_key),
        ];

        for (var, slot) in keys {
            if let Some(value) = lookup(var) {
                *slot = value;
            }
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.database.url.is_empty() {
            anyhow::bail!("Database URL cannot be empty");
        }

        if self.database.min_connections > self.database.max_connections {
            anyhow::bail!(
                "database.min_connections ({}) exceeds database.max_connections ({})",
                self.database.min_connections,
                self.database.max_connections
            );
        }

        if self.yelp.search_limit == 0 {
            anyhow::bail!("yelp.search_limit must be > 0");
        }

        for (name, base_url) in self.provider_urls() {
            url::Url::parse(base_url)
                .with_context(|| format!("Invalid {name} base_url: {base_url}"))?;
        }

        Ok(())
    }

    /// Names of providers that have no API key configured.
    #[must_use]
    pub fn missing_api_keys(&self) -> Vec<&'static str> {
        [
            ("geocode", &self.geocode.api_key),
            ("weather", &self.weather.api_key),
            ("trails", &self.trails.api_key),
            ("movies", &self.movies.api_key),
            ("yelp", &self.yelp.api_key),
        ]
        .into_iter()
        .filter(|(_, key)| key.is_empty())
        .map(|(name, _)| name)
        .collect()
    }

    fn provider_urls(&self) -> [(&'static str, &str); 5] {
        [
            ("geocode", self.geocode.base_url.as_str()),
            ("weather", self.weather.base_url.as_str()),
            ("trails", self.trails.base_url.as_str()),
            ("movies", self.movies.base_url.as_str()),
            ("yelp", self.yelp.base_url.as_str()),
        ]
    }
}
