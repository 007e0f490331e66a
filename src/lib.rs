pub mod api;
pub mod cli;
pub mod clients;
pub mod config;
pub mod db;
pub mod entities;
pub mod models;
pub mod services;
pub mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use cli::{Cli, Commands};
pub use config::Config;
use state::SharedState;
use tokio::signal;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

pub async fn run(cli: Cli, config: Config) -> anyhow::Result<()> {
    config.validate()?;

    init_tracing(&config);

    if config.observability.metrics_enabled {
        init_metrics(config.observability.metrics_port)?;
    }

    for provider in config.missing_api_keys() {
        warn!("No API key configured for {provider}; its endpoint will fail");
    }

    match cli.command.unwrap_or(Commands::Serve) {
        Commands::Serve => run_server(config).await,
        Commands::Locate { city } => cmd_locate(config, &city.join(" ")).await,
        Commands::Cached { limit } => cmd_cached(config, limit).await,
    }
}

fn init_tracing(config: &Config) {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.general.log_level));

    let registry = tracing_subscriber::registry().with(env_filter);

    if config.general.log_format == "json" {
        registry
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}

fn init_metrics(port: u16) -> anyhow::Result<()> {
    use metrics_exporter_prometheus::PrometheusBuilder;

    PrometheusBuilder::new()
        .with_http_listener(SocketAddr::from(([0, 0, 0, 0], port)))
        .install()
        .context("Failed to install Prometheus exporter")?;

    info!("Prometheus metrics exposed on port {}", port);
    Ok(())
}

async fn run_server(config: Config) -> anyhow::Result<()> {
    info!(
        "City Explorer v{} starting...",
        env!("CARGO_PKG_VERSION")
    );

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let port = config.server.port;

    let state = api::create_app_state_from_config(config).await?;
    let app = api::router(state);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;

    info!("server up: {}", port);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Web server error")?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    match signal::ctrl_c().await {
        Ok(()) => info!("Shutdown signal received"),
        Err(e) => error!("Error listening for shutdown: {}", e),
    }
}

async fn cmd_locate(config: Config, city: &str) -> anyhow::Result<()> {
    let shared = Arc::new(SharedState::new(config).await?);

    let location = shared
        .locations
        .resolve(city)
        .await
        .with_context(|| format!("Failed to resolve '{city}'"))?;

    println!("{}", serde_json::to_string_pretty(&location)?);
    Ok(())
}

async fn cmd_cached(config: Config, limit: u64) -> anyhow::Result<()> {
    let store = db::Store::from_config(&config.database).await?;
    let locations = store.recent_locations(limit).await?;

    if locations.is_empty() {
        println!("No cached locations yet.");
        return Ok(());
    }

    println!("{:<24} {:<14} {:<14} Formatted", "Query", "Latitude", "Longitude");
    for location in locations {
        println!(
            "{:<24} {:<14} {:<14} {}",
            location.search_query, location.latitude, location.longitude, location.formatted_query
        );
    }

    Ok(())
}
