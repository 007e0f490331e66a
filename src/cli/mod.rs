//! Command-line interface, parsed with clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// City Explorer - location, weather, trail, movie and restaurant lookups
#[derive(Parser)]
#[command(name = "city-explorer")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to a TOML config file (otherwise the default locations are searched)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the HTTP server (default)
    Serve,

    /// Resolve a city through the location cache and print it as JSON
    #[command(alias = "l")]
    Locate {
        /// City name, exactly as it should be cached
        #[arg(required = true)]
        city: Vec<String>,
    },

    /// List the most recently cached locations
    Cached {
        #[arg(short, long, default_value_t = 10)]
        limit: u64,
    },
}
