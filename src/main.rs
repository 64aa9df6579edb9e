//! Econdash
//!
//! Command-line entry point:
//! - Serve the dashboard
//! - Check that the datasets load
//! - Print a default config file
//!
//! # Configuration
//!
//! `--config PATH`, else the first of `$XDG_CONFIG_HOME/econdash/config.toml`,
//! `/etc/econdash/config.toml`, `./config.toml`. Environment variables
//! (`ECONDASH_*`, see `econdash config`) override file values and `RUST_LOG`
//! overrides the configured log level.

use anyhow::Context;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use econdash::api::{serve, AppState};
use econdash::config::{generate_default_config, Config, LoggingConfig};
use econdash::data::Datasets;

#[derive(Parser)]
#[command(name = "econdash")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Exchange rate, inflation and activity index dashboard")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Config file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Load the datasets and serve the dashboard
    Serve {
        /// Host to bind to (overrides config)
        #[arg(long)]
        host: Option<String>,
        /// Port to listen on (overrides config)
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Load the datasets, print a summary and exit
    Check,

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if let Commands::Config { output } = &cli.command {
        return write_default_config(output.as_deref());
    }

    let config_path = cli.config.clone().or_else(Config::discover);
    let config = match &config_path {
        Some(path) => Config::load_with_env(path)?,
        None => Config::from_env(),
    };

    init_tracing(&config.logging);

    match &config_path {
        Some(path) => tracing::info!("Loaded config from {:?}", path),
        None => tracing::info!("Using default config with environment overrides"),
    }

    match cli.command {
        Commands::Serve { host, port } => run_server(config, host, port).await,
        Commands::Check => check_datasets(&config),
        Commands::Config { .. } => Ok(()),
    }
}

fn init_tracing(logging: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!("econdash={},tower_http=info", logging.level))
    });

    if logging.is_json() {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }
}

fn load_datasets(config: &Config) -> anyhow::Result<Datasets> {
    Datasets::load(&config.data)
        .inspect_err(|e| {
            tracing::error!(path = %e.path().display(), error = %e, "Dataset load failed")
        })
        .context("Failed to load datasets")
}

async fn run_server(
    mut config: Config,
    host: Option<String>,
    port: Option<u16>,
) -> anyhow::Result<()> {
    tracing::info!("Starting econdash v{}", env!("CARGO_PKG_VERSION"));

    if let Some(host) = host {
        config.server.host = host;
    }
    if let Some(port) = port {
        config.server.port = port;
    }

    let datasets = load_datasets(&config)?;
    let state = AppState::new(datasets, config.server.clone());

    serve(state, &config.server)
        .await
        .with_context(|| format!("Failed to serve on {}", config.server.addr()))?;

    tracing::info!("Econdash stopped");
    Ok(())
}

fn check_datasets(config: &Config) -> anyhow::Result<()> {
    let datasets = load_datasets(config)?;

    let tables = [
        ("exchange", config.data.exchange_file(), datasets.exchange.table()),
        ("inflation", config.data.inflation_file(), datasets.inflation.table()),
        ("activity", config.data.activity_file(), datasets.activity.table()),
    ];

    for (name, path, table) in tables {
        println!(
            "{:<10} {:>5} rows  {}  [{}]",
            name,
            table.len(),
            path.display(),
            table.column_names().collect::<Vec<_>>().join(", ")
        );
    }

    Ok(())
}

fn write_default_config(output: Option<&Path>) -> anyhow::Result<()> {
    let content = generate_default_config();

    match output {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("Failed to write config to {:?}", path))?;
            println!("Config written to {:?}", path);
        }
        None => print!("{}", content),
    }

    Ok(())
}
