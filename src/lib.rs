//! # Econdash
//!
//! Economic indicators dashboard. Loads three datasets (USD exchange rate,
//! monthly inflation, monthly economic activity index) from CSV and serves
//! them as interactive charts over HTTP.
//!
//! ## Modules
//!
//! - [`data`]: CSV loading into read-only keyed tables
//! - [`chart`]: Chart specifications built from the tables
//! - [`choice`]: Closed sets of control values
//! - [`view`]: Control value → chart selection
//! - [`api`]: HTTP server with Axum
//! - [`config`]: TOML + environment configuration
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use econdash::config::DataConfig;
//! use econdash::data::Datasets;
//! use econdash::chart::ChartSet;
//! use econdash::view::ViewSelector;
//! use std::sync::Arc;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let datasets = Arc::new(Datasets::load(&DataConfig::default())?);
//!     let charts = Arc::new(ChartSet::build(&datasets));
//!     let selector = ViewSelector::new(datasets, charts);
//!
//!     let chart = selector.select_activity_metric("accumulated");
//!     println!("{}", chart.to_plotly());
//!
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod chart;
pub mod choice;
pub mod config;
pub mod data;
pub mod view;

// Re-export top-level types for convenience
pub use api::{build_router, serve, ApiConfig, ApiError, AppState};

pub use chart::{Chart, ChartSet, Trace, TraceKind};

pub use choice::{ActivityMetric, DatasetChoice, SelectionError};

pub use config::{Config, ConfigError, DataConfig, LoggingConfig};

pub use data::{
    ActivityIndexTable, DataError, DataResult, Datasets, ExchangeRateTable, InflationTable, Table,
};

pub use view::ViewSelector;
