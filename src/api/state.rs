//! Application State
//!
//! Shared state accessible by all API handlers.
//! Everything in here is read-only after startup; handlers never lock.

use serde::Deserialize;
use std::sync::Arc;
use std::time::Instant;

use crate::chart::ChartSet;
use crate::data::Datasets;
use crate::view::ViewSelector;

/// Shared application state for all handlers
#[derive(Clone)]
pub struct AppState {
    /// Datasets loaded at startup
    pub datasets: Arc<Datasets>,
    /// Static charts built at startup
    pub charts: Arc<ChartSet>,
    /// Control callbacks
    pub selector: ViewSelector,
    /// API configuration
    pub config: Arc<ApiConfig>,
    /// Server start time for uptime tracking
    pub start_time: Instant,
}

impl AppState {
    /// Build charts and selector from loaded datasets
    pub fn new(datasets: Datasets, config: ApiConfig) -> Self {
        let datasets = Arc::new(datasets);
        let charts = Arc::new(ChartSet::build(&datasets));
        let selector = ViewSelector::new(Arc::clone(&datasets), Arc::clone(&charts));

        Self {
            datasets,
            charts,
            selector,
            config: Arc::new(config),
            start_time: Instant::now(),
        }
    }

    /// Get server uptime in seconds
    pub fn uptime_seconds(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }
}

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    /// Host to bind to
    #[serde(default = "default_host")]
    pub host: String,
    /// Port to listen on
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    10000
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl ApiConfig {
    /// Create config with custom host and port
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
        }
    }

    /// Get the socket address string
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_addr() {
        assert_eq!(ApiConfig::default().addr(), "0.0.0.0:10000");
        assert_eq!(ApiConfig::new("127.0.0.1", 8050).addr(), "127.0.0.1:8050");
    }
}
