//! Health Routes
//!
//! Health check endpoints for monitoring and Kubernetes probes.
//!
//! - GET /health/live - Liveness probe (process is alive)
//! - GET /health/ready - Readiness probe (ready to serve traffic)
//! - GET /health - Full health status

use axum::{extract::State, http::StatusCode, Json};
use std::sync::Arc;

use crate::api::dto::{HealthResponse, TableCounts};
use crate::api::state::AppState;

/// GET /health/live
///
/// Kubernetes liveness probe.
/// Returns 200 if the process is alive, no dependency checks.
pub async fn liveness() -> StatusCode {
    StatusCode::OK
}

/// GET /health/ready
///
/// Kubernetes readiness probe.
/// Tables are loaded before the listener binds, so this only reports
/// whether every table has rows to plot.
pub async fn readiness(State(state): State<Arc<AppState>>) -> StatusCode {
    if tables_populated(&state) {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    }
}

/// GET /health
///
/// Full health status with table sizes.
pub async fn full_health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    let status = if tables_populated(&state) {
        "healthy"
    } else {
        "degraded"
    };

    Json(HealthResponse {
        status: status.to_string(),
        tables: table_counts(&state),
        uptime_seconds: state.uptime_seconds(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

fn table_counts(state: &AppState) -> TableCounts {
    TableCounts {
        exchange_rows: state.datasets.exchange.table().len(),
        inflation_rows: state.datasets.inflation.table().len(),
        activity_rows: state.datasets.activity.table().len(),
    }
}

fn tables_populated(state: &AppState) -> bool {
    let counts = table_counts(state);
    counts.exchange_rows > 0 && counts.inflation_rows > 0 && counts.activity_rows > 0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_liveness() {
        let status = liveness().await;
        assert_eq!(status, StatusCode::OK);
    }
}
