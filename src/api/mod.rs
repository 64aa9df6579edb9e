//! Dashboard HTTP API
//!
//! Serves the dashboard page and the JSON endpoints behind it, built with Axum.
//!
//! # Endpoints
//!
//! ## Page
//! - `GET /` - Dashboard HTML
//!
//! ## Charts
//! - `GET /api/v1/layout` - Controls and static chart ids
//! - `GET /api/v1/charts/:name` - Static chart (`exchange`, `inflation`, `activity`)
//!
//! ## Selectors
//! - `GET /api/v1/select/dataset?value=` - Dropdown callback
//! - `GET /api/v1/select/activity?value=` - Radio callback
//!
//! ## Health
//! - `GET /health/live` - Liveness probe
//! - `GET /health/ready` - Readiness probe
//! - `GET /health` - Full health status
//!
//! # Example
//!
//! ```rust,ignore
//! use econdash::api::{serve, ApiConfig, AppState};
//! use econdash::config::DataConfig;
//! use econdash::data::Datasets;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let datasets = Datasets::load(&DataConfig::default())?;
//!     let config = ApiConfig::default();
//!
//!     let state = AppState::new(datasets, config.clone());
//!     serve(state, &config).await?;
//!
//!     Ok(())
//! }
//! ```

pub mod dto;
pub mod error;
pub mod routes;
pub mod state;

pub use error::{ApiError, ApiResult};
pub use state::{ApiConfig, AppState};

use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

/// Build the router with all routes and middleware
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .route("/layout", get(routes::charts::get_layout))
        .route("/charts/:name", get(routes::charts::get_chart))
        .route("/select/dataset", get(routes::select::select_dataset))
        .route("/select/activity", get(routes::select::select_activity));

    let health_routes = Router::new()
        .route("/live", get(routes::health::liveness))
        .route("/ready", get(routes::health::readiness))
        .route("/", get(routes::health::full_health));

    // Create shared state
    let shared_state = Arc::new(state);

    Router::new()
        .route("/", get(routes::page::index))
        .nest("/api/v1", api_routes)
        .nest("/health", health_routes)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(shared_state)
}

/// Start the dashboard server
pub async fn serve(state: AppState, config: &ApiConfig) -> Result<(), ApiError> {
    let router = build_router(state);

    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Dashboard listening on http://{}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| ApiError::Internal(format!("Server error: {}", e)))?;

    tracing::info!("Dashboard shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::datasets::fixtures;
    use axum::{
        body::{to_bytes, Body},
        http::{Request, StatusCode},
    };
    use serde_json::Value;
    use tower::util::ServiceExt;

    fn create_test_app() -> Router {
        let state = AppState::new(fixtures::datasets(), ApiConfig::default());
        build_router(state)
    }

    async fn get(app: Router, uri: &str) -> (StatusCode, Vec<u8>) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();

        let status = response.status();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, body.to_vec())
    }

    async fn get_json(app: Router, uri: &str) -> (StatusCode, Value) {
        let (status, body) = get(app, uri).await;
        (status, serde_json::from_slice(&body).unwrap())
    }

    #[tokio::test]
    async fn test_health_live() {
        let (status, _) = get(create_test_app(), "/health/live").await;
        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_health_ready() {
        let (status, _) = get(create_test_app(), "/health/ready").await;
        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_health_full() {
        let (status, body) = get_json(create_test_app(), "/health").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["tables"]["inflation_rows"], 3);
    }

    #[tokio::test]
    async fn test_index_page() {
        let (status, body) = get(create_test_app(), "/").await;
        let html = String::from_utf8(body).unwrap();

        assert_eq!(status, StatusCode::OK);
        assert!(html.contains("id=\"selected-graph\""));
        assert!(html.contains("id=\"activity-graph\""));
    }

    #[tokio::test]
    async fn test_layout() {
        let (status, body) = get_json(create_test_app(), "/api/v1/layout").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["static_charts"], serde_json::json!(["exchange", "inflation"]));
        assert_eq!(body["controls"][0]["kind"], "dropdown");
        assert_eq!(body["controls"][0]["default"], "exchange");
        assert_eq!(body["controls"][0]["options"].as_array().unwrap().len(), 3);
        assert_eq!(body["controls"][1]["kind"], "radio");
        assert_eq!(body["controls"][1]["default"], "interannual");
    }

    #[tokio::test]
    async fn test_static_chart() {
        let (status, body) = get_json(create_test_app(), "/api/v1/charts/inflation").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"].as_array().unwrap().len(), 5);
        assert_eq!(body["data"][0]["name"], "2019");
    }

    #[tokio::test]
    async fn test_unknown_static_chart() {
        let (status, body) = get_json(create_test_app(), "/api/v1/charts/gdp").await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"]["code"], "NOT_FOUND");
        assert!(body["request_id"].is_string());
    }

    #[tokio::test]
    async fn test_select_dataset() {
        let (status, body) =
            get_json(create_test_app(), "/api/v1/select/dataset?value=exchange").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["recognized"], true);
        assert_eq!(body["figure"]["data"][0]["name"], "Compra");
        assert_eq!(body["figure"]["data"][1]["name"], "Venta");
    }

    #[tokio::test]
    async fn test_select_unknown_dataset_renders_placeholder() {
        let (status, body) =
            get_json(create_test_app(), "/api/v1/select/dataset?value=gdp").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["value"], "gdp");
        assert_eq!(body["recognized"], false);
        assert_eq!(body["figure"]["data"], serde_json::json!([]));
    }

    #[tokio::test]
    async fn test_select_without_value_renders_placeholder() {
        let (status, body) = get_json(create_test_app(), "/api/v1/select/activity").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["recognized"], false);
    }

    #[tokio::test]
    async fn test_select_with_repeated_value_still_renders() {
        let (status, body) =
            get_json(create_test_app(), "/api/v1/select/dataset?value=exchange&value=x").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["value"], "x");
        assert_eq!(body["recognized"], false);
        assert!(body["figure"]["layout"].is_object());
    }

    #[tokio::test]
    async fn test_select_activity() {
        let (status, body) =
            get_json(create_test_app(), "/api/v1/select/activity?value=accumulated").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["recognized"], true);
        assert_eq!(body["figure"]["data"][0]["type"], "bar");
        assert_eq!(body["figure"]["data"][0]["y"], serde_json::json!([3.2, 0.8, 2.0]));
        assert_eq!(body["figure"]["layout"]["title"]["text"], "IMAE - Var. % Acumulada");
    }
}
