//! Chart Routes
//!
//! - GET /api/v1/layout - Controls, their options and defaults
//! - GET /api/v1/charts/:name - A static chart built at startup

use axum::{
    extract::{Path, State},
    Json,
};
use serde_json::Value;
use std::sync::Arc;

use crate::api::dto::LayoutResponse;
use crate::api::error::{ApiError, ApiResult};
use crate::api::state::AppState;
use crate::choice::DatasetChoice;

/// GET /api/v1/layout
pub async fn get_layout() -> Json<LayoutResponse> {
    Json(LayoutResponse::dashboard())
}

/// GET /api/v1/charts/:name
///
/// Plotly figure of a static chart. Unlike the selector callbacks this is a
/// plain resource lookup, so an unknown name is a 404.
pub async fn get_chart(
    State(state): State<Arc<AppState>>,
    Path(name): Path<String>,
) -> ApiResult<Json<Value>> {
    let choice = name
        .parse::<DatasetChoice>()
        .map_err(|_| ApiError::NotFound(format!("Chart '{}' not found", name)))?;

    Ok(Json(state.selector.chart_for(choice).to_plotly()))
}
