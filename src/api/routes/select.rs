//! Selector Routes
//!
//! Control callbacks. Each request carries the control's current value, so
//! the server holds no per-client selection state. The query string is read
//! as plain pairs, so a missing, repeated or odd `value` still gets a chart.
//!
//! - GET /api/v1/select/dataset?value= - Dropdown output
//! - GET /api/v1/select/activity?value= - Radio output

use axum::{
    extract::{Query, State},
    Json,
};
use std::collections::HashMap;
use std::sync::Arc;

use crate::api::dto::SelectionResponse;
use crate::api::state::AppState;
use crate::chart::Chart;

/// GET /api/v1/select/dataset
pub async fn select_dataset(
    State(state): State<Arc<AppState>>,
    Query(params): Query<HashMap<String, String>>,
) -> Json<SelectionResponse> {
    let value = selection_value(params);
    let chart = state.selector.select_dataset(&value);
    Json(selection_response(value, &chart))
}

/// GET /api/v1/select/activity
pub async fn select_activity(
    State(state): State<Arc<AppState>>,
    Query(params): Query<HashMap<String, String>>,
) -> Json<SelectionResponse> {
    let value = selection_value(params);
    let chart = state.selector.select_activity_metric(&value);
    Json(selection_response(value, &chart))
}

/// Control value from the query string. Absent is treated as unrecognized.
fn selection_value(mut params: HashMap<String, String>) -> String {
    params.remove("value").unwrap_or_default()
}

fn selection_response(value: String, chart: &Chart) -> SelectionResponse {
    SelectionResponse {
        value,
        recognized: !chart.is_placeholder(),
        figure: chart.to_plotly(),
    }
}
