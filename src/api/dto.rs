//! Data Transfer Objects
//!
//! Request and response types for the API endpoints.
//! These types are serialized/deserialized to/from JSON.

use serde::Serialize;
use serde_json::Value;

use crate::choice::{ActivityMetric, DatasetChoice};

// ============================================
// SELECTION DTOs
// ============================================

/// Selector callback response
#[derive(Debug, Serialize)]
pub struct SelectionResponse {
    /// Value as received
    pub value: String,
    /// False when the placeholder was rendered
    pub recognized: bool,
    /// Plotly figure
    pub figure: Value,
}

// ============================================
// LAYOUT DTOs
// ============================================

/// One option of a dropdown or radio control
#[derive(Debug, Serialize)]
pub struct OptionDto {
    pub label: String,
    pub value: String,
}

/// Kind of control
#[derive(Debug, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ControlKind {
    Dropdown,
    Radio,
}

/// A user control and the output slot it drives
#[derive(Debug, Serialize)]
pub struct ControlDto {
    pub id: String,
    pub kind: ControlKind,
    pub options: Vec<OptionDto>,
    pub default: String,
    /// Output slot element id
    pub output: String,
    /// Callback endpoint
    pub endpoint: String,
}

/// Page layout: static charts first, then controls in order
#[derive(Debug, Serialize)]
pub struct LayoutResponse {
    pub static_charts: Vec<String>,
    pub controls: Vec<ControlDto>,
}

impl LayoutResponse {
    /// The dashboard layout
    pub fn dashboard() -> Self {
        Self {
            static_charts: vec![
                DatasetChoice::Exchange.to_string(),
                DatasetChoice::Inflation.to_string(),
            ],
            controls: vec![
                ControlDto {
                    id: "dropdown".to_string(),
                    kind: ControlKind::Dropdown,
                    options: DatasetChoice::ALL
                        .iter()
                        .map(|c| OptionDto {
                            label: c.label().to_string(),
                            value: c.as_str().to_string(),
                        })
                        .collect(),
                    default: DatasetChoice::default().to_string(),
                    output: "selected-graph".to_string(),
                    endpoint: "/api/v1/select/dataset".to_string(),
                },
                ControlDto {
                    id: "activity-radio".to_string(),
                    kind: ControlKind::Radio,
                    options: ActivityMetric::ALL
                        .iter()
                        .map(|m| OptionDto {
                            label: m.label().to_string(),
                            value: m.as_str().to_string(),
                        })
                        .collect(),
                    default: ActivityMetric::default().to_string(),
                    output: "activity-graph".to_string(),
                    endpoint: "/api/v1/select/activity".to_string(),
                },
            ],
        }
    }
}

// ============================================
// HEALTH DTOs
// ============================================

/// Row counts of the loaded tables
#[derive(Debug, Serialize)]
pub struct TableCounts {
    pub exchange_rows: usize,
    pub inflation_rows: usize,
    pub activity_rows: usize,
}

/// Full health status
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Overall status: healthy, degraded
    pub status: String,
    pub tables: TableCounts,
    /// Server uptime in seconds
    pub uptime_seconds: u64,
    /// Application version
    pub version: String,
}
