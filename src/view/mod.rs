//! View Selection
//!
//! Maps the dashboard's control values to charts. Both selectors are total:
//! any string is accepted, and anything outside the closed choice sets
//! yields [`Chart::placeholder`] instead of an error. Selection is
//! memoryless; the result depends only on the value passed in.

use std::sync::Arc;

use crate::chart::{build_activity_metric_chart, Chart, ChartSet};
use crate::choice::{ActivityMetric, DatasetChoice};
use crate::data::Datasets;

/// Selector over the startup-loaded datasets and their pre-built charts
#[derive(Debug, Clone)]
pub struct ViewSelector {
    datasets: Arc<Datasets>,
    charts: Arc<ChartSet>,
}

impl ViewSelector {
    pub fn new(datasets: Arc<Datasets>, charts: Arc<ChartSet>) -> Self {
        Self { datasets, charts }
    }

    /// Pre-built chart for a dataset
    pub fn chart_for(&self, choice: DatasetChoice) -> &Chart {
        match choice {
            DatasetChoice::Exchange => &self.charts.exchange,
            DatasetChoice::Inflation => &self.charts.inflation,
            DatasetChoice::Activity => &self.charts.activity,
        }
    }

    /// Freshly built bar chart for an activity metric
    pub fn activity_chart_for(&self, metric: ActivityMetric) -> Chart {
        build_activity_metric_chart(&self.datasets.activity, metric)
    }

    /// Dropdown callback
    pub fn select_dataset(&self, value: &str) -> Chart {
        match value.parse::<DatasetChoice>() {
            Ok(choice) => {
                tracing::debug!(choice = %choice, "Dataset selected");
                self.chart_for(choice).clone()
            }
            Err(e) => {
                tracing::warn!(error = %e, "Rendering placeholder");
                Chart::placeholder()
            }
        }
    }

    /// Radio callback
    pub fn select_activity_metric(&self, value: &str) -> Chart {
        match value.parse::<ActivityMetric>() {
            Ok(metric) => {
                tracing::debug!(metric = %metric, "Activity metric selected");
                self.activity_chart_for(metric)
            }
            Err(e) => {
                tracing::warn!(error = %e, "Rendering placeholder");
                Chart::placeholder()
            }
        }
    }
}
