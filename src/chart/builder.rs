//! Chart builders
//!
//! Pure functions from a loaded dataset to a [`Chart`]. Titles and axis
//! labels are fixed per dataset.


use super::figure::{CategoryOrder, Chart, Trace, TraceKind};
use crate::choice::ActivityMetric;
use crate::data::{ActivityIndexTable, Column, Datasets, ExchangeRateTable, InflationTable, Table};

pub const EXCHANGE_TITLE: &str = "Cambio de Dólar por Mes";
pub const INFLATION_TITLE: &str = "Inflación por Mes (2019 - 2023)";
pub const ACTIVITY_TITLE: &str = "IMAE - Var. % Interanual vs. Var. % Acumulada";

fn column_trace(kind: TraceKind, table: &Table, column: &Column) -> Trace {
    let x = table.keys().to_vec();
    let y = column.values.clone();
    match kind {
        TraceKind::Line => Trace::line(&column.name, x, y),
        TraceKind::Bar => Trace::bar(&column.name, x, y),
    }
}

/// One line per exchange rate column
pub fn build_exchange_chart(exchange: &ExchangeRateTable) -> Chart {
    let table = exchange.table();

    table.columns().iter().fold(
        Chart::new(EXCHANGE_TITLE)
            .x_title("Fecha")
            .y_title("Tipo de Cambio"),
        |chart, column| chart.trace(column_trace(TraceKind::Line, table, column)),
    )
}

/// One line per year column
pub fn build_inflation_chart(inflation: &InflationTable) -> Chart {
    let table = inflation.table();

    table.columns().iter().fold(
        Chart::new(INFLATION_TITLE)
            .x_title("Fecha")
            .y_title("Tasa de Inflación"),
        |chart, column| chart.trace(column_trace(TraceKind::Line, table, column)),
    )
}

/// Interannual variation as bars, categories ascending by value
pub fn build_activity_chart(activity: &ActivityIndexTable) -> Chart {
    let column = activity.metric(ActivityMetric::Interannual);

    Chart::new(ACTIVITY_TITLE)
        .x_title("Período")
        .y_title("Valor")
        .trace(column_trace(TraceKind::Bar, activity.table(), column))
        .category_order(CategoryOrder::TotalAscending)
}

/// Single bar series of one activity metric, in source key order
pub fn build_activity_metric_chart(activity: &ActivityIndexTable, metric: ActivityMetric) -> Chart {
    let column = activity.metric(metric);

    Chart::new(format!("IMAE - {}", metric.label()))
        .trace(column_trace(TraceKind::Bar, activity.table(), column))
}

/// The static charts, built once at startup
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSet {
    pub exchange: Chart,
    pub inflation: Chart,
    pub activity: Chart,
}

impl ChartSet {
    pub fn build(datasets: &Datasets) -> Self {
        let charts = Self {
            exchange: build_exchange_chart(&datasets.exchange),
            inflation: build_inflation_chart(&datasets.inflation),
            activity: build_activity_chart(&datasets.activity),
        };

        tracing::debug!(
            exchange_series = charts.exchange.traces.len(),
            inflation_series = charts.inflation.traces.len(),
            "Built static charts"
        );

        charts
    }
}
