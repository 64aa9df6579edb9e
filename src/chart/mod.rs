//! Chart construction
//!
//! Turns loaded datasets into immutable chart specifications consumed by the
//! browser-side renderer.

pub mod builder;
pub mod figure;

pub use builder::{
    build_activity_chart, build_activity_metric_chart, build_exchange_chart,
    build_inflation_chart, ChartSet,
};
pub use figure::{CategoryOrder, Chart, Trace, TraceKind, PLACEHOLDER_NOTE, PLACEHOLDER_TITLE};
