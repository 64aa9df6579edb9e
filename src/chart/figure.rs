//! Chart specifications
//!
//! A [`Chart`] is an immutable description of what to draw: a title, axis
//! labels and a list of traces. Rendering happens in the browser, which
//! receives the chart as a plotly figure (see [`Chart::to_plotly`]).

use serde_json::{json, Value};

/// Title of the placeholder shown for unrecognized selections
pub const PLACEHOLDER_TITLE: &str = "Sin selección";

/// Note drawn in the middle of the placeholder
pub const PLACEHOLDER_NOTE: &str = "Seleccione una opción válida";

/// How a trace is drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TraceKind {
    Line,
    Bar,
}

/// Ordering of categories on the x axis
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryOrder {
    /// Source order
    Trace,
    /// Ascending by bar value
    TotalAscending,
    /// Descending by bar value
    TotalDescending,
}

impl CategoryOrder {
    fn plotly_name(&self) -> &'static str {
        match self {
            CategoryOrder::Trace => "trace",
            CategoryOrder::TotalAscending => "total ascending",
            CategoryOrder::TotalDescending => "total descending",
        }
    }
}

/// One data series
#[derive(Debug, Clone, PartialEq)]
pub struct Trace {
    pub kind: TraceKind,
    pub name: String,
    pub x: Vec<String>,
    pub y: Vec<Option<f64>>,
}

impl Trace {
    pub fn line(name: impl Into<String>, x: Vec<String>, y: Vec<Option<f64>>) -> Self {
        Self {
            kind: TraceKind::Line,
            name: name.into(),
            x,
            y,
        }
    }

    pub fn bar(name: impl Into<String>, x: Vec<String>, y: Vec<Option<f64>>) -> Self {
        Self {
            kind: TraceKind::Bar,
            name: name.into(),
            x,
            y,
        }
    }

    fn to_plotly(&self) -> Value {
        match self.kind {
            TraceKind::Line => json!({
                "type": "scatter",
                "mode": "lines",
                "name": self.name,
                "x": self.x,
                "y": self.y,
            }),
            TraceKind::Bar => json!({
                "type": "bar",
                "name": self.name,
                "x": self.x,
                "y": self.y,
            }),
        }
    }
}

/// Immutable chart specification
#[derive(Debug, Clone, PartialEq)]
pub struct Chart {
    pub title: String,
    pub x_title: Option<String>,
    pub y_title: Option<String>,
    pub traces: Vec<Trace>,
    pub category_order: Option<CategoryOrder>,
    /// Centered note, only set on placeholders
    pub note: Option<String>,
}

impl Chart {
    /// Create an empty chart with a title
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            x_title: None,
            y_title: None,
            traces: Vec::new(),
            category_order: None,
            note: None,
        }
    }

    /// Explicit "no selection" chart
    pub fn placeholder() -> Self {
        let mut chart = Self::new(PLACEHOLDER_TITLE);
        chart.note = Some(PLACEHOLDER_NOTE.to_string());
        chart
    }

    pub fn is_placeholder(&self) -> bool {
        self.traces.is_empty() && self.note.is_some()
    }

    /// Set the x axis title
    pub fn x_title(mut self, title: impl Into<String>) -> Self {
        self.x_title = Some(title.into());
        self
    }

    /// Set the y axis title
    pub fn y_title(mut self, title: impl Into<String>) -> Self {
        self.y_title = Some(title.into());
        self
    }

    /// Add a trace
    pub fn trace(mut self, trace: Trace) -> Self {
        self.traces.push(trace);
        self
    }

    /// Force the x axis category order
    pub fn category_order(mut self, order: CategoryOrder) -> Self {
        self.category_order = Some(order);
        self
    }

    /// Trace names in draw order
    pub fn series_names(&self) -> impl Iterator<Item = &str> {
        self.traces.iter().map(|t| t.name.as_str())
    }

    /// Render as a plotly figure: `{ "data": [...], "layout": {...} }`
    pub fn to_plotly(&self) -> Value {
        let mut xaxis = json!({});
        if let Some(title) = &self.x_title {
            xaxis["title"] = json!({ "text": title });
        }
        if let Some(order) = self.category_order {
            xaxis["categoryorder"] = json!(order.plotly_name());
        }

        let mut yaxis = json!({});
        if let Some(title) = &self.y_title {
            yaxis["title"] = json!({ "text": title });
        }

        let mut layout = json!({
            "title": { "text": self.title },
            "xaxis": xaxis,
            "yaxis": yaxis,
        });

        if let Some(note) = &self.note {
            layout["xaxis"]["visible"] = json!(false);
            layout["yaxis"]["visible"] = json!(false);
            layout["annotations"] = json!([{
                "text": note,
                "xref": "paper",
                "yref": "paper",
                "x": 0.5,
                "y": 0.5,
                "showarrow": false,
                "font": { "size": 16 },
            }]);
        }

        let data: Vec<Value> = self.traces.iter().map(Trace::to_plotly).collect();

        json!({
            "data": data,
            "layout": layout,
        })
    }
}
