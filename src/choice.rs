//! User choices
//!
//! The closed sets of values the dashboard controls can send. Parsing is the
//! only place an arbitrary string is turned into a choice; everything
//! downstream matches exhaustively on the enums.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A selector received a value outside its expected set
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unrecognized {kind} selection: '{value}'")]
pub struct SelectionError {
    pub kind: &'static str,
    pub value: String,
}

/// Dataset shown in the dropdown's output slot
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum DatasetChoice {
    #[default]
    Exchange,
    Inflation,
    Activity,
}

impl DatasetChoice {
    pub const ALL: [DatasetChoice; 3] = [
        DatasetChoice::Exchange,
        DatasetChoice::Inflation,
        DatasetChoice::Activity,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DatasetChoice::Exchange => "exchange",
            DatasetChoice::Inflation => "inflation",
            DatasetChoice::Activity => "activity",
        }
    }

    /// Dropdown label
    pub fn label(&self) -> &'static str {
        match self {
            DatasetChoice::Exchange => "Gráfico de Cambio de Dólar",
            DatasetChoice::Inflation => "Gráfico de Inflación",
            DatasetChoice::Activity => "Gráfico de IMAE",
        }
    }
}

impl fmt::Display for DatasetChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DatasetChoice {
    type Err = SelectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DatasetChoice::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| SelectionError {
                kind: "dataset",
                value: s.to_string(),
            })
    }
}

/// Activity index column plotted in the radio's output slot
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ActivityMetric {
    #[default]
    Interannual,
    Accumulated,
}

impl ActivityMetric {
    pub const ALL: [ActivityMetric; 2] = [ActivityMetric::Interannual, ActivityMetric::Accumulated];

    pub fn as_str(&self) -> &'static str {
        match self {
            ActivityMetric::Interannual => "interannual",
            ActivityMetric::Accumulated => "accumulated",
        }
    }

    /// Radio label, also used in chart titles
    pub fn label(&self) -> &'static str {
        match self {
            ActivityMetric::Interannual => "Var. % Interanual",
            ActivityMetric::Accumulated => "Var. % Acumulada",
        }
    }
}

impl fmt::Display for ActivityMetric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ActivityMetric {
    type Err = SelectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ActivityMetric::ALL
            .into_iter()
            .find(|m| m.as_str() == s)
            .ok_or_else(|| SelectionError {
                kind: "activity metric",
                value: s.to_string(),
            })
    }
}
