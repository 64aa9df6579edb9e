//! Dataset loading error types
//!
//! Every variant names the file it came from so a startup failure can be
//! traced back to the offending dataset.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading a dataset
#[derive(Error, Debug)]
pub enum DataError {
    /// File missing or unreadable
    #[error("Failed to read {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Malformed delimited text (ragged rows, invalid UTF-8, ...)
    #[error("Malformed CSV in {path:?}: {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// An expected column is absent from the header row
    #[error("Missing column '{column}' in {path:?}")]
    MissingColumn { path: PathBuf, column: String },

    /// The header row names the same column twice
    #[error("Duplicate column '{column}' in {path:?}")]
    DuplicateColumn { path: PathBuf, column: String },

    /// The table has a key column but nothing to plot
    #[error("No value columns in {path:?}")]
    NoValueColumns { path: PathBuf },

    /// A non-empty cell that is not a number
    #[error("Invalid value '{value}' in {path:?} at line {line}, column '{column}'")]
    InvalidValue {
        path: PathBuf,
        line: u64,
        column: String,
        value: String,
    },
}

impl DataError {
    /// File the error originated from
    pub fn path(&self) -> &std::path::Path {
        match self {
            DataError::Io { path, .. }
            | DataError::Csv { path, .. }
            | DataError::MissingColumn { path, .. }
            | DataError::DuplicateColumn { path, .. }
            | DataError::NoValueColumns { path }
            | DataError::InvalidValue { path, .. } => path,
        }
    }
}

/// Result type alias for dataset operations
pub type DataResult<T> = Result<T, DataError>;
