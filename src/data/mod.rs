//! Dataset loading
//!
//! Reads the three economic datasets from CSV into read-only, keyed tables.
//!
//! - [`loader`]: CSV → [`Table`]
//! - [`datasets`]: typed wrappers enforcing each dataset's columns
//! - [`error`]: startup data errors

pub mod datasets;
pub mod error;
pub mod loader;
pub mod table;

pub use datasets::{ActivityIndexTable, Datasets, ExchangeRateTable, InflationTable};
pub use error::{DataError, DataResult};
pub use loader::{
    load_table, load_table_columns, load_table_str, load_table_str_columns, IN_MEMORY_SOURCE,
};
pub use table::{Column, Table};
