//! Typed datasets
//!
//! Thin wrappers over [`Table`] that enforce each dataset's shape at load
//! time, so chart building never has to handle a missing column.

use std::path::Path;

use super::error::{DataError, DataResult};
use super::loader::{load_table, load_table_columns, load_table_str, load_table_str_columns};
use super::table::{Column, Table};
use crate::choice::ActivityMetric;
use crate::config::DataConfig;

/// USD exchange rate by date. Every non-key column is a rate series.
#[derive(Debug, Clone, PartialEq)]
pub struct ExchangeRateTable(Table);

impl ExchangeRateTable {
    pub fn load(path: &Path, key_column: &str) -> DataResult<Self> {
        Self::from_table(load_table(path, key_column)?)
    }

    pub fn from_table(table: Table) -> DataResult<Self> {
        if table.columns().is_empty() {
            return Err(DataError::NoValueColumns {
                path: table.source().to_path_buf(),
            });
        }
        Ok(Self(table))
    }

    pub fn table(&self) -> &Table {
        &self.0
    }
}

/// Inflation by period, restricted to a fixed list of year columns. Other
/// year columns in the file are never parsed.
#[derive(Debug, Clone, PartialEq)]
pub struct InflationTable(Table);

impl InflationTable {
    pub fn load<S: AsRef<str>>(path: &Path, key_column: &str, years: &[S]) -> DataResult<Self> {
        Self::from_table(load_table_columns(path, key_column, years)?, years)
    }

    /// Project onto `years`; every year must be present
    pub fn from_table<S: AsRef<str>>(table: Table, years: &[S]) -> DataResult<Self> {
        let projected = table.project(years)?;
        if projected.columns().is_empty() {
            return Err(DataError::NoValueColumns {
                path: table.source().to_path_buf(),
            });
        }
        Ok(Self(projected))
    }

    pub fn table(&self) -> &Table {
        &self.0
    }
}

/// Economic activity index by period. Only the two variation columns are
/// read from the file.
#[derive(Debug, Clone, PartialEq)]
pub struct ActivityIndexTable {
    table: Table,
    interannual_idx: usize,
    accumulated_idx: usize,
}

impl ActivityIndexTable {
    pub fn load(
        path: &Path,
        key_column: &str,
        interannual_column: &str,
        accumulated_column: &str,
    ) -> DataResult<Self> {
        let columns = [interannual_column, accumulated_column];
        Self::from_table(
            load_table_columns(path, key_column, &columns)?,
            interannual_column,
            accumulated_column,
        )
    }

    /// Wrap a table that must contain both variation columns
    pub fn from_table(
        table: Table,
        interannual_column: &str,
        accumulated_column: &str,
    ) -> DataResult<Self> {
        let interannual_idx = column_index(&table, interannual_column)?;
        let accumulated_idx = column_index(&table, accumulated_column)?;

        Ok(Self {
            table,
            interannual_idx,
            accumulated_idx,
        })
    }

    pub fn table(&self) -> &Table {
        &self.table
    }

    /// Column backing a metric
    pub fn metric(&self, metric: ActivityMetric) -> &Column {
        let idx = match metric {
            ActivityMetric::Interannual => self.interannual_idx,
            ActivityMetric::Accumulated => self.accumulated_idx,
        };
        &self.table.columns()[idx]
    }
}

fn column_index(table: &Table, name: &str) -> DataResult<usize> {
    table
        .column_names()
        .position(|c| c == name)
        .ok_or_else(|| DataError::MissingColumn {
            path: table.source().to_path_buf(),
            column: name.to_string(),
        })
}

/// The three datasets, loaded once at startup
#[derive(Debug, Clone, PartialEq)]
pub struct Datasets {
    pub exchange: ExchangeRateTable,
    pub inflation: InflationTable,
    pub activity: ActivityIndexTable,
}

impl Datasets {
    /// Load all datasets. The first failure aborts.
    pub fn load(config: &DataConfig) -> DataResult<Self> {
        let exchange = ExchangeRateTable::load(&config.exchange_file(), &config.exchange_key)?;
        tracing::info!(
            path = %config.exchange_file().display(),
            rows = exchange.table().len(),
            columns = exchange.table().columns().len(),
            "Loaded exchange rate table"
        );

        let inflation = InflationTable::load(
            &config.inflation_file(),
            &config.inflation_key,
            &config.inflation_years,
        )?;
        tracing::info!(
            path = %config.inflation_file().display(),
            rows = inflation.table().len(),
            years = ?config.inflation_years,
            "Loaded inflation table"
        );

        let activity = ActivityIndexTable::load(
            &config.activity_file(),
            &config.activity_key,
            &config.interannual_column,
            &config.accumulated_column,
        )?;
        tracing::info!(
            path = %config.activity_file().display(),
            rows = activity.table().len(),
            "Loaded activity index table"
        );

        Ok(Self {
            exchange,
            inflation,
            activity,
        })
    }

    /// Build datasets from in-memory CSV using the column names in `config`
    pub fn from_csv_str(
        config: &DataConfig,
        exchange: &str,
        inflation: &str,
        activity: &str,
    ) -> DataResult<Self> {
        Ok(Self {
            exchange: ExchangeRateTable::from_table(load_table_str(
                exchange,
                &config.exchange_key,
            )?)?,
            inflation: InflationTable::from_table(
                load_table_str_columns(
                    inflation,
                    &config.inflation_key,
                    &config.inflation_years,
                )?,
                &config.inflation_years,
            )?,
            activity: ActivityIndexTable::from_table(
                load_table_str_columns(
                    activity,
                    &config.activity_key,
                    &[&config.interannual_column, &config.accumulated_column],
                )?,
                &config.interannual_column,
                &config.accumulated_column,
            )?,
        })
    }
}
