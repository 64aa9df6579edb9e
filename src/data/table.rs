//! Keyed numeric tables
//!
//! A [`Table`] is an ordered list of rows keyed by a string column (a date or
//! a period label), with one or more named numeric columns. Row order is the
//! order of the source file.

use std::path::{Path, PathBuf};

use super::error::{DataError, DataResult};

/// A named numeric column. Missing cells are `None`.
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    pub name: String,
    pub values: Vec<Option<f64>>,
}

impl Column {
    /// Create an empty column
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            values: Vec::new(),
        }
    }

    /// Create a column with values
    pub fn with_values(name: impl Into<String>, values: Vec<Option<f64>>) -> Self {
        Self {
            name: name.into(),
            values,
        }
    }
}

/// Read-only table indexed by a key column
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    source: PathBuf,
    key_column: String,
    keys: Vec<String>,
    columns: Vec<Column>,
}

impl Table {
    /// Build a table from parts. Every column must have one value per key.
    pub(crate) fn new(
        source: impl Into<PathBuf>,
        key_column: impl Into<String>,
        keys: Vec<String>,
        columns: Vec<Column>,
    ) -> Self {
        debug_assert!(columns.iter().all(|c| c.values.len() == keys.len()));
        Self {
            source: source.into(),
            key_column: key_column.into(),
            keys,
            columns,
        }
    }

    /// File the table was loaded from
    pub fn source(&self) -> &Path {
        &self.source
    }

    /// Name of the key column
    pub fn key_column(&self) -> &str {
        &self.key_column
    }

    /// Row keys in source order
    pub fn keys(&self) -> &[String] {
        &self.keys
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Value column names in table order
    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|c| c.name.as_str())
    }

    /// Look up a value column by name
    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }

    /// Look up a value column, failing with `MissingColumn`
    pub fn require(&self, name: &str) -> DataResult<&Column> {
        self.column(name).ok_or_else(|| DataError::MissingColumn {
            path: self.source.clone(),
            column: name.to_string(),
        })
    }

    /// Number of rows
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Keep only the named columns, in the order given.
    ///
    /// Fails on the first name that is not present.
    pub fn project<S: AsRef<str>>(&self, names: &[S]) -> DataResult<Table> {
        let columns = names
            .iter()
            .map(|name| self.require(name.as_ref()).cloned())
            .collect::<DataResult<Vec<_>>>()?;

        Ok(Table {
            source: self.source.clone(),
            key_column: self.key_column.clone(),
            keys: self.keys.clone(),
            columns,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Table {
        Table::new(
            "sample.csv",
            "Periodo",
            vec!["Enero".to_string(), "Febrero".to_string()],
            vec![
                Column::with_values("2019", vec![Some(1.0), Some(2.0)]),
                Column::with_values("2020", vec![Some(3.0), None]),
                Column::with_values("2021", vec![Some(5.0), Some(6.0)]),
            ],
        )
    }

    #[test]
    fn test_project_reorders_and_drops() {
        let table = sample().project(&["2021", "2019"]).unwrap();

        assert_eq!(table.column_names().collect::<Vec<_>>(), vec!["2021", "2019"]);
        assert_eq!(table.keys(), sample().keys());
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn test_project_missing_column() {
        let err = sample().project(&["2019", "2024"]).unwrap_err();

        match err {
            DataError::MissingColumn { column, path } => {
                assert_eq!(column, "2024");
                assert_eq!(path, PathBuf::from("sample.csv"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_column_lookup() {
        let table = sample();
        assert_eq!(table.column("2020").unwrap().values, vec![Some(3.0), None]);
        assert!(table.column("Periodo").is_none());
        assert!(table.require("1999").is_err());
    }
}
