//! CSV Loader
//!
//! Reads a delimited file with a header row into a [`Table`] indexed by a key
//! column. Value columns are parsed as numeric; empty cells become gaps.
//! Callers that only need some columns name them, and the rest of the file
//! is never parsed.

use std::collections::HashSet;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use super::error::{DataError, DataResult};
use super::table::{Column, Table};

/// Source name used for tables parsed from memory
pub const IN_MEMORY_SOURCE: &str = "<memory>";

/// Load a table from a CSV file, indexed by `key_column`. Every other column
/// is a value column.
pub fn load_table(path: &Path, key_column: &str) -> DataResult<Table> {
    load_file(path, key_column, None)
}

/// Load only `columns` from a CSV file, in the order given. Any other column
/// is skipped without being parsed.
pub fn load_table_columns<S: AsRef<str>>(
    path: &Path,
    key_column: &str,
    columns: &[S],
) -> DataResult<Table> {
    let wanted: Vec<&str> = columns.iter().map(AsRef::as_ref).collect();
    load_file(path, key_column, Some(&wanted))
}

/// Load a table from a CSV string (useful for testing)
pub fn load_table_str(csv_data: &str, key_column: &str) -> DataResult<Table> {
    read_table(csv_data.as_bytes(), Path::new(IN_MEMORY_SOURCE), key_column, None)
}

/// [`load_table_columns`] over a CSV string
pub fn load_table_str_columns<S: AsRef<str>>(
    csv_data: &str,
    key_column: &str,
    columns: &[S],
) -> DataResult<Table> {
    let wanted: Vec<&str> = columns.iter().map(AsRef::as_ref).collect();
    read_table(
        csv_data.as_bytes(),
        Path::new(IN_MEMORY_SOURCE),
        key_column,
        Some(&wanted),
    )
}

fn load_file(path: &Path, key_column: &str, wanted: Option<&[&str]>) -> DataResult<Table> {
    let file = File::open(path).map_err(|source| DataError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let table = read_table(file, path, key_column, wanted)?;

    tracing::debug!(
        path = %path.display(),
        key_column,
        rows = table.len(),
        columns = table.columns().len(),
        "Loaded table"
    );

    Ok(table)
}

fn read_table<R: Read>(
    input: R,
    source: &Path,
    key_column: &str,
    wanted: Option<&[&str]>,
) -> DataResult<Table> {
    let csv_err = |e: csv::Error| DataError::Csv {
        path: source.to_path_buf(),
        source: e,
    };

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(input);

    let headers = reader.headers().map_err(csv_err)?.clone();

    let mut seen = HashSet::new();
    for header in headers.iter() {
        if !seen.insert(header) {
            return Err(DataError::DuplicateColumn {
                path: source.to_path_buf(),
                column: header.to_string(),
            });
        }
    }

    let key_idx = headers
        .iter()
        .position(|h| h == key_column)
        .ok_or_else(|| DataError::MissingColumn {
            path: source.to_path_buf(),
            column: key_column.to_string(),
        })?;

    // (record index, column) for every column that gets parsed
    let mut value_columns: Vec<(usize, Column)> = match wanted {
        None => headers
            .iter()
            .enumerate()
            .filter(|(idx, _)| *idx != key_idx)
            .map(|(idx, name)| (idx, Column::new(name)))
            .collect(),
        Some(names) => names
            .iter()
            .map(|name| {
                headers
                    .iter()
                    .position(|h| h == *name)
                    .map(|idx| (idx, Column::new(*name)))
                    .ok_or_else(|| DataError::MissingColumn {
                        path: source.to_path_buf(),
                        column: name.to_string(),
                    })
            })
            .collect::<DataResult<_>>()?,
    };

    let mut keys = Vec::new();

    for result in reader.records() {
        let record = result.map_err(csv_err)?;
        let line = record.position().map(|p| p.line()).unwrap_or(0);

        keys.push(record.get(key_idx).unwrap_or_default().to_string());

        for (idx, column) in value_columns.iter_mut() {
            let cell = record.get(*idx).unwrap_or_default();
            let value = parse_cell(cell).ok_or_else(|| DataError::InvalidValue {
                path: source.to_path_buf(),
                line,
                column: column.name.clone(),
                value: cell.to_string(),
            })?;
            column.values.push(value);
        }
    }

    let columns = value_columns.into_iter().map(|(_, c)| c).collect();

    Ok(Table::new(source, key_column, keys, columns))
}

/// Parse a numeric cell. `Some(None)` is a gap, `None` is not a number.
fn parse_cell(cell: &str) -> Option<Option<f64>> {
    if cell.is_empty() {
        return Some(None);
    }

    match cell.parse::<f64>() {
        Ok(value) if value.is_nan() => Some(None),
        Ok(value) => Some(Some(value)),
        Err(_) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const EXCHANGE_CSV: &str = "Fecha,Compra,Venta
2023-01-01,7.80,7.90
2023-02-01,7.81,7.92
2023-03-01,,7.95";

    #[test]
    fn test_load_str_indexes_by_key() {
        let table = load_table_str(EXCHANGE_CSV, "Fecha").unwrap();

        assert_eq!(table.key_column(), "Fecha");
        assert_eq!(table.keys(), &["2023-01-01", "2023-02-01", "2023-03-01"]);
        assert_eq!(table.column_names().collect::<Vec<_>>(), vec!["Compra", "Venta"]);
        assert_eq!(
            table.column("Compra").unwrap().values,
            vec![Some(7.80), Some(7.81), None]
        );
    }

    #[test]
    fn test_key_column_not_first() {
        let csv = "Valor,Periodo\n1.5,Enero\n2.5,Febrero";
        let table = load_table_str(csv, "Periodo").unwrap();

        assert_eq!(table.keys(), &["Enero", "Febrero"]);
        assert_eq!(table.column_names().collect::<Vec<_>>(), vec!["Valor"]);
    }

    #[test]
    fn test_missing_key_column() {
        let err = load_table_str(EXCHANGE_CSV, "Periodo").unwrap_err();
        assert!(matches!(err, DataError::MissingColumn { ref column, .. } if column == "Periodo"));
    }

    #[test]
    fn test_invalid_value_reports_line_and_column() {
        let csv = "Fecha,Compra\n2023-01-01,7.8\n2023-02-01,abc";
        let err = load_table_str(csv, "Fecha").unwrap_err();

        match err {
            DataError::InvalidValue {
                line,
                column,
                value,
                ..
            } => {
                assert_eq!(line, 3);
                assert_eq!(column, "Compra");
                assert_eq!(value, "abc");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_ragged_row_is_csv_error() {
        let csv = "Fecha,Compra,Venta\n2023-01-01,7.8";
        let err = load_table_str(csv, "Fecha").unwrap_err();
        assert!(matches!(err, DataError::Csv { .. }));
    }

    #[test]
    fn test_duplicate_header() {
        let csv = "Fecha,Compra,Compra\n2023-01-01,7.8,7.9";
        let err = load_table_str(csv, "Fecha").unwrap_err();
        assert!(matches!(err, DataError::DuplicateColumn { ref column, .. } if column == "Compra"));
    }

    #[test]
    fn test_whitespace_and_nan_cells() {
        let csv = "Fecha, Compra \n2023-01-01, 7.8 \n2023-02-01,NaN";
        let table = load_table_str(csv, "Fecha").unwrap();

        assert_eq!(table.column("Compra").unwrap().values, vec![Some(7.8), None]);
    }

    #[test]
    fn test_selected_columns_skip_text_cells() {
        let csv = "Periodo,2023,Fuente,2024\nEnero,9.1,BCN,n.d.\nFebrero,8.7,BCN,1.0";
        let table = load_table_str_columns(csv, "Periodo", &["2023"]).unwrap();

        assert_eq!(table.column_names().collect::<Vec<_>>(), vec!["2023"]);
        assert_eq!(table.column("2023").unwrap().values, vec![Some(9.1), Some(8.7)]);
        assert!(table.column("Fuente").is_none());
    }

    #[test]
    fn test_selected_columns_follow_requested_order() {
        let table = load_table_str_columns(EXCHANGE_CSV, "Fecha", &["Venta", "Compra"]).unwrap();
        assert_eq!(table.column_names().collect::<Vec<_>>(), vec!["Venta", "Compra"]);
    }

    #[test]
    fn test_selected_column_missing() {
        let err =
            load_table_str_columns(EXCHANGE_CSV, "Fecha", &["Compra", "Promedio"]).unwrap_err();
        assert!(matches!(err, DataError::MissingColumn { ref column, .. } if column == "Promedio"));
    }

    #[test]
    fn test_selected_column_still_rejects_text() {
        let csv = "Periodo,2023,2024\nEnero,n.d.,1.0";
        let err = load_table_str_columns(csv, "Periodo", &["2023"]).unwrap_err();
        assert!(matches!(err, DataError::InvalidValue { ref column, .. } if column == "2023"));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.csv");

        let err = load_table(&path, "Fecha").unwrap_err();
        assert!(matches!(err, DataError::Io { .. }));
        assert_eq!(err.path(), path.as_path());
    }

    #[test]
    fn test_load_twice_is_identical() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(EXCHANGE_CSV.as_bytes()).unwrap();

        let first = load_table(file.path(), "Fecha").unwrap();
        let second = load_table(file.path(), "Fecha").unwrap();

        assert_eq!(first, second);
        assert_eq!(first.source(), file.path());
    }
}
