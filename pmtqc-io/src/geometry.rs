//! PMT geometry table loader (CSV).

use pmtqc_core::{GeometryTable, PmtPosition};
use std::path::Path;

use crate::error::{Error, Result};

/// Required geometry columns, matched case-insensitively.
const REQUIRED_COLUMNS: [&str; 4] = ["pmt", "x", "y", "z"];

/// Loads a `pmt,x,y,z` CSV file into a geometry table.
///
/// Coordinates are millimetres. Header matching is case-insensitive and
/// extra columns are ignored. A duplicated PMT id keeps the last row.
///
/// # Errors
/// Returns [`Error::GeometrySchema`] when a required column is missing and
/// [`Error::GeometryRow`] when a cell fails to parse.
pub fn load_geometry<P: AsRef<Path>>(path: P) -> Result<GeometryTable> {
    let path = path.as_ref();
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_path(path)?;

    let headers = reader.headers()?.clone();
    let mut indices = [0usize; 4];
    for (slot, required) in indices.iter_mut().zip(REQUIRED_COLUMNS) {
        *slot = headers
            .iter()
            .position(|h| h.eq_ignore_ascii_case(required))
            .ok_or_else(|| Error::GeometrySchema {
                path: path.to_path_buf(),
                column: required.to_string(),
            })?;
    }
    let [pmt_idx, x_idx, y_idx, z_idx] = indices;

    let mut table = GeometryTable::default();
    for (row, record) in reader.records().enumerate() {
        let record = record?;
        let pmt_id = parse_cell::<u32>(&record, pmt_idx, path, row, "pmt")?;
        let x = parse_cell::<f64>(&record, x_idx, path, row, "x")?;
        let y = parse_cell::<f64>(&record, y_idx, path, row, "y")?;
        let z = parse_cell::<f64>(&record, z_idx, path, row, "z")?;
        table.insert(pmt_id, PmtPosition::new(x, y, z));
    }
    Ok(table)
}

fn parse_cell<T: std::str::FromStr>(
    record: &csv::StringRecord,
    index: usize,
    path: &Path,
    row: usize,
    column: &str,
) -> Result<T> {
    let cell = record.get(index).unwrap_or("");
    cell.parse().map_err(|_| Error::GeometryRow {
        path: path.to_path_buf(),
        row: row + 2, // 1-based, counting the header line
        message: format!("cannot parse {column} value {cell:?}"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn geometry_file(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_load_geometry() {
        let file = geometry_file("pmt,x,y,z\n1,0.0,0.0,1000.0\n2,300.0,0.0,0.0\n");
        let table = load_geometry(file.path()).unwrap();
        assert_eq!(table.len(), 2);
        assert_relative_eq!(table.get(1).unwrap().z, 1000.0);
        assert_relative_eq!(table.get(2).unwrap().x, 300.0);
    }

    #[test]
    fn test_case_insensitive_headers() {
        let file = geometry_file("PMT,X,Y,Z\n5, 1.0, 2.0, 3.0\n");
        let table = load_geometry(file.path()).unwrap();
        assert_relative_eq!(table.get(5).unwrap().y, 2.0);
    }

    #[test]
    fn test_missing_column_is_schema_error() {
        let file = geometry_file("pmt,x,y\n1,0.0,0.0\n");
        let err = load_geometry(file.path()).unwrap_err();
        match err {
            Error::GeometrySchema { column, .. } => assert_eq!(column, "z"),
            other => panic!("expected GeometrySchema, got: {other}"),
        }
    }

    #[test]
    fn test_malformed_cell() {
        let file = geometry_file("pmt,x,y,z\n1,abc,0.0,0.0\n");
        let err = load_geometry(file.path()).unwrap_err();
        assert!(matches!(err, Error::GeometryRow { row: 2, .. }), "got: {err}");
    }
}
