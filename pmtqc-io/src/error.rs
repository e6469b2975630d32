//! I/O error types.

use std::path::PathBuf;
use thiserror::Error;

/// Result type for I/O operations.
pub type Result<T> = std::result::Result<T, Error>;

/// I/O error types.
#[derive(Error, Debug)]
pub enum Error {
    /// File I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// HDF5 library error.
    #[error("HDF5 error: {0}")]
    Hdf5(#[from] hdf5::Error),

    /// Geometry CSV parse error.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Result JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// No accepted hits table name found in an input file.
    #[error("no hits table in {path} (tried {tried:?})")]
    MissingTable { path: PathBuf, tried: Vec<String> },

    /// Required hit column absent from the located table.
    #[error("table {table:?} has no column named any of {tried:?}")]
    MissingColumn { table: String, tried: Vec<String> },

    /// Geometry file missing a required column.
    #[error("geometry file {path} is missing required column {column:?}")]
    GeometrySchema { path: PathBuf, column: String },

    /// Malformed geometry row.
    #[error("geometry file {path}, row {row}: {message}")]
    GeometryRow {
        path: PathBuf,
        row: usize,
        message: String,
    },

    /// Core library error.
    #[error("core error: {0}")]
    Core(#[from] pmtqc_core::Error),
}
