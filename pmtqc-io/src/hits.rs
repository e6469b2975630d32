//! Hit Source Reader over HDF5 columnar files.
//!
//! Input files carry one hits table (a group of equal-length 1-D datasets)
//! under one of a small set of historical names. The reader locates the
//! table, resolves the time column, and returns the parallel columns as a
//! [`HitColumns`] batch. Files are opened read-only and never mutated.

use hdf5::types::H5Type;
use hdf5::{File, Group};
use pmtqc_core::HitColumns;
use std::path::Path;

use crate::error::{Error, Result};

/// Accepted hits table names, in lookup order.
pub const HIT_TABLE_NAMES: [&str; 3] = ["hits", "digits", "DigiHits"];

/// Accepted time column names, in lookup order. Both are nanoseconds.
pub const TIME_COLUMN_NAMES: [&str; 2] = ["t_ns", "time"];

/// Reads the hit table of one input file into parallel columns.
///
/// # Errors
/// Returns [`Error::MissingTable`] when no accepted table name exists and
/// [`Error::MissingColumn`] when the time, `pmt`, or `event` column is
/// absent.
pub fn read_hit_columns<P: AsRef<Path>>(path: P) -> Result<HitColumns> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let table = locate_hits_table(&file, path)?;

    let time_ns = read_time_column(&table)?;
    let pmt_id = read_column::<u32>(&table, "pmt")?;
    let event_id = read_column::<u32>(&table, "event")?;

    Ok(HitColumns::from_columns(time_ns, pmt_id, event_id)?)
}

fn locate_hits_table(file: &File, path: &Path) -> Result<Group> {
    for name in HIT_TABLE_NAMES {
        if let Ok(group) = file.group(name) {
            return Ok(group);
        }
    }
    Err(Error::MissingTable {
        path: path.to_path_buf(),
        tried: HIT_TABLE_NAMES.iter().map(ToString::to_string).collect(),
    })
}

fn read_time_column(table: &Group) -> Result<Vec<f64>> {
    for name in TIME_COLUMN_NAMES {
        if let Ok(dataset) = table.dataset(name) {
            return Ok(dataset.read_raw::<f64>()?);
        }
    }
    Err(Error::MissingColumn {
        table: table.name(),
        tried: TIME_COLUMN_NAMES.iter().map(ToString::to_string).collect(),
    })
}

fn read_column<T: H5Type>(table: &Group, name: &str) -> Result<Vec<T>> {
    let dataset = table.dataset(name).map_err(|_| Error::MissingColumn {
        table: table.name(),
        tried: vec![name.to_string()],
    })?;
    Ok(dataset.read_raw::<T>()?)
}
