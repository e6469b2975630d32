//! pmtqc-io: File ingestion and result serialization for pmtqc.
//!
//! This crate reads columnar hit tables (HDF5), PMT geometry tables (CSV),
//! and calibration configuration (YAML), and writes the JSON result
//! artifact.
//!

mod config;
mod error;
mod geometry;
mod hits;
mod report;

pub use config::{load_calibration, CalibrationConfig};
pub use error::{Error, Result};
pub use geometry::load_geometry;
pub use hits::{read_hit_columns, HIT_TABLE_NAMES, TIME_COLUMN_NAMES};
pub use report::{read_result, write_result};
