//! pmtqc-core: Core types and timing estimators for PMT detector QC.
//!
//! This crate provides the domain model for the offline quality-control
//! chain: columnar hit batches, the PMT geometry table, and the two
//! timing-resolution estimators (gun calibration and muon coincidence).
//!

pub mod diagnostics;
pub mod error;
pub mod geometry;
pub mod gun;
pub mod hit;
pub mod muon;
pub mod report;
pub mod stats;

pub use diagnostics::Diagnostics;
pub use error::{Error, Result};
pub use geometry::{time_of_flight_ns, GeometryTable, PmtPosition, C_MM_PER_NS};
pub use gun::{GunEstimator, GunSummary, MIN_GUN_HITS, QUANTIZATION_RATIO};
pub use hit::HitColumns;
pub use muon::{MuonEstimator, MuonSummary};
pub use report::{CalibrationEcho, Mode, TimingResult};
