//! Error types for pmtqc-core.

use thiserror::Error;

/// Result type alias for pmtqc operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Core error types for pmtqc operations.
#[derive(Error, Debug)]
pub enum Error {
    /// Too few matching hits for a stable standard deviation.
    #[error(
        "insufficient statistics: collected {collected} hits, need at least {required}; \
         check acquisition parameters (quantum efficiency, threshold)"
    )]
    InsufficientStatistics {
        /// Hits collected across all input files.
        collected: usize,
        /// Minimum required for a calibration-grade sigma.
        required: usize,
    },

    /// Hit batch columns disagree in length.
    #[error("ragged hit columns: {times} times, {pmts} pmt ids, {events} event ids")]
    RaggedColumns {
        times: usize,
        pmts: usize,
        events: usize,
    },
}
