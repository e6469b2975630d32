//! Run-level diagnostic context.
//!
//! Warnings that may trigger once per processed file (missing geometry,
//! missing reference point, quantization suspicion) are deduplicated here
//! so a multi-file run reports each condition a single time. The flags are
//! owned by the run, not by any module-level state.

use log::warn;

/// Warn-once bookkeeping for one analyzer run.
#[derive(Debug, Default)]
pub struct Diagnostics {
    quantization_warned: bool,
    missing_geometry_warned: bool,
    missing_reference_warned: bool,
}

impl Diagnostics {
    /// Creates a fresh context with no warnings emitted.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Timing resolution suspected to be quantization-limited.
    pub fn warn_quantization(&mut self, dt_min_ps: f64, sigma_t_ps: f64) {
        if self.quantization_warned {
            return;
        }
        self.quantization_warned = true;
        warn!(
            "timing digitization step {dt_min_ps:.3} ps exceeds sigma_t/5 \
             ({:.3} ps); resolution may be quantization-limited, consider \
             increasing the digitizer sampling rate or disabling rounding",
            sigma_t_ps / 5.0
        );
    }

    /// TOF correction requested but no geometry table was supplied.
    pub fn warn_missing_geometry(&mut self) {
        if self.missing_geometry_warned {
            return;
        }
        self.missing_geometry_warned = true;
        warn!("no PMT geometry table supplied; skipping time-of-flight correction");
    }

    /// Geometry supplied but no reference emission point given.
    pub fn warn_missing_reference(&mut self) {
        if self.missing_reference_warned {
            return;
        }
        self.missing_reference_warned = true;
        warn!("geometry table supplied without a reference point; skipping time-of-flight correction");
    }

    /// Whether the quantization warning has fired.
    #[must_use]
    pub fn quantization_warned(&self) -> bool {
        self.quantization_warned
    }

    /// Whether the missing-geometry warning has fired.
    #[must_use]
    pub fn missing_geometry_warned(&self) -> bool {
        self.missing_geometry_warned
    }

    /// Whether the missing-reference warning has fired.
    #[must_use]
    pub fn missing_reference_warned(&self) -> bool {
        self.missing_reference_warned
    }
}
