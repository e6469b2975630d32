//! Gun-mode timing estimator.
//!
//! A fixed light source repeatedly triggers one PMT in one nominal event;
//! the spread of the collected arrival times is the single-photoelectron
//! transit-time spread of that channel. A quantization diagnostic checks
//! whether the measured spread is limited by the digitizer step rather
//! than genuine jitter.

use crate::diagnostics::Diagnostics;
use crate::error::{Error, Result};
use crate::hit::HitColumns;
use crate::stats::{mean, std_population, PS_PER_NS};

/// Minimum matching hits for a calibration-grade sigma.
pub const MIN_GUN_HITS: usize = 100;

/// Quantization suspicion threshold: warn when `dt_min_ps > sigma_t / 5`.
pub const QUANTIZATION_RATIO: f64 = 5.0;

/// Scale for rounding successive differences to 6 decimal places.
const DIFF_ROUND_SCALE: f64 = 1e6;

/// Gun-mode result record.
#[derive(Debug, Clone, PartialEq)]
pub struct GunSummary {
    /// Target PMT channel.
    pub pmt_id: u32,
    /// Target event id.
    pub event_id: u32,
    /// Matching hits collected across all input files.
    pub n_hits: usize,
    /// Population standard deviation of arrival times, picoseconds.
    pub sigma_t_ps: f64,
    /// Estimated timing-digitization step, picoseconds (0.0 when all
    /// collected timestamps are identical).
    pub dt_min_ps: f64,
}

/// Accumulates arrival times for one (PMT, event) pair across input files.
#[derive(Debug, Clone)]
pub struct GunEstimator {
    target_pmt: u32,
    target_event: u32,
    times_ns: Vec<f64>,
}

impl GunEstimator {
    /// Creates an estimator for the designated (PMT, event) pair.
    #[must_use]
    pub fn new(target_pmt: u32, target_event: u32) -> Self {
        Self {
            target_pmt,
            target_event,
            times_ns: Vec::new(),
        }
    }

    /// Folds one file's hit batch into the running collection.
    pub fn collect(&mut self, batch: &HitColumns) {
        for (time_ns, pmt_id, event_id) in batch.iter() {
            if pmt_id == self.target_pmt && event_id == self.target_event {
                self.times_ns.push(time_ns);
            }
        }
    }

    /// Matching hits collected so far.
    #[must_use]
    pub fn collected(&self) -> usize {
        self.times_ns.len()
    }

    /// Computes sigma_t and the quantization diagnostic.
    ///
    /// # Errors
    /// Returns [`Error::InsufficientStatistics`] when fewer than
    /// [`MIN_GUN_HITS`] matching hits were collected.
    pub fn finish(&self, diagnostics: &mut Diagnostics) -> Result<GunSummary> {
        if self.times_ns.len() < MIN_GUN_HITS {
            return Err(Error::InsufficientStatistics {
                collected: self.times_ns.len(),
                required: MIN_GUN_HITS,
            });
        }

        let times_ps: Vec<f64> = self.times_ns.iter().map(|t| t * PS_PER_NS).collect();
        let mean_ps = mean(&times_ps);
        let deviations: Vec<f64> = times_ps.iter().map(|t| t - mean_ps).collect();
        let sigma_t_ps = std_population(&deviations);

        let dt_min_ps = quantization_step_ps(&times_ps);
        if dt_min_ps > 0.0 && dt_min_ps > sigma_t_ps / QUANTIZATION_RATIO {
            diagnostics.warn_quantization(dt_min_ps, sigma_t_ps);
        }

        Ok(GunSummary {
            pmt_id: self.target_pmt,
            event_id: self.target_event,
            n_hits: times_ps.len(),
            sigma_t_ps,
            dt_min_ps,
        })
    }
}

/// Smallest strictly-positive successive difference of the sorted
/// timestamps, rounded to 6 decimal places to suppress float noise.
fn quantization_step_ps(times_ps: &[f64]) -> f64 {
    let mut sorted = times_ps.to_vec();
    sorted.sort_by(f64::total_cmp);

    let step = sorted
        .windows(2)
        .map(|pair| ((pair[1] - pair[0]) * DIFF_ROUND_SCALE).round() / DIFF_ROUND_SCALE)
        .filter(|&diff| diff > 0.0)
        .fold(f64::INFINITY, f64::min);

    if step.is_finite() {
        step
    } else {
        0.0
    }
}
