//! Muon-mode timing estimator.
//!
//! Replicates real trigger behavior where only the first photon per channel
//! matters: a streaming per-PMT minimum over all hits in all files, an
//! optional time-of-flight correction from a reference emission point, and
//! the spread of the resulting earliest times across the array.

use std::collections::HashMap;

use crate::diagnostics::Diagnostics;
use crate::geometry::{time_of_flight_ns, GeometryTable, PmtPosition};
use crate::hit::HitColumns;
use crate::stats::{std_population, PS_PER_NS};

/// Muon-mode result record.
#[derive(Debug, Clone, PartialEq)]
pub struct MuonSummary {
    /// Spread of per-PMT earliest times, picoseconds.
    pub sigma_t_ps: f64,
    /// PMTs entering the spread.
    pub n_pmts: usize,
    /// True when at least one PMT's earliest time was TOF-corrected.
    pub tof_correction_applied: bool,
}

impl MuonSummary {
    /// The zero-valued summary for a run with no hits at all.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            sigma_t_ps: 0.0,
            n_pmts: 0,
            tof_correction_applied: false,
        }
    }
}

/// Accumulates the earliest arrival time per PMT across input files.
#[derive(Debug, Clone, Default)]
pub struct MuonEstimator {
    earliest_ns: HashMap<u32, f64>,
}

impl MuonEstimator {
    /// Creates an empty estimator.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Folds one file's hit batch into the per-PMT minimum map.
    pub fn collect(&mut self, batch: &HitColumns) {
        for (time_ns, pmt_id, _event_id) in batch.iter() {
            self.earliest_ns
                .entry(pmt_id)
                .and_modify(|earliest| {
                    if time_ns < *earliest {
                        *earliest = time_ns;
                    }
                })
                .or_insert(time_ns);
        }
    }

    /// PMTs seen so far.
    #[must_use]
    pub fn n_pmts(&self) -> usize {
        self.earliest_ns.len()
    }

    /// Computes the array-wide spread, optionally TOF-corrected.
    ///
    /// Zero hits anywhere is a valid outcome and yields the zero-valued
    /// summary. The correction runs only when both a geometry table and a
    /// reference point are present; PMTs absent from the geometry table are
    /// dropped from the corrected set.
    pub fn finish(
        &self,
        geometry: &GeometryTable,
        reference: Option<&PmtPosition>,
        n_eff: f64,
        diagnostics: &mut Diagnostics,
    ) -> MuonSummary {
        if self.earliest_ns.is_empty() {
            return MuonSummary::empty();
        }

        let mut corrected_ns: Vec<f64> = Vec::new();
        match (geometry.is_empty(), reference) {
            (false, Some(origin)) => {
                for (&pmt_id, &earliest) in &self.earliest_ns {
                    if let Some(position) = geometry.get(pmt_id) {
                        let tof = time_of_flight_ns(n_eff, origin.distance_to(position));
                        corrected_ns.push(earliest - tof);
                    }
                }
            }
            (false, None) => diagnostics.warn_missing_reference(),
            (true, Some(_)) => diagnostics.warn_missing_geometry(),
            (true, None) => {}
        }

        let (values_ns, tof_correction_applied) = if corrected_ns.is_empty() {
            let raw: Vec<f64> = self.earliest_ns.values().copied().collect();
            (raw, false)
        } else {
            (corrected_ns, true)
        };

        MuonSummary {
            sigma_t_ps: std_population(&values_ns) * PS_PER_NS,
            n_pmts: values_ns.len(),
            tof_correction_applied,
        }
    }
}
