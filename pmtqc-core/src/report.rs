//! Output record for one timing-resolution run.

use serde::{Deserialize, Serialize};

use crate::gun::GunSummary;
use crate::muon::MuonSummary;

/// Acquisition scenario of the run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Fixed light-source calibration on one (PMT, event) pair.
    Gun,
    /// Earliest-hit-per-PMT coincidence run with optional TOF correction.
    Muon,
}

/// Static calibration figures echoed into the result, not computed.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CalibrationEcho {
    /// Intrinsic PMT transit-time spread, picoseconds.
    pub tts_sigma_ps: Option<f64>,
    /// Electronics jitter, picoseconds.
    pub elec_jitter_ps: Option<f64>,
}

/// The serialized timing-resolution result.
///
/// Mode-specific fields are `None` (and omitted from the JSON document)
/// for the other mode; the calibration echo fields are `null` when the
/// configuration did not provide them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimingResult {
    pub mode: Mode,
    pub sigma_t_ps: f64,

    // Gun-mode fields.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pmt_id: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub n_hits: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dt_min_ps: Option<f64>,

    // Muon-mode fields.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub n_pmts: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tof_correction_applied: Option<bool>,

    // Calibration echo, copied verbatim from configuration.
    #[serde(rename = "TTS_sigma_ps")]
    pub tts_sigma_ps: Option<f64>,
    pub elec_jitter_ps: Option<f64>,
}

impl TimingResult {
    /// Builds the gun-mode result record.
    #[must_use]
    pub fn gun(summary: &GunSummary, calibration: CalibrationEcho) -> Self {
        Self {
            mode: Mode::Gun,
            sigma_t_ps: summary.sigma_t_ps,
            pmt_id: Some(summary.pmt_id),
            event: Some(summary.event_id),
            n_hits: Some(summary.n_hits),
            dt_min_ps: Some(summary.dt_min_ps),
            n_pmts: None,
            tof_correction_applied: None,
            tts_sigma_ps: calibration.tts_sigma_ps,
            elec_jitter_ps: calibration.elec_jitter_ps,
        }
    }

    /// Builds the muon-mode result record.
    #[must_use]
    pub fn muon(summary: &MuonSummary, calibration: CalibrationEcho) -> Self {
        Self {
            mode: Mode::Muon,
            sigma_t_ps: summary.sigma_t_ps,
            pmt_id: None,
            event: None,
            n_hits: None,
            dt_min_ps: None,
            n_pmts: Some(summary.n_pmts),
            tof_correction_applied: Some(summary.tof_correction_applied),
            tts_sigma_ps: calibration.tts_sigma_ps,
            elec_jitter_ps: calibration.elec_jitter_ps,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Mode::Gun).unwrap(), "\"gun\"");
        assert_eq!(serde_json::to_string(&Mode::Muon).unwrap(), "\"muon\"");
    }

    #[test]
    fn test_muon_record_fields() {
        let summary = MuonSummary {
            sigma_t_ps: 123.4,
            n_pmts: 7,
            tof_correction_applied: true,
        };
        let result = TimingResult::muon(&summary, CalibrationEcho::default());
        let json = serde_json::to_value(&result).unwrap();

        assert_eq!(json["mode"], "muon");
        assert_eq!(json["n_pmts"], 7);
        assert!(json.get("n_hits").is_none());
        // Missing calibration keys are echoed as null, not omitted.
        assert!(json["TTS_sigma_ps"].is_null());
        assert!(json["elec_jitter_ps"].is_null());
    }
}
