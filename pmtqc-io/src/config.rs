//! Calibration configuration (YAML).
//!
//! The config file carries static calibration figures that are echoed into
//! the result record, not computed. Two historical key-naming conventions
//! are in circulation; each field resolves an ordered alias list once at
//! load time.

use log::warn;
use pmtqc_core::CalibrationEcho;
use std::path::Path;

use crate::error::Result;

/// Accepted spellings for the transit-time-spread key, in priority order.
const TTS_SIGMA_KEYS: [&str; 2] = ["TTS_sigma_ps", "tts_sigma_ps"];

/// Accepted spellings for the electronics-jitter key, in priority order.
const ELEC_JITTER_KEYS: [&str; 2] = ["elec_jitter_ps", "ELEC_JITTER_PS"];

/// Resolved calibration figures. Absent keys stay `None` and serialize as
/// `null` in the result.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CalibrationConfig {
    /// Intrinsic PMT transit-time spread, picoseconds.
    pub tts_sigma_ps: Option<f64>,
    /// Electronics jitter, picoseconds.
    pub elec_jitter_ps: Option<f64>,
}

impl CalibrationConfig {
    /// The echo fields merged into a [`pmtqc_core::TimingResult`].
    #[must_use]
    pub fn echo(&self) -> CalibrationEcho {
        CalibrationEcho {
            tts_sigma_ps: self.tts_sigma_ps,
            elec_jitter_ps: self.elec_jitter_ps,
        }
    }
}

/// Loads the calibration config from a YAML key-value document.
///
/// A missing file or an unparsable document degrades to the empty config
/// with a warning; only a hard read failure is an error.
///
/// # Errors
/// Returns an error when the file exists but cannot be read.
pub fn load_calibration<P: AsRef<Path>>(path: P) -> Result<CalibrationConfig> {
    let path = path.as_ref();
    if !path.exists() {
        warn!("calibration config {} not found; echo fields will be null", path.display());
        return Ok(CalibrationConfig::default());
    }

    let contents = std::fs::read_to_string(path)?;
    let document: serde_yaml::Value = match serde_yaml::from_str(&contents) {
        Ok(value) => value,
        Err(parse_err) => {
            warn!("calibration config {}: {parse_err}; ignoring document", path.display());
            return Ok(CalibrationConfig::default());
        }
    };

    Ok(CalibrationConfig {
        tts_sigma_ps: resolve_alias(&document, &TTS_SIGMA_KEYS),
        elec_jitter_ps: resolve_alias(&document, &ELEC_JITTER_KEYS),
    })
}

/// First alias present in the document wins.
fn resolve_alias(document: &serde_yaml::Value, aliases: &[&str]) -> Option<f64> {
    aliases
        .iter()
        .find_map(|&key| document.get(key))
        .and_then(serde_yaml::Value::as_f64)
}
