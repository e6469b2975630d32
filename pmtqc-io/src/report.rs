//! Result artifact writer (JSON).

use pmtqc_core::TimingResult;
use std::fs;
use std::path::Path;

use crate::error::Result;

/// Writes the result record as pretty-printed JSON, creating parent
/// directories as needed.
///
/// # Errors
/// Returns an error when the directories or file cannot be written.
pub fn write_result<P: AsRef<Path>>(path: P, result: &TimingResult) -> Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let document = serde_json::to_string_pretty(result)?;
    fs::write(path, document)?;
    Ok(())
}

/// Reads a previously written result record back.
///
/// # Errors
/// Returns an error when the file cannot be read or parsed.
pub fn read_result<P: AsRef<Path>>(path: P) -> Result<TimingResult> {
    let contents = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&contents)?)
}
