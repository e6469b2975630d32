//! End-to-end pipeline tests: HDF5 input files through the estimators to
//! the JSON artifact.

use approx::assert_relative_eq;
use pmtqc_core::{CalibrationEcho, Diagnostics, GunEstimator, MuonEstimator, TimingResult};
use pmtqc_io::{load_calibration, read_hit_columns, read_result, write_result};
use std::io::Write;
use std::path::Path;
use tempfile::TempDir;

fn write_hits_file(path: &Path, rows: &[(f64, u32, u32)]) {
    let file = hdf5::File::create(path).unwrap();
    let group = file.create_group("hits").unwrap();

    let times: Vec<f64> = rows.iter().map(|r| r.0).collect();
    let pmts: Vec<u32> = rows.iter().map(|r| r.1).collect();
    let events: Vec<u32> = rows.iter().map(|r| r.2).collect();

    group
        .new_dataset_builder()
        .with_data(&times)
        .create("t_ns")
        .unwrap();
    group
        .new_dataset_builder()
        .with_data(&pmts)
        .create("pmt")
        .unwrap();
    group
        .new_dataset_builder()
        .with_data(&events)
        .create("event")
        .unwrap();
}

fn gun_rows(n: usize) -> Vec<(f64, u32, u32)> {
    (0..n).map(|i| (i as f64, 0, 0)).collect()
}

#[test]
fn gun_sigma_is_partition_independent() {
    let dir = TempDir::new().unwrap();
    let rows = gun_rows(200);

    let whole = dir.path().join("whole.h5");
    write_hits_file(&whole, &rows);

    let first = dir.path().join("first.h5");
    let second = dir.path().join("second.h5");
    write_hits_file(&first, &rows[..130]);
    write_hits_file(&second, &rows[130..]);

    let mut diag = Diagnostics::new();

    let mut one_file = GunEstimator::new(0, 0);
    one_file.collect(&read_hit_columns(&whole).unwrap());
    let single = one_file.finish(&mut diag).unwrap();

    let mut two_files = GunEstimator::new(0, 0);
    for path in [&first, &second] {
        two_files.collect(&read_hit_columns(path).unwrap());
    }
    let split = two_files.finish(&mut diag).unwrap();

    assert_eq!(single, split);
    assert_relative_eq!(single.dt_min_ps, 1000.0);
}

#[test]
fn muon_run_over_empty_files_degrades_to_zero() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("empty.h5");
    write_hits_file(&path, &[]);

    let mut estimator = MuonEstimator::new();
    estimator.collect(&read_hit_columns(&path).unwrap());

    let mut diag = Diagnostics::new();
    let summary = estimator.finish(&Default::default(), None, 1.33, &mut diag);
    assert_eq!(summary.sigma_t_ps, 0.0);
    assert_eq!(summary.n_pmts, 0);
    assert!(!summary.tof_correction_applied);
}

#[test]
fn result_artifact_round_trips_with_calibration_echo() {
    let dir = TempDir::new().unwrap();

    let config_path = dir.path().join("pmt.yaml");
    let mut config = std::fs::File::create(&config_path).unwrap();
    writeln!(config, "tts_sigma_ps: 1350.0").unwrap();
    writeln!(config, "elec_jitter_ps: 180.0").unwrap();
    drop(config);

    let hits_path = dir.path().join("run.h5");
    write_hits_file(&hits_path, &gun_rows(150));

    let mut estimator = GunEstimator::new(0, 0);
    estimator.collect(&read_hit_columns(&hits_path).unwrap());
    let mut diag = Diagnostics::new();
    let summary = estimator.finish(&mut diag).unwrap();

    let calibration = load_calibration(&config_path).unwrap();
    let result = TimingResult::gun(&summary, calibration.echo());
    assert_eq!(result.tts_sigma_ps, Some(1350.0));
    assert_eq!(result.elec_jitter_ps, Some(180.0));

    let out = dir.path().join("out").join("qc").join("timing_sigma.json");
    write_result(&out, &result).unwrap();
    assert_eq!(read_result(&out).unwrap(), result);
}

#[test]
fn muon_earliest_times_merge_across_files() {
    let dir = TempDir::new().unwrap();

    let a = dir.path().join("a.h5");
    let b = dir.path().join("b.h5");
    write_hits_file(&a, &[(14.0, 1, 0), (22.0, 2, 0)]);
    write_hits_file(&b, &[(11.0, 1, 1), (25.0, 2, 1)]);

    let mut estimator = MuonEstimator::new();
    for path in [&a, &b] {
        estimator.collect(&read_hit_columns(path).unwrap());
    }

    let mut diag = Diagnostics::new();
    let summary = estimator.finish(&Default::default(), None, 1.33, &mut diag);
    // earliest = {1: 11.0, 2: 22.0}; population sigma = 5.5 ns.
    assert_eq!(summary.n_pmts, 2);
    assert_relative_eq!(summary.sigma_t_ps, 5500.0);
}
