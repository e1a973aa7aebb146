// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Tests for the progress-reporting algorithm protocol.
//!
//! Run with: cargo test --test algorithm_tests

mod common;

use common::{create_dir, create_file, create_file_in, temp_path, THERMO_SIGNATURE};

use mzprobe::{Algorithm, FormatDetection, RawFileFormat};

#[test]
fn fraction_starts_at_zero_and_reaches_one() {
    let path = create_file("algo_thermo.raw", THERMO_SIGNATURE);

    let mut task = FormatDetection::new(&path);
    assert_eq!(task.finished_fraction(), 0.0);
    assert!(task.result().is_none());

    task.execute().unwrap();
    assert_eq!(task.finished_fraction(), 1.0);
    assert_eq!(task.result(), Some(&RawFileFormat::ThermoRaw));

    let _ = std::fs::remove_file(&path);
}

#[test]
fn result_available_only_after_execute() {
    let dir = create_dir("algo_waters");
    create_file_in(&dir, "_FUNC042.DAT", b"");

    let mut task = FormatDetection::new(&dir);
    assert!(task.result().is_none());
    task.execute().unwrap();
    assert_eq!(task.result(), Some(&RawFileFormat::WatersRaw));

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn cancel_before_execute_has_no_effect() {
    let path = create_file("algo_cancel.cdf", b"CDF\x01");

    let mut task = FormatDetection::new(&path);
    task.cancel();
    task.execute().unwrap();
    assert_eq!(task.result(), Some(&RawFileFormat::NetCdf));

    let _ = std::fs::remove_file(&path);
}

#[test]
fn cancel_after_execute_keeps_result() {
    let path = create_file("algo_cancel_after.cdf", b"CDF\x01");

    let mut task = FormatDetection::new(&path);
    task.execute().unwrap();
    task.cancel();
    assert_eq!(task.finished_fraction(), 1.0);
    assert_eq!(task.result(), Some(&RawFileFormat::NetCdf));

    let _ = std::fs::remove_file(&path);
}

#[test]
fn execute_failure_leaves_no_result() {
    let path = temp_path("algo_missing.raw");

    let mut task = FormatDetection::new(&path);
    assert!(task.execute().is_err());
    assert!(task.result().is_none());
    assert_eq!(task.finished_fraction(), 0.0);
}

#[test]
fn task_reports_its_path() {
    let task = FormatDetection::new("/data/run1.raw");
    assert_eq!(task.path(), std::path::Path::new("/data/run1.raw"));
}
