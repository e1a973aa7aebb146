// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Common utilities for integration tests.

#![allow(dead_code)]

use std::fs::File;
use std::io::Write;
use std::path::PathBuf;

/// Thermo RAW signature: 0x01 0xA1 + "Finnigan" with NUL bytes.
pub const THERMO_SIGNATURE: &[u8] = &[
    0x01, 0xA1, b'F', 0, b'i', 0, b'n', 0, b'n', 0, b'i', 0, b'g', 0, b'a', 0, b'n', 0,
];

/// Unique temp path for this test process.
pub fn temp_path(name: &str) -> PathBuf {
    let mut path = std::env::temp_dir();
    path.push(format!("mzprobe_it_{}_{}", std::process::id(), name));
    path
}

/// Create a temp file with the given content, returning its path.
pub fn create_file(name: &str, data: &[u8]) -> PathBuf {
    let path = temp_path(name);
    let mut file = File::create(&path).unwrap();
    file.write_all(data).unwrap();
    file.flush().unwrap();
    path
}

/// Create an empty temp directory, returning its path.
pub fn create_dir(name: &str) -> PathBuf {
    let path = temp_path(name);
    std::fs::create_dir_all(&path).unwrap();
    path
}

/// Create a file inside an existing directory.
pub fn create_file_in(dir: &std::path::Path, name: &str, data: &[u8]) -> PathBuf {
    let path = dir.join(name);
    let mut file = File::create(&path).unwrap();
    file.write_all(data).unwrap();
    file.flush().unwrap();
    path
}
