// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! I/O layer for mass spectrometry raw data files.
//!
//! This module provides format detection and the metadata types that
//! describe a detected file.

pub mod detection;
pub mod metadata;

// Re-exports
pub use detection::{
    detect_raw_format, is_thermo_raw_file, is_waters_raw_dir, DefaultFormatDetector,
    FormatDetector,
};
pub use metadata::{RawFileFormat, RawFileInfo};
