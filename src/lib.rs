// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! # mzprobe
//!
//! Mass spectrometry raw data toolkit: file format detection and
//! spectrum buffer types.
//!
//! Instrument vendors and the open PSI standards store raw data in
//! formats that can be told apart from their filesystem shape and the
//! first kilobyte of content. This library classifies a path into one
//! of those formats, so importers can pick the right parser, without
//! decoding anything.
//!
//! ## Architecture
//!
//! - `io/detection` - Format detection over magic signatures and
//!   directory layout
//! - `io/metadata` - The [`RawFileFormat`] classification and file info
//! - `algorithm` - Progress-reporting protocol for toolkit composition
//! - `types` - In-memory spectrum data point buffers
//!
//! ## Example: Detecting a File Format
//!
//! ```rust,no_run
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use mzprobe::{detect_raw_format, RawFileFormat};
//!
//! let format = detect_raw_format("sample.mzML")?;
//! if format.is_supported() {
//!     println!("Detected: {format}");
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Example: Driving Detection as a Task
//!
//! ```rust,no_run
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use mzprobe::algorithm::{Algorithm, FormatDetection};
//!
//! let mut task = FormatDetection::new("acquisition.raw");
//! task.execute()?;
//! println!("Done: {:?}", task.result());
//! # Ok(())
//! # }
//! ```

// Core types
pub mod core;

// Re-export core types for convenience
pub use crate::core::{ProbeError, Result};

// Progress-reporting algorithm protocol
pub mod algorithm;

pub use algorithm::{Algorithm, FormatDetection};

// Spectrum buffer types
pub mod types;

pub use types::SpectrumDataPoints;

// I/O types (detection, metadata)
pub mod io;

// Re-export key I/O types
pub use io::detection::{
    detect_raw_format, is_thermo_raw_file, is_waters_raw_dir, DefaultFormatDetector,
    FormatDetector,
};
pub use io::metadata::{RawFileFormat, RawFileInfo};
