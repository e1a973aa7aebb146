// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Shared metadata types for mass spectrometry raw data files.
//!
//! This module provides the unified classification enum produced by
//! format detection, plus a small file-info record consumed by the CLI.

use serde::{Deserialize, Serialize};

/// Detected raw data file format.
///
/// Closed set of formats recognized by the detection system. A file that
/// matches no rule is classified as [`RawFileFormat::Unsupported`] rather
/// than left unclassified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RawFileFormat {
    /// Thermo Fisher RAW file (Finnigan binary signature)
    ThermoRaw,
    /// netCDF file (ANDI-MS)
    NetCdf,
    /// PSI mzML file
    MzMl,
    /// PSI mzData file
    MzData,
    /// mzXML file
    MzXml,
    /// Waters RAW directory (contains `_FUNCnnn.DAT` function files)
    WatersRaw,
    /// Agilent chromatogram CSV export
    AgilentCsv,
    /// No recognized format
    Unsupported,
}

impl RawFileFormat {
    /// Short lowercase identifier, as printed by the CLI.
    pub fn as_str(&self) -> &'static str {
        match self {
            RawFileFormat::ThermoRaw => "thermo-raw",
            RawFileFormat::NetCdf => "netcdf",
            RawFileFormat::MzMl => "mzml",
            RawFileFormat::MzData => "mzdata",
            RawFileFormat::MzXml => "mzxml",
            RawFileFormat::WatersRaw => "waters-raw",
            RawFileFormat::AgilentCsv => "agilent-csv",
            RawFileFormat::Unsupported => "unsupported",
        }
    }

    /// Check if this is a recognized format.
    pub fn is_supported(&self) -> bool {
        !matches!(self, RawFileFormat::Unsupported)
    }
}

impl std::fmt::Display for RawFileFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RawFileFormat::ThermoRaw => write!(f, "Thermo RAW"),
            RawFileFormat::NetCdf => write!(f, "netCDF"),
            RawFileFormat::MzMl => write!(f, "mzML"),
            RawFileFormat::MzData => write!(f, "mzData"),
            RawFileFormat::MzXml => write!(f, "mzXML"),
            RawFileFormat::WatersRaw => write!(f, "Waters RAW"),
            RawFileFormat::AgilentCsv => write!(f, "Agilent CSV"),
            RawFileFormat::Unsupported => write!(f, "Unsupported"),
        }
    }
}

/// Error returned when parsing a `RawFileFormat` from string fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseFormatError {
    _private: (),
}

impl std::fmt::Display for ParseFormatError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "invalid format name, expected one of 'thermo-raw', 'netcdf', 'mzml', \
             'mzdata', 'mzxml', 'waters-raw', 'agilent-csv', or 'unsupported'"
        )
    }
}

impl std::error::Error for ParseFormatError {}

impl std::str::FromStr for RawFileFormat {
    type Err = ParseFormatError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "thermo-raw" => Ok(RawFileFormat::ThermoRaw),
            "netcdf" => Ok(RawFileFormat::NetCdf),
            "mzml" => Ok(RawFileFormat::MzMl),
            "mzdata" => Ok(RawFileFormat::MzData),
            "mzxml" => Ok(RawFileFormat::MzXml),
            "waters-raw" => Ok(RawFileFormat::WatersRaw),
            "agilent-csv" => Ok(RawFileFormat::AgilentCsv),
            "unsupported" => Ok(RawFileFormat::Unsupported),
            _ => Err(ParseFormatError { _private: () }),
        }
    }
}

/// Information about a raw data file.
///
/// Holds what detection alone can establish: the path, the detected
/// format, and the on-disk size.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawFileInfo {
    /// File or directory path
    pub path: String,
    /// Detected format
    pub format: RawFileFormat,
    /// Size in bytes (sum of immediate children for a directory)
    pub size: u64,
}

impl RawFileInfo {
    /// Create a new RawFileInfo.
    pub fn new(path: impl Into<String>, format: RawFileFormat) -> Self {
        Self {
            path: path.into(),
            format,
            size: 0,
        }
    }

    /// Set the size.
    pub fn with_size(mut self, size: u64) -> Self {
        self.size = size;
        self
    }
}
