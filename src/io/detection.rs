// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Format detection using magic numbers and filesystem shape.
//!
//! This module identifies mass spectrometry raw data files without
//! parsing them. Detection uses three cheap checks, in order: directory
//! layout (Waters stores a run as a directory of function files), file
//! extension (Agilent CSV), and magic signatures in the first kilobyte
//! of the file.
//!
//! # Supported Formats
//!
//! - **Thermo RAW**: binary Finnigan signature at offset 0
//! - **netCDF**: ASCII `CDF` prefix
//! - **mzML / mzData / mzXML**: XML root tag within the first 1024 bytes
//! - **Waters RAW**: directory containing `_FUNCnnn.DAT` files
//! - **Agilent CSV**: `.csv` extension
//!
//! # Example
//!
//! ```rust,no_run
//! use mzprobe::io::detection::detect_raw_format;
//! use mzprobe::io::metadata::RawFileFormat;
//!
//! let format = detect_raw_format("sample.mzML")?;
//! assert_eq!(format, RawFileFormat::MzMl);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use std::fs::{self, File};
use std::io::Read;
use std::path::Path;
use std::sync::OnceLock;

use regex::Regex;
use tracing::debug;

use crate::core::{ProbeError, Result};

use super::metadata::RawFileFormat;

/// Number of bytes inspected at the start of a file.
pub const HEADER_LEN: usize = 1024;

/// Thermo RAW signature: 0x01 0xA1 followed by "Finnigan" with a NUL
/// byte after each character. Matched byte-for-byte at offset 0.
const THERMO_HEADER: [u8; 18] = [
    0x01, 0xA1, b'F', 0x00, b'i', 0x00, b'n', 0x00, b'n', 0x00, b'i', 0x00, b'g', 0x00, b'a',
    0x00, b'n', 0x00,
];

/// netCDF files start with the ASCII string "CDF".
const CDF_HEADER: &[u8] = b"CDF";

/// mzML root tag. Indexed files wrap it in `<indexedmzML>`, so this is
/// searched anywhere in the header window rather than at offset 0.
const MZML_HEADER: &[u8] = b"<mzML";

/// mzData root tag.
const MZDATA_HEADER: &[u8] = b"<mzData";

/// mzXML files carry a `<msRun>` tag, optionally wrapped in `<mzXML>`.
const MZXML_HEADER: &[u8] = b"<msRun";

/// Waters RAW directories hold one `_FUNCnnn.DAT` file per acquisition
/// function, with a three-digit function number. Case-sensitive.
const WATERS_FUNC_PATTERN: &str = r"^_FUNC[0-9]{3}\.DAT$";

fn waters_func_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(WATERS_FUNC_PATTERN).expect("valid pattern"))
}

/// Detect the format of a raw data file or directory.
///
/// Checks are applied in a fixed precedence order:
///
/// 1. A directory is classified as Waters RAW if any immediate child is
///    a `_FUNCnnn.DAT` file, and Unsupported otherwise. Directories are
///    never inspected further.
/// 2. A file whose name ends in `.csv` (case-insensitive) is classified
///    as Agilent CSV without reading its content.
/// 3. Otherwise the first 1024 bytes are read and matched against the
///    known signatures, prefix signatures before substring tags.
///
/// # Arguments
///
/// * `path` - Path to the file or directory to analyze
///
/// # Returns
///
/// The detected format, or `RawFileFormat::Unsupported` if no rule
/// matches. I/O failures while opening, listing, or reading the path
/// are returned as [`ProbeError::Io`].
///
/// # Example
///
/// ```rust,no_run
/// use mzprobe::io::detection::detect_raw_format;
/// use mzprobe::io::metadata::RawFileFormat;
///
/// let format = detect_raw_format("acquisition.raw")?;
/// match format {
///     RawFileFormat::ThermoRaw => println!("Thermo RAW file detected"),
///     RawFileFormat::WatersRaw => println!("Waters RAW directory detected"),
///     _ => println!("Something else"),
/// }
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn detect_raw_format<P: AsRef<Path>>(path: P) -> Result<RawFileFormat> {
    let path = path.as_ref();

    if path.is_dir() {
        let format = if scan_waters_dir(path)? {
            RawFileFormat::WatersRaw
        } else {
            // No other directory-shaped format is recognized
            RawFileFormat::Unsupported
        };
        debug!(path = %path.display(), format = format.as_str(), "detected directory format");
        return Ok(format);
    }

    // Extension shortcut: Agilent CSV is classified by name alone,
    // whatever the file content.
    if has_csv_extension(path) {
        debug!(path = %path.display(), "detected Agilent CSV by extension");
        return Ok(RawFileFormat::AgilentCsv);
    }

    let mut header = [0u8; HEADER_LEN];
    let n = read_header(path, &mut header)?;
    let format = match_header(&header[..n]);
    debug!(path = %path.display(), format = format.as_str(), header_len = n, "detected file format");
    Ok(format)
}

/// Scan the immediate children of a directory for Waters function files.
///
/// Non-recursive: only direct children are considered, and only regular
/// files count.
fn scan_waters_dir(path: &Path) -> Result<bool> {
    let entries =
        fs::read_dir(path).map_err(|e| ProbeError::io(path.display().to_string(), e))?;

    for entry in entries {
        let entry = entry.map_err(|e| ProbeError::io(path.display().to_string(), e))?;
        let file_type = entry
            .file_type()
            .map_err(|e| ProbeError::io(entry.path().display().to_string(), e))?;
        if !file_type.is_file() {
            continue;
        }
        if let Some(name) = entry.file_name().to_str() {
            if waters_func_regex().is_match(name) {
                return Ok(true);
            }
        }
    }

    Ok(false)
}

/// Check if the filename ends with `.csv`, case-insensitively.
fn has_csv_extension(path: &Path) -> bool {
    path.file_name()
        .and_then(|n| n.to_str())
        .map(|n| n.to_lowercase().ends_with(".csv"))
        .unwrap_or(false)
}

/// Read up to [`HEADER_LEN`] bytes from the start of a file.
///
/// Returns the number of bytes actually read, which is smaller than the
/// buffer for short files.
fn read_header(path: &Path, buf: &mut [u8]) -> Result<usize> {
    let mut file = File::open(path).map_err(|e| ProbeError::io(path.display().to_string(), e))?;

    let mut filled = 0;
    while filled < buf.len() {
        let n = file
            .read(&mut buf[filled..])
            .map_err(|e| ProbeError::io(path.display().to_string(), e))?;
        if n == 0 {
            break;
        }
        filled += n;
    }

    Ok(filled)
}

/// Match the header window against the known signatures, first match wins.
///
/// The prefix signatures (Thermo, CDF) always sit at offset 0, so they
/// are tested before the substring tags. The three XML root tags are
/// mutually exclusive; their relative order only needs to be stable.
fn match_header(header: &[u8]) -> RawFileFormat {
    if header.starts_with(&THERMO_HEADER) {
        return RawFileFormat::ThermoRaw;
    }

    if header.starts_with(CDF_HEADER) {
        return RawFileFormat::NetCdf;
    }

    if contains(header, MZML_HEADER) {
        return RawFileFormat::MzMl;
    }

    if contains(header, MZDATA_HEADER) {
        return RawFileFormat::MzData;
    }

    if contains(header, MZXML_HEADER) {
        return RawFileFormat::MzXml;
    }

    RawFileFormat::Unsupported
}

/// Byte-wise substring search over the header window.
///
/// The signatures are single-byte characters, so searching raw bytes is
/// equivalent to the permissive Latin-1 text search and never fails on
/// binary content.
fn contains(haystack: &[u8], needle: &[u8]) -> bool {
    haystack.windows(needle.len()).any(|w| w == needle)
}

/// Format detector seam for callers that inject detection logic.
pub trait FormatDetector: Send + Sync {
    /// Detect the format of a file or directory.
    fn detect(&self, path: &Path) -> Result<RawFileFormat>;
}

/// Default format detector implementation.
#[derive(Debug, Clone, Copy)]
pub struct DefaultFormatDetector;

impl FormatDetector for DefaultFormatDetector {
    fn detect(&self, path: &Path) -> Result<RawFileFormat> {
        detect_raw_format(path)
    }
}

/// Check if a directory is a Waters RAW acquisition directory.
///
/// This is a convenience function that only checks for Waters format.
pub fn is_waters_raw_dir<P: AsRef<Path>>(path: P) -> bool {
    matches!(detect_raw_format(path), Ok(RawFileFormat::WatersRaw))
}

/// Check if a file is a Thermo RAW file.
///
/// This is a convenience function that only checks for Thermo format.
pub fn is_thermo_raw_file<P: AsRef<Path>>(path: P) -> bool {
    matches!(detect_raw_format(path), Ok(RawFileFormat::ThermoRaw))
}
