// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Core error types for mzprobe.
//!
//! Provides error types for raw data file operations:
//! - File and directory I/O during format detection
//! - Spectrum data point buffer sizing

use std::fmt;

/// Errors that can occur during raw data file operations.
#[derive(Debug, Clone)]
pub enum ProbeError {
    /// I/O failure while opening, listing, or reading a path
    Io {
        /// Path that was being accessed
        path: String,
        /// Underlying error message
        message: String,
    },

    /// Requested logical size exceeds the allocated buffer capacity
    InvalidSize {
        /// Requested size
        requested: usize,
        /// Allocated capacity
        capacity: usize,
    },
}

impl ProbeError {
    /// Create an I/O error with path context.
    pub fn io(path: impl Into<String>, err: std::io::Error) -> Self {
        ProbeError::Io {
            path: path.into(),
            message: err.to_string(),
        }
    }

    /// Create an invalid size error.
    pub fn invalid_size(requested: usize, capacity: usize) -> Self {
        ProbeError::InvalidSize {
            requested,
            capacity,
        }
    }

    /// Get structured fields for logging.
    pub fn log_fields(&self) -> Vec<(&'static str, String)> {
        match self {
            ProbeError::Io { path, message } => {
                vec![("path", path.clone()), ("message", message.clone())]
            }
            ProbeError::InvalidSize {
                requested,
                capacity,
            } => vec![
                ("requested", requested.to_string()),
                ("capacity", capacity.to_string()),
            ],
        }
    }
}

impl fmt::Display for ProbeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProbeError::Io { path, message } => {
                write!(f, "I/O error on '{path}': {message}")
            }
            ProbeError::InvalidSize {
                requested,
                capacity,
            } => write!(
                f,
                "Requested size {requested} exceeds allocated capacity {capacity}"
            ),
        }
    }
}

impl std::error::Error for ProbeError {}

/// Result type for mzprobe operations.
pub type Result<T> = std::result::Result<T, ProbeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err = ProbeError::io("/data/run1.raw", io_err);
        assert!(matches!(err, ProbeError::Io { .. }));
        assert_eq!(
            err.to_string(),
            "I/O error on '/data/run1.raw': file not found"
        );
    }

    #[test]
    fn test_invalid_size_error() {
        let err = ProbeError::invalid_size(1_000_000, 10);
        assert!(matches!(err, ProbeError::InvalidSize { .. }));
        assert_eq!(
            err.to_string(),
            "Requested size 1000000 exceeds allocated capacity 10"
        );
    }

    #[test]
    fn test_log_fields_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err = ProbeError::io("/data", io_err);
        let fields = err.log_fields();
        assert_eq!(fields.len(), 2);
        assert_eq!(fields[0].0, "path");
        assert_eq!(fields[0].1, "/data");
        assert_eq!(fields[1].0, "message");
        assert_eq!(fields[1].1, "denied");
    }

    #[test]
    fn test_log_fields_invalid_size() {
        let err = ProbeError::invalid_size(100, 50);
        let fields = err.log_fields();
        assert_eq!(fields.len(), 2);
        assert_eq!(fields[0].0, "requested");
        assert_eq!(fields[0].1, "100");
        assert_eq!(fields[1].0, "capacity");
        assert_eq!(fields[1].1, "50");
    }

    #[test]
    fn test_error_clone() {
        let err1 = ProbeError::invalid_size(2, 1);
        let err2 = err1.clone();
        assert_eq!(err1.to_string(), err2.to_string());
    }

    #[test]
    fn test_error_debug_format() {
        let io_err = std::io::Error::new(std::io::ErrorKind::Other, "boom");
        let err = ProbeError::io("x", io_err);
        let debug_str = format!("{:?}", err);
        assert!(debug_str.contains("Io"));
    }
}
