// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Core types used throughout mzprobe.
//!
//! This module provides the foundational types for the library:
//! - [`ProbeError`] - Error handling for I/O and buffer operations
//! - [`Result`] - Crate-wide result alias

pub mod error;

pub use error::{ProbeError, Result};
