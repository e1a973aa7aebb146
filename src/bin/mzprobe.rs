// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! # Mzprobe CLI
//!
//! Command-line tool for mass spectrometry raw data file detection.
//!
//! ## Usage
//!
//! ```sh
//! # Detect the format of one or more paths
//! mzprobe detect run1.mzML run2.raw waters.raw/
//!
//! # Same, as JSON lines
//! mzprobe detect --json run1.mzML
//!
//! # Show file information
//! mzprobe inspect info run1.mzML
//! ```

mod cmd;
mod common;

use std::process;

use clap::{Parser, Subcommand};
use cmd::{DetectCmd, InspectCmd};
use common::Result;

/// Mzprobe - Mass spectrometry raw data toolkit
///
/// Classify raw data files into vendor and open formats by inspecting
/// directory layout, extension, and magic signatures.
#[derive(Parser, Clone)]
#[command(name = "mzprobe")]
#[command(about = "Format detection for mass spectrometry raw data files", long_about = None)]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(author = "Strata Contributors")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Available commands
#[derive(Subcommand, Clone)]
enum Commands {
    /// Detect the format of raw data files or directories
    Detect(DetectCmd),

    /// Inspect file contents (info)
    #[command(subcommand)]
    Inspect(InspectCmd),
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Detect(cmd) => cmd.run(),
        Commands::Inspect(cmd) => cmd.run(),
    }
}

fn main() {
    let result = run();

    if let Err(e) = result {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}
