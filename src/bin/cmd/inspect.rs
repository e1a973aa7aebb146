// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Inspect command - show file information.

use std::path::{Path, PathBuf};

use clap::Subcommand;

use crate::common::{format_size, Result};
use mzprobe::{detect_raw_format, RawFileInfo};

/// Inspect file contents.
#[derive(Subcommand, Clone, Debug)]
pub enum InspectCmd {
    /// Show basic file information
    Info {
        /// Input file or directory
        #[arg(value_name = "PATH")]
        input: PathBuf,

        /// Emit JSON instead of plain text
        #[arg(long)]
        json: bool,
    },
}

impl InspectCmd {
    pub fn run(self) -> Result<()> {
        match self {
            InspectCmd::Info { input, json } => cmd_info(input, json),
        }
    }
}

/// Cmd: Show file info
fn cmd_info(input: PathBuf, json: bool) -> Result<()> {
    let format = detect_raw_format(&input)?;
    let size = path_size(&input)?;
    let info = RawFileInfo::new(input.display().to_string(), format).with_size(size);

    if json {
        println!("{}", serde_json::to_string_pretty(&info)?);
        return Ok(());
    }

    println!("=== {} ===", info.path);
    println!("Format: {}", format);
    println!("Size: {}", format_size(info.size));

    Ok(())
}

/// Size of a file, or the summed size of a directory's immediate children.
fn path_size(path: &Path) -> Result<u64> {
    let meta = std::fs::metadata(path)?;
    if !meta.is_dir() {
        return Ok(meta.len());
    }

    let mut total = 0u64;
    for entry in std::fs::read_dir(path)? {
        let entry = entry?;
        let meta = entry.metadata()?;
        if meta.is_file() {
            total += meta.len();
        }
    }
    Ok(total)
}
