// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Detect command - classify raw data files.

use std::path::PathBuf;

use clap::Args;
use serde_json::json;

use crate::common::Result;
use mzprobe::detect_raw_format;

/// Detect the format of raw data files or directories.
#[derive(Args, Clone, Debug)]
pub struct DetectCmd {
    /// Input files or directories
    #[arg(value_name = "PATH", required = true)]
    inputs: Vec<PathBuf>,

    /// Emit one JSON object per line instead of plain text
    #[arg(long)]
    json: bool,
}

impl DetectCmd {
    pub fn run(self) -> Result<()> {
        for input in &self.inputs {
            let format = detect_raw_format(input)?;

            if self.json {
                let line = json!({
                    "path": input.display().to_string(),
                    "format": format.as_str(),
                    "supported": format.is_supported(),
                });
                println!("{line}");
            } else {
                println!("{}: {}", input.display(), format);
            }
        }

        Ok(())
    }
}
