// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Progress-reporting algorithm protocol.
//!
//! Long-running operations in the toolkit expose a uniform surface:
//! execute once, poll a completion fraction, read the result after
//! completion, and accept (possibly no-op) cancellation. The detection
//! task here completes in a single bounded read, so its fraction jumps
//! straight from 0.0 to 1.0 and cancellation has nothing to interrupt.

use std::path::{Path, PathBuf};

use crate::core::Result;
use crate::io::detection::detect_raw_format;
use crate::io::metadata::RawFileFormat;

/// A one-shot algorithm with progress reporting and cancellation hooks.
///
/// Implementations are created per request, executed exactly once, and
/// discarded after the result is read.
pub trait Algorithm {
    /// Result type produced on completion.
    type Output;

    /// Run the algorithm to completion.
    fn execute(&mut self) -> Result<()>;

    /// Fraction of work finished, monotonic in [0.0, 1.0].
    fn finished_fraction(&self) -> f64;

    /// The result, available only after [`execute`](Algorithm::execute)
    /// has returned successfully.
    fn result(&self) -> Option<&Self::Output>;

    /// Request cancellation. Fast algorithms may accept this as a no-op.
    fn cancel(&mut self);
}

/// Format detection as a progress-reporting task.
///
/// Thin stateful wrapper over [`detect_raw_format`]; the pure function
/// is the primary API, this type exists to compose with callers that
/// drive work through the [`Algorithm`] protocol.
///
/// # Example
///
/// ```rust,no_run
/// use mzprobe::algorithm::{Algorithm, FormatDetection};
/// use mzprobe::io::metadata::RawFileFormat;
///
/// let mut task = FormatDetection::new("sample.mzML");
/// assert_eq!(task.finished_fraction(), 0.0);
/// task.execute()?;
/// assert_eq!(task.finished_fraction(), 1.0);
/// assert_eq!(task.result(), Some(&RawFileFormat::MzMl));
/// # Ok::<(), mzprobe::ProbeError>(())
/// ```
#[derive(Debug, Clone)]
pub struct FormatDetection {
    path: PathBuf,
    result: Option<RawFileFormat>,
    finished: f64,
}

impl FormatDetection {
    /// Create a detection task for a path.
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self {
            path: path.into(),
            result: None,
            finished: 0.0,
        }
    }

    /// The path this task will classify.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Algorithm for FormatDetection {
    type Output = RawFileFormat;

    fn execute(&mut self) -> Result<()> {
        let format = detect_raw_format(&self.path)?;
        self.result = Some(format);
        self.finished = 1.0;
        Ok(())
    }

    fn finished_fraction(&self) -> f64 {
        self.finished
    }

    fn result(&self) -> Option<&RawFileFormat> {
        self.result.as_ref()
    }

    fn cancel(&mut self) {
        // A single bounded read finishes before any cancellation signal
        // could be observed.
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_detection_task_lifecycle() {
        let mut path = std::env::temp_dir();
        path.push(format!("mzprobe_test_algo_{}.cdf", std::process::id()));
        std::fs::File::create(&path)
            .unwrap()
            .write_all(b"CDF\x01")
            .unwrap();

        let mut task = FormatDetection::new(&path);
        assert_eq!(task.finished_fraction(), 0.0);
        assert_eq!(task.result(), None);

        task.execute().unwrap();
        assert_eq!(task.finished_fraction(), 1.0);
        assert_eq!(task.result(), Some(&RawFileFormat::NetCdf));

        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_cancel_is_noop() {
        let mut task = FormatDetection::new("/nonexistent");
        task.cancel();
        assert_eq!(task.finished_fraction(), 0.0);
        assert_eq!(task.result(), None);
    }

    #[test]
    fn test_execute_propagates_io_error() {
        let mut path = std::env::temp_dir();
        path.push(format!("mzprobe_test_algo_missing_{}", std::process::id()));

        let mut task = FormatDetection::new(&path);
        assert!(task.execute().is_err());
        assert_eq!(task.result(), None);
        assert_eq!(task.finished_fraction(), 0.0);
    }
}
