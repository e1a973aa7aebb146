// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Spectrum data point buffer.
//!
//! Stores the data points of one mass spectrum as two parallel buffers:
//! m/z values (`f64`) and intensities (`f32`). Allocated capacity and
//! logical size are tracked separately so a buffer can be reused across
//! spectra without reallocating.

use crate::core::{ProbeError, Result};

/// Parallel m/z and intensity buffers for one spectrum.
///
/// The logical size never exceeds the allocated capacity. After
/// [`set_len`](SpectrumDataPoints::set_len) the points within the
/// logical size are ordered by ascending m/z.
#[derive(Debug, Clone, Default)]
pub struct SpectrumDataPoints {
    /// m/z buffer, allocated to capacity
    mz: Vec<f64>,
    /// Intensity buffer, allocated to capacity
    intensity: Vec<f32>,
    /// Logical number of data points
    size: usize,
}

impl SpectrumDataPoints {
    /// Create an empty buffer with no allocated capacity.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a buffer with the given allocated capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        let mut points = Self::default();
        points.allocate(capacity);
        points
    }

    /// Grow the allocated capacity to at least `capacity` points.
    ///
    /// Existing data points and the logical size are preserved. The
    /// buffers never shrink, so the logical size stays valid.
    pub fn allocate(&mut self, capacity: usize) {
        if capacity > self.mz.len() {
            self.mz.resize(capacity, 0.0);
            self.intensity.resize(capacity, 0.0);
        }
    }

    /// Allocated capacity in data points.
    pub fn capacity(&self) -> usize {
        self.mz.len()
    }

    /// Logical number of data points.
    pub fn len(&self) -> usize {
        self.size
    }

    /// Check if the buffer holds no data points.
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Set the logical size and restore the m/z ordering invariant.
    ///
    /// Fails with [`ProbeError::InvalidSize`] if `new_len` exceeds the
    /// allocated capacity. On success the first `new_len` points are
    /// sorted by ascending m/z, intensities moving with their m/z.
    pub fn set_len(&mut self, new_len: usize) -> Result<()> {
        if new_len > self.capacity() {
            return Err(ProbeError::invalid_size(new_len, self.capacity()));
        }
        self.size = new_len;
        self.sort_by_mz();
        Ok(())
    }

    /// Drop all data points, keeping the allocation.
    pub fn clear(&mut self) {
        self.size = 0;
    }

    /// The full allocated m/z buffer.
    pub fn mz_buffer(&self) -> &[f64] {
        &self.mz
    }

    /// Mutable access to the full allocated m/z buffer.
    pub fn mz_buffer_mut(&mut self) -> &mut [f64] {
        &mut self.mz
    }

    /// The full allocated intensity buffer.
    pub fn intensity_buffer(&self) -> &[f32] {
        &self.intensity
    }

    /// Mutable access to the full allocated intensity buffer.
    pub fn intensity_buffer_mut(&mut self) -> &mut [f32] {
        &mut self.intensity
    }

    /// Sort the first `size` points by ascending m/z, co-moving the
    /// intensities.
    fn sort_by_mz(&mut self) {
        let n = self.size;
        let mut order: Vec<usize> = (0..n).collect();
        order.sort_by(|&a, &b| {
            self.mz[a]
                .partial_cmp(&self.mz[b])
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        let sorted_mz: Vec<f64> = order.iter().map(|&i| self.mz[i]).collect();
        let sorted_intensity: Vec<f32> = order.iter().map(|&i| self.intensity[i]).collect();
        self.mz[..n].copy_from_slice(&sorted_mz);
        self.intensity[..n].copy_from_slice(&sorted_intensity);
    }
}
