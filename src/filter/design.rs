use num_complex::Complex64;

use crate::constants::NYQUIST_FREQ;
use crate::error::Result;
use crate::filter::response::complement;
use crate::filter::{res_f, weight_f, weight_f_bp};

/// Shape of a Lanczos filter
///
/// Frequencies are in cycles per sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FilterKind {
    /// Passes `|f| <= cutoff`
    LowPass { cutoff: f64 },
    /// Passes `|f| >= cutin`
    HighPass { cutin: f64 },
    /// Passes `cutin <= |f| <= cutoff`
    BandPass { cutin: f64, cutoff: f64 },
}

/// A designed Lanczos filter
///
/// Holds the weight vector produced by `weight_f` or `weight_f_bp`. A
/// high-pass filter stores the low-pass weights it complements, so its
/// `response` is `1 - R_low(f)` exactly as `high_filter` computes it.
#[derive(Debug, Clone, PartialEq)]
pub struct LanczosFilter {
    kind: FilterKind,
    weights: Vec<f64>,
}

impl LanczosFilter {
    /// Design a filter of the given shape with `num_taps` weights
    ///
    /// # Errors
    /// Returns the error of the underlying weight generator
    pub fn design(kind: FilterKind, num_taps: usize) -> Result<Self> {
        let weights = match kind {
            FilterKind::LowPass { cutoff } => weight_f(cutoff, num_taps)?,
            FilterKind::HighPass { cutin } => weight_f(cutin, num_taps)?,
            FilterKind::BandPass { cutin, cutoff } => weight_f_bp(cutin, cutoff, num_taps)?,
        };
        Ok(Self { kind, weights })
    }

    pub fn lowpass(cutoff: f64, num_taps: usize) -> Result<Self> {
        Self::design(FilterKind::LowPass { cutoff }, num_taps)
    }

    pub fn highpass(cutin: f64, num_taps: usize) -> Result<Self> {
        Self::design(FilterKind::HighPass { cutin }, num_taps)
    }

    pub fn bandpass(cutin: f64, cutoff: f64, num_taps: usize) -> Result<Self> {
        Self::design(FilterKind::BandPass { cutin, cutoff }, num_taps)
    }

    pub fn kind(&self) -> FilterKind {
        self.kind
    }

    /// Get access to the weight coefficients
    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    /// Get the number of weights (filter length)
    pub fn num_taps(&self) -> usize {
        self.weights.len()
    }

    /// Get the group delay in samples (half the filter length for linear phase)
    pub fn group_delay_samples(&self) -> usize {
        (self.weights.len() - 1) / 2
    }

    /// Evaluate the frequency response at frequencies `f`
    pub fn response(&self, f: &[f64]) -> Vec<Complex64> {
        let r = res_f(&self.weights, f);
        match self.kind {
            FilterKind::HighPass { .. } => complement(r),
            _ => r,
        }
    }

    /// Evaluate the ideal rectangular response this filter approximates
    pub fn ideal_response(&self, f: &[f64]) -> Vec<f64> {
        ideal_response(self.kind, f)
    }
}

/// Ideal rectangular response: `1.0` inside the pass band, `0.0` outside
///
/// Only defined up to Nyquist; frequencies above it get `0.0`.
pub fn ideal_response(kind: FilterKind, f: &[f64]) -> Vec<f64> {
    f.iter()
        .map(|&freq| {
            let freq = freq.abs();
            let pass = match kind {
                FilterKind::LowPass { cutoff } => freq <= cutoff,
                FilterKind::HighPass { cutin } => freq >= cutin,
                FilterKind::BandPass { cutin, cutoff } => freq >= cutin && freq <= cutoff,
            };
            if pass && freq <= NYQUIST_FREQ { 1.0 } else { 0.0 }
        })
        .collect()
}

/// `m` equally spaced frequencies `j / m` covering `[0, 1)`
pub fn frequency_grid(m: usize) -> Vec<f64> {
    (0..m).map(|j| j as f64 / m as f64).collect()
}
