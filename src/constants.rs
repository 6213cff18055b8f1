//! Numeric constants for Lanczos filter design
//!
//! Frequencies throughout the crate are in cycles per sample.

/// Nyquist frequency in cycles per sample.
pub const NYQUIST_FREQ: f64 = 0.5;

/// Empirical band separation factor for band-pass designs.
/// A band of width `fc2 - fc1` needs `n_2 >= floor(1.3 / (fc2 - fc1))`.
pub const BAND_SEPARATION_FACTOR: f64 = 1.3;
