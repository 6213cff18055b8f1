use num_complex::Complex64;
use std::f64::consts::PI;

use crate::error::Result;
use crate::filter::{weight_f, weight_f_bp};

/// Frequency response `R(f)` of a weight vector
///
/// Direct discrete-time Fourier sum `r_j = Σ w_i · exp(i·2π·f_j·k_i)` with
/// `k_i = i - n_2`, evaluated independently at every requested frequency.
/// Frequencies outside `[-0.5, 0.5]` alias periodically.
pub fn res_f(w: &[f64], f: &[f64]) -> Vec<Complex64> {
    let n_2 = w.len().saturating_sub(1) / 2;

    log::trace!(
        "Evaluating response of {} weights at {} frequencies",
        w.len(),
        f.len()
    );

    f.iter()
        .map(|&freq| {
            w.iter()
                .enumerate()
                .map(|(i, &weight)| {
                    let lag = i as f64 - n_2 as f64;
                    (Complex64::i() * 2.0 * PI * freq * lag).exp() * weight
                })
                .sum::<Complex64>()
        })
        .collect()
}

/// Lanczos low-pass response at frequencies `f` for cut-off `fc2`
pub fn low_filter(f: &[f64], fc2: f64, n: usize) -> Result<Vec<Complex64>> {
    let w = weight_f(fc2, n)?;
    Ok(res_f(&w, f))
}

/// Lanczos high-pass response, the complement `1 - R_low(f)` at cut-in `fc1`
pub fn high_filter(f: &[f64], fc1: f64, n: usize) -> Result<Vec<Complex64>> {
    let w = weight_f(fc1, n)?;
    Ok(complement(res_f(&w, f)))
}

/// Lanczos band-pass response at frequencies `f` for the band `[fc1, fc2]`
pub fn bp_filter(f: &[f64], fc1: f64, fc2: f64, n: usize) -> Result<Vec<Complex64>> {
    let w = weight_f_bp(fc1, fc2, n)?;
    Ok(res_f(&w, f))
}

pub(crate) fn complement(r: Vec<Complex64>) -> Vec<Complex64> {
    r.into_iter().map(|v| Complex64::new(1.0, 0.0) - v).collect()
}
