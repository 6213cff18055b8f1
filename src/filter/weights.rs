use crate::constants::BAND_SEPARATION_FACTOR;
use crate::error::{LanczosError, Result};
use crate::filter::sinc;

/// Symmetric lag vector `[-n_2, ..., n_2]` and its Lanczos window `sinc(k / n_2)`
fn lags_and_window(n: usize) -> (Vec<f64>, Vec<f64>) {
    let n_2 = (n - 1) / 2;
    let k: Vec<f64> = (0..n).map(|i| i as f64 - n_2 as f64).collect();
    let scaled: Vec<f64> = k.iter().map(|&lag| lag / n_2 as f64).collect();
    let sigma = sinc(&scaled);
    (k, sigma)
}

/// `sinc(2·fc·k)` over the lag vector
fn ideal_kernel(fc: f64, k: &[f64]) -> Vec<f64> {
    let x: Vec<f64> = k.iter().map(|&lag| 2.0 * fc * lag).collect();
    sinc(&x)
}

fn check_odd(n: usize) -> Result<()> {
    if n.is_multiple_of(2) {
        return Err(LanczosError::InvalidArgument(format!(
            "weights number must be odd, got {}",
            n
        )));
    }
    Ok(())
}

/// Smallest half-width `n_2` accepted for a band-pass design, `floor(1.3 / (fc2 - fc1))`
///
/// Kept as `f64` so degenerate bands (`fc1 == fc2`) compare as infinite.
fn required_half_width(fc1: f64, fc2: f64) -> f64 {
    (BAND_SEPARATION_FACTOR / (fc2 - fc1)).trunc()
}

/// Smallest odd weight count `weight_f_bp` accepts for the band `[fc1, fc2]`
///
/// Equal to `2·floor(1.3 / (fc2 - fc1)) + 1`. Saturates at `usize::MAX` for
/// an empty band.
pub fn minimum_bandpass_taps(fc1: f64, fc2: f64) -> usize {
    let required = required_half_width(fc1, fc2).max(0.0);
    (2.0 * required + 1.0) as usize
}

/// Lanczos low-pass weights
///
/// # Arguments
/// * `fc` - Cut-off frequency in cycles per sample, `0 < fc <= 0.5`
/// * `n` - Number of weights (must be odd)
///
/// # Errors
/// Returns `LanczosError::InvalidArgument` if `n` is even
pub fn weight_f(fc: f64, n: usize) -> Result<Vec<f64>> {
    check_odd(n)?;

    let (k, sigma) = lags_and_window(n);
    let kernel = ideal_kernel(fc, &k);

    log::debug!("Lanczos low-pass weights: fc={}, n={}", fc, n);

    Ok(kernel
        .iter()
        .zip(&sigma)
        .map(|(&s, &window)| 2.0 * fc * s * window)
        .collect())
}

/// Lanczos band-pass weights, the difference of low-pass kernels at `fc2` and `fc1`
///
/// # Arguments
/// * `fc1` - Cut-in frequency in cycles per sample
/// * `fc2` - Cut-off frequency in cycles per sample, `fc1 < fc2 <= 0.5`
/// * `n` - Number of weights (must be odd)
///
/// # Errors
/// Returns `LanczosError::InvalidArgument` if `n` is even, then
/// `LanczosError::InsufficientOrder` if `(n - 1) / 2 < floor(1.3 / (fc2 - fc1))`
pub fn weight_f_bp(fc1: f64, fc2: f64, n: usize) -> Result<Vec<f64>> {
    check_odd(n)?;

    let n_2 = (n - 1) / 2;
    if (n_2 as f64) < required_half_width(fc1, fc2) {
        return Err(LanczosError::InsufficientOrder {
            num_taps: n,
            minimum: minimum_bandpass_taps(fc1, fc2),
        });
    }

    let (k, sigma) = lags_and_window(n);
    let upper = ideal_kernel(fc2, &k);
    let lower = ideal_kernel(fc1, &k);

    log::debug!(
        "Lanczos band-pass weights: fc1={}, fc2={}, n={}",
        fc1,
        fc2,
        n
    );

    Ok(upper
        .iter()
        .zip(&lower)
        .zip(&sigma)
        .map(|((&hi, &lo), &window)| 2.0 * (fc2 * hi - fc1 * lo) * window)
        .collect())
}
