use std::f64::consts::PI;

/// Normalized sinc, `sin(πx) / (πx)`, over a sample sequence
///
/// Only the structural center `(len - 1) / 2` is special-cased: when that
/// element is exactly zero its result is `1.0`. Callers pass symmetric lag
/// sequences, so the zero always sits there. A zero anywhere else evaluates
/// to `0/0` and comes back as `NaN`.
pub fn sinc(x: &[f64]) -> Vec<f64> {
    let mut out: Vec<f64> = x
        .iter()
        .map(|&v| {
            let arg = PI * v;
            arg.sin() / arg
        })
        .collect();

    if let Some(center) = x.len().checked_sub(1).map(|last| last / 2)
        && x[center] == 0.0
    {
        out[center] = 1.0;
    }

    out
}
