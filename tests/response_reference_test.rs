use approx::assert_abs_diff_eq;
use num_complex::Complex64;

use lanczos::filter::{FilterKind, LanczosFilter, frequency_grid, ideal_response};
use lanczos::{LanczosError, bp_filter, high_filter, low_filter, res_f, weight_f, weight_f_bp};

const TOLERANCE: f64 = 1e-6;

fn assert_complex_close(got: Complex64, want: Complex64) {
    assert_abs_diff_eq!(got.re, want.re, epsilon = TOLERANCE);
    assert_abs_diff_eq!(got.im, want.im, epsilon = TOLERANCE);
}

#[test]
fn test_bandpass_reference_response() {
    let r = bp_filter(&[0.0, 0.25, 0.5], 0.2, 0.3, 43).expect("n=43 satisfies the order rule");

    let expected = [
        Complex64::new(0.00040726554791148666, 0.0),
        Complex64::new(1.0043355688381166, 0.0),
        Complex64::new(0.0004072655479119957, 0.0),
    ];
    for (got, want) in r.iter().zip(expected) {
        assert_complex_close(*got, want);
    }

    // Stop bands near 0, pass band near 1
    assert!(r[0].norm() < 0.01);
    assert!((r[1].norm() - 1.0).abs() < 0.01);
    assert!(r[2].norm() < 0.01);
}

#[test]
fn test_lowpass_reference_response() {
    let f = [0.0, 0.1, 0.25, 0.3, 0.4, 0.5];
    let r = low_filter(&f, 0.3, 43).unwrap();

    let expected = [
        0.9994658963390066,
        0.9994073043184559,
        1.0021677844190586,
        0.5001220110770916,
        0.0008912094286069759,
        0.0009413692089051899,
    ];
    for (got, want) in r.iter().zip(expected) {
        assert_complex_close(*got, Complex64::new(want, 0.0));
    }
}

#[test]
fn test_highpass_is_complement_of_lowpass() {
    let f = frequency_grid(730);
    let low = low_filter(&f, 0.2, 43).unwrap();
    let high = high_filter(&f, 0.2, 43).unwrap();

    for (l, h) in low.iter().zip(&high) {
        assert_complex_close(*h, Complex64::new(1.0, 0.0) - l);
    }

    // Cut-in sits at the half-power crossover of the complementary pair
    let at_cut = high_filter(&[0.2], 0.2, 43).unwrap()[0];
    assert_abs_diff_eq!(at_cut.re, 0.5, epsilon = 0.01);
}

#[test]
fn test_zero_frequency_response_is_weight_sum() {
    for n in [11, 21, 43, 101] {
        let w = weight_f(0.15, n).unwrap();
        let dc = res_f(&w, &[0.0])[0];
        assert_abs_diff_eq!(dc.re, w.iter().sum::<f64>(), epsilon = 1e-12);
    }

    let w = weight_f(0.2, 43).unwrap();
    assert_abs_diff_eq!(w.iter().sum::<f64>(), 0.9990586307910951, epsilon = TOLERANCE);
}

#[test]
fn test_weights_symmetric_with_center_gain() {
    for n in (3..=99).step_by(2) {
        for fc in [0.05, 0.125, 0.3, 0.5] {
            let w = weight_f(fc, n).unwrap();
            assert_eq!(w.len(), n);
            assert_eq!(w[(n - 1) / 2], 2.0 * fc);
            for i in 0..n {
                assert_abs_diff_eq!(w[i], w[n - 1 - i], epsilon = 1e-14);
            }
        }
    }
}

#[test]
fn test_response_is_real_for_symmetric_weights() {
    let f = frequency_grid(97);
    for r in bp_filter(&f, 0.1, 0.35, 31).unwrap() {
        assert_abs_diff_eq!(r.im, 0.0, epsilon = 1e-12);
    }
}

#[test]
fn test_response_mirrors_about_nyquist() {
    // Real, even kernels give R(f) == R(1 - f)
    let w = weight_f_bp(0.2, 0.3, 43).unwrap();
    let f = frequency_grid(730);
    let r = res_f(&w, &f);
    for j in 1..365 {
        assert_complex_close(r[j], r[730 - j]);
    }
}

#[test]
fn test_bandpass_tracks_ideal_response() {
    let filter = LanczosFilter::bandpass(0.2, 0.3, 101).unwrap();
    let f: Vec<f64> = frequency_grid(200).into_iter().filter(|&v| v <= 0.5).collect();

    let actual = filter.response(&f);
    let ideal = filter.ideal_response(&f);

    // Away from the transition bands the Lanczos response sits on the ideal one
    for ((&freq, r), want) in f.iter().zip(&actual).zip(&ideal) {
        if (freq - 0.2).abs() > 0.05 && (freq - 0.3).abs() > 0.05 {
            assert!(
                (r.re - want).abs() < 0.02,
                "f={} response={} ideal={}",
                freq,
                r.re,
                want
            );
        }
    }
}

#[test]
fn test_ideal_response_matches_filter_kind() {
    let f = [0.1, 0.25, 0.4];
    assert_eq!(
        ideal_response(FilterKind::BandPass { cutin: 0.2, cutoff: 0.3 }, &f),
        vec![0.0, 1.0, 0.0]
    );
    assert_eq!(
        LanczosFilter::lowpass(0.3, 43).unwrap().ideal_response(&f),
        vec![1.0, 1.0, 0.0]
    );
    assert_eq!(
        LanczosFilter::highpass(0.3, 43).unwrap().ideal_response(&f),
        vec![0.0, 0.0, 1.0]
    );
}

#[test]
fn test_errors_propagate_unchanged() {
    let f = [0.0];

    assert!(matches!(
        weight_f(0.2, 10),
        Err(LanczosError::InvalidArgument(_))
    ));
    assert!(matches!(
        bp_filter(&f, 0.2, 0.3, 9),
        Err(LanczosError::InsufficientOrder {
            num_taps: 9,
            minimum: 27
        })
    ));
    assert_eq!(weight_f_bp(0.2, 0.3, 43).unwrap().len(), 43);
    assert_eq!(
        high_filter(&f, 0.2, 4).unwrap_err(),
        weight_f(0.2, 4).unwrap_err()
    );
}

#[test]
fn test_repeated_evaluation_is_deterministic() {
    let f = frequency_grid(730);
    let first = bp_filter(&f, 0.2, 0.3, 43).unwrap();
    for _ in 0..3 {
        assert_eq!(bp_filter(&f, 0.2, 0.3, 43).unwrap(), first);
    }
}
