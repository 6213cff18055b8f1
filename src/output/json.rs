use num_complex::Complex64;
use serde::Serialize;

use super::{Formatter, ResponseSample};

pub struct JsonFormatter;

#[derive(Serialize)]
struct JsonComplex {
    re: f64,
    im: f64,
}

impl From<Complex64> for JsonComplex {
    fn from(c: Complex64) -> Self {
        Self { re: c.re, im: c.im }
    }
}

#[derive(Serialize)]
struct JsonSample {
    frequency: f64,
    ideal: f64,
    bandpass: JsonComplex,
    lowpass: JsonComplex,
    highpass: JsonComplex,
}

impl Formatter for JsonFormatter {
    fn format(&self, sample: &ResponseSample) -> String {
        let record = JsonSample {
            frequency: sample.frequency,
            ideal: sample.ideal,
            bandpass: sample.bandpass.into(),
            lowpass: sample.lowpass.into(),
            highpass: sample.highpass.into(),
        };
        // Non-finite values serialize as null
        serde_json::to_string(&record).unwrap_or_else(|e| format!(r#"{{"error":"{}"}}"#, e))
    }
}
