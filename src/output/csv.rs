use super::{Formatter, ResponseSample};

pub struct CsvFormatter;

impl Formatter for CsvFormatter {
    fn format(&self, sample: &ResponseSample) -> String {
        format!(
            "{},{},{},{},{},{},{},{}",
            sample.frequency,
            sample.ideal,
            sample.bandpass.re,
            sample.bandpass.im,
            sample.lowpass.re,
            sample.lowpass.im,
            sample.highpass.re,
            sample.highpass.im
        )
    }

    fn header(&self) -> Option<String> {
        Some("frequency,ideal,bp_re,bp_im,low_re,low_im,high_re,high_im".to_string())
    }
}
