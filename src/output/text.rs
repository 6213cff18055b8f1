use super::{Formatter, ResponseSample};

pub struct TextFormatter {
    verbose: bool,
}

impl TextFormatter {
    pub fn new(verbose: bool) -> Self {
        Self { verbose }
    }
}

impl Formatter for TextFormatter {
    fn format(&self, sample: &ResponseSample) -> String {
        if self.verbose {
            format!(
                "{:>8.5} {:>5.1} {:>10.6} {:>+10.6}i {:>10.6} {:>+10.6}i {:>10.6} {:>+10.6}i",
                sample.frequency,
                sample.ideal,
                sample.bandpass.re,
                sample.bandpass.im,
                sample.lowpass.re,
                sample.lowpass.im,
                sample.highpass.re,
                sample.highpass.im
            )
        } else {
            format!(
                "{:>8.5} {:>5.1} {:>10.6} {:>10.6} {:>10.6}",
                sample.frequency,
                sample.ideal,
                sample.bandpass.norm(),
                sample.lowpass.norm(),
                sample.highpass.norm()
            )
        }
    }

    fn header(&self) -> Option<String> {
        if self.verbose {
            Some(format!(
                "{:>8} {:>5} {:>22} {:>22} {:>22}",
                "f", "ideal", "band-pass", "low-pass", "high-pass"
            ))
        } else {
            Some(format!(
                "{:>8} {:>5} {:>10} {:>10} {:>10}",
                "f", "ideal", "|bp|", "|low|", "|high|"
            ))
        }
    }
}
