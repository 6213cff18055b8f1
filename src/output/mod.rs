mod csv;
mod json;
mod text;

use num_complex::Complex64;

pub use self::csv::CsvFormatter;
pub use self::json::JsonFormatter;
pub use self::text::TextFormatter;

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Csv,
    Json,
}

/// Ideal and Lanczos responses at one frequency
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResponseSample {
    pub frequency: f64,
    pub ideal: f64,
    pub bandpass: Complex64,
    pub lowpass: Complex64,
    pub highpass: Complex64,
}

pub trait Formatter {
    fn format(&self, sample: &ResponseSample) -> String;

    fn header(&self) -> Option<String> {
        None
    }
}

pub fn create_formatter(format: OutputFormat, verbose: bool) -> Box<dyn Formatter> {
    match format {
        OutputFormat::Text => Box::new(TextFormatter::new(verbose)),
        OutputFormat::Csv => Box::new(CsvFormatter),
        OutputFormat::Json => Box::new(JsonFormatter),
    }
}
