//! Configuration for the `lanczos` response driver.
//!
//! Values come from, in increasing priority: `ResponseConfig::default()`,
//! a TOML file, and command-line arguments.
//!
//! ```toml
//! cutin = 0.2
//! cutoff = 0.3
//! num_taps = 43
//! points = 730
//! ```

use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::constants::NYQUIST_FREQ;
use crate::error::{LanczosError, Result};

/// Response evaluation configuration
///
/// # Example
/// ```
/// use lanczos::config::ResponseConfig;
///
/// let config = ResponseConfig::from_toml_str("num_taps = 61").unwrap();
/// assert_eq!(config.num_taps, 61);
/// assert_eq!(config.cutin, 0.2);
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ResponseConfig {
    /// Cut-in frequency in cycles per sample (band-pass lower edge, high-pass cut)
    pub cutin: f64,
    /// Cut-off frequency in cycles per sample (band-pass upper edge, low-pass cut)
    pub cutoff: f64,
    /// Number of filter weights (odd)
    pub num_taps: usize,
    /// Number of frequencies sampled over `[0, 1)`
    pub points: usize,
}

impl Default for ResponseConfig {
    fn default() -> Self {
        Self {
            cutin: 0.2,
            cutoff: 0.3,
            num_taps: 43,
            // Two years of daily samples
            points: 365 * 2,
        }
    }
}

impl ResponseConfig {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| LanczosError::Config(e.to_string()))
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| LanczosError::Config(format!("{}: {}", path.display(), e)))?;
        Self::from_toml_str(&content)
    }

    /// Check frequency ranges and sampling
    ///
    /// Weight count parity and order are left to the weight generators.
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [("cutin", self.cutin), ("cutoff", self.cutoff)] {
            if !(value > 0.0 && value <= NYQUIST_FREQ) {
                return Err(LanczosError::Config(format!(
                    "{} must be in (0, {}], got {}",
                    name, NYQUIST_FREQ, value
                )));
            }
        }
        if self.cutin >= self.cutoff {
            return Err(LanczosError::Config(format!(
                "cutin ({}) must be below cutoff ({})",
                self.cutin, self.cutoff
            )));
        }
        if self.points == 0 {
            return Err(LanczosError::Config(
                "points must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
