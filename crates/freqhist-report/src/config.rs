//! Configuration for report assembly

use freqhist_binning::{FixedWidthBinner, RemainderPolicy};
use freqhist_core::{Error, Result};
use serde::{Deserialize, Serialize};

/// Default number of bins per histogram
pub const DEFAULT_BINS: usize = 10;

/// Settings shared by every histogram of a report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Requested number of bins
    pub n_bins: usize,

    /// Accounting of values beyond the last bin limit
    pub remainder: RemainderPolicy,
}

impl ReportConfig {
    /// Create a config requesting `n_bins` bins
    pub fn new(n_bins: usize) -> Self {
        Self {
            n_bins,
            ..Self::default()
        }
    }

    /// Set the number of bins
    pub fn with_bins(mut self, n_bins: usize) -> Self {
        self.n_bins = n_bins;
        self
    }

    /// Set the remainder policy
    pub fn with_remainder(mut self, remainder: RemainderPolicy) -> Self {
        self.remainder = remainder;
        self
    }

    /// Check the settings before any sample is touched
    pub fn validate(&self) -> Result<()> {
        if self.n_bins == 0 {
            return Err(Error::zero_bins());
        }
        Ok(())
    }

    /// Binner described by this config
    pub fn binner(&self) -> FixedWidthBinner {
        FixedWidthBinner::new(self.n_bins).with_remainder(self.remainder)
    }
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            n_bins: DEFAULT_BINS,
            remainder: RemainderPolicy::Conserve,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ReportConfig::default();
        assert_eq!(config.n_bins, DEFAULT_BINS);
        assert_eq!(config.remainder, RemainderPolicy::Conserve);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_setters() {
        let config = ReportConfig::new(4).with_remainder(RemainderPolicy::Legacy);
        let binner = config.binner();
        assert_eq!(binner.n_bins(), 4);
        assert_eq!(binner.remainder(), RemainderPolicy::Legacy);
        assert_eq!(config.with_bins(7).n_bins, 7);
    }

    #[test]
    fn test_zero_bins_rejected() {
        assert!(matches!(
            ReportConfig::new(0).validate(),
            Err(Error::InvalidParameter(_))
        ));
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: ReportConfig = serde_json::from_str(r#"{"n_bins": 3}"#).unwrap();
        assert_eq!(config, ReportConfig::new(3));

        let config: ReportConfig = serde_json::from_str(r#"{"remainder": "Legacy"}"#).unwrap();
        assert_eq!(config.n_bins, DEFAULT_BINS);
        assert_eq!(config.remainder, RemainderPolicy::Legacy);
    }
}
