//! Equal-width frequency histograms over sorted frequency maps
//!
//! Samples flow through three stages:
//!
//! 1. [`FrequencyMap`]: distinct value → occurrence count, ordered by value
//! 2. [`Binner`]: aggregation of the map into per-bin counts
//! 3. [`probabilities`]: normalization of the counts into a distribution
//!
//! # Examples
//!
//! ## Floating-point samples
//!
//! ```rust
//! use freqhist_binning::{fixed_bins, probabilities, FrequencyMap};
//!
//! let samples = [1.0, 1.0, 2.0, 2.0, 2.0, 3.0, 3.0, 3.0, 3.0];
//! let map = FrequencyMap::from_samples(&samples);
//! let bins = fixed_bins(&map, 3).unwrap();
//! assert_eq!(bins, vec![2, 3, 4]);
//!
//! let probs: Vec<f64> = probabilities(&bins).unwrap();
//! assert!((probs.iter().sum::<f64>() - 1.0).abs() < 1e-12);
//! ```
//!
//! ## Integer samples
//!
//! Integer widths truncate. A range narrower than the bin count gives a zero
//! width and collapses to a single bin:
//!
//! ```rust
//! use freqhist_binning::{Binner, FixedWidthBinner};
//!
//! let bins = FixedWidthBinner::new(3)
//!     .bin_samples(&[1, 1, 2, 2, 2, 3, 3, 3, 3])
//!     .unwrap();
//! assert_eq!(bins, vec![9]);
//! ```

pub mod binner;
pub mod frequency;
pub mod normalize;
pub mod traits;

// Re-export main types and traits
pub use binner::{FixedWidthBinner, RemainderPolicy};
pub use frequency::FrequencyMap;
pub use normalize::probabilities;
pub use traits::Binner;

pub use freqhist_core::{Result, Sample};

// Convenience functions
/// Split a frequency map into `n_bins` equal-width bins
pub fn fixed_bins<T: Sample>(map: &FrequencyMap<T>, n_bins: usize) -> Result<Vec<usize>> {
    FixedWidthBinner::new(n_bins).bin(map)
}
