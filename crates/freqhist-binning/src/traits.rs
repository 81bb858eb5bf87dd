//! Core traits for histogram binning

use crate::frequency::FrequencyMap;
use freqhist_core::{Result, Sample};

/// Trait for partitioning a frequency map into per-bin occurrence counts
pub trait Binner<T: Sample> {
    /// Aggregate the counts of `map` into an ordered bin sequence
    fn bin(&self, map: &FrequencyMap<T>) -> Result<Vec<usize>>;

    /// Build the frequency map of `samples` and bin it
    fn bin_samples(&self, samples: &[T]) -> Result<Vec<usize>> {
        self.bin(&FrequencyMap::from_samples(samples))
    }
}
