//! Equal-width binning of frequency maps

use crate::frequency::FrequencyMap;
use crate::traits::Binner;
use freqhist_core::{Error, Result, Sample};
use serde::{Deserialize, Serialize};
use std::ops::Bound;
use tracing::{debug, instrument, trace, warn};

/// How values left over after the limit-based bins are accounted for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum RemainderPolicy {
    /// Limit-based bins stop one short of the requested count and every
    /// remaining value goes into the final bin. Occurrences are always
    /// conserved and at most `n_bins` bins are produced.
    #[default]
    Conserve,

    /// Bit-for-bit output of the historical binner. When the limit-based bins
    /// already number `n_bins`, the leftover values add exactly one to the
    /// last bin regardless of how many occurrences they hold, and truncated
    /// integer widths can yield more than `n_bins` bins. Only use this to
    /// reproduce previously published reports.
    Legacy,
}

/// Fixed-width histogram binner
///
/// Splits `[min, max]` of a frequency map into bins of width
/// `(max - min) / n_bins`, computed in the sample type. Bin `k` holds the
/// values in `(min + (k-1)·w, min + k·w]`, the first bin also holding `min`.
///
/// A zero width (all samples equal, or an integer range narrower than the
/// bin count) collapses the histogram to a single bin holding every
/// occurrence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedWidthBinner {
    n_bins: usize,
    remainder: RemainderPolicy,
}

impl FixedWidthBinner {
    /// Create a new fixed-width binner
    pub fn new(n_bins: usize) -> Self {
        Self {
            n_bins,
            remainder: RemainderPolicy::default(),
        }
    }

    /// Set the remainder policy
    pub fn with_remainder(mut self, remainder: RemainderPolicy) -> Self {
        self.remainder = remainder;
        self
    }

    /// Requested number of bins
    pub fn n_bins(&self) -> usize {
        self.n_bins
    }

    /// Active remainder policy
    pub fn remainder(&self) -> RemainderPolicy {
        self.remainder
    }

    fn bin_conserving<T: Sample>(&self, map: &FrequencyMap<T>, min: T, width: T) -> Vec<usize> {
        let mut bins = Vec::with_capacity(self.n_bins);
        let mut lower = Bound::Unbounded;
        let mut limit = min.checked_step(width);

        while bins.len() + 1 < self.n_bins {
            let Some(current) = limit else { break };
            if map.upper_bound(current).is_none() {
                break;
            }
            let count = map.count_in(lower, Bound::Included(current));
            trace!(bin = bins.len(), ?current, count, "closed bin");
            bins.push(count);
            lower = Bound::Excluded(current);
            limit = next_limit(current, width);
        }

        bins.push(map.count_in(lower, Bound::Unbounded));
        bins
    }

    fn bin_legacy<T: Sample>(&self, map: &FrequencyMap<T>, min: T, width: T) -> Vec<usize> {
        let mut bins = Vec::with_capacity(self.n_bins);
        let mut lower = Bound::Unbounded;
        let mut limit = min.checked_step(width);

        while let Some(current) = limit {
            if map.upper_bound(current).is_none() {
                break;
            }
            let count = map.count_in(lower, Bound::Included(current));
            trace!(bin = bins.len(), ?current, count, "closed bin");
            bins.push(count);
            lower = Bound::Excluded(current);
            limit = next_limit(current, width);
        }

        if bins.len() == self.n_bins {
            let leftover = map.count_in(lower, Bound::Unbounded);
            if leftover != 1 {
                warn!(leftover, "legacy remainder adds one occurrence in place of {leftover}");
            }
            if let Some(last) = bins.last_mut() {
                *last += 1;
            }
        } else {
            bins.push(map.count_in(lower, Bound::Unbounded));
            if bins.len() > self.n_bins {
                warn!(produced = bins.len(), requested = self.n_bins, "legacy binning exceeded requested bins");
            }
        }
        bins
    }
}

/// Next bin limit, `None` once the limit stops increasing
fn next_limit<T: Sample>(current: T, width: T) -> Option<T> {
    current.checked_step(width).filter(|next| *next > current)
}

impl<T: Sample> Binner<T> for FixedWidthBinner {
    #[instrument(skip(self, map), fields(n_bins = self.n_bins, distinct = map.len()))]
    fn bin(&self, map: &FrequencyMap<T>) -> Result<Vec<usize>> {
        if self.n_bins == 0 {
            return Err(Error::zero_bins());
        }
        let (min, max) = match (map.min(), map.max()) {
            (Some(min), Some(max)) => (min, max),
            _ => return Err(Error::empty_input()),
        };
        if !min.is_finite() || !max.is_finite() {
            return Err(Error::non_finite("frequency map"));
        }
        if self.n_bins == 1 {
            return Ok(vec![map.total_count()]);
        }

        let width = T::bin_width(min, max, self.n_bins).ok_or_else(|| {
            Error::Computation(format!(
                "bin width of [{min:?}, {max:?}] over {} bins is not representable",
                self.n_bins
            ))
        })?;
        debug!(?min, ?max, ?width, "computed bin width");

        if width == T::zero() {
            if T::IS_INTEGER && min != max {
                debug!(distinct = map.len(), "integer bin width truncated to zero, collapsing to a single bin");
            } else {
                debug!("constant input, collapsing to a single bin");
            }
            return Ok(vec![map.total_count()]);
        }

        let bins = match self.remainder {
            RemainderPolicy::Conserve => self.bin_conserving(map, min, width),
            RemainderPolicy::Legacy => self.bin_legacy(map, min, width),
        };
        debug!(produced = bins.len(), "binning complete");
        Ok(bins)
    }
}
