//! Sorted value → occurrence count maps

use freqhist_core::Sample;
use std::collections::BTreeMap;
use std::ops::Bound;

/// Occurrence counts of distinct sample values, ordered by value
///
/// Every sample contributes exactly one occurrence, so the counts always sum
/// to the number of samples the map was built from. Once built the map is not
/// mutated.
#[derive(Debug, Clone, PartialEq)]
pub struct FrequencyMap<T: Sample> {
    counts: BTreeMap<T::Key, usize>,
    total_count: usize,
}

impl<T: Sample> FrequencyMap<T> {
    /// Count the occurrences of every distinct value in `samples`
    pub fn from_samples(samples: &[T]) -> Self {
        samples.iter().copied().collect()
    }

    /// Number of distinct values
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Check if the map holds no values
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Total number of samples counted
    pub fn total_count(&self) -> usize {
        self.total_count
    }

    /// Smallest value
    pub fn min(&self) -> Option<T> {
        self.counts.keys().next().map(|&key| T::from_key(key))
    }

    /// Largest value
    pub fn max(&self) -> Option<T> {
        self.counts.keys().next_back().map(|&key| T::from_key(key))
    }

    /// Iterate over `(value, count)` pairs in ascending value order
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = (T, usize)> + '_ {
        self.counts.iter().map(|(&key, &count)| (T::from_key(key), count))
    }

    /// First value strictly greater than `limit`
    pub fn upper_bound(&self, limit: T) -> Option<T> {
        self.counts
            .range((Bound::Excluded(limit.to_key()), Bound::Unbounded))
            .next()
            .map(|(&key, _)| T::from_key(key))
    }

    /// Sum of the counts of all values within the given bounds
    pub fn count_in(&self, lower: Bound<T>, upper: Bound<T>) -> usize {
        let lower = map_bound(lower);
        let upper = map_bound(upper);
        // BTreeMap::range panics on inverted or empty-excluded ranges
        if is_empty_range(&lower, &upper) {
            return 0;
        }
        self.counts.range((lower, upper)).map(|(_, &count)| count).sum()
    }
}

impl<T: Sample> FromIterator<T> for FrequencyMap<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut counts = BTreeMap::new();
        let mut total_count = 0;
        for value in iter {
            *counts.entry(value.to_key()).or_insert(0) += 1;
            total_count += 1;
        }
        Self { counts, total_count }
    }
}

fn map_bound<T: Sample>(bound: Bound<T>) -> Bound<T::Key> {
    match bound {
        Bound::Included(value) => Bound::Included(value.to_key()),
        Bound::Excluded(value) => Bound::Excluded(value.to_key()),
        Bound::Unbounded => Bound::Unbounded,
    }
}

fn is_empty_range<K: Ord>(lower: &Bound<K>, upper: &Bound<K>) -> bool {
    match (lower, upper) {
        (Bound::Included(lo), Bound::Included(hi)) => lo > hi,
        (Bound::Included(lo), Bound::Excluded(hi))
        | (Bound::Excluded(lo), Bound::Included(hi))
        | (Bound::Excluded(lo), Bound::Excluded(hi)) => lo >= hi,
        _ => false,
    }
}
