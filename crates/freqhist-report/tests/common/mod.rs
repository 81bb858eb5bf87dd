//! Common test utilities for freqhist integration tests
#![allow(dead_code)]

use freqhist_report::{HistogramReport, Sample};
use num_traits::ToPrimitive;

/// Sum of a report's probabilities as f64
pub fn probability_sum<T: Sample>(histogram: &HistogramReport<T>) -> f64 {
    histogram
        .probabilities()
        .iter()
        .filter_map(|p| p.to_f64())
        .sum()
}

/// True minimum and maximum of a non-empty slice
pub fn extremes<T: Sample>(samples: &[T]) -> (T, T) {
    let mut min = samples[0];
    let mut max = samples[0];
    for &value in &samples[1..] {
        if value < min {
            min = value;
        }
        if value > max {
            max = value;
        }
    }
    (min, max)
}
