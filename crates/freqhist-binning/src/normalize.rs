//! Conversion of bin counts into probabilities

use freqhist_core::{Error, Result};
use num_traits::{Float, NumCast};

/// Divide every bin count by the total count
///
/// The result has one probability per bin and sums to one up to rounding.
/// Fails when the bins hold no occurrences at all.
pub fn probabilities<F: Float>(bins: &[usize]) -> Result<Vec<F>> {
    let total: usize = bins.iter().sum();
    if total == 0 {
        return Err(Error::empty_input());
    }
    let total_f = to_float::<F>(total)?;

    bins.iter()
        .map(|&count| Ok(to_float::<F>(count)? / total_f))
        .collect()
}

fn to_float<F: Float>(count: usize) -> Result<F> {
    <F as NumCast>::from(count)
        .ok_or_else(|| Error::Computation(format!("count {count} is not representable as a float")))
}
