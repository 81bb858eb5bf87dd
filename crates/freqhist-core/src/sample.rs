//! Generic sample value trait for histogram binning
//!
//! Histograms are built over any totally ordered numeric type. The value type
//! keeps its own arithmetic: an integer sample type divides its range with
//! integer division, so the bin width truncates (possibly to zero), while a
//! floating-point sample type keeps the fractional width. The two produce
//! materially different bins for the same data and both are supported on
//! purpose.

use num_traits::{Float, Num, NumCast};
use ordered_float::OrderedFloat;
use serde::Serialize;
use std::fmt::Debug;

/// Numeric value that can be counted, binned and reported
pub trait Sample: Num + NumCast + Copy + PartialOrd + Debug + Serialize + Send + Sync + 'static {
    /// Totally ordered key used by the frequency map
    type Key: Ord + Copy + Debug + Send + Sync;

    /// Type in which probabilities are computed
    type Float: Float + Serialize + Debug + Send + Sync;

    /// Whether the type uses truncating integer division
    const IS_INTEGER: bool;

    /// Convert into a frequency map key
    fn to_key(self) -> Self::Key;

    /// Recover the value from a frequency map key
    fn from_key(key: Self::Key) -> Self;

    /// Width of one of `n_bins` equal bins spanning `[min, max]`
    ///
    /// Returns `None` when the width itself is not representable in the value
    /// type, which only happens for a single bin spanning more than the
    /// type's range. An overflowing intermediate range is not an error.
    /// A bin count that does not fit in the value type yields a zero width,
    /// which only happens for narrow integer types whose whole range is
    /// smaller than the bin count.
    fn bin_width(min: Self, max: Self, n_bins: usize) -> Option<Self>;

    /// Advance a bin limit by `width`, `None` on overflow
    fn checked_step(self, width: Self) -> Option<Self>;

    /// Check if value is finite (always true for integers)
    fn is_finite(&self) -> bool;
}

macro_rules! impl_integer_sample {
    ($($t:ty),* $(,)?) => {
        $(
            impl Sample for $t {
                type Key = $t;
                type Float = f64;

                const IS_INTEGER: bool = true;

                fn to_key(self) -> $t {
                    self
                }

                fn from_key(key: $t) -> Self {
                    key
                }

                fn bin_width(min: Self, max: Self, n_bins: usize) -> Option<Self> {
                    let range = (max as i128 - min as i128).abs();
                    let n = i128::try_from(n_bins).ok()?;
                    if n == 0 {
                        return None;
                    }
                    <$t>::try_from(range / n).ok()
                }

                fn checked_step(self, width: Self) -> Option<Self> {
                    self.checked_add(width)
                }

                fn is_finite(&self) -> bool {
                    true
                }
            }
        )*
    };
}

macro_rules! impl_float_sample {
    ($($t:ty),* $(,)?) => {
        $(
            impl Sample for $t {
                type Key = OrderedFloat<$t>;
                type Float = $t;

                const IS_INTEGER: bool = false;

                fn to_key(self) -> OrderedFloat<$t> {
                    OrderedFloat(self)
                }

                fn from_key(key: OrderedFloat<$t>) -> Self {
                    key.into_inner()
                }

                fn bin_width(min: Self, max: Self, n_bins: usize) -> Option<Self> {
                    if n_bins == 0 {
                        return None;
                    }
                    let n = n_bins as $t;
                    let width = (max - min).abs() / n;
                    if width.is_finite() {
                        return Some(width);
                    }
                    // range overflows, divide each end first
                    let width = (max / n - min / n).abs();
                    width.is_finite().then_some(width)
                }

                fn checked_step(self, width: Self) -> Option<Self> {
                    Some(self + width)
                }

                fn is_finite(&self) -> bool {
                    <$t>::is_finite(*self)
                }
            }
        )*
    };
}

impl_integer_sample!(i8, i16, i32, i64, u8, u16, u32, u64);
impl_float_sample!(f32, f64);
