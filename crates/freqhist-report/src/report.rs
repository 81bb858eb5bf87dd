//! Histogram report assembly
//!
//! A report is assembled in one pass from the samples and is immutable
//! afterwards. The serialized field names are a compatibility contract with
//! downstream consumers:
//!
//! ```text
//! { "X": { "Min", "Max", "FrequencyHistogram", "ProbabilityHistogram" },
//!   "Y": { ... }, "Z": { ... }, "NBins": N }
//! ```
//!
//! Single-dataset reports use the key `"Data"` in place of the three axes.

use crate::config::ReportConfig;
use freqhist_binning::{probabilities, Binner, FrequencyMap};
use freqhist_core::{Axis, Error, Result, Sample};
use serde::Serialize;
use std::fmt;
use tracing::{debug, instrument};

/// Frequency and probability histogram of one dataset
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct HistogramReport<T: Sample> {
    min: T,
    max: T,
    frequency_histogram: Vec<usize>,
    probability_histogram: Vec<T::Float>,
}

impl<T: Sample> HistogramReport<T> {
    /// Count, bin and normalize `samples`
    pub fn from_samples(samples: &[T], config: &ReportConfig) -> Result<Self> {
        config.validate()?;
        Self::from_map(&FrequencyMap::from_samples(samples), &config.binner())
    }

    /// Bin and normalize an existing frequency map
    pub fn from_map<B: Binner<T>>(map: &FrequencyMap<T>, binner: &B) -> Result<Self> {
        let (min, max) = map.min().zip(map.max()).ok_or_else(Error::empty_input)?;
        let frequency_histogram = binner.bin(map)?;
        let probability_histogram = probabilities(&frequency_histogram)?;

        Ok(Self {
            min,
            max,
            frequency_histogram,
            probability_histogram,
        })
    }

    /// Smallest sample value
    pub fn min(&self) -> T {
        self.min
    }

    /// Largest sample value
    pub fn max(&self) -> T {
        self.max
    }

    /// Occurrences per bin
    pub fn frequencies(&self) -> &[usize] {
        &self.frequency_histogram
    }

    /// Probability per bin
    pub fn probabilities(&self) -> &[T::Float] {
        &self.probability_histogram
    }

    /// Number of bins actually produced
    pub fn len(&self) -> usize {
        self.frequency_histogram.len()
    }

    /// Check if the report has no bins
    pub fn is_empty(&self) -> bool {
        self.frequency_histogram.is_empty()
    }

    /// Total occurrences across all bins
    pub fn total_count(&self) -> usize {
        self.frequency_histogram.iter().sum()
    }
}

impl<T: Sample> fmt::Display for HistogramReport<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Histogram({} bins, n={}, range=[{:?}, {:?}])",
            self.len(),
            self.total_count(),
            self.min,
            self.max
        )
    }
}

/// Report of a single unlabelled dataset, keyed `"Data"`
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct SingleReport<T: Sample> {
    data: HistogramReport<T>,
    n_bins: usize,
}

impl<T: Sample> SingleReport<T> {
    /// Build the report of `samples`
    #[instrument(skip(samples, config), fields(samples = samples.len(), n_bins = config.n_bins))]
    pub fn build(samples: &[T], config: &ReportConfig) -> Result<Self> {
        let data = HistogramReport::from_samples(samples, config)?;
        debug!(bins = data.len(), "assembled data histogram");
        Ok(Self {
            data,
            n_bins: config.n_bins,
        })
    }

    /// Histogram of the dataset
    pub fn data(&self) -> &HistogramReport<T> {
        &self.data
    }

    /// Requested number of bins
    pub fn n_bins(&self) -> usize {
        self.n_bins
    }
}

/// Report of three independent axes, keyed `"X"`, `"Y"` and `"Z"`
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct AxesReport<T: Sample> {
    x: HistogramReport<T>,
    y: HistogramReport<T>,
    z: HistogramReport<T>,
    n_bins: usize,
}

impl<T: Sample> AxesReport<T> {
    /// Build the report of three sample sequences given in X, Y, Z order
    #[instrument(skip(data, config), fields(n_bins = config.n_bins))]
    pub fn build<S: AsRef<[T]>>(data: &[S; 3], config: &ReportConfig) -> Result<Self> {
        config.validate()?;
        let [x, y, z] = data;
        Ok(Self {
            x: axis_histogram(Axis::X, x.as_ref(), config)?,
            y: axis_histogram(Axis::Y, y.as_ref(), config)?,
            z: axis_histogram(Axis::Z, z.as_ref(), config)?,
            n_bins: config.n_bins,
        })
    }

    /// Build the report from axis-labelled sample sequences in any order
    ///
    /// Every axis must be given exactly once.
    pub fn from_labelled<S, I>(data: I, config: &ReportConfig) -> Result<Self>
    where
        S: AsRef<[T]>,
        I: IntoIterator<Item = (Axis, S)>,
    {
        let mut slots: [Option<S>; 3] = [None, None, None];
        for (axis, samples) in data {
            let slot = &mut slots[axis.index()];
            if slot.is_some() {
                return Err(Error::InvalidInput(format!("axis {axis} given more than once")));
            }
            *slot = Some(samples);
        }

        let [x, y, z] = slots;
        match (x, y, z) {
            (Some(x), Some(y), Some(z)) => Self::build(&[x, y, z], config),
            (x, y, _) => {
                let missing = if x.is_none() {
                    Axis::X
                } else if y.is_none() {
                    Axis::Y
                } else {
                    Axis::Z
                };
                Err(Error::InvalidInput(format!("axis {missing} is missing")))
            }
        }
    }

    /// Histogram of one axis
    pub fn axis(&self, axis: Axis) -> &HistogramReport<T> {
        match axis {
            Axis::X => &self.x,
            Axis::Y => &self.y,
            Axis::Z => &self.z,
        }
    }

    /// Iterate over the axis histograms in X, Y, Z order
    pub fn iter(&self) -> impl Iterator<Item = (Axis, &HistogramReport<T>)> + '_ {
        Axis::ALL.into_iter().map(move |axis| (axis, self.axis(axis)))
    }

    /// Requested number of bins
    pub fn n_bins(&self) -> usize {
        self.n_bins
    }
}

#[instrument(skip(samples, config), fields(samples = samples.len()))]
fn axis_histogram<T: Sample>(axis: Axis, samples: &[T], config: &ReportConfig) -> Result<HistogramReport<T>> {
    let histogram = HistogramReport::from_samples(samples, config)?;
    debug!(bins = histogram.len(), "assembled {axis} histogram");
    Ok(histogram)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use freqhist_binning::{FixedWidthBinner, RemainderPolicy};

    #[test]
    fn test_single_report_floats() {
        let samples = [1.0, 1.0, 2.0, 2.0, 2.0, 3.0, 3.0, 3.0, 3.0];
        let report = SingleReport::build(&samples, &ReportConfig::new(3)).unwrap();
        let data = report.data();

        assert_eq!(report.n_bins(), 3);
        assert_eq!(data.min(), 1.0);
        assert_eq!(data.max(), 3.0);
        assert_eq!(data.frequencies(), &[2, 3, 4]);
        assert_relative_eq!(data.probabilities()[0], 2.0 / 9.0);
        assert_relative_eq!(data.probabilities()[1], 3.0 / 9.0);
        assert_relative_eq!(data.probabilities()[2], 4.0 / 9.0);
        assert_eq!(data.total_count(), 9);
    }

    #[test]
    fn test_single_report_integers_collapse() {
        let samples = [1, 1, 2, 2, 2, 3, 3, 3, 3];
        let report = SingleReport::build(&samples, &ReportConfig::new(3)).unwrap();
        assert_eq!(report.data().frequencies(), &[9]);
        assert_eq!(report.data().probabilities(), &[1.0]);
        assert_eq!(report.n_bins(), 3);
    }

    #[test]
    fn test_axes_report() {
        let data = [vec![1, 2, 3], vec![4, 4, 5], vec![7, 8, 9, 9]];
        let report = AxesReport::build(&data, &ReportConfig::new(2)).unwrap();

        assert_eq!(report.n_bins(), 2);
        assert_eq!(report.axis(Axis::X).frequencies(), &[2, 1]);
        assert_eq!(report.axis(Axis::Y).frequencies(), &[3]);
        assert_eq!(report.axis(Axis::Z).frequencies(), &[2, 2]);

        for (axis, histogram) in report.iter() {
            assert_eq!(histogram.total_count(), data[axis.index()].len());
            let total: f64 = histogram.probabilities().iter().sum();
            assert_relative_eq!(total, 1.0, epsilon = 1e-12);
        }
        assert_eq!(report.axis(Axis::Z).min(), 7);
        assert_eq!(report.axis(Axis::Z).max(), 9);
    }

    #[test]
    fn test_labelled_axes_are_reordered() {
        let config = ReportConfig::new(2);
        let shuffled = vec![
            (Axis::Z, vec![7.0, 8.0, 9.0]),
            (Axis::X, vec![1.0, 2.0]),
            (Axis::Y, vec![4.0]),
        ];
        let report = AxesReport::from_labelled(shuffled, &config).unwrap();
        let ordered =
            AxesReport::build(&[vec![1.0, 2.0], vec![4.0], vec![7.0, 8.0, 9.0]], &config).unwrap();
        assert_eq!(report, ordered);
    }

    #[test]
    fn test_labelled_axes_validation() {
        let config = ReportConfig::default();
        let duplicate = vec![(Axis::X, vec![1]), (Axis::X, vec![2]), (Axis::Y, vec![3])];
        assert!(matches!(
            AxesReport::from_labelled(duplicate, &config),
            Err(Error::InvalidInput(msg)) if msg.contains("X")
        ));

        let missing = vec![(Axis::X, vec![1]), (Axis::Z, vec![2])];
        assert!(matches!(
            AxesReport::from_labelled(missing, &config),
            Err(Error::InvalidInput(msg)) if msg.contains("Y")
        ));
    }

    #[test]
    fn test_empty_axis_fails() {
        let data: [Vec<f32>; 3] = [vec![1.0], vec![], vec![2.0]];
        assert!(matches!(
            AxesReport::build(&data, &ReportConfig::default()),
            Err(Error::InsufficientData { .. })
        ));
    }

    #[test]
    fn test_zero_bins_fails_before_binning() {
        assert!(matches!(
            SingleReport::build(&[1u32, 2, 3], &ReportConfig::new(0)),
            Err(Error::InvalidParameter(_))
        ));
    }

    #[test]
    fn test_from_map_with_legacy_binner() {
        let mut samples: Vec<i64> = (0..=9).collect();
        samples.extend([10, 10, 10]);
        let map = FrequencyMap::from_samples(&samples);
        let binner = FixedWidthBinner::new(3).with_remainder(RemainderPolicy::Legacy);
        let report = HistogramReport::from_map(&map, &binner).unwrap();
        assert_eq!(report.frequencies(), &[4, 3, 4]);
        assert_eq!(report.probabilities().len(), 3);
        assert_eq!(report.max(), 10);
    }

    #[test]
    fn test_display() {
        let report = HistogramReport::from_samples(&[2, 4, 6, 8], &ReportConfig::new(2)).unwrap();
        assert_eq!(report.to_string(), "Histogram(2 bins, n=4, range=[2, 8])");
    }
}
