//! Equal-width frequency and probability histograms with labelled reports
//!
//! This facade re-exports the workspace crates:
//!
//! - `freqhist-core`: the [`Sample`] value trait, [`Axis`] labels and the error type
//! - [`binning`]: frequency maps, the fixed-width binner and normalization
//! - [`report`]: single-dataset and X/Y/Z reports and their JSON encoding
//!
//! # Example
//!
//! ```rust
//! use freqhist::{axes_report, Axis, ReportJson};
//!
//! let data = [vec![1.0, 2.0, 3.0], vec![4.0, 4.0, 5.0], vec![7.0, 8.0, 9.0, 9.0]];
//! let report = axes_report(&data, 2).unwrap();
//!
//! for (axis, histogram) in report.iter() {
//!     assert_eq!(histogram.total_count(), data[axis.index()].len());
//! }
//! assert_eq!(report.axis(Axis::Y).frequencies(), &[2, 1]);
//! println!("{}", report.to_json_pretty().unwrap());
//! ```

pub use freqhist_binning as binning;
pub use freqhist_report as report;

pub use freqhist_binning::{fixed_bins, probabilities, Binner, FixedWidthBinner, FrequencyMap, RemainderPolicy};
pub use freqhist_core::{Axis, Error, Result, Sample};
pub use freqhist_report::{
    axes_report, histogram_report, AxesReport, HistogramReport, ReportConfig, ReportJson, SingleReport,
};
