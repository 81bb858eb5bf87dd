//! Labelled frequency/probability histogram reports
//!
//! Builds the per-dataset summary (min, max, per-bin counts and per-bin
//! probabilities) either for one unlabelled dataset or for the three axes of
//! a spatial sample set, and encodes it as JSON.
//!
//! # Examples
//!
//! ## Single dataset
//!
//! ```rust
//! use freqhist_report::{histogram_report, ReportJson};
//!
//! let report = histogram_report(&[5.0], 10).unwrap();
//! assert_eq!(report.data().frequencies(), &[1]);
//! println!("{}", report.to_json_pretty().unwrap());
//! ```
//!
//! ## X, Y, Z axes
//!
//! ```rust
//! use freqhist_report::{AxesReport, ReportConfig, ReportJson};
//! use freqhist_core::Axis;
//!
//! let data = [vec![1, 2, 3], vec![4, 4, 5], vec![7, 8, 9, 9]];
//! let report = AxesReport::build(&data, &ReportConfig::new(2)).unwrap();
//! assert_eq!(report.axis(Axis::Z).frequencies(), &[2, 2]);
//!
//! let json = report.to_json_string().unwrap();
//! assert!(json.starts_with(r#"{"X":"#));
//! ```

pub mod config;
pub mod json;
pub mod report;

pub use config::{ReportConfig, DEFAULT_BINS};
pub use json::ReportJson;
pub use report::{AxesReport, HistogramReport, SingleReport};

pub use freqhist_core::{Result, Sample};

// Convenience functions
/// Build the `"Data"` report of one sample sequence
pub fn histogram_report<T: Sample>(samples: &[T], n_bins: usize) -> Result<SingleReport<T>> {
    SingleReport::build(samples, &ReportConfig::new(n_bins))
}

/// Build the `"X"`, `"Y"`, `"Z"` report of three sample sequences
pub fn axes_report<T: Sample, S: AsRef<[T]>>(data: &[S; 3], n_bins: usize) -> Result<AxesReport<T>> {
    AxesReport::build(data, &ReportConfig::new(n_bins))
}
