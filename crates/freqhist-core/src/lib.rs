//! Core traits and types for frequency histograms
//!
//! This crate provides the pieces shared by the binning and report crates:
//!
//! - [`Sample`]: the generic value type a histogram is built over, with
//!   integer and floating-point implementations
//! - [`Error`] and [`Result`]: the unified error type
//! - [`Axis`]: the X/Y/Z dataset labels used by multi-axis reports
//!
//! # Example
//!
//! ```rust
//! use freqhist_core::Sample;
//!
//! // Integer samples divide their range with truncation
//! assert_eq!(i32::bin_width(1, 3, 3), Some(0));
//!
//! // Floating-point samples keep the fraction
//! let width = f64::bin_width(1.0, 3.0, 4).unwrap();
//! assert_eq!(width, 0.5);
//! ```

pub mod axis;
pub mod error;
pub mod sample;

// Re-export core types
pub use axis::Axis;
pub use error::{Error, Result};
pub use sample::Sample;
