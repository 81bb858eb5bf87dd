//! Property-based tests for binning and report assembly

mod common;

use common::{extremes, probability_sum};
use freqhist_core::Axis;
use freqhist_report::{axes_report, histogram_report, AxesReport, ReportConfig};
use proptest::prelude::*;

proptest! {
    // Property: every sample lands in exactly one bin
    #[test]
    fn prop_count_conservation(
        samples in prop::collection::vec(-10_000i32..10_000, 1..500),
        n_bins in 1usize..100,
    ) {
        let report = histogram_report(&samples, n_bins).unwrap();
        prop_assert_eq!(report.data().total_count(), samples.len());
    }

    // Property: never more bins than requested, never none
    #[test]
    fn prop_bin_count_bound(
        samples in prop::collection::vec(-50.0f64..50.0, 1..500),
        n_bins in 1usize..100,
    ) {
        let report = histogram_report(&samples, n_bins).unwrap();
        prop_assert!(!report.data().is_empty());
        prop_assert!(report.data().len() <= n_bins);
        prop_assert_eq!(report.data().frequencies().len(), report.data().probabilities().len());
    }

    // Property: probabilities form a distribution
    #[test]
    fn prop_probability_normalization(
        samples in prop::collection::vec(0u16..1000, 1..500),
        n_bins in 1usize..60,
    ) {
        let report = histogram_report(&samples, n_bins).unwrap();
        prop_assert!((probability_sum(report.data()) - 1.0).abs() < 1e-9);
        prop_assert!(report.data().probabilities().iter().all(|&p| (0.0..=1.0).contains(&p)));
    }

    // Property: constant input always collapses to one bin
    #[test]
    fn prop_degenerate_collapse(
        value in -1.0e9f64..1.0e9,
        k in 1usize..200,
        n_bins in 1usize..100,
    ) {
        let samples = vec![value; k];
        let report = histogram_report(&samples, n_bins).unwrap();
        prop_assert_eq!(report.data().frequencies(), &[k][..]);
        prop_assert_eq!(report.data().probabilities(), &[1.0][..]);
    }

    // Property: reported extremes are the true extremes
    #[test]
    fn prop_min_max(
        samples in prop::collection::vec(any::<i64>(), 1..200),
        n_bins in 2usize..50,
    ) {
        let (min, max) = extremes(&samples);
        let report = histogram_report(&samples, n_bins).unwrap();
        prop_assert_eq!(report.data().min(), min);
        prop_assert_eq!(report.data().max(), max);
    }

    // Property: axis order of the input does not change the report
    #[test]
    fn prop_axis_order_independent(
        x in prop::collection::vec(-100i32..100, 1..50),
        y in prop::collection::vec(-100i32..100, 1..50),
        z in prop::collection::vec(-100i32..100, 1..50),
        n_bins in 1usize..20,
        rotation in 0usize..3,
    ) {
        let mut labelled = vec![(Axis::X, x.clone()), (Axis::Y, y.clone()), (Axis::Z, z.clone())];
        labelled.rotate_left(rotation);

        let config = ReportConfig::new(n_bins);
        let shuffled = AxesReport::from_labelled(labelled, &config).unwrap();
        let ordered = axes_report(&[x, y, z], n_bins).unwrap();
        prop_assert_eq!(shuffled, ordered);
    }
}
