//! Builds X, Y, Z and single-dataset histogram reports from synthetic samples
//!
//! Run with `RUST_LOG=debug` to see the binning trace.

use freqhist_binning::RemainderPolicy;
use freqhist_core::Axis;
use freqhist_report::{AxesReport, ReportConfig, ReportJson, SingleReport};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rand_distr::{Distribution, Normal, Uniform};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let mut rng = ChaCha8Rng::seed_from_u64(42);

    // Positions of a particle cloud: gaussian in X/Y, uniform in Z
    let normal = Normal::new(0.0, 1.5)?;
    let height = Uniform::new(0.0, 10.0);
    let x: Vec<f64> = (0..5_000).map(|_| normal.sample(&mut rng)).collect();
    let y: Vec<f64> = (0..5_000).map(|_| normal.sample(&mut rng) + 2.0).collect();
    let z: Vec<f64> = (0..5_000).map(|_| height.sample(&mut rng)).collect();

    println!("=== Spatial report ===");
    let config = ReportConfig::new(12);
    let report = AxesReport::build(&[x, y, z], &config)?;
    for (axis, histogram) in report.iter() {
        println!("{axis}: {histogram}");
    }
    println!("{}", report.to_json_pretty()?);

    // Integer detector counts: the range is narrower than the bin count,
    // so the width truncates to zero and the histogram collapses
    println!("\n=== Integer counts ===");
    let counts = [1, 1, 2, 2, 2, 3, 3, 3, 3];
    let collapsed = SingleReport::build(&counts, &ReportConfig::new(3))?;
    println!("{}", collapsed.to_json_string()?);

    // Same data as floats keeps three bins
    let as_floats: Vec<f64> = counts.iter().map(|&c| f64::from(c)).collect();
    let binned = SingleReport::build(&as_floats, &ReportConfig::new(3))?;
    println!("{}", binned.to_json_string()?);

    println!("\n=== Legacy remainder ===");
    let mut skewed: Vec<i32> = (0..=9).collect();
    skewed.extend([10, 10, 10]);
    let legacy = ReportConfig::new(3).with_remainder(RemainderPolicy::Legacy);
    let conserved = SingleReport::build(&skewed, &ReportConfig::new(3))?;
    let reproduced = SingleReport::build(&skewed, &legacy)?;
    println!("conserve: {:?}", conserved.data().frequencies());
    println!("legacy:   {:?}", reproduced.data().frequencies());

    let z_bins = report.axis(Axis::Z).len();
    println!("\nZ axis produced {z_bins} of {} requested bins", report.n_bins());
    Ok(())
}
