//! Tabstat Comparison Example
//!
//! Times the single-pass and two-pass correlation implementations on the
//! same random input and prints the ranked report.
//!
//! Run with:
//!   cargo run --release --example compare

use rand::prelude::*;
use std::time::Duration;
use tabstat::prelude::*;

fn main() {
    let mut rng = StdRng::seed_from_u64(42);
    let x: Vec<f64> = (0..10_000).map(|_| rng.gen()).collect();
    let y: Vec<f64> = (0..10_000).map(|_| rng.gen()).collect();
    let (x2, y2) = (x.clone(), y.clone());

    let config = SuiteConfig {
        warmup_time: Duration::from_millis(200),
        measurement_time: Duration::from_secs(1),
        target_samples: 50,
        reject_outliers: true,
    };

    let measurements = Suite::new(config.clone())
        .add_fallible("single-pass", move || correlation(&x, &y))
        .add_fallible("two-pass", move || correlation_two_pass(&x2, &y2))
        .run_with_progress(|name| eprintln!("measuring {}...", name));

    let report = build_bench_report(&measurements, &config);
    print!("{}", format_bench_text(&report));
}
