#![warn(missing_docs)]
//! # Tabstat
//!
//! A small tabular-statistics engine with a micro-benchmark harness:
//! - **Parsing**: strict unquoted CSV into an immutable, typed [`Table`]
//! - **Statistics**: Pearson correlation (single-pass and two-pass),
//!   cosine similarity, per-column descriptive stats, whole-table analysis
//! - **Benchmarking**: a value-type [`Suite`] that times named candidates
//!   sharing one contract and ranks them by throughput
//! - **Rendering**: pure functions from tables, analyses and reports to
//!   text, HTML, SVG and JSON
//!
//! ## Quick Start
//!
//! ```
//! use tabstat::prelude::*;
//!
//! let table = parse_csv("x,y\n1,2\n2,4\n3,6\n").unwrap();
//! let analysis = analyze_table(&table);
//! assert_eq!(analysis.correlations[0].coefficient, 1.0);
//! ```
//!
//! ## Comparing implementations
//!
//! ```
//! use std::time::Duration;
//! use tabstat::prelude::*;
//!
//! let config = SuiteConfig {
//!     warmup_time: Duration::from_millis(2),
//!     measurement_time: Duration::from_millis(10),
//!     target_samples: 10,
//!     reject_outliers: true,
//! };
//! let x = vec![1.0, 2.0, 3.0, 4.0, 5.0];
//! let y = vec![2.0, 4.0, 6.0, 8.0, 10.0];
//! let (x2, y2) = (x.clone(), y.clone());
//!
//! let measurements = Suite::new(config.clone())
//!     .add_fallible("single-pass", move || correlation(&x, &y))
//!     .add_fallible("two-pass", move || correlation_two_pass(&x2, &y2))
//!     .run();
//! let report = build_bench_report(&measurements, &config);
//! assert!(report.fastest.is_some());
//! ```

// Re-export the table model
pub use tabstat_table::{ColumnKind, Table, TableError, parse_csv};

// Re-export statistics
pub use tabstat_stats::{
    AnalysisError, BootstrapConfig, BootstrapError, ColumnSummary, CorrelationError, Descriptive,
    MeanCi, OutlierPolicy, PairCorrelation, TableAnalysis, analyze_table, bootstrap_mean_ci,
    correlation, correlation_matrix, correlation_two_pass, cosine_similarity, describe,
};

// Re-export the benchmark harness
pub use tabstat_bench::{
    CandidateError, CandidateMeasurement, CandidateOutcome, Suite, SuiteConfig,
};

// Re-export reporting
pub use tabstat_report::{
    BenchReport, CandidateReport, CandidateStatus, OutputFormat, RenderOptions, SvgError,
    SvgOptions, build_bench_report, format_analysis_text, format_bench_text,
    generate_json_analysis, generate_json_report, render_analysis_html, render_table_html,
    scatter_svg,
};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{
        Suite, SuiteConfig, Table, analyze_table, build_bench_report, correlation,
        correlation_matrix, correlation_two_pass, format_analysis_text, format_bench_text,
        parse_csv, render_analysis_html, render_table_html,
    };
}

/// Run the tabstat CLI.
///
/// Call this from a binary's `main()`:
/// ```ignore
/// fn main() -> anyhow::Result<()> {
///     tabstat::run()
/// }
/// ```
pub use tabstat_cli::run;
