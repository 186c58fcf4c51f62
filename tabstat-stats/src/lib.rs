#![warn(missing_docs)]
//! Tabstat Statistical Engine
//!
//! Provides the numeric core for tabular analysis and benchmark summaries:
//! - Pearson product-moment correlation, single-pass and two-pass variants
//! - Cosine similarity
//! - Descriptive statistics (count, mean, std dev, min, max)
//! - Outlier detection via IQR fences
//! - Percentile computation with linear interpolation
//! - Percentile-bootstrap confidence intervals for the mean
//! - Whole-table analysis: per-column summaries and a pairwise correlation
//!   matrix over the numeric columns

mod analyze;
mod bootstrap;
mod correlation;
mod describe;
mod outliers;
mod percentiles;
mod similarity;

pub use analyze::{
    AnalysisError, ColumnSummary, PairCorrelation, TableAnalysis, analyze_table,
    correlation_matrix,
};
pub use bootstrap::{BootstrapConfig, BootstrapError, MeanCi, bootstrap_mean_ci};
pub use correlation::{CorrelationError, correlation, correlation_two_pass};
pub use describe::{Descriptive, describe};
pub use outliers::{OutlierPolicy, OutlierSplit, detect_outliers};
pub use percentiles::compute_percentile;
pub use similarity::cosine_similarity;

/// Default number of bootstrap resampling iterations.
pub const DEFAULT_BOOTSTRAP_ITERATIONS: usize = 10_000;

/// Default confidence level (95%).
pub const DEFAULT_CONFIDENCE_LEVEL: f64 = 0.95;
