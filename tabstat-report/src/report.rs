//! Benchmark Report Building
//!
//! Turns raw [`CandidateMeasurement`]s into a ranked [`BenchReport`]:
//! summary statistics per candidate, optional IQR outlier rejection,
//! bootstrap confidence interval for the mean, operations per second, and a
//! fastest-first total order with declaration-order tie-breaking. Failed
//! candidates sort last and are excluded from the fastest pick.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tabstat_bench::{CandidateMeasurement, CandidateOutcome, SuiteConfig};
use tabstat_stats::{BootstrapConfig, OutlierPolicy, bootstrap_mean_ci, describe, detect_outliers};

/// Complete benchmark comparison report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BenchReport {
    /// Run metadata.
    pub meta: ReportMeta,
    /// Per-candidate entries, ranked fastest-first; failed candidates last.
    pub candidates: Vec<CandidateReport>,
    /// Name of the fastest completed candidate, if any completed.
    pub fastest: Option<String>,
}

/// Report metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportMeta {
    /// Crate version that produced the report.
    pub version: String,
    /// When the report was built.
    pub timestamp: DateTime<Utc>,
    /// Echo of the suite configuration.
    pub config: ReportConfig,
}

/// Suite configuration captured in report metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Warmup duration in nanoseconds.
    pub warmup_time_ns: u64,
    /// Measurement time budget in nanoseconds.
    pub measurement_time_ns: u64,
    /// Sample target per candidate.
    pub target_samples: usize,
    /// Whether IQR outliers were rejected for central tendency.
    pub reject_outliers: bool,
}

/// Candidate execution status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CandidateStatus {
    /// Measurement completed.
    Passed,
    /// The candidate errored during measurement.
    Failed,
}

/// One candidate's entry in the report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CandidateReport {
    /// Candidate name as registered.
    pub name: String,
    /// Completed or failed.
    pub status: CandidateStatus,
    /// Number of samples collected.
    pub samples: usize,
    /// Iterations performed during measurement.
    pub iterations: u64,
    /// Mean time per iteration in nanoseconds (outliers rejected when
    /// configured).
    pub mean_ns: f64,
    /// Sample standard deviation in nanoseconds.
    pub std_dev_ns: f64,
    /// Fastest sample (all samples, outliers preserved).
    pub min_ns: f64,
    /// Slowest sample (all samples, outliers preserved).
    pub max_ns: f64,
    /// Bootstrap confidence interval for the mean; collapses to the point
    /// estimate when the interval cannot be computed.
    pub ci_lower_ns: f64,
    /// Upper bound of the confidence interval.
    pub ci_upper_ns: f64,
    /// Confidence level of the interval.
    pub ci_level: f64,
    /// Mean operations per second; 0 for failed candidates.
    pub ops_per_sec: f64,
    /// Samples rejected as outliers.
    pub outliers_rejected: usize,
    /// Rendered error for failed candidates.
    pub failure: Option<String>,
}

/// Build a ranked report from suite measurements.
pub fn build_bench_report(
    measurements: &[CandidateMeasurement],
    config: &SuiteConfig,
) -> BenchReport {
    let mut candidates: Vec<CandidateReport> = measurements
        .iter()
        .map(|m| candidate_report(m, config))
        .collect();

    // Fastest first; failures after every completed candidate. The sort is
    // stable and the measurements arrive in declaration order, so exact
    // throughput ties keep declaration order.
    candidates.sort_by(|a, b| {
        let a_failed = a.status == CandidateStatus::Failed;
        let b_failed = b.status == CandidateStatus::Failed;
        a_failed.cmp(&b_failed).then(
            b.ops_per_sec
                .partial_cmp(&a.ops_per_sec)
                .unwrap_or(std::cmp::Ordering::Equal),
        )
    });

    let fastest = candidates
        .iter()
        .find(|c| c.status == CandidateStatus::Passed)
        .map(|c| c.name.clone());

    BenchReport {
        meta: ReportMeta {
            version: env!("CARGO_PKG_VERSION").to_string(),
            timestamp: Utc::now(),
            config: ReportConfig {
                warmup_time_ns: config.warmup_time.as_nanos() as u64,
                measurement_time_ns: config.measurement_time.as_nanos() as u64,
                target_samples: config.target_samples,
                reject_outliers: config.reject_outliers,
            },
        },
        candidates,
        fastest,
    }
}

fn candidate_report(m: &CandidateMeasurement, config: &SuiteConfig) -> CandidateReport {
    if let CandidateOutcome::Failed(error) = &m.outcome {
        return CandidateReport {
            name: m.name.clone(),
            status: CandidateStatus::Failed,
            samples: 0,
            iterations: 0,
            mean_ns: 0.0,
            std_dev_ns: 0.0,
            min_ns: 0.0,
            max_ns: 0.0,
            ci_lower_ns: 0.0,
            ci_upper_ns: 0.0,
            ci_level: 0.0,
            ops_per_sec: 0.0,
            outliers_rejected: 0,
            failure: Some(error.to_string()),
        };
    }

    let policy = if config.reject_outliers {
        OutlierPolicy::default()
    } else {
        OutlierPolicy::None
    };
    let split = detect_outliers(&m.samples, policy);

    // Central tendency from cleaned samples; extremes from all samples, the
    // rejected tail included.
    let cleaned = describe(&split.kept);
    let all = describe(&m.samples);

    let bootstrap_config = BootstrapConfig::default();
    let (ci_lower_ns, ci_upper_ns) = match bootstrap_mean_ci(&m.samples, &bootstrap_config) {
        Ok(ci) => (ci.lower, ci.upper),
        Err(_) => (cleaned.mean, cleaned.mean),
    };

    let ops_per_sec = if cleaned.mean > 0.0 {
        1_000_000_000.0 / cleaned.mean
    } else {
        0.0
    };

    CandidateReport {
        name: m.name.clone(),
        status: CandidateStatus::Passed,
        samples: m.samples.len(),
        iterations: m.iterations,
        mean_ns: cleaned.mean,
        std_dev_ns: cleaned.std_dev,
        min_ns: all.min,
        max_ns: all.max,
        ci_lower_ns,
        ci_upper_ns,
        ci_level: bootstrap_config.confidence_level,
        ops_per_sec,
        outliers_rejected: split.rejected,
        failure: None,
    }
}
