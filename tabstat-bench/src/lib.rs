#![warn(missing_docs)]
//! Tabstat Benchmark Harness
//!
//! Times two or more named candidates that share an identical input/output
//! contract and produces per-candidate measurements for ranking:
//! - Value-type [`Suite`]: candidates are registered in order at
//!   construction, no global state
//! - Criterion-style batched sampling: a warmup phase estimates iteration
//!   time, then iterations are grouped into samples to reduce noise
//! - A candidate that errors mid-run is reported as failed without aborting
//!   the other candidates
//!
//! Candidates run strictly serially; nothing else executes during a timing
//! loop.

mod measure;
mod suite;

pub use measure::Timer;
pub use suite::{
    CandidateError, CandidateMeasurement, CandidateOutcome, Suite, SuiteConfig,
};

/// Default number of samples to collect per candidate.
pub const DEFAULT_TARGET_SAMPLES: usize = 100;

/// Minimum samples required for a meaningful comparison.
pub const MIN_SAMPLE_COUNT: usize = 10;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constants() {
        assert_eq!(DEFAULT_TARGET_SAMPLES, 100);
        assert_eq!(MIN_SAMPLE_COUNT, 10);
    }
}
