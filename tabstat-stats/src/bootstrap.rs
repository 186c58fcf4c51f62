//! Bootstrap Resampling
//!
//! Percentile bootstrap for the mean: resample with replacement, take the
//! mean of each resample, and read the confidence bounds off the resulting
//! distribution. Runs strictly after any timing loops, so the rayon
//! parallelism here cannot skew wall-clock measurements.

use crate::percentiles::compute_percentile;
use crate::{DEFAULT_BOOTSTRAP_ITERATIONS, DEFAULT_CONFIDENCE_LEVEL};
use rand::prelude::*;
use rayon::prelude::*;
use thiserror::Error;

/// Bootstrap configuration.
#[derive(Debug, Clone)]
pub struct BootstrapConfig {
    /// Number of resampling iterations.
    pub iterations: usize,
    /// Confidence level, e.g. 0.95 for a 95% interval.
    pub confidence_level: f64,
    /// Whether to generate resamples in parallel.
    pub parallel: bool,
}

impl Default for BootstrapConfig {
    fn default() -> Self {
        Self {
            iterations: DEFAULT_BOOTSTRAP_ITERATIONS,
            confidence_level: DEFAULT_CONFIDENCE_LEVEL,
            parallel: true,
        }
    }
}

/// Confidence interval for a mean.
#[derive(Debug, Clone, Copy)]
pub struct MeanCi {
    /// Lower bound.
    pub lower: f64,
    /// Upper bound.
    pub upper: f64,
    /// Confidence level the bounds were computed at.
    pub level: f64,
}

/// Errors from bootstrap computation.
#[derive(Debug, Error)]
pub enum BootstrapError {
    /// Too few samples to resample meaningfully.
    #[error("not enough samples: got {got}, need at least {min}")]
    NotEnoughSamples {
        /// Samples provided.
        got: usize,
        /// Minimum required.
        min: usize,
    },

    /// Confidence level outside (0, 1).
    #[error("invalid confidence level: {0} (must be between 0 and 1)")]
    InvalidConfidenceLevel(f64),
}

/// Compute a percentile-bootstrap confidence interval for the mean.
pub fn bootstrap_mean_ci(
    samples: &[f64],
    config: &BootstrapConfig,
) -> Result<MeanCi, BootstrapError> {
    if samples.len() < 3 {
        return Err(BootstrapError::NotEnoughSamples {
            got: samples.len(),
            min: 3,
        });
    }
    if config.confidence_level <= 0.0 || config.confidence_level >= 1.0 {
        return Err(BootstrapError::InvalidConfidenceLevel(
            config.confidence_level,
        ));
    }

    let n = samples.len();
    let point = samples.iter().sum::<f64>() / n as f64;

    // Zero variance: the interval collapses to the point estimate.
    if samples.iter().all(|&s| s == samples[0]) {
        return Ok(MeanCi {
            lower: point,
            upper: point,
            level: config.confidence_level,
        });
    }

    let means = if config.parallel {
        (0..config.iterations)
            .into_par_iter()
            .map_init(thread_rng, |rng, _| resample_mean(samples, rng))
            .collect::<Vec<f64>>()
    } else {
        let mut rng = thread_rng();
        (0..config.iterations)
            .map(|_| resample_mean(samples, &mut rng))
            .collect()
    };

    let alpha = (1.0 - config.confidence_level) / 2.0;
    Ok(MeanCi {
        lower: compute_percentile(&means, alpha * 100.0),
        upper: compute_percentile(&means, (1.0 - alpha) * 100.0),
        level: config.confidence_level,
    })
}

fn resample_mean(samples: &[f64], rng: &mut impl Rng) -> f64 {
    let n = samples.len();
    let sum: f64 = (0..n).map(|_| samples[rng.gen_range(0..n)]).sum();
    sum / n as f64
}
