//! Suite - The Candidate Comparison API
//!
//! A `Suite` is a plain value holding an ordered list of named candidates
//! and a configuration. `run()` measures each candidate serially and returns
//! the raw measurements; ranking and rendering happen downstream.

use crate::measure::Timer;
use crate::{DEFAULT_TARGET_SAMPLES, MIN_SAMPLE_COUNT};
use std::fmt::Display;
use std::time::{Duration, Instant};
use thiserror::Error;

/// A candidate call failed during measurement.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CandidateError {
    /// The candidate returned an error while being timed.
    #[error("candidate '{name}' failed: {message}")]
    CandidateFailed {
        /// Candidate name as registered.
        name: String,
        /// Rendered error from the candidate.
        message: String,
    },
}

/// Suite configuration.
#[derive(Debug, Clone)]
pub struct SuiteConfig {
    /// Warmup duration before measurement; timings collected here only size
    /// the sample batches.
    pub warmup_time: Duration,
    /// Soft time budget for the measurement phase. Sampling stops once it is
    /// exhausted, but never below the minimum sample count.
    pub measurement_time: Duration,
    /// Number of samples to aim for per candidate (clamped to at least
    /// [`MIN_SAMPLE_COUNT`]).
    pub target_samples: usize,
    /// Whether the report builder should reject IQR outliers before
    /// computing central tendency.
    pub reject_outliers: bool,
}

impl Default for SuiteConfig {
    fn default() -> Self {
        Self {
            warmup_time: Duration::from_secs(1),
            measurement_time: Duration::from_secs(3),
            target_samples: DEFAULT_TARGET_SAMPLES,
            reject_outliers: true,
        }
    }
}

type CandidateFn = Box<dyn FnMut() -> Result<(), String>>;

struct Candidate {
    name: String,
    run: CandidateFn,
}

/// How a candidate's measurement ended.
#[derive(Debug, Clone, PartialEq)]
pub enum CandidateOutcome {
    /// All requested sampling completed.
    Completed,
    /// The candidate errored; measurement was aborted.
    Failed(CandidateError),
}

/// Raw measurement of one candidate.
#[derive(Debug, Clone)]
pub struct CandidateMeasurement {
    /// Candidate name as registered.
    pub name: String,
    /// Declaration index within the suite. Measurements are returned in
    /// this order, which downstream ranking uses to break throughput ties.
    pub index: usize,
    /// Per-sample durations in nanoseconds; each sample is the average of a
    /// batch of iterations.
    pub samples: Vec<f64>,
    /// Iterations performed during measurement (warmup excluded).
    pub iterations: u64,
    /// Total measured time in nanoseconds.
    pub total_time_ns: u64,
    /// Whether the candidate completed or failed.
    pub outcome: CandidateOutcome,
}

impl CandidateMeasurement {
    /// Whether this candidate completed its measurement.
    pub fn is_completed(&self) -> bool {
        matches!(self.outcome, CandidateOutcome::Completed)
    }
}

/// An ordered collection of named candidates under one configuration.
pub struct Suite {
    config: SuiteConfig,
    candidates: Vec<Candidate>,
}

impl Suite {
    /// Create an empty suite.
    pub fn new(config: SuiteConfig) -> Self {
        Self {
            config,
            candidates: Vec::new(),
        }
    }

    /// The suite's configuration.
    pub fn config(&self) -> &SuiteConfig {
        &self.config
    }

    /// Register an infallible candidate. Declaration order is preserved.
    ///
    /// The closure's return value is routed through `black_box` so the
    /// computation cannot be optimized away.
    pub fn add<T, F>(self, name: impl Into<String>, mut f: F) -> Self
    where
        F: FnMut() -> T + 'static,
    {
        self.add_fallible(name, move || -> Result<T, std::convert::Infallible> {
            Ok(f())
        })
    }

    /// Register a fallible candidate. An `Err` during measurement marks the
    /// candidate failed without affecting the others.
    pub fn add_fallible<T, E, F>(mut self, name: impl Into<String>, mut f: F) -> Self
    where
        F: FnMut() -> Result<T, E> + 'static,
        E: Display,
    {
        self.candidates.push(Candidate {
            name: name.into(),
            run: Box::new(move || match f() {
                Ok(value) => {
                    std::hint::black_box(value);
                    Ok(())
                }
                Err(e) => Err(e.to_string()),
            }),
        });
        self
    }

    /// Number of registered candidates.
    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    /// Whether the suite has no candidates.
    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    /// Measure every candidate serially, in declaration order.
    pub fn run(self) -> Vec<CandidateMeasurement> {
        self.run_with_progress(|_| {})
    }

    /// Like [`Suite::run`], invoking `progress` with each candidate's name
    /// just before that candidate is measured. Display stays at the
    /// boundary; the callback must not do work heavy enough to matter, as it
    /// runs between candidates, never inside a timing loop.
    pub fn run_with_progress<P>(self, mut progress: P) -> Vec<CandidateMeasurement>
    where
        P: FnMut(&str),
    {
        let config = self.config;
        self.candidates
            .into_iter()
            .enumerate()
            .map(|(index, candidate)| {
                progress(&candidate.name);
                measure_candidate(index, candidate, &config)
            })
            .collect()
    }
}

/// Run one candidate through warmup and measurement.
fn measure_candidate(
    index: usize,
    mut candidate: Candidate,
    config: &SuiteConfig,
) -> CandidateMeasurement {
    let name = candidate.name;
    let target_samples = config.target_samples.max(MIN_SAMPLE_COUNT);
    let min_samples = MIN_SAMPLE_COUNT.min(target_samples);

    // Warmup: raw per-iteration timings estimate the batch size.
    let mut warmup_times: Vec<u64> = Vec::new();
    let warmup_start = Instant::now();
    while warmup_start.elapsed() < config.warmup_time {
        let timer = Timer::start();
        if let Err(message) = (candidate.run)() {
            return failed(name, index, message);
        }
        warmup_times.push(timer.stop());
    }

    let iters_per_sample = estimate_iters_per_sample(
        &warmup_times,
        config.measurement_time.as_nanos() as u64,
        target_samples,
    );

    // Measurement: batch iterations into samples until the target is met,
    // or the time budget runs out with at least the minimum collected.
    let mut samples: Vec<f64> = Vec::with_capacity(target_samples);
    let mut iterations: u64 = 0;
    let mut total_time_ns: u64 = 0;
    let measure_start = Instant::now();

    while samples.len() < target_samples {
        let mut batch_ns: u64 = 0;
        for _ in 0..iters_per_sample {
            let timer = Timer::start();
            if let Err(message) = (candidate.run)() {
                return failed(name, index, message);
            }
            batch_ns += timer.stop();
        }
        samples.push(batch_ns as f64 / iters_per_sample as f64);
        iterations += iters_per_sample;
        total_time_ns += batch_ns;

        if measure_start.elapsed() >= config.measurement_time && samples.len() >= min_samples {
            break;
        }
    }

    CandidateMeasurement {
        name,
        index,
        samples,
        iterations,
        total_time_ns,
        outcome: CandidateOutcome::Completed,
    }
}

/// Size sample batches from warmup timings; one iteration per sample when
/// warmup produced nothing usable.
fn estimate_iters_per_sample(warmup_times: &[u64], measurement_ns: u64, samples: usize) -> u64 {
    if warmup_times.is_empty() {
        return 1;
    }
    let est_iter_ns = (warmup_times.iter().sum::<u64>() / warmup_times.len() as u64).max(1);
    let time_per_sample = measurement_ns / samples as u64;
    (time_per_sample / est_iter_ns).max(1)
}

fn failed(name: String, index: usize, message: String) -> CandidateMeasurement {
    let error = CandidateError::CandidateFailed {
        name: name.clone(),
        message,
    };
    CandidateMeasurement {
        name,
        index,
        samples: Vec::new(),
        iterations: 0,
        total_time_ns: 0,
        outcome: CandidateOutcome::Failed(error),
    }
}
