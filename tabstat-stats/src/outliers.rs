//! Outlier Detection
//!
//! IQR fences: samples outside [Q1 − k·IQR, Q3 + k·IQR] are rejected. Used
//! by the benchmark report builder, where scheduler noise shows up as a
//! handful of extreme timings.

use crate::percentiles::compute_percentile;

/// How to treat outliers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OutlierPolicy {
    /// Keep every sample.
    None,
    /// IQR fences with multiplier `k` (1.5 is the standard choice).
    Iqr {
        /// Fence multiplier.
        k: f64,
    },
}

impl Default for OutlierPolicy {
    fn default() -> Self {
        OutlierPolicy::Iqr { k: 1.5 }
    }
}

/// Result of splitting samples at the fences.
#[derive(Debug, Clone)]
pub struct OutlierSplit {
    /// Samples inside the fences, in input order.
    pub kept: Vec<f64>,
    /// Number of rejected samples.
    pub rejected: usize,
    /// Lower fence used for the split.
    pub lower_fence: f64,
    /// Upper fence used for the split.
    pub upper_fence: f64,
}

/// Split samples into kept and rejected according to `policy`.
pub fn detect_outliers(samples: &[f64], policy: OutlierPolicy) -> OutlierSplit {
    match policy {
        OutlierPolicy::None => OutlierSplit {
            kept: samples.to_vec(),
            rejected: 0,
            lower_fence: f64::NEG_INFINITY,
            upper_fence: f64::INFINITY,
        },
        OutlierPolicy::Iqr { k } => {
            let q1 = compute_percentile(samples, 25.0);
            let q3 = compute_percentile(samples, 75.0);
            let iqr = q3 - q1;
            let lower_fence = q1 - k * iqr;
            let upper_fence = q3 + k * iqr;

            let kept: Vec<f64> = samples
                .iter()
                .copied()
                .filter(|&s| s >= lower_fence && s <= upper_fence)
                .collect();
            let rejected = samples.len() - kept.len();

            OutlierSplit {
                kept,
                rejected,
                lower_fence,
                upper_fence,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_outliers() {
        let samples = vec![1.0, 2.0, 3.0, 4.0, 5.0];
        let split = detect_outliers(&samples, OutlierPolicy::default());
        assert_eq!(split.rejected, 0);
        assert_eq!(split.kept.len(), 5);
    }

    #[test]
    fn test_high_outlier_rejected() {
        let samples = vec![1.0, 2.0, 3.0, 4.0, 5.0, 100.0];
        let split = detect_outliers(&samples, OutlierPolicy::default());
        assert_eq!(split.rejected, 1);
        assert!(!split.kept.contains(&100.0));
    }

    #[test]
    fn test_policy_none_keeps_everything() {
        let samples = vec![1.0, 2.0, 100.0];
        let split = detect_outliers(&samples, OutlierPolicy::None);
        assert_eq!(split.rejected, 0);
        assert_eq!(split.kept, samples);
    }

    #[test]
    fn test_empty_samples() {
        let split = detect_outliers(&[], OutlierPolicy::default());
        assert!(split.kept.is_empty());
        assert_eq!(split.rejected, 0);
    }
}
