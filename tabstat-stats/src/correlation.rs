//! Pearson Correlation
//!
//! Two interchangeable implementations of the product-moment coefficient:
//! the canonical single-pass form and a two-pass mean-subtracted form. Both
//! define zero-variance input to yield exactly 0 rather than NaN.

use thiserror::Error;

/// Errors from pairwise sequence operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CorrelationError {
    /// The two sequences have different lengths.
    #[error("length mismatch: left has {left} values, right has {right}")]
    LengthMismatch {
        /// Length of the first sequence.
        left: usize,
        /// Length of the second sequence.
        right: usize,
    },
}

/// Pearson correlation coefficient between two equal-length sequences.
///
/// Single pass over the data with five accumulators: O(n) time, O(1) extra
/// space, no intermediate mean computation. Returns a value in [-1, 1] up to
/// floating-point rounding, or exactly 0 when either sequence has zero
/// variance (the degenerate case, where the coefficient is mathematically
/// undefined).
///
/// This is the mathematically equivalent but less numerically stable variant
/// of the standard two-pass algorithm; for ill-conditioned input prefer
/// [`correlation_two_pass`].
pub fn correlation(x: &[f64], y: &[f64]) -> Result<f64, CorrelationError> {
    if x.len() != y.len() {
        return Err(CorrelationError::LengthMismatch {
            left: x.len(),
            right: y.len(),
        });
    }

    let n = x.len() as f64;
    let mut sum_x = 0.0;
    let mut sum_y = 0.0;
    let mut sq_x = 0.0;
    let mut sq_y = 0.0;
    let mut prod = 0.0;

    for (&a, &b) in x.iter().zip(y) {
        sum_x += a;
        sum_y += b;
        sq_x += a * a;
        sq_y += b * b;
        prod += a * b;
    }

    let numerator = n * prod - sum_x * sum_y;
    let denominator = ((n * sq_x - sum_x * sum_x) * (n * sq_y - sum_y * sum_y)).sqrt();

    if denominator == 0.0 {
        Ok(0.0)
    } else {
        Ok(numerator / denominator)
    }
}

/// Pearson correlation via the two-pass mean-subtracted formula.
///
/// Identical input/output contract to [`correlation`], including the
/// degenerate-case policy; trades a second pass over the data for better
/// numerical behavior on large or ill-conditioned values.
pub fn correlation_two_pass(x: &[f64], y: &[f64]) -> Result<f64, CorrelationError> {
    if x.len() != y.len() {
        return Err(CorrelationError::LengthMismatch {
            left: x.len(),
            right: y.len(),
        });
    }
    if x.is_empty() {
        return Ok(0.0);
    }

    let n = x.len() as f64;
    let mean_x = x.iter().sum::<f64>() / n;
    let mean_y = y.iter().sum::<f64>() / n;

    let mut cov = 0.0;
    let mut var_x = 0.0;
    let mut var_y = 0.0;
    for (&a, &b) in x.iter().zip(y) {
        let dx = a - mean_x;
        let dy = b - mean_y;
        cov += dx * dy;
        var_x += dx * dx;
        var_y += dy * dy;
    }

    let denominator = (var_x * var_y).sqrt();
    if denominator == 0.0 {
        Ok(0.0)
    } else {
        Ok(cov / denominator)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_perfect_linear() {
        let x = [1.0, 2.0, 3.0, 4.0, 5.0];
        let y = [2.0, 4.0, 6.0, 8.0, 10.0];
        assert_relative_eq!(correlation(&x, &y).unwrap(), 1.0);
    }

    #[test]
    fn test_perfect_linear_irregular_spacing() {
        let x = [1.0, 2.0, 4.0, 5.0];
        let y = [2.0, 4.0, 8.0, 10.0];
        assert_relative_eq!(correlation(&x, &y).unwrap(), 1.0);
    }

    #[test]
    fn test_degenerate_zero_variance() {
        let x = [1.0, 1.0, 1.0];
        let y = [5.0, 6.0, 7.0];
        assert_eq!(correlation(&x, &y).unwrap(), 0.0);
        assert_eq!(correlation(&y, &x).unwrap(), 0.0);
    }

    #[test]
    fn test_self_correlation() {
        let x = [3.0, 1.0, 4.0, 1.0, 5.0, 9.0];
        assert_relative_eq!(correlation(&x, &x).unwrap(), 1.0);
    }

    #[test]
    fn test_symmetry() {
        let x = [1.0, 3.0, 2.0, 5.0, 4.0];
        let y = [2.0, 1.0, 4.0, 3.0, 6.0];
        assert_relative_eq!(
            correlation(&x, &y).unwrap(),
            correlation(&y, &x).unwrap()
        );
    }

    #[test]
    fn test_scale_invariance() {
        let x = [1.0, 3.0, 2.0, 5.0, 4.0];
        let y = [2.0, 1.0, 4.0, 3.0, 6.0];
        let base = correlation(&x, &y).unwrap();

        let x3: Vec<f64> = x.iter().map(|v| v * 3.0).collect();
        let y7: Vec<f64> = y.iter().map(|v| v * 7.0).collect();
        assert_relative_eq!(correlation(&x3, &y7).unwrap(), base, epsilon = 1e-12);

        // Negating exactly one side flips the sign.
        let neg_x: Vec<f64> = x.iter().map(|v| -v).collect();
        assert_relative_eq!(correlation(&neg_x, &y).unwrap(), -base, epsilon = 1e-12);
    }

    #[test]
    fn test_anticorrelation() {
        let x = [1.0, 2.0, 3.0];
        let y = [3.0, 2.0, 1.0];
        assert_relative_eq!(correlation(&x, &y).unwrap(), -1.0);
    }

    #[test]
    fn test_length_mismatch() {
        let x = [1.0, 2.0, 3.0];
        let y = [2.0, 4.0, 6.0, 8.0];
        assert_eq!(
            correlation(&x, &y),
            Err(CorrelationError::LengthMismatch { left: 3, right: 4 })
        );
        assert_eq!(
            correlation_two_pass(&x, &y),
            Err(CorrelationError::LengthMismatch { left: 3, right: 4 })
        );
    }

    #[test]
    fn test_empty_is_degenerate() {
        assert_eq!(correlation(&[], &[]).unwrap(), 0.0);
        assert_eq!(correlation_two_pass(&[], &[]).unwrap(), 0.0);
    }

    #[test]
    fn test_two_pass_agrees_with_single_pass() {
        let x = [0.2, 1.7, 3.1, 4.4, 8.9, 2.2, 6.5];
        let y = [1.1, 2.3, 2.9, 5.0, 9.1, 1.8, 7.2];
        assert_relative_eq!(
            correlation(&x, &y).unwrap(),
            correlation_two_pass(&x, &y).unwrap(),
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_two_pass_degenerate() {
        let x = [4.0, 4.0, 4.0];
        let y = [1.0, 2.0, 3.0];
        assert_eq!(correlation_two_pass(&x, &y).unwrap(), 0.0);
    }
}
