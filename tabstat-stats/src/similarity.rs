//! Cosine Similarity
//!
//! Measures the cosine of the angle between two vectors of the same
//! dimension, in [-1, 1].

use crate::correlation::CorrelationError;

/// Cosine similarity of two n-dimensional vectors.
///
/// Fails with [`CorrelationError::LengthMismatch`] when the dimensions
/// differ. Returns 0 when either vector has zero magnitude.
pub fn cosine_similarity(a: &[f64], b: &[f64]) -> Result<f64, CorrelationError> {
    if a.len() != b.len() {
        return Err(CorrelationError::LengthMismatch {
            left: a.len(),
            right: b.len(),
        });
    }

    let denominator = magnitude(a) * magnitude(b);
    if denominator == 0.0 {
        Ok(0.0)
    } else {
        Ok(dot_product(a, b) / denominator)
    }
}

fn dot_product(a: &[f64], b: &[f64]) -> f64 {
    a.iter().zip(b).map(|(x, y)| x * y).sum()
}

fn magnitude(a: &[f64]) -> f64 {
    a.iter().map(|x| x * x).sum::<f64>().sqrt()
}
