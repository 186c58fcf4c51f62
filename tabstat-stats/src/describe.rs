//! Descriptive Statistics
//!
//! Count, mean, sample standard deviation, min and max over the finite
//! values of a sequence. NaN entries (empty cells in a numeric column) are
//! excluded from all five.

/// Summary of a single numeric sequence.
#[derive(Debug, Clone, PartialEq)]
pub struct Descriptive {
    /// Number of finite values.
    pub count: usize,
    /// Arithmetic mean of the finite values.
    pub mean: f64,
    /// Sample standard deviation (n − 1 denominator); 0 for fewer than two
    /// finite values.
    pub std_dev: f64,
    /// Smallest finite value, 0 when empty.
    pub min: f64,
    /// Largest finite value, 0 when empty.
    pub max: f64,
}

/// Compute descriptive statistics for a sequence.
pub fn describe(values: &[f64]) -> Descriptive {
    let finite: Vec<f64> = values.iter().copied().filter(|v| v.is_finite()).collect();
    if finite.is_empty() {
        return Descriptive {
            count: 0,
            mean: 0.0,
            std_dev: 0.0,
            min: 0.0,
            max: 0.0,
        };
    }

    let count = finite.len();
    let mean = finite.iter().sum::<f64>() / count as f64;

    let std_dev = if count < 2 {
        0.0
    } else {
        let variance =
            finite.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / (count - 1) as f64;
        variance.sqrt()
    };

    let min = finite
        .iter()
        .copied()
        .fold(f64::INFINITY, f64::min);
    let max = finite
        .iter()
        .copied()
        .fold(f64::NEG_INFINITY, f64::max);

    Descriptive {
        count,
        mean,
        std_dev,
        min,
        max,
    }
}
