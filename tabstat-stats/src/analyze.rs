//! Whole-Table Analysis
//!
//! Descriptive statistics for every numeric column and the Pearson
//! coefficient for every pair of distinct numeric columns. Text columns are
//! excluded from the numbers but their names are carried so a renderer can
//! echo them.

use crate::correlation::correlation;
use crate::describe::describe;
use serde::{Deserialize, Serialize};
use tabstat_table::Table;
use thiserror::Error;

/// Errors from table-level analysis.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnalysisError {
    /// A correlation matrix needs at least two numeric columns.
    #[error("table has fewer than two numeric columns")]
    NoNumericColumns,
}

/// Descriptive summary of one numeric column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnSummary {
    /// Column name (duplicates preserved from the header).
    pub name: String,
    /// Number of non-empty cells.
    pub count: usize,
    /// Mean of the non-empty cells.
    pub mean: f64,
    /// Sample standard deviation.
    pub std_dev: f64,
    /// Smallest value.
    pub min: f64,
    /// Largest value.
    pub max: f64,
}

/// Pearson coefficient for one pair of numeric columns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PairCorrelation {
    /// Name of the first column of the pair.
    pub left: String,
    /// Name of the second column of the pair.
    pub right: String,
    /// The coefficient, in [-1, 1], or 0 for the degenerate case.
    pub coefficient: f64,
}

/// Full analysis of a parsed table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableAnalysis {
    /// One summary per numeric column, in declaration order.
    pub columns: Vec<ColumnSummary>,
    /// Upper-triangle pairwise correlations, in declaration order.
    pub correlations: Vec<PairCorrelation>,
    /// Names of the columns excluded as text.
    pub text_columns: Vec<String>,
}

/// Analyze a table: summaries for every numeric column and correlations for
/// every pair of distinct numeric columns.
///
/// Always succeeds: with fewer than two numeric columns the correlation list
/// is empty, and a table with no numeric columns at all simply yields no
/// summaries — neither situation is an error here. Use
/// [`correlation_matrix`] for the strict form.
///
/// Rows with an empty cell in either column of a pair are dropped from that
/// pair's computation (pairwise-complete observations).
pub fn analyze_table(table: &Table) -> TableAnalysis {
    let numeric = table.numeric_column_indices();

    let columns = numeric
        .iter()
        .map(|&i| {
            let series = table.numeric_column(i).unwrap_or_default();
            let d = describe(&series);
            ColumnSummary {
                name: table.column_names()[i].clone(),
                count: d.count,
                mean: d.mean,
                std_dev: d.std_dev,
                min: d.min,
                max: d.max,
            }
        })
        .collect();

    let correlations = pair_correlations(table, &numeric);

    let text_columns = (0..table.column_count())
        .filter(|&i| !table.is_numeric(i))
        .map(|i| table.column_names()[i].clone())
        .collect();

    TableAnalysis {
        columns,
        correlations,
        text_columns,
    }
}

/// The strict pairwise form: fails with [`AnalysisError::NoNumericColumns`]
/// when the table has fewer than two numeric columns.
pub fn correlation_matrix(table: &Table) -> Result<Vec<PairCorrelation>, AnalysisError> {
    let numeric = table.numeric_column_indices();
    if numeric.len() < 2 {
        return Err(AnalysisError::NoNumericColumns);
    }
    Ok(pair_correlations(table, &numeric))
}

fn pair_correlations(table: &Table, numeric: &[usize]) -> Vec<PairCorrelation> {
    let mut pairs = Vec::new();
    for (a, &left_idx) in numeric.iter().enumerate() {
        let left_series = match table.numeric_column(left_idx) {
            Some(s) => s,
            None => continue,
        };
        for &right_idx in &numeric[a + 1..] {
            let right_series = match table.numeric_column(right_idx) {
                Some(s) => s,
                None => continue,
            };

            // Pairwise-complete: keep rows finite in both columns.
            let (xs, ys): (Vec<f64>, Vec<f64>) = left_series
                .iter()
                .zip(&right_series)
                .filter(|(x, y)| x.is_finite() && y.is_finite())
                .map(|(&x, &y)| (x, y))
                .unzip();

            let coefficient = correlation(&xs, &ys)
                .expect("pairwise-complete series have equal length");

            pairs.push(PairCorrelation {
                left: table.column_names()[left_idx].clone(),
                right: table.column_names()[right_idx].clone(),
                coefficient,
            });
        }
    }
    pairs
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use tabstat_table::parse_csv;

    #[test]
    fn test_matrix_upper_triangle() {
        // A and C are identical; B is constant.
        let table = parse_csv("A,B,C\n1,0,1\n4,0,4\n7,0,7\n7,0,7\n").unwrap();
        let pairs = correlation_matrix(&table).unwrap();

        assert_eq!(pairs.len(), 3);
        assert_eq!((pairs[0].left.as_str(), pairs[0].right.as_str()), ("A", "B"));
        assert_eq!(pairs[0].coefficient, 0.0);
        assert_eq!((pairs[1].left.as_str(), pairs[1].right.as_str()), ("A", "C"));
        assert_relative_eq!(pairs[1].coefficient, 1.0);
        assert_eq!((pairs[2].left.as_str(), pairs[2].right.as_str()), ("B", "C"));
        assert_eq!(pairs[2].coefficient, 0.0);
    }

    #[test]
    fn test_analyze_summaries() {
        let table = parse_csv("age,weight\n25,60.5\n30,75.2\n").unwrap();
        let analysis = analyze_table(&table);

        assert_eq!(analysis.columns.len(), 2);
        assert_eq!(analysis.columns[0].name, "age");
        assert_eq!(analysis.columns[0].count, 2);
        assert_relative_eq!(analysis.columns[0].mean, 27.5);
        assert_eq!(analysis.correlations.len(), 1);
        assert!(analysis.text_columns.is_empty());
    }

    #[test]
    fn test_analyze_single_numeric_column() {
        let table = parse_csv("v,label\n1,a\n2,b\n").unwrap();
        let analysis = analyze_table(&table);

        assert_eq!(analysis.columns.len(), 1);
        assert!(analysis.correlations.is_empty());
        assert_eq!(analysis.text_columns, vec!["label".to_string()]);
    }

    #[test]
    fn test_analyze_no_numeric_columns_is_not_an_error() {
        let table = parse_csv("a,b\nx,y\n").unwrap();
        let analysis = analyze_table(&table);
        assert!(analysis.columns.is_empty());
        assert!(analysis.correlations.is_empty());
    }

    #[test]
    fn test_matrix_requires_two_numeric_columns() {
        let table = parse_csv("v,label\n1,a\n2,b\n").unwrap();
        assert_eq!(
            correlation_matrix(&table),
            Err(AnalysisError::NoNumericColumns)
        );
    }

    #[test]
    fn test_pairwise_complete_rows() {
        // Row 2 has an empty cell in x: dropped from the pair, leaving a
        // perfect linear relation in the remaining rows.
        let table = parse_csv("x,y\n1,2\n,9\n3,6\n4,8\n").unwrap();
        let pairs = correlation_matrix(&table).unwrap();
        assert_relative_eq!(pairs[0].coefficient, 1.0);
    }
}
