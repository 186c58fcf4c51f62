//! The immutable table produced by parsing.

/// Inferred type of a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKind {
    /// Every non-empty cell parses as a double-precision number.
    Numeric,
    /// At least one non-empty cell is not a number.
    Text,
}

/// An in-memory table: ordered column names, ordered rows of cells, and a
/// per-column inferred [`ColumnKind`].
///
/// Constructed once by [`crate::parse_csv`] and immutable thereafter. Column
/// names need not be unique; duplicates are preserved, never merged. Every
/// row holds exactly as many cells as there are columns.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    columns: Vec<String>,
    rows: Vec<Vec<String>>,
    kinds: Vec<ColumnKind>,
}

impl Table {
    /// Assemble a table from pre-validated parts.
    ///
    /// Callers must uphold the width invariant; [`crate::parse_csv`] is the
    /// normal entry point.
    pub(crate) fn from_parts(
        columns: Vec<String>,
        rows: Vec<Vec<String>>,
        kinds: Vec<ColumnKind>,
    ) -> Self {
        debug_assert_eq!(columns.len(), kinds.len());
        debug_assert!(rows.iter().all(|r| r.len() == columns.len()));
        Self {
            columns,
            rows,
            kinds,
        }
    }

    /// Ordered column names.
    pub fn column_names(&self) -> &[String] {
        &self.columns
    }

    /// Number of columns.
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Number of data rows (the header is not a row).
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Ordered data rows.
    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// Inferred kind of the column at `index`, or `None` out of range.
    pub fn kind(&self, index: usize) -> Option<ColumnKind> {
        self.kinds.get(index).copied()
    }

    /// Whether the column at `index` is numeric.
    pub fn is_numeric(&self, index: usize) -> bool {
        matches!(self.kinds.get(index), Some(ColumnKind::Numeric))
    }

    /// Cell value at `(row, col)`, or `None` out of range.
    pub fn cell(&self, row: usize, col: usize) -> Option<&str> {
        self.rows.get(row).and_then(|r| r.get(col)).map(String::as_str)
    }

    /// Indices of all numeric columns, in declaration order.
    pub fn numeric_column_indices(&self) -> Vec<usize> {
        self.kinds
            .iter()
            .enumerate()
            .filter(|(_, k)| matches!(k, ColumnKind::Numeric))
            .map(|(i, _)| i)
            .collect()
    }

    /// The numeric series for the column at `index`: one `f64` per row.
    ///
    /// Returns `None` if the column is out of range or not numeric. Empty
    /// cells surface as `f64::NAN`; consumers decide how to treat them.
    pub fn numeric_column(&self, index: usize) -> Option<Vec<f64>> {
        if !self.is_numeric(index) {
            return None;
        }
        let values = self
            .rows
            .iter()
            .map(|row| {
                let cell = row[index].trim();
                if cell.is_empty() {
                    f64::NAN
                } else {
                    // Inference guarantees the parse succeeds.
                    cell.parse().unwrap_or(f64::NAN)
                }
            })
            .collect();
        Some(values)
    }

    /// Serialize back to delimited text: header plus one line per row, each
    /// terminated by `\n`. Reproduces cell values exactly.
    pub fn to_csv(&self) -> String {
        let mut out = String::new();
        out.push_str(&self.columns.join(","));
        out.push('\n');
        for row in &self.rows {
            out.push_str(&row.join(","));
            out.push('\n');
        }
        out
    }
}
