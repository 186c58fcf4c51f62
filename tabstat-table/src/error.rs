//! Error types for table parsing.

use thiserror::Error;

/// Errors produced while parsing delimited text into a [`crate::Table`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TableError {
    /// The input contained no header row.
    #[error("input has no header row")]
    EmptyInput,

    /// A data row's cell count does not match the header's.
    #[error("malformed row {row}: expected {expected} cells, got {actual}")]
    MalformedRow {
        /// Row number in the input (1-based, header is row 1).
        row: usize,
        /// Cell count of the header.
        expected: usize,
        /// Cell count of the offending row.
        actual: usize,
    },
}
