#![warn(missing_docs)]
//! Tabstat Table Model
//!
//! Parses strict unquoted CSV into an immutable, typed [`Table`]:
//! - Fixed delimiters: `,` between fields, `\n` between rows; first row is
//!   the header
//! - Per-column type inference: a column is numeric iff every non-empty cell
//!   parses under the numeric grammar
//! - Row width is validated against the header; short or long rows are a
//!   parse error, never padded or truncated

mod error;
mod parse;
mod table;

pub use error::TableError;
pub use parse::parse_csv;
pub use table::{ColumnKind, Table};
