//! Strict unquoted-CSV parsing.

use crate::error::TableError;
use crate::table::{ColumnKind, Table};

/// Parse delimited text into a [`Table`].
///
/// The contract is strict unquoted CSV: `,` separates fields, `\n` separates
/// rows (a trailing `\r` per line is stripped), and the first row is the
/// header. Quoting is unsupported — a quote character is an ordinary cell
/// byte, so fields cannot contain embedded delimiters or newlines.
///
/// Blank lines are skipped. Every data row must have exactly as many cells
/// as the header; a mismatch fails with [`TableError::MalformedRow`] rather
/// than padding or truncating. An input with no header row fails with
/// [`TableError::EmptyInput`].
///
/// Column types are inferred after all rows are read: a column is
/// [`ColumnKind::Numeric`] iff every non-empty cell in it matches the
/// numeric grammar (optional sign, digits, optional fractional part,
/// optional exponent), otherwise the whole column is [`ColumnKind::Text`].
pub fn parse_csv(input: &str) -> Result<Table, TableError> {
    let mut lines = input.lines().enumerate();

    let columns: Vec<String> = match lines.next() {
        Some((_, header)) => split_row(header).map(str::to_string).collect(),
        None => return Err(TableError::EmptyInput),
    };
    let width = columns.len();

    let mut rows: Vec<Vec<String>> = Vec::new();
    for (i, line) in lines {
        if line.trim().is_empty() {
            continue;
        }
        let cells: Vec<String> = split_row(line).map(str::to_string).collect();
        if cells.len() != width {
            return Err(TableError::MalformedRow {
                row: i + 1,
                expected: width,
                actual: cells.len(),
            });
        }
        rows.push(cells);
    }

    let kinds = infer_kinds(&rows, width);
    Ok(Table::from_parts(columns, rows, kinds))
}

/// Split one line into cells, tolerating a Windows line ending.
fn split_row(line: &str) -> impl Iterator<Item = &str> {
    line.strip_suffix('\r').unwrap_or(line).split(',')
}

/// Infer each column's kind from the collected rows.
fn infer_kinds(rows: &[Vec<String>], width: usize) -> Vec<ColumnKind> {
    (0..width)
        .map(|col| {
            let all_numeric = rows.iter().all(|row| {
                let cell = row[col].trim();
                cell.is_empty() || parse_number(cell).is_some()
            });
            if all_numeric {
                ColumnKind::Numeric
            } else {
                ColumnKind::Text
            }
        })
        .collect()
}

/// Parse a cell under the numeric grammar: optional sign, digits, optional
/// fractional part, optional exponent. At least one digit is required, and
/// word spellings (`inf`, `nan`) are not numbers.
pub(crate) fn parse_number(s: &str) -> Option<f64> {
    if !matches_numeric_grammar(s) {
        return None;
    }
    s.parse().ok()
}

fn matches_numeric_grammar(s: &str) -> bool {
    let mut rest = s.strip_prefix(['+', '-']).unwrap_or(s);

    let int_len = leading_digits(rest);
    rest = &rest[int_len..];

    let mut frac_len = 0;
    if let Some(after_dot) = rest.strip_prefix('.') {
        frac_len = leading_digits(after_dot);
        rest = &after_dot[frac_len..];
    }

    // A mantissa needs digits on at least one side of the dot.
    if int_len == 0 && frac_len == 0 {
        return false;
    }

    if let Some(exp) = rest.strip_prefix(['e', 'E']) {
        let exp = exp.strip_prefix(['+', '-']).unwrap_or(exp);
        let exp_len = leading_digits(exp);
        return exp_len > 0 && exp_len == exp.len();
    }

    rest.is_empty()
}

fn leading_digits(s: &str) -> usize {
    s.bytes().take_while(|b| b.is_ascii_digit()).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_csv() {
        let table = parse_csv("age,weight\n25,60.5\n30,75.2\n").unwrap();
        assert_eq!(table.column_names(), ["age", "weight"]);
        assert_eq!(table.row_count(), 2);
        assert_eq!(table.numeric_column(0), Some(vec![25.0, 30.0]));
        assert_eq!(table.numeric_column(1), Some(vec![60.5, 75.2]));
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(parse_csv(""), Err(TableError::EmptyInput));
    }

    #[test]
    fn test_header_only() {
        let table = parse_csv("a,b,c\n").unwrap();
        assert_eq!(table.column_count(), 3);
        assert_eq!(table.row_count(), 0);
        // With no rows every column is vacuously numeric.
        assert!(table.is_numeric(0) && table.is_numeric(2));
    }

    #[test]
    fn test_malformed_row() {
        assert_eq!(
            parse_csv("a,b,c\n1,2\n"),
            Err(TableError::MalformedRow {
                row: 2,
                expected: 3,
                actual: 2,
            })
        );
    }

    #[test]
    fn test_malformed_row_too_long() {
        assert_eq!(
            parse_csv("a,b\n1,2\n1,2,3\n"),
            Err(TableError::MalformedRow {
                row: 3,
                expected: 2,
                actual: 3,
            })
        );
    }

    #[test]
    fn test_mixed_column_is_text() {
        let table = parse_csv("age,weight\n25,60.5\nthirty,75.2\n").unwrap();
        assert_eq!(table.kind(0), Some(ColumnKind::Text));
        assert_eq!(table.kind(1), Some(ColumnKind::Numeric));
        assert_eq!(table.numeric_column(0), None);
    }

    #[test]
    fn test_empty_cells_do_not_demote() {
        let table = parse_csv("v,w\n1,a\n,b\n3,c\n").unwrap();
        assert_eq!(table.kind(0), Some(ColumnKind::Numeric));
        let series = table.numeric_column(0).unwrap();
        assert_eq!(series[0], 1.0);
        assert!(series[1].is_nan());
        assert_eq!(series[2], 3.0);
    }

    #[test]
    fn test_duplicate_headers_preserved() {
        let table = parse_csv("x,x\n1,2\n").unwrap();
        assert_eq!(table.column_names(), ["x", "x"]);
    }

    #[test]
    fn test_blank_lines_skipped() {
        let table = parse_csv("a\n1\n\n2\n").unwrap();
        assert_eq!(table.row_count(), 2);
    }

    #[test]
    fn test_crlf_rows() {
        let table = parse_csv("a,b\r\n1,2\r\n").unwrap();
        assert_eq!(table.row_count(), 1);
        assert_eq!(table.cell(0, 1), Some("2"));
    }

    #[test]
    fn test_round_trip() {
        let input = "a,b,label\n1,2,x\n4,5,y\n";
        let table = parse_csv(input).unwrap();
        assert_eq!(parse_csv(&table.to_csv()).unwrap(), table);
    }

    #[test]
    fn test_numeric_grammar() {
        for ok in ["0", "42", "-17", "+2.5", "1.", ".5", "-.5", "1e3", "2.5E-4", "1e+10"] {
            assert!(parse_number(ok).is_some(), "{ok:?} should parse");
        }
        for bad in ["", ".", "+", "-", "1e", "1e+", "e3", "inf", "nan", "NaN", "0x10", "1.2.3", "1_000"] {
            assert!(parse_number(bad).is_none(), "{bad:?} should not parse");
        }
    }

    #[test]
    fn test_quotes_are_ordinary_bytes() {
        // Quoting is unsupported: the quoted comma still splits, so the row
        // has three cells against a two-cell header.
        assert_eq!(
            parse_csv("a,b\n\"1,2\",3\n"),
            Err(TableError::MalformedRow {
                row: 2,
                expected: 2,
                actual: 3,
            })
        );

        // Where widths line up, quotes are preserved as cell bytes.
        let table = parse_csv("a,b\n\"x\",\"y\"\n").unwrap();
        assert_eq!(table.cell(0, 0), Some("\"x\""));
        assert_eq!(table.kind(0), Some(ColumnKind::Text));
    }
}
