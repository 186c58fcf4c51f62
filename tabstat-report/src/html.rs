//! HTML Output
//!
//! Plain thead/tbody markup, suitable for dropping into a results pane.
//! Cell text is escaped; no styling or scripts are emitted.

use crate::RenderOptions;
use tabstat_stats::TableAnalysis;
use tabstat_table::Table;

/// Render a parsed table as an HTML `<table>`.
///
/// With `include_text_columns` off, text columns are omitted from both the
/// header and the rows.
pub fn render_table_html(table: &Table, options: &RenderOptions) -> String {
    let visible: Vec<usize> = (0..table.column_count())
        .filter(|&i| options.include_text_columns || table.is_numeric(i))
        .collect();

    let mut html = String::new();
    html.push_str("<table>");

    html.push_str("<thead><tr>");
    for &i in &visible {
        html.push_str(&format!("<th>{}</th>", escape(&table.column_names()[i])));
    }
    html.push_str("</tr></thead>");

    html.push_str("<tbody>");
    for row in table.rows() {
        html.push_str("<tr>");
        for &i in &visible {
            html.push_str(&format!("<td>{}</td>", escape(&row[i])));
        }
        html.push_str("</tr>");
    }
    html.push_str("</tbody>");

    html.push_str("</table>");
    html
}

/// Render an analysis as HTML: a column-summary table, a correlation table,
/// and the data table itself.
pub fn render_analysis_html(
    table: &Table,
    analysis: &TableAnalysis,
    options: &RenderOptions,
) -> String {
    let mut html = String::new();

    html.push_str("<h3>Columns</h3>");
    html.push_str("<table><thead><tr>");
    for heading in ["column", "count", "mean", "stddev", "min", "max"] {
        html.push_str(&format!("<th>{}</th>", heading));
    }
    html.push_str("</tr></thead><tbody>");
    for col in &analysis.columns {
        html.push_str(&format!(
            "<tr><td>{}</td><td>{}</td><td>{:.4}</td><td>{:.4}</td><td>{:.4}</td><td>{:.4}</td></tr>",
            escape(&col.name),
            col.count,
            col.mean,
            col.std_dev,
            col.min,
            col.max
        ));
    }
    html.push_str("</tbody></table>");

    if !analysis.correlations.is_empty() {
        html.push_str("<h3>Correlations</h3>");
        html.push_str("<table><thead><tr><th>left</th><th>right</th><th>coefficient</th></tr></thead><tbody>");
        for pair in &analysis.correlations {
            html.push_str(&format!(
                "<tr><td>{}</td><td>{}</td><td>{:+.4}</td></tr>",
                escape(&pair.left),
                escape(&pair.right),
                pair.coefficient
            ));
        }
        html.push_str("</tbody></table>");
    }

    html.push_str("<h3>Data</h3>");
    html.push_str(&render_table_html(table, options));

    html
}

fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use tabstat_stats::analyze_table;
    use tabstat_table::parse_csv;

    #[test]
    fn test_table_html_shape() {
        let table = parse_csv("A,B,C\n1,2,3\n4,5,6\n7,8,9\n").unwrap();
        let html = render_table_html(&table, &RenderOptions::default());
        let expected = concat!(
            "<table><thead><tr><th>A</th><th>B</th><th>C</th></tr></thead>",
            "<tbody><tr><td>1</td><td>2</td><td>3</td></tr>",
            "<tr><td>4</td><td>5</td><td>6</td></tr>",
            "<tr><td>7</td><td>8</td><td>9</td></tr></tbody></table>"
        );
        assert_eq!(html, expected);
    }

    #[test]
    fn test_text_columns_omitted() {
        let table = parse_csv("x,label\n1,a\n2,b\n").unwrap();
        let options = RenderOptions {
            include_text_columns: false,
        };
        let html = render_table_html(&table, &options);
        assert!(html.contains("<th>x</th>"));
        assert!(!html.contains("label"));
        assert!(!html.contains("<td>a</td>"));
    }

    #[test]
    fn test_cells_escaped() {
        let table = parse_csv("col\n<b>&\n").unwrap();
        let html = render_table_html(&table, &RenderOptions::default());
        assert!(html.contains("<td>&lt;b&gt;&amp;</td>"));
    }

    #[test]
    fn test_analysis_html_sections() {
        let table = parse_csv("x,y\n1,2\n2,4\n3,6\n").unwrap();
        let analysis = analyze_table(&table);
        let html = render_analysis_html(&table, &analysis, &RenderOptions::default());

        assert!(html.contains("<h3>Columns</h3>"));
        assert!(html.contains("<h3>Correlations</h3>"));
        assert!(html.contains("<td>+1.0000</td>"));
        assert!(html.contains("<h3>Data</h3>"));
    }
}
