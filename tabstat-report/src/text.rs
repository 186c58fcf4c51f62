//! Human-Readable Output
//!
//! Terminal-friendly rendering for benchmark reports and table analyses:
//! status icons, aligned metrics, and a closing `Fastest is <name>` line.

use crate::report::{BenchReport, CandidateStatus};
use crate::RenderOptions;
use tabstat_stats::TableAnalysis;
use tabstat_table::Table;

/// Format a benchmark report for terminal display.
pub fn format_bench_text(report: &BenchReport) -> String {
    let mut output = String::new();

    output.push('\n');
    output.push_str("Benchmark Results\n");
    output.push_str(&"=".repeat(60));
    output.push_str("\n\n");

    for candidate in &report.candidates {
        let status_icon = match candidate.status {
            CandidateStatus::Passed => "✓",
            CandidateStatus::Failed => "✗",
        };
        output.push_str(&format!("  {} {}\n", status_icon, candidate.name));

        match candidate.status {
            CandidateStatus::Passed => {
                output.push_str(&format!(
                    "      mean: {:.2} ns  stddev: {:.2} ns  samples: {}\n",
                    candidate.mean_ns, candidate.std_dev_ns, candidate.samples
                ));
                output.push_str(&format!(
                    "      min: {:.2} ns  max: {:.2} ns  iterations: {}\n",
                    candidate.min_ns, candidate.max_ns, candidate.iterations
                ));
                output.push_str(&format!(
                    "      {:.0}% CI: [{:.2}, {:.2}] ns\n",
                    candidate.ci_level * 100.0,
                    candidate.ci_lower_ns,
                    candidate.ci_upper_ns
                ));
                output.push_str(&format!(
                    "      throughput: {:.2} ops/sec\n",
                    candidate.ops_per_sec
                ));
                if candidate.outliers_rejected > 0 {
                    output.push_str(&format!(
                        "      outliers rejected: {}\n",
                        candidate.outliers_rejected
                    ));
                }
            }
            CandidateStatus::Failed => {
                if let Some(failure) = &candidate.failure {
                    output.push_str(&format!("      error: {}\n", failure));
                }
            }
        }
        output.push('\n');
    }

    if let Some(fastest) = &report.fastest {
        output.push_str(&format!("Fastest is {}\n", fastest));
    } else {
        output.push_str("No candidate completed measurement\n");
    }

    output
}

/// Format a table analysis for terminal display.
pub fn format_analysis_text(
    table: &Table,
    analysis: &TableAnalysis,
    options: &RenderOptions,
) -> String {
    let mut output = String::new();

    output.push('\n');
    output.push_str("Table Analysis\n");
    output.push_str(&"=".repeat(60));
    output.push('\n');
    output.push_str(&format!(
        "{} rows, {} columns ({} numeric)\n\n",
        table.row_count(),
        table.column_count(),
        analysis.columns.len()
    ));

    if !analysis.columns.is_empty() {
        let name_width = analysis
            .columns
            .iter()
            .map(|c| c.name.len())
            .max()
            .unwrap_or(6)
            .max(6);

        output.push_str(&format!(
            "  {:<width$}  {:>8}  {:>12}  {:>12}  {:>12}  {:>12}\n",
            "column",
            "count",
            "mean",
            "stddev",
            "min",
            "max",
            width = name_width
        ));
        output.push_str(&format!("  {}\n", "-".repeat(name_width + 64)));
        for col in &analysis.columns {
            output.push_str(&format!(
                "  {:<width$}  {:>8}  {:>12.4}  {:>12.4}  {:>12.4}  {:>12.4}\n",
                col.name,
                col.count,
                col.mean,
                col.std_dev,
                col.min,
                col.max,
                width = name_width
            ));
        }
        output.push('\n');
    }

    if !analysis.correlations.is_empty() {
        output.push_str("Correlations\n");
        output.push_str(&"-".repeat(60));
        output.push('\n');
        for pair in &analysis.correlations {
            output.push_str(&format!(
                "  {} ~ {}: {:+.4}\n",
                pair.left, pair.right, pair.coefficient
            ));
        }
        output.push('\n');
    }

    if options.include_text_columns && !analysis.text_columns.is_empty() {
        output.push_str(&format!(
            "Text columns (excluded from statistics): {}\n",
            analysis.text_columns.join(", ")
        ));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use tabstat_bench::{Suite, SuiteConfig};
    use tabstat_stats::analyze_table;
    use tabstat_table::parse_csv;

    fn quick_config() -> SuiteConfig {
        SuiteConfig {
            warmup_time: std::time::Duration::from_millis(2),
            measurement_time: std::time::Duration::from_millis(10),
            target_samples: 10,
            reject_outliers: false,
        }
    }

    #[test]
    fn test_bench_text_names_fastest() {
        let measurements = Suite::new(quick_config())
            .add("only", || 1u64)
            .run();
        let report = crate::build_bench_report(&measurements, &quick_config());
        let text = format_bench_text(&report);

        assert!(text.contains("✓ only"));
        assert!(text.contains("Fastest is only"));
        assert!(text.contains("throughput:"));
    }

    #[test]
    fn test_bench_text_shows_failure() {
        let measurements = Suite::new(quick_config())
            .add_fallible("broken", || -> Result<u64, String> { Err("nope".into()) })
            .run();
        let report = crate::build_bench_report(&measurements, &quick_config());
        let text = format_bench_text(&report);

        assert!(text.contains("✗ broken"));
        assert!(text.contains("error: candidate 'broken' failed: nope"));
        assert!(text.contains("No candidate completed"));
    }

    #[test]
    fn test_analysis_text() {
        let table = parse_csv("x,y,label\n1,2,a\n2,4,b\n3,6,c\n").unwrap();
        let analysis = analyze_table(&table);
        let text = format_analysis_text(&table, &analysis, &RenderOptions::default());

        assert!(text.contains("3 rows, 3 columns (2 numeric)"));
        assert!(text.contains("x ~ y: +1.0000"));
        assert!(text.contains("Text columns (excluded from statistics): label"));
    }

    #[test]
    fn test_analysis_text_can_hide_text_columns() {
        let table = parse_csv("x,y,label\n1,2,a\n2,4,b\n").unwrap();
        let analysis = analyze_table(&table);
        let options = RenderOptions {
            include_text_columns: false,
        };
        let text = format_analysis_text(&table, &analysis, &options);
        assert!(!text.contains("Text columns"));
    }
}
