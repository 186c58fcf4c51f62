//! JSON Output

use crate::report::BenchReport;
use tabstat_stats::TableAnalysis;

/// Serialize a benchmark report as prettified JSON.
pub fn generate_json_report(report: &BenchReport) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(report)
}

/// Serialize a table analysis as prettified JSON.
pub fn generate_json_analysis(analysis: &TableAnalysis) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(analysis)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tabstat_stats::analyze_table;
    use tabstat_table::parse_csv;

    #[test]
    fn test_analysis_json() {
        let table = parse_csv("x,y\n1,2\n2,4\n").unwrap();
        let analysis = analyze_table(&table);
        let json = generate_json_analysis(&analysis).unwrap();

        assert!(json.contains("\"columns\""));
        assert!(json.contains("\"correlations\""));
        let back: TableAnalysis = serde_json::from_str(&json).unwrap();
        assert_eq!(back, analysis);
    }
}
