#![warn(missing_docs)]
//! Tabstat Report - Reporting and Rendering
//!
//! Builds the ranked benchmark report from raw suite measurements and
//! projects tables, analyses and reports into display representations:
//! - Human-readable terminal text
//! - HTML markup (tables and analysis)
//! - SVG scatter plots
//! - JSON (machine-readable)
//!
//! All renderers are pure functions from values to strings; injecting the
//! output into a user interface is the caller's concern.

mod html;
mod json;
mod report;
mod svg;
mod text;

pub use html::{render_analysis_html, render_table_html};
pub use json::{generate_json_analysis, generate_json_report};
pub use report::{
    BenchReport, CandidateReport, CandidateStatus, ReportConfig, ReportMeta, build_bench_report,
};
pub use svg::{SvgError, SvgOptions, scatter_svg};
pub use text::{format_analysis_text, format_bench_text};

/// Output format selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable terminal output.
    Human,
    /// HTML markup.
    Html,
    /// JSON with full schema.
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "human" | "text" => Ok(OutputFormat::Human),
            "html" => Ok(OutputFormat::Html),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!("unknown output format: {}", other)),
        }
    }
}

/// Options shared by the table renderers.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Whether text (non-numeric) columns are echoed alongside numeric
    /// output. The underlying data is inconsistent across consumers, so this
    /// is configuration rather than a hardcoded choice.
    pub include_text_columns: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            include_text_columns: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_format_parsing() {
        assert_eq!("human".parse(), Ok(OutputFormat::Human));
        assert_eq!("text".parse(), Ok(OutputFormat::Human));
        assert_eq!("HTML".parse(), Ok(OutputFormat::Html));
        assert_eq!("json".parse(), Ok(OutputFormat::Json));
        assert!("yaml".parse::<OutputFormat>().is_err());
    }
}
