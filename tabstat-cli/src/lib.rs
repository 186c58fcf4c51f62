#![warn(missing_docs)]
//! Tabstat CLI Library
//!
//! The command-line adapter around the tabstat core: reads delimited text
//! from a file or stdin, invokes the pure parse/analyze/render functions,
//! and displays their results or their error messages. Core logic never
//! depends on this layer.

mod config;

pub use config::{BenchSection, OutputSection, TabstatConfig};

use anyhow::Context;
use clap::{Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};
use rand::prelude::*;
use std::io::Read;
use std::path::PathBuf;
use std::time::Duration;
use tabstat_bench::{Suite, SuiteConfig};
use tabstat_report::{
    OutputFormat, RenderOptions, SvgOptions, build_bench_report, format_analysis_text,
    format_bench_text, generate_json_analysis, generate_json_report, render_analysis_html,
    scatter_svg,
};
use tabstat_stats::{analyze_table, correlation, correlation_two_pass};
use tabstat_table::{Table, parse_csv};

/// Tabstat CLI arguments.
#[derive(Parser, Debug)]
#[command(name = "tabstat")]
#[command(author, version, about = "Tabular statistics and correlation benchmarking")]
pub struct Cli {
    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Parse a CSV file and print its statistical analysis
    Analyze {
        /// Input file; stdin when omitted
        file: Option<PathBuf>,

        /// Output format: human, html, json (default from tabstat.toml)
        #[arg(long)]
        format: Option<String>,

        /// Echo text columns alongside numeric output
        #[arg(long, default_value = "true", action = clap::ArgAction::Set)]
        include_text_columns: bool,

        /// Output file (stdout if not specified)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Compare the correlation implementations on random input
    Bench {
        /// Length of the generated input series
        #[arg(long)]
        length: Option<usize>,

        /// Sample target per candidate
        #[arg(long, short = 'n')]
        samples: Option<usize>,

        /// Warmup duration (e.g. "1s", "500ms")
        #[arg(long)]
        warmup: Option<String>,

        /// Measurement time budget (e.g. "3s")
        #[arg(long)]
        measurement: Option<String>,

        /// Seed for the input generator; random when omitted
        #[arg(long)]
        seed: Option<u64>,

        /// Output format: human, json
        #[arg(long)]
        format: Option<String>,

        /// Output file (stdout if not specified)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Render an SVG scatter plot of two numeric columns
    Scatter {
        /// Input CSV file
        file: PathBuf,

        /// Name of the x column
        x_col: String,

        /// Name of the y column
        y_col: String,

        /// SVG width in pixels
        #[arg(long, default_value = "640")]
        width: u32,

        /// SVG height in pixels
        #[arg(long, default_value = "480")]
        height: u32,

        /// Output file (stdout if not specified)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// Run the tabstat CLI. This is the entry point for the binary.
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    run_with_cli(cli)
}

/// Run the tabstat CLI with pre-parsed arguments.
pub fn run_with_cli(cli: Cli) -> anyhow::Result<()> {
    let config = TabstatConfig::discover().unwrap_or_default();

    match cli.command {
        Commands::Analyze {
            file,
            format,
            include_text_columns,
            output,
        } => cmd_analyze(&config, file, format, include_text_columns, output),
        Commands::Bench {
            length,
            samples,
            warmup,
            measurement,
            seed,
            format,
            output,
        } => cmd_bench(&config, length, samples, warmup, measurement, seed, format, output),
        Commands::Scatter {
            file,
            x_col,
            y_col,
            width,
            height,
            output,
        } => cmd_scatter(file, &x_col, &y_col, width, height, output),
    }
}

fn cmd_analyze(
    config: &TabstatConfig,
    file: Option<PathBuf>,
    format: Option<String>,
    include_text_columns: bool,
    output: Option<PathBuf>,
) -> anyhow::Result<()> {
    let input = read_input(file)?;
    let format = resolve_format(format, &config.output.format)?;

    let table = parse_csv(&input)?;
    let analysis = analyze_table(&table);
    let options = RenderOptions {
        include_text_columns,
    };

    let rendered = match format {
        OutputFormat::Human => format_analysis_text(&table, &analysis, &options),
        OutputFormat::Html => render_analysis_html(&table, &analysis, &options),
        OutputFormat::Json => generate_json_analysis(&analysis)?,
    };

    write_output(&rendered, output.as_deref())
}

#[allow(clippy::too_many_arguments)]
fn cmd_bench(
    config: &TabstatConfig,
    length: Option<usize>,
    samples: Option<usize>,
    warmup: Option<String>,
    measurement: Option<String>,
    seed: Option<u64>,
    format: Option<String>,
    output: Option<PathBuf>,
) -> anyhow::Result<()> {
    let format = resolve_format(format, &config.output.format)?;

    let warmup_ns =
        TabstatConfig::parse_duration(warmup.as_deref().unwrap_or(&config.bench.warmup_time))?;
    let measurement_ns = TabstatConfig::parse_duration(
        measurement.as_deref().unwrap_or(&config.bench.measurement_time),
    )?;

    let suite_config = SuiteConfig {
        warmup_time: Duration::from_nanos(warmup_ns),
        measurement_time: Duration::from_nanos(measurement_ns),
        target_samples: samples.unwrap_or(config.bench.target_samples),
        reject_outliers: config.bench.reject_outliers,
    };

    let length = length.unwrap_or(config.bench.input_length);
    let (x, y) = random_series(length, seed);

    let suite = {
        let (x2, y2) = (x.clone(), y.clone());
        Suite::new(suite_config.clone())
            .add_fallible("single-pass", move || correlation(&x, &y))
            .add_fallible("two-pass", move || correlation_two_pass(&x2, &y2))
    };

    eprintln!(
        "Comparing {} candidates on {} random values...",
        suite.len(),
        length
    );

    let progress = ProgressBar::new(suite.len() as u64).with_style(
        ProgressStyle::with_template("{bar:30} {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar()),
    );
    let measurements = suite.run_with_progress(|name| {
        progress.set_message(name.to_string());
        progress.inc(1);
    });
    progress.finish_and_clear();

    let report = build_bench_report(&measurements, &suite_config);
    let rendered = match format {
        OutputFormat::Human => format_bench_text(&report),
        OutputFormat::Json => generate_json_report(&report)?,
        OutputFormat::Html => {
            anyhow::bail!("html output is not supported for bench reports")
        }
    };

    write_output(&rendered, output.as_deref())
}

fn cmd_scatter(
    file: PathBuf,
    x_col: &str,
    y_col: &str,
    width: u32,
    height: u32,
    output: Option<PathBuf>,
) -> anyhow::Result<()> {
    let input = std::fs::read_to_string(&file)
        .with_context(|| format!("failed to read {}", file.display()))?;
    let table = parse_csv(&input)?;

    let x = numeric_column_by_name(&table, x_col)?;
    let y = numeric_column_by_name(&table, y_col)?;

    // Drop rows where either side is an empty cell.
    let (xs, ys): (Vec<f64>, Vec<f64>) = x
        .iter()
        .zip(&y)
        .filter(|(a, b)| a.is_finite() && b.is_finite())
        .map(|(&a, &b)| (a, b))
        .unzip();

    let svg = scatter_svg(&xs, &ys, &SvgOptions { width, height })?;
    write_output(&svg, output.as_deref())
}

/// Look up a column by name and return its numeric series.
fn numeric_column_by_name(table: &Table, name: &str) -> anyhow::Result<Vec<f64>> {
    let index = table
        .column_names()
        .iter()
        .position(|c| c == name)
        .with_context(|| {
            format!(
                "no column named '{}' (available: {})",
                name,
                table.column_names().join(", ")
            )
        })?;
    table
        .numeric_column(index)
        .with_context(|| format!("column '{}' is not numeric", name))
}

/// Generate a pair of random series for the bench candidates.
fn random_series(length: usize, seed: Option<u64>) -> (Vec<f64>, Vec<f64>) {
    let mut rng: StdRng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let x = (0..length).map(|_| rng.gen::<f64>()).collect();
    let y = (0..length).map(|_| rng.gen::<f64>()).collect();
    (x, y)
}

fn resolve_format(flag: Option<String>, config_default: &str) -> anyhow::Result<OutputFormat> {
    let name = flag.as_deref().unwrap_or(config_default);
    name.parse().map_err(|e: String| anyhow::anyhow!(e))
}

fn read_input(file: Option<PathBuf>) -> anyhow::Result<String> {
    match file {
        Some(path) => std::fs::read_to_string(&path)
            .with_context(|| format!("failed to read {}", path.display())),
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read stdin")?;
            Ok(buf)
        }
    }
}

fn write_output(content: &str, path: Option<&std::path::Path>) -> anyhow::Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("failed to write {}", path.display()))?;
            eprintln!("Output written to: {}", path.display());
        }
        None => print!("{}", content),
    }
    Ok(())
}
