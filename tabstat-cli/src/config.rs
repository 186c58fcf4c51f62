//! Configuration loading from tabstat.toml
//!
//! Configuration can be specified in a `tabstat.toml` file, discovered by
//! walking up from the current directory. Command-line flags override file
//! values.

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Tabstat configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TabstatConfig {
    /// Benchmark suite configuration.
    #[serde(default)]
    pub bench: BenchSection,
    /// Output configuration.
    #[serde(default)]
    pub output: OutputSection,
}

/// Benchmark configuration section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BenchSection {
    /// Warmup duration before measurement (e.g. "1s", "500ms").
    #[serde(default = "default_warmup")]
    pub warmup_time: String,
    /// Measurement time budget (e.g. "3s").
    #[serde(default = "default_measurement")]
    pub measurement_time: String,
    /// Sample target per candidate.
    #[serde(default = "default_target_samples")]
    pub target_samples: usize,
    /// Reject IQR outliers before computing central tendency.
    #[serde(default = "default_reject_outliers")]
    pub reject_outliers: bool,
    /// Length of the generated random input series.
    #[serde(default = "default_input_length")]
    pub input_length: usize,
}

impl Default for BenchSection {
    fn default() -> Self {
        Self {
            warmup_time: default_warmup(),
            measurement_time: default_measurement(),
            target_samples: default_target_samples(),
            reject_outliers: default_reject_outliers(),
            input_length: default_input_length(),
        }
    }
}

fn default_warmup() -> String {
    "1s".to_string()
}
fn default_measurement() -> String {
    "3s".to_string()
}
fn default_target_samples() -> usize {
    100
}
fn default_reject_outliers() -> bool {
    true
}
fn default_input_length() -> usize {
    10_000
}

/// Output configuration section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputSection {
    /// Default output format: "human", "html", "json".
    #[serde(default = "default_format")]
    pub format: String,
    /// Echo text columns alongside numeric output.
    #[serde(default = "default_include_text_columns")]
    pub include_text_columns: bool,
}

impl Default for OutputSection {
    fn default() -> Self {
        Self {
            format: default_format(),
            include_text_columns: default_include_text_columns(),
        }
    }
}

fn default_format() -> String {
    "human".to_string()
}
fn default_include_text_columns() -> bool {
    true
}

impl TabstatConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        let config: Self = toml::from_str(&content)?;
        Ok(config)
    }

    /// Discover and load configuration by walking up from the current
    /// directory.
    pub fn discover() -> Option<Self> {
        let mut dir = std::env::current_dir().ok()?;
        loop {
            let config_path = dir.join("tabstat.toml");
            if config_path.exists() {
                return Self::load(&config_path).ok();
            }
            if !dir.pop() {
                break;
            }
        }
        None
    }

    /// Parse a duration string (e.g. "3s", "500ms", "2m") to nanoseconds.
    pub fn parse_duration(s: &str) -> anyhow::Result<u64> {
        let s = s.trim();
        if s.is_empty() {
            return Err(anyhow::anyhow!("empty duration string"));
        }

        let (num_part, unit_part) = s
            .char_indices()
            .find(|(_, c)| c.is_alphabetic())
            .map(|(i, _)| s.split_at(i))
            .unwrap_or((s, "s"));

        let value: f64 = num_part
            .parse()
            .map_err(|_| anyhow::anyhow!("invalid duration number: {}", num_part))?;

        let multiplier: u64 = match unit_part.to_lowercase().as_str() {
            "ns" => 1,
            "us" => 1_000,
            "ms" => 1_000_000,
            "s" | "" => 1_000_000_000,
            "m" | "min" => 60_000_000_000,
            _ => return Err(anyhow::anyhow!("unknown duration unit: {}", unit_part)),
        };

        Ok((value * multiplier as f64) as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = TabstatConfig::default();
        assert_eq!(config.bench.warmup_time, "1s");
        assert_eq!(config.bench.measurement_time, "3s");
        assert_eq!(config.bench.target_samples, 100);
        assert_eq!(config.bench.input_length, 10_000);
        assert!(config.bench.reject_outliers);
        assert_eq!(config.output.format, "human");
    }

    #[test]
    fn test_parse_duration() {
        assert_eq!(TabstatConfig::parse_duration("3s").unwrap(), 3_000_000_000);
        assert_eq!(TabstatConfig::parse_duration("500ms").unwrap(), 500_000_000);
        assert_eq!(TabstatConfig::parse_duration("100us").unwrap(), 100_000);
        assert_eq!(TabstatConfig::parse_duration("1000ns").unwrap(), 1000);
        assert_eq!(TabstatConfig::parse_duration("2m").unwrap(), 120_000_000_000);
        assert_eq!(TabstatConfig::parse_duration("1.5s").unwrap(), 1_500_000_000);
        assert!(TabstatConfig::parse_duration("abc").is_err());
        assert!(TabstatConfig::parse_duration("").is_err());
    }

    #[test]
    fn test_parse_toml_overrides() {
        let toml_str = r#"
            [bench]
            warmup_time = "250ms"
            target_samples = 50

            [output]
            format = "json"
        "#;

        let config: TabstatConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.bench.warmup_time, "250ms");
        assert_eq!(config.bench.target_samples, 50);
        assert_eq!(config.output.format, "json");
        // Defaults still apply to everything unset.
        assert_eq!(config.bench.measurement_time, "3s");
        assert!(config.output.include_text_columns);
    }
}
