//! Configuration module
//!
//! Settings can come from a TOML file passed with `--config`. Values given on
//! the command line (or through their environment variables) take
//! precedence over the file.

use crate::error::CliError;
use crate::output::{OutputFormat, DEFAULT_UNCERTAIN_MARKER};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use unwrap_core::{HyphenMode, JoinerConfig, MetricPolicy};

/// Default number of passes over the input
pub const DEFAULT_ITERATIONS: usize = 2;

/// Default character encoding
pub const DEFAULT_ENCODING: &str = "utf-8";

/// CLI configuration structure
#[derive(Debug, Deserialize, Serialize, Default)]
#[serde(deny_unknown_fields)]
pub struct CliConfig {
    /// Processing configuration
    #[serde(default)]
    pub processing: ProcessingConfig,

    /// Punctuation mark configuration
    #[serde(default)]
    pub marks: MarksConfig,

    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,
}

/// Processing-related configuration
#[derive(Debug, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProcessingConfig {
    /// Total number of passes over the input
    pub iterations: usize,

    /// Whether statistics accumulate across passes
    pub metric_policy: MetricPolicy,

    /// How trailing hyphens are joined
    pub hyphen_mode: HyphenMode,
}

impl Default for ProcessingConfig {
    fn default() -> Self {
        Self {
            iterations: DEFAULT_ITERATIONS,
            metric_policy: MetricPolicy::default(),
            hyphen_mode: HyphenMode::default(),
        }
    }
}

/// Punctuation marks consulted when looking for paragraph endings
///
/// A missing list keeps the built-in marks.
#[derive(Debug, Deserialize, Serialize, Default)]
#[serde(default, deny_unknown_fields)]
pub struct MarksConfig {
    /// Marks that end a sentence
    pub end: Option<Vec<String>>,

    /// Marks that may end a sentence
    pub possible: Option<Vec<String>>,
}

/// Output-related configuration
#[derive(Debug, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
    /// Default output format
    pub format: OutputFormat,

    /// Character encoding for input and output
    pub encoding: String,

    /// Marker line written after uncertain paragraphs in text output
    pub uncertain_marker: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            encoding: DEFAULT_ENCODING.to_string(),
            uncertain_marker: DEFAULT_UNCERTAIN_MARKER.to_string(),
        }
    }
}

impl CliConfig {
    /// Load a configuration file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::from_toml(&content)
            .with_context(|| format!("Invalid config file: {}", path.display()))
    }

    /// Parse a configuration from TOML text
    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Self =
            toml::from_str(content).map_err(|e| CliError::ConfigError(e.message().to_string()))?;

        if config.processing.iterations == 0 {
            return Err(
                CliError::ConfigError("processing.iterations must be at least 1".into()).into(),
            );
        }

        Ok(config)
    }

    /// Build the joiner configuration described by this file
    pub fn joiner_config(&self, metric_policy: MetricPolicy) -> Result<JoinerConfig> {
        let mut builder = JoinerConfig::builder()
            .metric_policy(metric_policy)
            .hyphen_mode(self.processing.hyphen_mode);

        if let Some(end) = &self.marks.end {
            builder = builder.end_marks(end.iter().cloned());
        }

        if let Some(possible) = &self.marks.possible {
            builder = builder.possible_end_marks(possible.iter().cloned());
        }

        Ok(builder.build()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_defaults() {
        let config = CliConfig::default();
        assert_eq!(config.processing.iterations, 2);
        assert_eq!(config.processing.metric_policy, MetricPolicy::Accumulate);
        assert_eq!(config.output.format, OutputFormat::Txt);
        assert_eq!(config.output.encoding, "utf-8");
        assert_eq!(config.output.uncertain_marker, "### UNCERTAIN ###");
        assert!(config.marks.end.is_none());
    }

    #[test]
    fn test_empty_file_uses_defaults() {
        let config = CliConfig::from_toml("").unwrap();
        assert_eq!(config.processing.iterations, DEFAULT_ITERATIONS);
    }

    #[test]
    fn test_full_file() {
        let config = CliConfig::from_toml(
            r#"
[processing]
iterations = 4
metric_policy = "per-pass"
hyphen_mode = "keep"

[marks]
end = [".", "!"]

[output]
format = "json"
encoding = "latin1"
uncertain_marker = "<??>"
"#,
        )
        .unwrap();

        assert_eq!(config.processing.iterations, 4);
        assert_eq!(config.processing.metric_policy, MetricPolicy::PerPass);
        assert_eq!(config.processing.hyphen_mode, HyphenMode::Keep);
        assert_eq!(config.output.format, OutputFormat::Json);
        assert_eq!(config.output.encoding, "latin1");
        assert_eq!(config.output.uncertain_marker, "<??>");

        let joiner_config = config.joiner_config(MetricPolicy::PerPass).unwrap();
        assert_eq!(joiner_config.marks().end, vec![".", "!"]);
        assert_eq!(joiner_config.hyphen_mode(), HyphenMode::Keep);
    }

    #[test]
    fn test_zero_iterations_rejected() {
        let err = CliConfig::from_toml("[processing]\niterations = 0\n").unwrap_err();
        assert!(err.to_string().contains("iterations must be at least 1"));
    }

    #[test]
    fn test_unknown_field_rejected() {
        let err = CliConfig::from_toml("[processing]\nthreads = 4\n").unwrap_err();
        assert!(err.to_string().starts_with("Configuration error:"));
    }

    #[test]
    fn test_empty_mark_rejected() {
        let config = CliConfig::from_toml("[marks]\npossible = [\"\"]\n").unwrap();
        let err = config.joiner_config(MetricPolicy::Accumulate).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Configuration error: possible end marks must not be empty strings"
        );
    }

    #[test]
    fn test_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[output]\nformat = \"markdown\"").unwrap();

        let config = CliConfig::from_file(file.path()).unwrap();
        assert_eq!(config.output.format, OutputFormat::Markdown);
    }

    #[test]
    fn test_from_missing_file() {
        let err = CliConfig::from_file(Path::new("/nonexistent/unwrap.toml")).unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }
}
