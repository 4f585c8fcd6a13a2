//! Benchmark configuration.

use std::path::Path;

use evensum_core::DEFAULT_DEPTH_LIMIT;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Configuration for a benchmark sweep.
///
/// Controls the input sizes to time, the recursion depth limit, and
/// optional output paths.
///
/// # Example
///
/// ```
/// use evensum_benchmark::BenchmarkConfig;
///
/// let config = BenchmarkConfig::new("Divisor sweep")
///     .with_sizes([8, 64, 512])
///     .with_depth_limit(256);
///
/// assert_eq!(config.name(), "Divisor sweep");
/// assert_eq!(config.sizes(), [8, 64, 512]);
/// assert_eq!(config.depth_limit(), 256);
/// ```
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "snake_case", default)]
pub struct BenchmarkConfig {
    name: String,
    sizes: Vec<u64>,
    depth_limit: u64,
    csv_output_path: Option<String>,
    markdown_output_path: Option<String>,
}

impl BenchmarkConfig {
    /// Creates a new benchmark configuration with the given name.
    ///
    /// Defaults:
    /// - sizes: `[1, 10, 50, 100, 500, 1000, 1500, 2000]`
    /// - depth_limit: `DEFAULT_DEPTH_LIMIT`
    ///
    /// # Example
    ///
    /// ```
    /// use evensum_benchmark::BenchmarkConfig;
    ///
    /// let config = BenchmarkConfig::new("Test sweep");
    /// assert_eq!(config.sizes().len(), 8);
    /// ```
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            sizes: vec![1, 10, 50, 100, 500, 1000, 1500, 2000],
            depth_limit: DEFAULT_DEPTH_LIMIT,
            csv_output_path: None,
            markdown_output_path: None,
        }
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns error if the file doesn't exist or contains invalid TOML.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Self::from_toml_file(path)
    }

    /// Loads configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses configuration from a TOML string.
    ///
    /// # Example
    ///
    /// ```
    /// use evensum_benchmark::BenchmarkConfig;
    ///
    /// let config = BenchmarkConfig::from_toml_str(r#"
    ///     name = "Nightly sweep"
    ///     sizes = [16, 256, 4096]
    ///     depth_limit = 1024
    /// "#).unwrap();
    ///
    /// assert_eq!(config.name(), "Nightly sweep");
    /// assert_eq!(config.depth_limit(), 1024);
    /// ```
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    /// Loads configuration from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Parses configuration from a YAML string.
    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(s)?)
    }

    /// Sets the input sizes to sweep, in timing order.
    ///
    /// # Example
    ///
    /// ```
    /// use evensum_benchmark::BenchmarkConfig;
    ///
    /// let config = BenchmarkConfig::new("Test").with_sizes([1, 10, 100]);
    /// assert_eq!(config.sizes(), [1, 10, 100]);
    /// ```
    pub fn with_sizes(mut self, sizes: impl Into<Vec<u64>>) -> Self {
        self.sizes = sizes.into();
        self
    }

    /// Sets the recursion depth limit for the recursive strategy.
    ///
    /// # Example
    ///
    /// ```
    /// use evensum_benchmark::BenchmarkConfig;
    ///
    /// let config = BenchmarkConfig::new("Test").with_depth_limit(64);
    /// assert_eq!(config.depth_limit(), 64);
    /// ```
    pub fn with_depth_limit(mut self, limit: u64) -> Self {
        self.depth_limit = limit;
        self
    }

    /// Sets the output path for CSV export.
    ///
    /// # Example
    ///
    /// ```
    /// use evensum_benchmark::BenchmarkConfig;
    ///
    /// let config = BenchmarkConfig::new("Test")
    ///     .with_csv_output("results.csv");
    /// assert_eq!(config.csv_output_path(), Some("results.csv"));
    /// ```
    pub fn with_csv_output(mut self, path: impl Into<String>) -> Self {
        self.csv_output_path = Some(path.into());
        self
    }

    /// Sets the output path for the Markdown report.
    ///
    /// # Example
    ///
    /// ```
    /// use evensum_benchmark::BenchmarkConfig;
    ///
    /// let config = BenchmarkConfig::new("Test")
    ///     .with_markdown_output("report.md");
    /// assert_eq!(config.markdown_output_path(), Some("report.md"));
    /// ```
    pub fn with_markdown_output(mut self, path: impl Into<String>) -> Self {
        self.markdown_output_path = Some(path.into());
        self
    }

    /// Returns the benchmark name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the input sizes to sweep.
    pub fn sizes(&self) -> &[u64] {
        &self.sizes
    }

    /// Returns the recursion depth limit.
    pub fn depth_limit(&self) -> u64 {
        self.depth_limit
    }

    /// Returns the CSV output path, if set.
    pub fn csv_output_path(&self) -> Option<&str> {
        self.csv_output_path.as_deref()
    }

    /// Returns the Markdown output path, if set.
    pub fn markdown_output_path(&self) -> Option<&str> {
        self.markdown_output_path.as_deref()
    }

    /// Checks that the configuration describes a runnable sweep.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Invalid` when the size list is empty, any size
    /// is zero, or the depth limit is zero.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.sizes.is_empty() {
            return Err(ConfigError::Invalid("sizes must not be empty".to_string()));
        }
        if self.sizes.iter().any(|&size| size == 0) {
            return Err(ConfigError::Invalid("every size must be >= 1".to_string()));
        }
        if self.depth_limit == 0 {
            return Err(ConfigError::Invalid("depth_limit must be >= 1".to_string()));
        }
        Ok(())
    }
}

impl Default for BenchmarkConfig {
    fn default() -> Self {
        Self::new("Even divisor sum")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = BenchmarkConfig::default();
        assert_eq!(config.name(), "Even divisor sum");
        assert_eq!(config.sizes(), [1, 10, 50, 100, 500, 1000, 1500, 2000]);
        assert_eq!(config.depth_limit(), DEFAULT_DEPTH_LIMIT);
        assert_eq!(config.csv_output_path(), None);
        assert_eq!(config.markdown_output_path(), None);
    }

    #[test]
    fn test_toml_parsing() {
        let toml = r#"
            name = "Nightly sweep"
            sizes = [16, 256, 4096]
            depth_limit = 1024
            csv_output_path = "out/results.csv"
        "#;

        let config = BenchmarkConfig::from_toml_str(toml).unwrap();
        assert_eq!(config.name(), "Nightly sweep");
        assert_eq!(config.sizes(), [16, 256, 4096]);
        assert_eq!(config.depth_limit(), 1024);
        assert_eq!(config.csv_output_path(), Some("out/results.csv"));
    }

    #[test]
    fn test_toml_missing_fields_use_defaults() {
        let config = BenchmarkConfig::from_toml_str(r#"name = "Partial""#).unwrap();
        assert_eq!(config.name(), "Partial");
        assert_eq!(config.sizes().len(), 8);
        assert_eq!(config.depth_limit(), DEFAULT_DEPTH_LIMIT);
    }

    #[test]
    fn test_yaml_parsing() {
        let yaml = r#"
            name: Nightly sweep
            sizes: [16, 256, 4096]
            depth_limit: 1024
            markdown_output_path: out/report.md
        "#;

        let config = BenchmarkConfig::from_yaml_str(yaml).unwrap();
        assert_eq!(config.name(), "Nightly sweep");
        assert_eq!(config.sizes(), [16, 256, 4096]);
        assert_eq!(config.markdown_output_path(), Some("out/report.md"));
    }

    #[test]
    fn test_builder() {
        let config = BenchmarkConfig::new("Built")
            .with_sizes([2, 4])
            .with_depth_limit(32)
            .with_csv_output("a.csv")
            .with_markdown_output("b.md");

        assert_eq!(config.sizes(), [2, 4]);
        assert_eq!(config.depth_limit(), 32);
        assert_eq!(config.csv_output_path(), Some("a.csv"));
        assert_eq!(config.markdown_output_path(), Some("b.md"));
    }

    #[test]
    fn test_validate_rejects_empty_sizes() {
        let config = BenchmarkConfig::default().with_sizes(Vec::new());
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_validate_rejects_zero_size() {
        let config = BenchmarkConfig::default().with_sizes([1, 0, 3]);
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_validate_rejects_zero_depth_limit() {
        let config = BenchmarkConfig::default().with_depth_limit(0);
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_validate_accepts_defaults() {
        assert!(BenchmarkConfig::default().validate().is_ok());
    }
}
