//! Benchmarking harness for evensum.
//!
//! This crate times the iterative and recursive divisor-sum strategies
//! against each other across a sweep of input sizes, and renders the
//! collected samples as CSV or Markdown.
//!
//! # Overview
//!
//! The harness allows you to:
//! - Sweep both strategies over a configured list of input sizes
//! - Record per-size timings as plain `BenchmarkSample` data
//! - Keep sweeping when the recursive strategy hits its depth limit
//! - Export results to CSV and Markdown
//!
//! # Zero-Erasure Design
//!
//! The runner stores both strategies as monomorphized type parameters, not
//! trait objects, so the timed sections contain no virtual dispatch.
//!
//! # Example
//!
//! ```
//! use evensum_benchmark::{Benchmark, BenchmarkConfig};
//!
//! let config = BenchmarkConfig::new("Quick comparison")
//!     .with_sizes([1, 10, 100])
//!     .with_depth_limit(512);
//!
//! let result = Benchmark::from_config(config).run().unwrap();
//! assert_eq!(result.sample_count(), 3);
//! assert_eq!(result.skipped_count(), 0);
//! ```

mod config;
mod report;
mod result;
mod runner;

pub use config::{BenchmarkConfig, ConfigError};
pub use report::{format_duration, CsvExporter, MarkdownReport};
pub use result::{BenchmarkSample, SweepResult};
pub use runner::{run_benchmark, Benchmark, BenchmarkError};
