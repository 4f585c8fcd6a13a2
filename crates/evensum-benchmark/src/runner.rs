//! Benchmark runner.

use std::time::Instant;

use evensum_core::{DivisorSum, EvensumError, IterativeDivisorSum, RecursiveDivisorSum};
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::config::{BenchmarkConfig, ConfigError};
use crate::result::{BenchmarkSample, SweepResult};

/// Error type for benchmark execution.
#[derive(Debug, Error)]
pub enum BenchmarkError {
    /// The configuration does not describe a runnable sweep.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// A strategy failed in a way the sweep cannot recover from.
    #[error("Algorithm error: {0}")]
    Algorithm(#[from] EvensumError),
}

/// Zero-erasure benchmark runner.
///
/// Times the two divisor-sum strategies against every input size in the
/// configured sweep, sequentially and in input order. Both strategies are
/// stored as concrete generic type parameters, so the timed sections contain
/// no virtual dispatch.
///
/// # Type Parameters
///
/// * `I` - The iterative strategy
/// * `R` - The recursive strategy
pub struct Benchmark<I, R>
where
    I: DivisorSum,
    R: DivisorSum,
{
    config: BenchmarkConfig,
    iterative: I,
    recursive: R,
}

impl<I, R> Benchmark<I, R>
where
    I: DivisorSum,
    R: DivisorSum,
{
    /// Creates a new benchmark from a configuration and a strategy pair.
    pub fn new(config: BenchmarkConfig, iterative: I, recursive: R) -> Self {
        Self {
            config,
            iterative,
            recursive,
        }
    }

    /// Returns the benchmark configuration.
    pub fn config(&self) -> &BenchmarkConfig {
        &self.config
    }

    /// Runs the sweep and returns one sample per configured size.
    ///
    /// Each size is timed once with each strategy, iterative first. The
    /// recursive strategy declining an input over its depth limit is
    /// recorded as a missing duration and the sweep continues; any other
    /// strategy failure aborts the sweep.
    pub fn run(&self) -> Result<SweepResult, BenchmarkError> {
        self.config.validate()?;

        info!(
            event = "sweep_start",
            name = self.config.name(),
            sizes = self.config.sizes().len(),
            depth_limit = self.config.depth_limit(),
        );

        let mut result = SweepResult::new(
            self.config.name(),
            self.iterative.name(),
            self.recursive.name(),
        );

        for &size in self.config.sizes() {
            let started = Instant::now();
            let sum = self.iterative.sum_even_divisors(size)?;
            let duration_iterative = started.elapsed();

            let started = Instant::now();
            let duration_recursive = match self.recursive.sum_even_divisors(size) {
                Ok(_) => Some(started.elapsed()),
                Err(EvensumError::StackExhausted { n, limit }) => {
                    warn!(event = "recursive_skipped", input_size = n, depth_limit = limit);
                    None
                }
                Err(err) => return Err(err.into()),
            };

            debug!(
                event = "sample",
                input_size = size,
                sum = sum,
                iterative_ns = duration_iterative.as_nanos() as u64,
                recursive_ns = duration_recursive.map(|d| d.as_nanos() as u64),
            );

            result.add_sample(BenchmarkSample {
                input_size: size,
                sum,
                duration_iterative,
                duration_recursive,
            });
        }

        info!(
            event = "sweep_end",
            samples = result.sample_count(),
            skipped = result.skipped_count(),
        );

        Ok(result)
    }
}

impl Benchmark<IterativeDivisorSum, RecursiveDivisorSum> {
    /// Creates a benchmark over the default strategy pair.
    ///
    /// The recursive strategy takes its depth limit from the configuration.
    pub fn from_config(config: BenchmarkConfig) -> Self {
        let recursive = RecursiveDivisorSum::with_depth_limit(config.depth_limit());
        Self::new(config, IterativeDivisorSum, recursive)
    }
}

/// Runs a default-configuration sweep over the given sizes.
///
/// # Example
///
/// ```
/// use evensum_benchmark::run_benchmark;
///
/// let result = run_benchmark(&[1, 10, 100]).unwrap();
/// assert_eq!(result.sample_count(), 3);
/// assert_eq!(result.samples[1].sum, 12);  // even divisors of 10: 2 + 10
/// ```
pub fn run_benchmark(sizes: &[u64]) -> Result<SweepResult, BenchmarkError> {
    let config = BenchmarkConfig::default().with_sizes(sizes.to_vec());
    Benchmark::from_config(config).run()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_produces_ordered_samples() {
        let result = run_benchmark(&[1, 10, 100]).unwrap();

        assert_eq!(result.name, "Even divisor sum");
        assert_eq!(result.iterative_name, "iterative");
        assert_eq!(result.recursive_name, "recursive");

        let sizes: Vec<u64> = result.samples.iter().map(|s| s.input_size).collect();
        assert_eq!(sizes, vec![1, 10, 100]);

        let sums: Vec<u64> = result.samples.iter().map(|s| s.sum).collect();
        assert_eq!(sums, vec![0, 12, 186]);

        assert!(result.samples.iter().all(|s| s.recursive_available()));
    }

    #[test]
    fn test_stack_exhausted_is_contained() {
        let config = BenchmarkConfig::new("Tight limit")
            .with_sizes([8, 64, 12])
            .with_depth_limit(16);
        let result = Benchmark::from_config(config).run().unwrap();

        assert_eq!(result.sample_count(), 3);
        assert!(result.samples[0].recursive_available());
        assert!(!result.samples[1].recursive_available());
        assert!(result.samples[2].recursive_available());
        assert_eq!(result.skipped_count(), 1);

        // The iterative side still timed and summed every size.
        let sums: Vec<u64> = result.samples.iter().map(|s| s.sum).collect();
        assert_eq!(sums, vec![14, 126, 24]);
    }

    #[test]
    fn test_empty_sizes_rejected() {
        let config = BenchmarkConfig::default().with_sizes(Vec::new());
        let err = Benchmark::from_config(config).run().unwrap_err();
        assert!(matches!(
            err,
            BenchmarkError::Config(ConfigError::Invalid(_))
        ));
    }

    #[test]
    fn test_zero_size_rejected() {
        let config = BenchmarkConfig::default().with_sizes([0]);
        let err = Benchmark::from_config(config).run().unwrap_err();
        assert!(matches!(
            err,
            BenchmarkError::Config(ConfigError::Invalid(_))
        ));
    }

    #[test]
    fn test_custom_strategy_pair() {
        let config = BenchmarkConfig::new("Swapped limits").with_sizes([4, 6]);
        let benchmark = Benchmark::new(
            config,
            IterativeDivisorSum,
            RecursiveDivisorSum::with_depth_limit(4),
        );
        let result = benchmark.run().unwrap();

        assert!(result.samples[0].recursive_available());
        assert!(!result.samples[1].recursive_available());
    }
}
