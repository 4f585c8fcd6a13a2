//! Benchmark result types.

use std::time::Duration;

/// Result of timing both divisor-sum strategies at one input size.
///
/// `duration_recursive` is `None` exactly when the recursive strategy
/// declined the input (depth limit exceeded); the iterative timing is
/// always present.
#[derive(Debug, Clone)]
pub struct BenchmarkSample {
    /// Input the strategies were timed on.
    pub input_size: u64,
    /// Sum of the even divisors of `input_size`.
    pub sum: u64,
    /// Wall-clock time of the iterative strategy.
    pub duration_iterative: Duration,
    /// Wall-clock time of the recursive strategy, if it ran.
    pub duration_recursive: Option<Duration>,
}

impl BenchmarkSample {
    /// Returns true when the recursive strategy produced a timing.
    pub fn recursive_available(&self) -> bool {
        self.duration_recursive.is_some()
    }

    /// Returns the recursive/iterative time ratio.
    ///
    /// `None` when the recursive timing is missing or the iterative timing
    /// is below clock resolution.
    ///
    /// # Example
    ///
    /// ```
    /// use evensum_benchmark::BenchmarkSample;
    /// use std::time::Duration;
    ///
    /// let sample = BenchmarkSample {
    ///     input_size: 100,
    ///     sum: 186,
    ///     duration_iterative: Duration::from_micros(10),
    ///     duration_recursive: Some(Duration::from_micros(25)),
    /// };
    ///
    /// assert!((sample.slowdown().unwrap() - 2.5).abs() < 0.001);
    /// ```
    pub fn slowdown(&self) -> Option<f64> {
        let recursive = self.duration_recursive?;
        if self.duration_iterative.is_zero() {
            None
        } else {
            Some(recursive.as_secs_f64() / self.duration_iterative.as_secs_f64())
        }
    }
}

/// Ordered samples collected by one benchmark sweep.
///
/// Contains one sample per configured input size, in sweep order.
#[derive(Debug, Clone)]
pub struct SweepResult {
    /// Benchmark name.
    pub name: String,
    /// Label of the iterative strategy.
    pub iterative_name: String,
    /// Label of the recursive strategy.
    pub recursive_name: String,
    /// Individual samples, in input order.
    pub samples: Vec<BenchmarkSample>,
}

impl SweepResult {
    /// Creates a new empty sweep result.
    pub fn new(
        name: impl Into<String>,
        iterative_name: impl Into<String>,
        recursive_name: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            iterative_name: iterative_name.into(),
            recursive_name: recursive_name.into(),
            samples: Vec::new(),
        }
    }

    /// Adds a sample to the results.
    pub fn add_sample(&mut self, sample: BenchmarkSample) {
        self.samples.push(sample);
    }

    /// Returns the number of samples.
    pub fn sample_count(&self) -> usize {
        self.samples.len()
    }

    /// Returns the number of samples where the recursive strategy was skipped.
    pub fn skipped_count(&self) -> usize {
        self.samples
            .iter()
            .filter(|s| !s.recursive_available())
            .count()
    }

    /// Returns the total time spent in the iterative strategy.
    pub fn total_duration_iterative(&self) -> Duration {
        self.samples.iter().map(|s| s.duration_iterative).sum()
    }

    /// Returns the average iterative time per sample.
    ///
    /// # Example
    ///
    /// ```
    /// use evensum_benchmark::{BenchmarkSample, SweepResult};
    /// use std::time::Duration;
    ///
    /// let mut result = SweepResult::new("Test", "iterative", "recursive");
    /// result.add_sample(BenchmarkSample {
    ///     input_size: 10,
    ///     sum: 12,
    ///     duration_iterative: Duration::from_micros(100),
    ///     duration_recursive: Some(Duration::from_micros(300)),
    /// });
    /// result.add_sample(BenchmarkSample {
    ///     input_size: 20,
    ///     sum: 36,
    ///     duration_iterative: Duration::from_micros(200),
    ///     duration_recursive: None,
    /// });
    ///
    /// assert_eq!(result.avg_duration_iterative(), Duration::from_micros(150));
    /// assert_eq!(result.skipped_count(), 1);
    /// ```
    pub fn avg_duration_iterative(&self) -> Duration {
        if self.samples.is_empty() {
            return Duration::ZERO;
        }
        self.total_duration_iterative() / self.samples.len() as u32
    }

    /// Returns the total time spent in the recursive strategy, over the
    /// samples where it ran.
    pub fn total_duration_recursive(&self) -> Duration {
        self.samples
            .iter()
            .filter_map(|s| s.duration_recursive)
            .sum()
    }

    /// Returns the average recursive time over the samples where it ran.
    pub fn avg_duration_recursive(&self) -> Duration {
        let timed = self.samples.len() - self.skipped_count();
        if timed == 0 {
            return Duration::ZERO;
        }
        self.total_duration_recursive() / timed as u32
    }

    /// Returns the largest single timing across both strategies.
    ///
    /// Used as the scaling anchor when charting the sweep.
    pub fn max_duration(&self) -> Duration {
        self.samples
            .iter()
            .flat_map(|s| std::iter::once(s.duration_iterative).chain(s.duration_recursive))
            .max()
            .unwrap_or(Duration::ZERO)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(size: u64, iterative_us: u64, recursive_us: Option<u64>) -> BenchmarkSample {
        BenchmarkSample {
            input_size: size,
            sum: 0,
            duration_iterative: Duration::from_micros(iterative_us),
            duration_recursive: recursive_us.map(Duration::from_micros),
        }
    }

    #[test]
    fn test_slowdown() {
        let s = sample(10, 100, Some(250));
        assert!((s.slowdown().unwrap() - 2.5).abs() < 1e-9);
    }

    #[test]
    fn test_slowdown_missing_recursive() {
        let s = sample(10, 100, None);
        assert_eq!(s.slowdown(), None);
    }

    #[test]
    fn test_slowdown_zero_iterative() {
        let s = sample(10, 0, Some(250));
        assert_eq!(s.slowdown(), None);
    }

    #[test]
    fn test_aggregates() {
        let mut result = SweepResult::new("Test", "iterative", "recursive");
        result.add_sample(sample(1, 100, Some(200)));
        result.add_sample(sample(2, 300, None));
        result.add_sample(sample(3, 200, Some(400)));

        assert_eq!(result.sample_count(), 3);
        assert_eq!(result.skipped_count(), 1);
        assert_eq!(result.total_duration_iterative(), Duration::from_micros(600));
        assert_eq!(result.avg_duration_iterative(), Duration::from_micros(200));
        assert_eq!(result.total_duration_recursive(), Duration::from_micros(600));
        assert_eq!(result.avg_duration_recursive(), Duration::from_micros(300));
        assert_eq!(result.max_duration(), Duration::from_micros(400));
    }

    #[test]
    fn test_empty_aggregates() {
        let result = SweepResult::new("Empty", "iterative", "recursive");
        assert_eq!(result.sample_count(), 0);
        assert_eq!(result.avg_duration_iterative(), Duration::ZERO);
        assert_eq!(result.avg_duration_recursive(), Duration::ZERO);
        assert_eq!(result.max_duration(), Duration::ZERO);
    }
}
