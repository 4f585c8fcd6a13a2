//! Core DivisorSum trait definition

use crate::error::Result;

/// Core trait for divisor-sum strategies.
///
/// Implementations compute the sum of all positive even divisors of `n`:
/// every `i` in `[1, n]` with `n % i == 0` and `i % 2 == 0`.
///
/// All implementations must be:
/// - Pure (no side effects, no caching between calls)
/// - Thread-safe (Send + Sync)
/// - Agreeing (identical results for identical valid inputs)
pub trait DivisorSum: Send + Sync {
    /// Returns a short label for this strategy, used in reports and logs.
    fn name(&self) -> &'static str;

    /// Computes the sum of all positive even divisors of `n`.
    ///
    /// # Errors
    ///
    /// Returns `EvensumError::InvalidInput` when `n == 0`. Implementations
    /// with bounded resources may reject otherwise valid inputs with their
    /// own error, as the recursive strategy does for inputs deeper than its
    /// depth limit.
    fn sum_even_divisors(&self, n: u64) -> Result<u64>;
}
