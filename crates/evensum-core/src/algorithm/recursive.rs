//! RecursiveDivisorSum - Descending-recursion implementation

use crate::error::{EvensumError, Result};

use super::traits::DivisorSum;

/// Default maximum input accepted by the recursive strategy.
///
/// Each counter value costs one stack frame, so `n` bounds the call depth
/// directly. 8192 frames fit comfortably in a default 2 MiB thread stack;
/// callers running on smaller stacks should lower the limit.
pub const DEFAULT_DEPTH_LIMIT: u64 = 8_192;

/// Sums even divisors with a genuine descending recursion.
///
/// The counter starts at `n` and each call recurses on `i - 1` until the
/// base case `i == 0`. The call depth therefore equals `n`, and inputs
/// above the configured depth limit are rejected before any descent rather
/// than overflowing the stack partway down.
///
/// # Examples
///
/// ```
/// use evensum_core::{DivisorSum, EvensumError, RecursiveDivisorSum};
///
/// let algo = RecursiveDivisorSum::new();
/// assert_eq!(algo.sum_even_divisors(6).unwrap(), 8);
///
/// let tight = RecursiveDivisorSum::with_depth_limit(16);
/// assert_eq!(
///     tight.sum_even_divisors(64),
///     Err(EvensumError::StackExhausted { n: 64, limit: 16 })
/// );
/// ```
#[derive(Debug, Clone, Copy)]
pub struct RecursiveDivisorSum {
    depth_limit: u64,
}

impl RecursiveDivisorSum {
    /// Creates a recursive strategy with the default depth limit.
    pub fn new() -> Self {
        RecursiveDivisorSum {
            depth_limit: DEFAULT_DEPTH_LIMIT,
        }
    }

    /// Creates a recursive strategy that accepts inputs up to `limit`.
    pub fn with_depth_limit(limit: u64) -> Self {
        RecursiveDivisorSum { depth_limit: limit }
    }

    /// Returns the maximum input this instance accepts.
    pub fn depth_limit(&self) -> u64 {
        self.depth_limit
    }

    fn sum_from(n: u64, i: u64) -> u64 {
        if i == 0 {
            return 0;
        }
        let contribution = if n % i == 0 && i % 2 == 0 { i } else { 0 };
        contribution + Self::sum_from(n, i - 1)
    }
}

impl Default for RecursiveDivisorSum {
    fn default() -> Self {
        RecursiveDivisorSum::new()
    }
}

impl DivisorSum for RecursiveDivisorSum {
    fn name(&self) -> &'static str {
        "recursive"
    }

    fn sum_even_divisors(&self, n: u64) -> Result<u64> {
        if n == 0 {
            return Err(EvensumError::InvalidInput { n });
        }
        if n > self.depth_limit {
            return Err(EvensumError::StackExhausted {
                n,
                limit: self.depth_limit,
            });
        }
        Ok(Self::sum_from(n, n))
    }
}

/// Computes the sum of all positive even divisors of `n` recursively.
///
/// Uses the default depth limit; construct a [`RecursiveDivisorSum`] when a
/// different bound is needed.
///
/// # Examples
///
/// ```
/// use evensum_core::even_divisor_sum_recursive;
///
/// assert_eq!(even_divisor_sum_recursive(6).unwrap(), 8);
/// ```
pub fn even_divisor_sum_recursive(n: u64) -> Result<u64> {
    RecursiveDivisorSum::new().sum_even_divisors(n)
}
