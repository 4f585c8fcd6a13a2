//! IterativeDivisorSum - Single-pass loop implementation

use crate::error::{EvensumError, Result};

use super::traits::DivisorSum;

/// Sums even divisors with a single ascending loop.
///
/// Scans every candidate `i` in `[1, n]` once, adding the candidates that
/// divide `n` exactly and are themselves even. O(n) divisibility tests,
/// O(1) auxiliary space.
///
/// # Examples
///
/// ```
/// use evensum_core::{DivisorSum, IterativeDivisorSum};
///
/// let algo = IterativeDivisorSum;
/// assert_eq!(algo.sum_even_divisors(6).unwrap(), 8);  // 2 + 6
/// assert_eq!(algo.sum_even_divisors(7).unwrap(), 0);  // odd n has no even divisors
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct IterativeDivisorSum;

impl DivisorSum for IterativeDivisorSum {
    fn name(&self) -> &'static str {
        "iterative"
    }

    fn sum_even_divisors(&self, n: u64) -> Result<u64> {
        if n == 0 {
            return Err(EvensumError::InvalidInput { n });
        }

        let mut sum = 0;
        for i in 1..=n {
            if n % i == 0 && i % 2 == 0 {
                sum += i;
            }
        }
        Ok(sum)
    }
}

/// Computes the sum of all positive even divisors of `n` iteratively.
///
/// Convenience wrapper around [`IterativeDivisorSum`].
///
/// # Examples
///
/// ```
/// use evensum_core::even_divisor_sum_iterative;
///
/// assert_eq!(even_divisor_sum_iterative(28).unwrap(), 48);  // 2 + 4 + 14 + 28
/// ```
pub fn even_divisor_sum_iterative(n: u64) -> Result<u64> {
    IterativeDivisorSum.sum_even_divisors(n)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_has_no_even_divisors() {
        assert_eq!(even_divisor_sum_iterative(1).unwrap(), 0);
    }

    #[test]
    fn test_known_values() {
        assert_eq!(even_divisor_sum_iterative(2).unwrap(), 2);
        assert_eq!(even_divisor_sum_iterative(6).unwrap(), 8);
        assert_eq!(even_divisor_sum_iterative(12).unwrap(), 24);
        assert_eq!(even_divisor_sum_iterative(28).unwrap(), 48);
        assert_eq!(
            even_divisor_sum_iterative(100).unwrap(),
            2 + 4 + 10 + 20 + 50 + 100
        );
    }

    #[test]
    fn test_odd_input_sums_to_zero() {
        assert_eq!(even_divisor_sum_iterative(7).unwrap(), 0);
        assert_eq!(even_divisor_sum_iterative(225).unwrap(), 0);
    }

    #[test]
    fn test_zero_is_rejected() {
        assert_eq!(
            even_divisor_sum_iterative(0),
            Err(EvensumError::InvalidInput { n: 0 })
        );
    }
}
