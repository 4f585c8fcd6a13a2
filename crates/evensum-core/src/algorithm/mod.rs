//! Divisor-sum algorithm implementations
//!
//! Both variants compute the same value, the sum of all positive even
//! divisors of `n`. The iterative variant is a plain ascending loop; the
//! recursive variant spends one stack frame per counter value, which is
//! exactly the cost the benchmark harness exists to measure.

mod iterative;
mod recursive;
mod traits;

#[cfg(test)]
mod tests;

pub use iterative::{even_divisor_sum_iterative, IterativeDivisorSum};
pub use recursive::{even_divisor_sum_recursive, RecursiveDivisorSum, DEFAULT_DEPTH_LIMIT};
pub use traits::DivisorSum;
