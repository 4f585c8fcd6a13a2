//! Evensum Core - Divisor-sum algorithms for the iterative vs recursive demo
//!
//! This crate provides the fundamental abstractions for evensum:
//! - The `DivisorSum` strategy trait shared by both implementations
//! - `IterativeDivisorSum`, a single-pass trial-division loop
//! - `RecursiveDivisorSum`, the same scan as a genuine descending recursion
//! - Free-function entry points for one-off computations

pub mod algorithm;
pub mod error;

pub use algorithm::{
    even_divisor_sum_iterative, even_divisor_sum_recursive, DivisorSum, IterativeDivisorSum,
    RecursiveDivisorSum, DEFAULT_DEPTH_LIMIT,
};
pub use error::{EvensumError, Result};
