//! Error types for evensum

use thiserror::Error;

/// Main error type for evensum computations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvensumError {
    /// Input outside the supported domain
    #[error("Invalid input: n must be >= 1, got {n}")]
    InvalidInput { n: u64 },

    /// Recursive descent would exceed the configured depth limit
    #[error("Recursion depth limit exceeded: n = {n}, limit = {limit}")]
    StackExhausted { n: u64, limit: u64 },
}

/// Result type alias for evensum operations
pub type Result<T> = std::result::Result<T, EvensumError>;
