//! Error types for the associative memory.

use thiserror::Error;

/// Result type alias for associative memory operations.
pub type Result<T> = std::result::Result<T, MemoryError>;

/// Errors that can occur when constructing or using an associative memory.
///
/// All validation is eager: construction fails before any weights are
/// allocated, and `recall`/`train` fail before any state is mutated.
#[derive(Debug, Error)]
pub enum MemoryError {
    /// Invalid configuration parameter at construction.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Argument vector length differs from the configured vector length.
    #[error("shape mismatch: expected length {expected}, got {actual}")]
    ShapeMismatch {
        /// Configured vector length.
        expected: usize,
        /// Length of the offending argument.
        actual: usize,
    },
}
