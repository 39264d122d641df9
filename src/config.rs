//! Configuration for the associative memory.

use serde::{Deserialize, Serialize};

use crate::error::{MemoryError, Result};

/// Shape and seed configuration for an [`crate::AssociativeMemory`].
///
/// # Example
///
/// ```
/// use lsh_memory_rs::MemoryConfig;
///
/// let config = MemoryConfig::default()
///     .with_vec_len(1024)
///     .with_density(8)
///     .with_block_bits(4)
///     .with_seed(7);
///
/// assert_eq!(config.block_count(), 16);
/// assert_eq!(config.capacity(), 128);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemoryConfig {
    /// Input/output vector length. Must be a power of two ≥ 2 (required by
    /// the Walsh-Hadamard Transform).
    pub vec_len: usize,

    /// Number of independent hashing slots superposed per recall/train.
    /// Affects capacity, speed and accuracy. Must be ≥ 1.
    pub density: usize,

    /// log2 of the number of weight blocks per slot. Affects capacity.
    /// Must not exceed log2 of `vec_len` (the bucket index is read from the
    /// leading projected coordinates).
    pub block_bits: u32,

    /// Base seed for the per-slot hash streams. Slot `i` uses
    /// `seed.wrapping_add(i)`.
    pub seed: u32,
}

impl Default for MemoryConfig {
    fn default() -> Self {
        Self {
            vec_len: 4096,
            density: 10,
            block_bits: 3,
            seed: 0,
        }
    }
}

impl MemoryConfig {
    /// Set the vector length.
    #[must_use]
    pub const fn with_vec_len(mut self, vec_len: usize) -> Self {
        self.vec_len = vec_len;
        self
    }

    /// Set the density (number of hashing slots).
    #[must_use]
    pub const fn with_density(mut self, density: usize) -> Self {
        self.density = density;
        self
    }

    /// Set the number of block-index bits.
    #[must_use]
    pub const fn with_block_bits(mut self, block_bits: u32) -> Self {
        self.block_bits = block_bits;
        self
    }

    /// Set the base hash seed.
    #[must_use]
    pub const fn with_seed(mut self, seed: u32) -> Self {
        self.seed = seed;
        self
    }

    /// Number of weight blocks per slot (`2^block_bits`).
    #[must_use]
    pub const fn block_count(&self) -> usize {
        1 << self.block_bits
    }

    /// Nominal pattern capacity: `density * block_count`.
    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.density * self.block_count()
    }

    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`MemoryError::InvalidConfig`] if `vec_len` is not a power of
    /// two ≥ 2, if `density` is zero, or if `block_bits` exceeds
    /// log2(`vec_len`).
    pub fn validate(&self) -> Result<()> {
        if self.vec_len < 2 || !self.vec_len.is_power_of_two() {
            return Err(MemoryError::InvalidConfig(format!(
                "vec_len must be a power of two >= 2, got {}",
                self.vec_len
            )));
        }
        if self.density == 0 {
            return Err(MemoryError::InvalidConfig(
                "density must be at least 1".to_string(),
            ));
        }
        if self.block_bits > self.vec_len.trailing_zeros() {
            return Err(MemoryError::InvalidConfig(format!(
                "block_bits ({}) exceeds log2(vec_len) ({})",
                self.block_bits,
                self.vec_len.trailing_zeros()
            )));
        }
        Ok(())
    }
}
