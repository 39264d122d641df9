//! # lsh-memory-rs
//!
//! Vector-to-vector associative memory using a Locality-Sensitive Hash (LSH)
//! built from structured random projections.
//!
//! Given a fixed-length `f32` input vector, the memory recalls a previously
//! associated output vector, and can be trained incrementally on new
//! (input, target) pairs. Instead of storing patterns exactly, it hashes each
//! input into a small set of addressed weight blocks, trading exact storage
//! for bounded memory and `O(density · n · log n)` time per operation.
//!
//! ## How it works
//!
//! The projection is a deterministic sign flip (driven by a 32-bit hash
//! stream) composed with the fast Walsh-Hadamard Transform — a dense-matrix-
//! free random projection that is exactly reproducible from a seed. Similar
//! inputs tend to produce similar sign patterns after projection, which is
//! the locality-sensitive property the addressing scheme relies on:
//!
//! - the leading projected coordinates select one weight block per slot
//!   (the coarse bucket index), and
//! - the full ±1 sign pattern acts as a fine-grained multiplicative key
//!   against the selected block.
//!
//! Recall superposes the sign-modulated blocks over all `density` slots;
//! training applies a delta rule that distributes the recall error uniformly
//! across the slots. Accuracy improves with higher `density` and
//! `block_bits` at the cost of memory and time.
//!
//! ## Quick Start
//!
//! ```
//! use lsh_memory_rs::{AssociativeMemory, MemoryConfig};
//!
//! let config = MemoryConfig::default()
//!     .with_vec_len(64)
//!     .with_density(4)
//!     .with_block_bits(2);
//! let mut memory = AssociativeMemory::new(config)?;
//!
//! // Auto-associate a pattern with itself.
//! let pattern: Vec<f32> = (0..64).map(|i| if i % 3 == 0 { 1.0 } else { -1.0 }).collect();
//! for _ in 0..5 {
//!     memory.train(&pattern, &pattern)?;
//! }
//!
//! let recalled = memory.recall_owned(&pattern)?;
//! assert_eq!(recalled.len(), 64);
//! # Ok::<(), lsh_memory_rs::MemoryError>(())
//! ```
//!
//! ## Modules
//!
//! - [`config`]: Memory shape and seed configuration
//! - [`error`]: Error types and result alias
//! - [`vector`]: Elementwise vector arithmetic primitives
//! - [`transform`]: In-place fast Walsh-Hadamard Transform
//! - [`projection`]: Seeded sign-flip hash stream and structured projection
//! - [`addressing`]: Sign-vector key and bucket-index derivation
//! - [`memory`]: The associative memory store (`recall` / `train` / `clear`)
//!
//! ## References
//!
//! - Kanerva, P. (1988). Sparse Distributed Memory
//! - Charikar, M. (2002). Similarity Estimation Techniques from Rounding
//!   Algorithms
//! - Ailon, N. & Chazelle, B. (2009). The Fast Johnson-Lindenstrauss
//!   Transform

#![deny(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod addressing;
pub mod config;
pub mod error;
pub mod memory;
pub mod projection;
pub mod transform;
pub mod vector;

pub use config::MemoryConfig;
pub use error::{MemoryError, Result};
pub use memory::AssociativeMemory;
pub use projection::{project, sign_flip, SignHashStream};
pub use transform::walsh_hadamard;
