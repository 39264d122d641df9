//! The associative memory store.
//!
//! An [`AssociativeMemory`] owns a `density × 2^block_bits` grid of weight
//! blocks. Recall reads one addressed block per slot and superposes the
//! sign-modulated contributions; training applies a least-mean-squares delta
//! rule that distributes the recall error uniformly across the slots.
//!
//! Inputs whose hash collides with a previously trained input's address will
//! interfere — the capacity/speed trade-off inherent to the LSH scheme.
//! Accuracy improves with higher `density` and `block_bits` at the cost of
//! memory and time.

use tracing::debug;

use crate::addressing::{bucket_index, sign_vector};
use crate::config::MemoryConfig;
use crate::error::{MemoryError, Result};
use crate::projection::project;
use crate::vector;

/// One independent hashing channel: its weight blocks plus the address
/// computed for the most recent projection.
struct Slot {
    /// `block_count` weight blocks of `vec_len` elements each.
    blocks: Vec<Vec<f32>>,
    /// ±1 key from the latest projection of this slot.
    signs: Vec<f32>,
    /// Bucket selected by the latest projection of this slot.
    bucket: usize,
}

impl Slot {
    fn new(vec_len: usize, block_count: usize) -> Self {
        Self {
            blocks: vec![vec![0.0; vec_len]; block_count],
            signs: vec![0.0; vec_len],
            bucket: 0,
        }
    }
}

/// Vector-to-vector associative memory addressed by locality-sensitive
/// hashing.
///
/// The memory is constructed once with a fixed shape; weights are mutated
/// only by [`train`](Self::train), read by [`recall`](Self::recall), and
/// reset by [`clear`](Self::clear). All vectors are caller-owned `f32`
/// slices of the configured length.
///
/// One logical caller per instance: `recall` and `train` take `&mut self`
/// and must be serialized externally if the memory is shared.
///
/// # Example
///
/// ```
/// use lsh_memory_rs::{AssociativeMemory, MemoryConfig};
///
/// let config = MemoryConfig::default().with_vec_len(128).with_density(6);
/// let mut memory = AssociativeMemory::new(config)?;
///
/// let key: Vec<f32> = (0..128).map(|i| (i as f32 * 0.3).sin()).collect();
/// let value: Vec<f32> = (0..128).map(|i| (i as f32 * 0.9).cos()).collect();
/// memory.train(&value, &key)?;
///
/// let mut recalled = vec![0.0; 128];
/// memory.recall(&mut recalled, &key)?;
/// # Ok::<(), lsh_memory_rs::MemoryError>(())
/// ```
pub struct AssociativeMemory {
    config: MemoryConfig,
    slots: Vec<Slot>,
    /// Projection scratch.
    work_a: Vec<f32>,
    /// Prediction/error scratch for `train`.
    work_b: Vec<f32>,
}

impl AssociativeMemory {
    /// Create a memory with all weights at zero.
    ///
    /// # Errors
    ///
    /// Returns [`MemoryError::InvalidConfig`] if the configuration fails
    /// [`MemoryConfig::validate`].
    pub fn new(config: MemoryConfig) -> Result<Self> {
        config.validate()?;
        let slots = (0..config.density)
            .map(|_| Slot::new(config.vec_len, config.block_count()))
            .collect();
        debug!(
            vec_len = config.vec_len,
            density = config.density,
            block_bits = config.block_bits,
            seed = config.seed,
            "created associative memory"
        );
        Ok(Self {
            slots,
            work_a: vec![0.0; config.vec_len],
            work_b: vec![0.0; config.vec_len],
            config,
        })
    }

    /// The configuration this memory was built with.
    #[must_use]
    pub const fn config(&self) -> &MemoryConfig {
        &self.config
    }

    fn check_len(&self, v: &[f32]) -> Result<()> {
        if v.len() == self.config.vec_len {
            Ok(())
        } else {
            Err(MemoryError::ShapeMismatch {
                expected: self.config.vec_len,
                actual: v.len(),
            })
        }
    }

    /// Recall the vector associated with `input`, accumulating into `result`.
    ///
    /// `result` is zeroed first, then each slot projects the input with its
    /// own seed, selects a weight block by bucket index, and accumulates the
    /// sign-modulated block. Two consecutive recalls of the same input with
    /// no intervening train produce bit-identical results.
    ///
    /// # Errors
    ///
    /// Returns [`MemoryError::ShapeMismatch`] if either argument's length
    /// differs from the configured `vec_len`. Fails before mutating any
    /// state.
    pub fn recall(&mut self, result: &mut [f32], input: &[f32]) -> Result<()> {
        self.check_len(result)?;
        self.check_len(input)?;
        self.recall_into(result, input);
        Ok(())
    }

    /// Allocating variant of [`recall`](Self::recall).
    ///
    /// # Errors
    ///
    /// Returns [`MemoryError::ShapeMismatch`] if `input`'s length differs
    /// from the configured `vec_len`.
    pub fn recall_owned(&mut self, input: &[f32]) -> Result<Vec<f32>> {
        let mut result = vec![0.0; self.config.vec_len];
        self.recall(&mut result, input)?;
        Ok(result)
    }

    /// Shared recall path; lengths already validated by the caller.
    #[allow(clippy::cast_possible_truncation)]
    fn recall_into(&mut self, result: &mut [f32], input: &[f32]) {
        vector::zero(result);
        for (i, slot) in self.slots.iter_mut().enumerate() {
            vector::copy(&mut self.work_a, input);
            project(&mut self.work_a, self.config.seed.wrapping_add(i as u32));
            slot.bucket = bucket_index(&self.work_a, self.config.block_bits);
            sign_vector(&self.work_a, &mut slot.signs);
            vector::multiply_add(result, &slot.signs, &slot.blocks[slot.bucket]);
        }
    }

    /// Train the memory to associate `input` with `target`.
    ///
    /// Performs a recall internally, computes
    /// `error = (target - prediction) / density`, and adds the
    /// sign-modulated error to the one addressed weight block per slot. The
    /// recall-derived addresses never outlive the call, so `train` carries
    /// no preconditions beyond argument shapes.
    ///
    /// # Errors
    ///
    /// Returns [`MemoryError::ShapeMismatch`] if either argument's length
    /// differs from the configured `vec_len`. Fails before mutating any
    /// weights.
    #[allow(clippy::cast_precision_loss)]
    pub fn train(&mut self, target: &[f32], input: &[f32]) -> Result<()> {
        self.check_len(target)?;
        self.check_len(input)?;

        let mut prediction = std::mem::take(&mut self.work_b);
        self.recall_into(&mut prediction, input);

        // Turn the prediction into the per-slot error in place.
        vector::subtract_from(&mut prediction, target);
        vector::scale_in_place(&mut prediction, 1.0 / self.config.density as f32);

        for slot in &mut self.slots {
            vector::multiply_add(&mut slot.blocks[slot.bucket], &slot.signs, &prediction);
        }
        self.work_b = prediction;
        Ok(())
    }

    /// One training sweep over a set of (target, input) pairs.
    ///
    /// Equivalent to calling [`train`](Self::train) on each pair in order.
    ///
    /// # Errors
    ///
    /// Returns the first error encountered; pairs before it have been
    /// trained.
    pub fn train_all<'a, I>(&mut self, pairs: I) -> Result<()>
    where
        I: IntoIterator<Item = (&'a [f32], &'a [f32])>,
    {
        for (target, input) in pairs {
            self.train(target, input)?;
        }
        Ok(())
    }

    /// Reset every weight block to zero.
    ///
    /// Shape and seed are untouched; the memory behaves as freshly
    /// constructed.
    pub fn clear(&mut self) {
        for slot in &mut self.slots {
            for block in &mut slot.blocks {
                vector::zero(block);
            }
        }
        debug!("cleared all weight blocks");
    }
}
