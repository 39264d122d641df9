//! Sign-vector key and bucket-index derivation from a projected vector.
//!
//! A projected vector yields two addresses at different granularities:
//!
//! - the full ±1 sign pattern, used as a fine-grained multiplicative key
//!   against the selected weight block, and
//! - a small bucket index read from the leading `block_bits` coordinates,
//!   selecting which weight block within a slot participates.
//!
//! The leading coordinates serve both roles: they contribute to the index
//! and to the sign key.

/// Write the ±1 sign pattern of `projected` into `out`.
///
/// `out[i]` is `+1.0` if `projected[i] >= 0`, else `-1.0`. Signs are stored
/// as `f32` so the key applies directly through
/// [`crate::vector::multiply_add`].
///
/// # Panics
///
/// Panics if the slices have different lengths.
pub fn sign_vector(projected: &[f32], out: &mut [f32]) {
    assert_eq!(
        projected.len(),
        out.len(),
        "vectors must have the same length"
    );
    for (o, &p) in out.iter_mut().zip(projected) {
        *o = if p >= 0.0 { 1.0 } else { -1.0 };
    }
}

/// Derive the coarse bucket index from the leading `block_bits` coordinates.
///
/// Bit `i` of the result is set iff `projected[i] >= 0`; the index is always
/// in `[0, 2^block_bits)`.
///
/// # Panics
///
/// Panics if `projected` has fewer than `block_bits` elements.
#[must_use]
pub fn bucket_index(projected: &[f32], block_bits: u32) -> usize {
    let bits = block_bits as usize;
    assert!(
        bits <= projected.len(),
        "block_bits exceeds projected length"
    );
    let mut index = 0;
    for (i, &p) in projected.iter().take(bits).enumerate() {
        if p >= 0.0 {
            index |= 1 << i;
        }
    }
    index
}
