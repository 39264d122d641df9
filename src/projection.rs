//! Seeded sign-flip hash stream and structured random projection.
//!
//! The projection composes a deterministic per-element sign flip with the
//! Walsh-Hadamard Transform. This is a cheap, dense-matrix-free random
//! projection that is exactly reproducible from its seed, and is structured
//! so that similar inputs tend to produce similar sign patterns after
//! projection — the locality-sensitive property the addressing layer
//! depends on.
//!
//! The hash stream is a dedicated wrapping 32-bit affine recurrence, not a
//! general-purpose RNG: per-slot seeds (`base_seed + slot`) must yield
//! independent, bit-for-bit reproducible streams, so the exact constants
//! and wraparound behavior are part of the contract.

use crate::transform::walsh_hadamard;

/// Additive constant of the state recurrence.
const STREAM_INCREMENT: u32 = 0x3C6E_F35F;
/// Multiplicative constant of the state recurrence.
const STREAM_MULTIPLIER: u32 = 0x0019_660D;
/// Output mixing constant; only the top bit of the mixed value is used.
const STREAM_MIXER: u32 = 0x9E37_79B9;

/// Deterministic 32-bit hash stream producing one sign decision per element.
///
/// State advances by `state = (state + 0x3C6EF35F) * 0x19660D mod 2^32`; an
/// element's sign is flipped iff `state * 0x9E3779B9 mod 2^32` has its top
/// bit clear.
#[derive(Debug, Clone)]
pub struct SignHashStream {
    state: u32,
}

impl SignHashStream {
    /// Create a stream from a seed.
    #[must_use]
    pub const fn new(seed: u32) -> Self {
        Self { state: seed }
    }

    /// Advance the stream; returns `true` if the next element's sign
    /// should be flipped.
    #[inline]
    pub fn next_flip(&mut self) -> bool {
        self.state = self
            .state
            .wrapping_add(STREAM_INCREMENT)
            .wrapping_mul(STREAM_MULTIPLIER);
        self.state.wrapping_mul(STREAM_MIXER) & 0x8000_0000 == 0
    }
}

/// Pseudorandomly negate elements of `v` according to the stream seeded
/// with `seed`.
///
/// Applying the same flip twice restores the input exactly, since the
/// stream is deterministic and each flip is its own inverse.
pub fn sign_flip(v: &mut [f32], seed: u32) {
    let mut stream = SignHashStream::new(seed);
    for x in v.iter_mut() {
        if stream.next_flip() {
            *x = -*x;
        }
    }
}

/// Structured random projection: sign flip then Walsh-Hadamard Transform,
/// in place.
///
/// The inverse is the same two steps in the opposite order (both factors
/// are involutions): transforming and then sign-flipping the projected
/// vector with the same seed recovers the original.
///
/// # Panics
///
/// Panics if the length of `v` is not a power of two.
pub fn project(v: &mut [f32], seed: u32) {
    sign_flip(v, seed);
    walsh_hadamard(v);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ramp(len: usize) -> Vec<f32> {
        (0..len).map(|i| i as f32 - len as f32 / 2.0).collect()
    }

    #[test]
    fn test_stream_deterministic() {
        let mut a = SignHashStream::new(42);
        let mut b = SignHashStream::new(42);
        for _ in 0..256 {
            assert_eq!(a.next_flip(), b.next_flip());
        }
    }

    #[test]
    fn test_stream_seed_sensitivity() {
        let mut a = SignHashStream::new(0);
        let mut b = SignHashStream::new(1);
        let flips_a: Vec<bool> = (0..256).map(|_| a.next_flip()).collect();
        let flips_b: Vec<bool> = (0..256).map(|_| b.next_flip()).collect();
        assert_ne!(flips_a, flips_b);
    }

    #[test]
    fn test_stream_roughly_balanced() {
        let mut stream = SignHashStream::new(7);
        let flips = (0..4096).filter(|_| stream.next_flip()).count();
        assert!(
            (1500..=2600).contains(&flips),
            "flip count {flips} far from balanced"
        );
    }

    #[test]
    fn test_sign_flip_preserves_magnitudes() {
        let original = ramp(64);
        let mut v = original.clone();
        sign_flip(&mut v, 9);
        for (x, y) in v.iter().zip(&original) {
            assert_eq!(x.abs(), y.abs());
        }
    }

    #[test]
    fn test_sign_flip_involution() {
        let original = ramp(128);
        let mut v = original.clone();
        sign_flip(&mut v, 5);
        sign_flip(&mut v, 5);
        assert_eq!(v, original);
    }

    #[test]
    fn test_project_deterministic() {
        let mut a = ramp(256);
        let mut b = a.clone();
        project(&mut a, 3);
        project(&mut b, 3);
        assert_eq!(a, b);
    }

    #[test]
    fn test_project_seed_sensitivity() {
        let mut a = ramp(256);
        let mut b = a.clone();
        project(&mut a, 3);
        project(&mut b, 4);
        assert_ne!(a, b);
    }

    #[test]
    fn test_project_inverse() {
        let original = ramp(512);
        let mut v = original.clone();
        project(&mut v, 11);
        // Inverse: transform first, then undo the sign flip.
        walsh_hadamard(&mut v);
        sign_flip(&mut v, 11);
        for (x, y) in v.iter().zip(&original) {
            assert!((x - y).abs() < 1e-3, "got {x}, expected {y}");
        }
    }
}
