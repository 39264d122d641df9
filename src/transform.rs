//! In-place fast Walsh-Hadamard Transform.
//!
//! The transform performs `log2(n)` butterfly passes with doubling stride
//! and scales the result by `1/sqrt(n)`, making it orthonormal. Because the
//! unnormalized transform is its own inverse up to a factor of `n`, the
//! normalized transform is exactly self-inverse: applying it twice returns
//! the original vector (up to floating tolerance). The addressing scheme in
//! this crate relies on that reproducibility.

use crate::vector;

/// Apply the orthonormal Walsh-Hadamard Transform to `v` in place.
///
/// Runs in `O(n log n)`; purely deterministic, no randomness.
///
/// # Panics
///
/// Panics if the length of `v` is not a power of two.
#[allow(clippy::cast_precision_loss)]
pub fn walsh_hadamard(v: &mut [f32]) {
    let n = v.len();
    assert!(n.is_power_of_two(), "length must be a power of two");

    let mut h = 1;
    while h < n {
        let mut i = 0;
        while i < n {
            for j in i..i + h {
                let a = v[j];
                let b = v[j + h];
                v[j] = a + b;
                v[j + h] = a - b;
            }
            i += h * 2;
        }
        h *= 2;
    }

    vector::scale_in_place(v, 1.0 / (n as f32).sqrt());
}

#[cfg(test)]
mod tests {
    use super::*;

    fn l2_distance(a: &[f32], b: &[f32]) -> f32 {
        a.iter()
            .zip(b)
            .map(|(x, y)| (x - y) * (x - y))
            .sum::<f32>()
            .sqrt()
    }

    #[test]
    fn test_impulse() {
        // WHT of a unit impulse is a constant vector at 1/sqrt(n).
        let mut v = [1.0, 0.0, 0.0, 0.0];
        walsh_hadamard(&mut v);
        assert_eq!(v, [0.5, 0.5, 0.5, 0.5]);
    }

    #[test]
    fn test_involution() {
        for len in [4usize, 8, 16, 4096] {
            let original: Vec<f32> = (0..len).map(|i| (i as f32 * 0.7).sin()).collect();
            let mut v = original.clone();
            walsh_hadamard(&mut v);
            walsh_hadamard(&mut v);
            let dist = l2_distance(&v, &original);
            assert!(dist < 1e-3, "involution failed for len {len}: dist {dist}");
        }
    }

    #[test]
    fn test_energy_preserved() {
        // Orthonormal transforms preserve the L2 norm.
        let original: Vec<f32> = (0..256).map(|i| (i as f32 * 1.3).cos()).collect();
        let norm_before: f32 = original.iter().map(|x| x * x).sum::<f32>().sqrt();
        let mut v = original;
        walsh_hadamard(&mut v);
        let norm_after: f32 = v.iter().map(|x| x * x).sum::<f32>().sqrt();
        assert!((norm_before - norm_after).abs() < 1e-2);
    }

    #[test]
    #[should_panic(expected = "power of two")]
    fn test_rejects_non_power_of_two() {
        let mut v = [1.0, 2.0, 3.0];
        walsh_hadamard(&mut v);
    }
}
