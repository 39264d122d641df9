//! Elementwise vector arithmetic primitives.
//!
//! All functions operate on equal-length `f32` slices. Length mismatches are
//! programmer errors inside this crate and panic; fallible length validation
//! happens once at the [`crate::AssociativeMemory`] boundary.

/// Copy `src` into `dst`.
///
/// # Panics
///
/// Panics if the slices have different lengths.
pub fn copy(dst: &mut [f32], src: &[f32]) {
    assert_eq!(dst.len(), src.len(), "vectors must have the same length");
    dst.copy_from_slice(src);
}

/// Set every element of `v` to zero.
pub fn zero(v: &mut [f32]) {
    v.fill(0.0);
}

/// Scale: `dst[i] = src[i] * k`.
///
/// # Panics
///
/// Panics if the slices have different lengths.
pub fn scale(dst: &mut [f32], src: &[f32], k: f32) {
    assert_eq!(dst.len(), src.len(), "vectors must have the same length");
    for (d, &s) in dst.iter_mut().zip(src) {
        *d = s * k;
    }
}

/// In-place scale: `v[i] *= k`.
pub fn scale_in_place(v: &mut [f32], k: f32) {
    for x in v.iter_mut() {
        *x *= k;
    }
}

/// Subtract: `dst[i] = x[i] - y[i]`.
///
/// # Panics
///
/// Panics if the slices have different lengths.
pub fn subtract(dst: &mut [f32], x: &[f32], y: &[f32]) {
    assert_eq!(dst.len(), x.len(), "vectors must have the same length");
    assert_eq!(dst.len(), y.len(), "vectors must have the same length");
    for ((d, &a), &b) in dst.iter_mut().zip(x).zip(y) {
        *d = a - b;
    }
}

/// In-place reverse subtract: `dst[i] = x[i] - dst[i]`.
///
/// Used to turn a prediction buffer into an error vector without a third
/// scratch slice.
///
/// # Panics
///
/// Panics if the slices have different lengths.
pub fn subtract_from(dst: &mut [f32], x: &[f32]) {
    assert_eq!(dst.len(), x.len(), "vectors must have the same length");
    for (d, &a) in dst.iter_mut().zip(x) {
        *d = a - *d;
    }
}

/// Multiply-accumulate: `dst[i] += x[i] * y[i]`.
///
/// # Panics
///
/// Panics if the slices have different lengths.
pub fn multiply_add(dst: &mut [f32], x: &[f32], y: &[f32]) {
    assert_eq!(dst.len(), x.len(), "vectors must have the same length");
    assert_eq!(dst.len(), y.len(), "vectors must have the same length");
    for ((d, &a), &b) in dst.iter_mut().zip(x).zip(y) {
        *d += a * b;
    }
}
