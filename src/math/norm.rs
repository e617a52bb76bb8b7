//! Euclidean norm helpers for flat real vectors.
//!
//! ## Purpose
//!
//! This module provides the norm used to measure how far a noisy
//! combination deviates from its deterministic counterpart. Both the
//! convolution output and the flattened 2×2 matrix are treated as flat
//! real vectors and compared in the Euclidean (Frobenius) norm.
//!
//! ## Invariants
//!
//! * The norm is always non-negative.
//! * `norm_diff(a, a) == 0` for any finite `a`.
//!
//! ## Non-goals
//!
//! * This module does not provide the algebra norms (ℓ¹ summability is a
//!   property of the demo constants, not something measured here).

// External dependencies
use num_traits::Float;

// ============================================================================
// Norm Computation
// ============================================================================

/// Compute the Euclidean norm of a flat vector.
#[inline]
pub fn euclidean_norm<T: Float>(v: &[T]) -> T {
    v.iter()
        .map(|&vi| vi * vi)
        .fold(T::zero(), |acc, x| acc + x)
        .sqrt()
}

/// Compute the Euclidean norm of the elementwise difference `a - b`.
///
/// Trailing elements of the longer slice are compared against zero, so a
/// zero-padded vector and its unpadded form are at distance zero.
#[inline]
pub fn norm_diff<T: Float>(a: &[T], b: &[T]) -> T {
    let common = a.len().min(b.len());
    let mut sum_sq = T::zero();

    for i in 0..common {
        let d = a[i] - b[i];
        sum_sq = sum_sq + d * d;
    }
    for &ai in &a[common..] {
        sum_sq = sum_sq + ai * ai;
    }
    for &bi in &b[common..] {
        sum_sq = sum_sq + bi * bi;
    }

    sum_sq.sqrt()
}
