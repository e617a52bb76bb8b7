//! Noisy combination operators.
//!
//! ## Purpose
//!
//! This module provides the stochastic analogues of the two deterministic
//! combination rules: each structurally independent entry of the exact
//! result is perturbed by an independent draw from `N(0, variance)`.
//!
//! ## Design notes
//!
//! * **Injected RNG**: Operators take `&mut impl Rng` rather than touching
//!   a process-wide source, so traces are reproducible under a seeded
//!   generator.
//! * **Sampling**: Draws use `StandardNormal` scaled by `sqrt(variance)`,
//!   which is exact for `variance == 0` (no rejection step, no NaN).
//! * **One combination rule**: The noisy path calls the same deterministic
//!   functions as the exact path and differs only in the additive term.
//!
//! ## Invariants
//!
//! * `variance == 0` produces exactly the deterministic combination.
//! * The bottom-left entry of the noisy triangular product is exactly
//!   zero; only `(a, x, b)` positions receive noise.
//!
//! ## Error conditions
//!
//! * `variance < 0` (or non-finite) is rejected with
//!   [`AmenabilityError::NegativeVariance`] /
//!   [`AmenabilityError::InvalidNumericValue`]; nothing is clamped.

// External dependencies
use ndarray::Array2;
use rand::Rng;
use rand_distr::StandardNormal;

// Internal dependencies
use crate::algebra::sequence::convolve_same;
use crate::algebra::triangular::TriangularElement;
use crate::engine::validator::Validator;
use crate::primitives::errors::AmenabilityError;

// ============================================================================
// Gaussian Sampling
// ============================================================================

/// Draw one sample from `N(0, variance)`.
///
/// The variance must already be validated non-negative by the caller.
#[inline]
fn gaussian<R: Rng + ?Sized>(variance: f64, rng: &mut R) -> f64 {
    let z: f64 = rng.sample(StandardNormal);
    z * variance.sqrt()
}

// ============================================================================
// Noisy Combination Operators
// ============================================================================

/// Perturbed "same"-mode convolution of `f` and `g`.
///
/// Computes the deterministic convolution and adds an independent
/// `N(0, variance)` draw to every position.
pub fn noisy_convolution<R: Rng + ?Sized>(
    f: &[f64],
    g: &[f64],
    variance: f64,
    rng: &mut R,
) -> Result<Vec<f64>, AmenabilityError> {
    Validator::validate_variance(variance)?;

    let mut out = convolve_same(f, g);
    for v in out.iter_mut() {
        *v += gaussian(variance, rng);
    }
    Ok(out)
}

/// Perturbed triangular product `lhs · rhs`.
///
/// Computes the exact triangular product and adds independent
/// `N(0, variance)` draws `W1, W2, W3` to the top-left, top-right, and
/// bottom-right entries. The bottom-left entry stays exactly zero.
pub fn noisy_triangular_product<R: Rng + ?Sized>(
    lhs: &TriangularElement<f64>,
    rhs: &TriangularElement<f64>,
    variance: f64,
    rng: &mut R,
) -> Result<Array2<f64>, AmenabilityError> {
    Validator::validate_variance(variance)?;

    let exact = lhs.product(rhs);
    let perturbed = TriangularElement::new(
        exact.a + gaussian(variance, rng),
        exact.x + gaussian(variance, rng),
        exact.b + gaussian(variance, rng),
    );
    Ok(perturbed.to_matrix())
}
