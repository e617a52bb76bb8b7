//! Linear convolution of summable sequences.
//!
//! ## Purpose
//!
//! This module provides the deterministic combination rule for the
//! sequence variant of the experiment: linear convolution of two
//! zero-padded decaying sequences, which represents multiplication in
//! the algebra ℓ¹(ℤ).
//!
//! ## Design notes
//!
//! * **"Same" mode**: The experiment compares vectors of a fixed length,
//!   so the headline operation trims the full convolution to the length
//!   of the longer input, centered the way NumPy's `mode='same'` does.
//! * **Generics**: Convolution is generic over `Float` types.
//!
//! ## Key concepts
//!
//! * **Full convolution**: output length `lf + lg − 1`, entry `k` is
//!   `Σ f[i]·g[k−i]`.
//! * **Centering**: "same" keeps `max(lf, lg)` entries of the full
//!   result starting at offset `(min(lf, lg) − 1) / 2`.
//!
//! ## Invariants
//!
//! * Convolution is bilinear and commutative in its two inputs.
//! * `convolve_same` output length equals `max(f.len(), g.len())`.
//!
//! ## Non-goals
//!
//! * This module does not add noise (see `stochastic::noise`).
//! * This module does not implement FFT-based convolution; inputs are
//!   small fixed-length constants.

// External dependencies
use num_traits::Float;

// ============================================================================
// Demo Constants
// ============================================================================

/// The two decaying demonstration sequences of the original experiment.
pub mod demo {
    /// First decaying sequence in ℓ¹(ℤ), zero-padded to length 10.
    pub const DEMO_F: [f64; 10] = [1.0, 0.5, 0.25, 0.125, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0];

    /// Second decaying sequence in ℓ¹(ℤ), zero-padded to length 10.
    pub const DEMO_G: [f64; 10] = [0.5, 0.25, 0.125, 0.0625, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0];
}

// ============================================================================
// Convolution
// ============================================================================

/// Compute the full linear convolution of `f` and `g`.
///
/// The output has length `f.len() + g.len() - 1`. Returns an empty vector
/// if either input is empty.
pub fn convolve_full<T: Float>(f: &[T], g: &[T]) -> Vec<T> {
    if f.is_empty() || g.is_empty() {
        return Vec::new();
    }

    let out_len = f.len() + g.len() - 1;
    let mut out = vec![T::zero(); out_len];

    for (i, &fi) in f.iter().enumerate() {
        for (j, &gj) in g.iter().enumerate() {
            out[i + j] = out[i + j] + fi * gj;
        }
    }

    out
}

/// Compute the "same"-mode linear convolution of `f` and `g`.
///
/// The output has length `max(f.len(), g.len())` and is the centered
/// portion of the full convolution, matching `np.convolve(f, g, 'same')`:
/// the kept window starts at offset `(min(lf, lg) - 1) / 2` of the full
/// result.
pub fn convolve_same<T: Float>(f: &[T], g: &[T]) -> Vec<T> {
    if f.is_empty() || g.is_empty() {
        return Vec::new();
    }

    let full = convolve_full(f, g);
    let out_len = f.len().max(g.len());
    let offset = (f.len().min(g.len()) - 1) / 2;

    full[offset..offset + out_len].to_vec()
}
