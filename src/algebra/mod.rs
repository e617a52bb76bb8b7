//! Layer 3: Algebra
//!
//! # Purpose
//!
//! This layer provides the deterministic combination rules of the two
//! algebra variants:
//! - Linear convolution of summable sequences (ℓ¹(ℤ) multiplication)
//! - The triangular product of 2×2 upper-triangular elements
//!
//! The stochastic layer perturbs exactly these operations; both the noisy
//! and the exact path share one combination rule.

/// Linear convolution of zero-padded decaying sequences.
pub mod sequence;

/// Upper-triangular 2×2 elements and the triangular product.
pub mod triangular;
