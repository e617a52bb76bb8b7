//! Upper-triangular 2×2 algebra elements and their product.
//!
//! ## Purpose
//!
//! This module provides the deterministic combination rule for the matrix
//! variant of the experiment: elements of a triangular Banach algebra are
//! parameterized by three scalars `(a, x, b)` standing for the matrix
//!
//! ```text
//! | a  x |
//! | 0  b |
//! ```
//!
//! and multiply by the triangular product rule
//! `(a, x, b) · (a', x', b') = (a·a', a·x' + x·b', b·b')`.
//!
//! ## Design notes
//!
//! * **Three parameters, four entries**: The bottom-left entry is
//!   structurally zero; only the three parameters are ever perturbed.
//! * **Dense view**: `to_matrix` materializes the element as a 2×2
//!   `ndarray::Array2` for norm computation and display.
//!
//! ## Invariants
//!
//! * The product of two upper-triangular elements is upper-triangular.
//! * `to_matrix()[[1, 0]] == 0` always.
//!
//! ## Non-goals
//!
//! * This module does not generalize to n×n triangular matrices.

// External dependencies
use ndarray::{arr2, Array2};
use num_traits::Float;

// ============================================================================
// Demo Constants
// ============================================================================

/// The two demonstration elements of the original experiment.
pub mod demo {
    use super::TriangularElement;

    /// Left-hand demonstration element `(a=1, x=0.5, b=1)`.
    pub const DEMO_LHS: TriangularElement<f64> = TriangularElement {
        a: 1.0,
        x: 0.5,
        b: 1.0,
    };

    /// Right-hand demonstration element `(a'=0.8, x'=0.4, b'=1.2)`.
    pub const DEMO_RHS: TriangularElement<f64> = TriangularElement {
        a: 0.8,
        x: 0.4,
        b: 1.2,
    };
}

// ============================================================================
// Triangular Element
// ============================================================================

/// An element of the triangular algebra, parameterized by `(a, x, b)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TriangularElement<T> {
    /// Top-left entry.
    pub a: T,
    /// Top-right entry.
    pub x: T,
    /// Bottom-right entry.
    pub b: T,
}

impl<T: Float> TriangularElement<T> {
    /// Create a new element from its three parameters.
    pub fn new(a: T, x: T, b: T) -> Self {
        Self { a, x, b }
    }

    /// Compute the exact triangular product `self · rhs`.
    pub fn product(&self, rhs: &Self) -> Self {
        Self {
            a: self.a * rhs.a,
            x: self.a * rhs.x + self.x * rhs.b,
            b: self.b * rhs.b,
        }
    }

    /// Materialize the element as a dense 2×2 matrix.
    pub fn to_matrix(&self) -> Array2<T> {
        arr2(&[[self.a, self.x], [T::zero(), self.b]])
    }

    /// Flatten the element into the vector `[a, x, b]` of its three
    /// structurally independent entries.
    pub fn to_flat(&self) -> [T; 3] {
        [self.a, self.x, self.b]
    }
}
