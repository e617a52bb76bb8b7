//! Variance schedules for the convergence experiments.
//!
//! ## Purpose
//!
//! This module defines the rule mapping a 1-based iteration index to the
//! noise variance used at that iteration. Two policies exist, mirroring
//! the two original experiments: a constant variance, and a variance that
//! decays as `initial / n`.
//!
//! ## Invariants
//!
//! * Both policies are pure functions of the iteration index.
//! * For a non-negative base variance, `variance_at(n)` is non-negative
//!   for every `n >= 1`; the decreasing policy is strictly decreasing in
//!   `n` and tends to zero.
//!
//! ## Non-goals
//!
//! * This module does not validate the base variance (see
//!   `engine::validator`); arbitrary schedules beyond these two policies
//!   are out of scope.

// ============================================================================
// Variance Schedule
// ============================================================================

/// Policy mapping the 1-based iteration index to a noise variance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum VarianceSchedule {
    /// The same variance at every iteration.
    Fixed(f64),

    /// Variance decaying as `initial / n`, tending to zero.
    Decreasing {
        /// Variance at the first iteration.
        initial: f64,
    },
}

impl VarianceSchedule {
    /// Compute the variance for iteration `n` (1-based).
    #[inline]
    pub fn variance_at(&self, n: usize) -> f64 {
        debug_assert!(n >= 1, "iteration index is 1-based");
        match *self {
            VarianceSchedule::Fixed(v) => v,
            VarianceSchedule::Decreasing { initial } => initial / n as f64,
        }
    }

    /// The base variance of the policy, used for up-front validation.
    #[inline]
    pub fn base_variance(&self) -> f64 {
        match *self {
            VarianceSchedule::Fixed(v) => v,
            VarianceSchedule::Decreasing { initial } => initial,
        }
    }
}

impl Default for VarianceSchedule {
    /// The original experiments run with initial variance 1.0 decaying
    /// as `1/n`.
    fn default() -> Self {
        VarianceSchedule::Decreasing { initial: 1.0 }
    }
}
