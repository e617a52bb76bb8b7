//! Convergence driver: the shared trial loop of both experiments.
//!
//! ## Purpose
//!
//! This module runs a fixed number of noisy-combination trials against a
//! variance schedule and records how far each noisy result deviates from
//! the exact one. Both algebra variants share a single control loop; only
//! the combination rule differs.
//!
//! ## Design notes
//!
//! * **Hoisted exact result**: The deterministic combination never varies
//!   across iterations, so it is computed once before the loop and reused
//!   for every difference.
//! * **Injected RNG**: The caller owns the random source; the driver never
//!   touches a process-wide generator.
//! * **Pure output**: The driver produces a [`NormTrace`] and performs no
//!   I/O; rendering is a separate collaborator (see `render`).
//!
//! ## Invariants
//!
//! * The trace has exactly `trials` entries, all non-negative.
//! * Iteration `n` (1-based) uses variance `schedule.variance_at(n)`.
//!
//! ## Non-goals
//!
//! * This module does not plot or persist anything.
//! * This module does not average over repeated runs; callers wanting
//!   expectations re-run with fresh seeds.

// External dependencies
use rand::Rng;

// Internal dependencies
use crate::algebra::sequence::convolve_same;
use crate::algebra::triangular::TriangularElement;
use crate::engine::output::NormTrace;
use crate::engine::validator::Validator;
use crate::math::norm::norm_diff;
use crate::primitives::errors::AmenabilityError;
use crate::stochastic::noise::{noisy_convolution, noisy_triangular_product};
use crate::stochastic::schedule::VarianceSchedule;

// ============================================================================
// Convergence Driver
// ============================================================================

/// Runs the noisy-combination trial loop for a configured schedule.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConvergenceDriver {
    trials: usize,
    schedule: VarianceSchedule,
}

impl ConvergenceDriver {
    /// Create a driver, validating the trial count and schedule up front.
    pub fn new(trials: usize, schedule: VarianceSchedule) -> Result<Self, AmenabilityError> {
        Validator::validate_trials(trials)?;
        Validator::validate_schedule(&schedule)?;
        Ok(Self { trials, schedule })
    }

    /// Configured number of trials.
    pub fn trials(&self) -> usize {
        self.trials
    }

    /// Configured variance schedule.
    pub fn schedule(&self) -> VarianceSchedule {
        self.schedule
    }

    /// Run the convolution variant: perturb `f * g` at each trial.
    pub fn run_convolution<R: Rng + ?Sized>(
        &self,
        f: &[f64],
        g: &[f64],
        rng: &mut R,
    ) -> Result<NormTrace, AmenabilityError> {
        Validator::validate_sequence(f, "f")?;
        Validator::validate_sequence(g, "g")?;

        let exact = convolve_same(f, g);
        self.drive(rng, &exact, |variance, rng| {
            noisy_convolution(f, g, variance, rng)
        })
    }

    /// Run the matrix variant: perturb `lhs · rhs` at each trial.
    pub fn run_triangular<R: Rng + ?Sized>(
        &self,
        lhs: &TriangularElement<f64>,
        rhs: &TriangularElement<f64>,
        rng: &mut R,
    ) -> Result<NormTrace, AmenabilityError> {
        Validator::validate_element(lhs, "lhs")?;
        Validator::validate_element(rhs, "rhs")?;

        let exact: Vec<f64> = lhs.product(rhs).to_matrix().iter().cloned().collect();
        self.drive(rng, &exact, |variance, rng| {
            noisy_triangular_product(lhs, rhs, variance, rng)
                .map(|m| m.iter().cloned().collect())
        })
    }

    /// The shared trial loop.
    ///
    /// `noisy` produces the flattened noisy result for a given variance;
    /// `exact` is the flattened deterministic result it is compared to.
    fn drive<R, F>(
        &self,
        rng: &mut R,
        exact: &[f64],
        mut noisy: F,
    ) -> Result<NormTrace, AmenabilityError>
    where
        R: Rng + ?Sized,
        F: FnMut(f64, &mut R) -> Result<Vec<f64>, AmenabilityError>,
    {
        let mut diffs = Vec::with_capacity(self.trials);

        for n in 1..=self.trials {
            let variance = self.schedule.variance_at(n);
            let result = noisy(variance, rng)?;
            diffs.push(norm_diff(&result, exact));
        }

        Ok(NormTrace::new(diffs))
    }
}
