//! Input validation for experiment configuration and data.
//!
//! ## Purpose
//!
//! This module provides validation functions for experiment parameters
//! and algebra inputs. It checks requirements such as positive trial
//! counts, non-negative variances, and finite values.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first error encountered.
//! * **Efficiency**: Checks are ordered from cheap to expensive.
//!
//! ## Key concepts
//!
//! * **Variance bounds**: Noise variance must be finite and `>= 0`;
//!   negative variance is rejected, never clamped.
//! * **Finite checks**: All algebra inputs must be finite (no NaN/Inf).
//!
//! ## Invariants
//!
//! * All validated inputs satisfy their respective mathematical constraints.
//! * Validation logic is deterministic and side-effect free.
//!
//! ## Non-goals
//!
//! * This module does not correct invalid inputs.
//! * This module does not run the experiment itself.

// Internal dependencies
use crate::algebra::triangular::TriangularElement;
use crate::primitives::errors::AmenabilityError;
use crate::stochastic::schedule::VarianceSchedule;

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for experiment configuration and input data.
///
/// Provides static methods returning `Result<(), AmenabilityError>` that
/// fail fast upon identifying the first violation.
pub struct Validator;

impl Validator {
    // ========================================================================
    // Parameter Validation
    // ========================================================================

    /// Validate the trial count.
    pub fn validate_trials(trials: usize) -> Result<(), AmenabilityError> {
        if trials == 0 {
            return Err(AmenabilityError::InvalidTrials { got: trials });
        }
        Ok(())
    }

    /// Validate a noise variance.
    ///
    /// Variance exactly zero is valid (it yields the deterministic
    /// combination); anything below zero or non-finite is rejected.
    pub fn validate_variance(variance: f64) -> Result<(), AmenabilityError> {
        if !variance.is_finite() {
            return Err(AmenabilityError::InvalidNumericValue(format!(
                "variance={}",
                variance
            )));
        }
        if variance < 0.0 {
            return Err(AmenabilityError::NegativeVariance { got: variance });
        }
        Ok(())
    }

    /// Validate a variance schedule via its base variance.
    ///
    /// Both policies are monotone in the base variance, so a valid base
    /// implies `variance_at(n) >= 0` for every `n >= 1`.
    pub fn validate_schedule(schedule: &VarianceSchedule) -> Result<(), AmenabilityError> {
        Self::validate_variance(schedule.base_variance())
    }

    // ========================================================================
    // Input Validation
    // ========================================================================

    /// Validate a sequence input: non-empty and all values finite.
    pub fn validate_sequence(seq: &[f64], name: &str) -> Result<(), AmenabilityError> {
        if seq.is_empty() {
            return Err(AmenabilityError::EmptyInput);
        }
        for (i, &val) in seq.iter().enumerate() {
            if !val.is_finite() {
                return Err(AmenabilityError::InvalidNumericValue(format!(
                    "{}[{}]={}",
                    name, i, val
                )));
            }
        }
        Ok(())
    }

    /// Validate a triangular element: all three parameters finite.
    pub fn validate_element(
        elem: &TriangularElement<f64>,
        name: &str,
    ) -> Result<(), AmenabilityError> {
        for (label, val) in [("a", elem.a), ("x", elem.x), ("b", elem.b)] {
            if !val.is_finite() {
                return Err(AmenabilityError::InvalidNumericValue(format!(
                    "{}.{}={}",
                    name, label, val
                )));
            }
        }
        Ok(())
    }
}
