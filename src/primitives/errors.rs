//! Error types for the amenability experiment crate.
//!
//! ## Purpose
//!
//! This module defines the single crate-wide error enum returned by all
//! fallible operations: input validation, noisy combination, and plot
//! rendering.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Errors are produced at the first violation; nothing is
//!   clamped or silently corrected.
//! * **Precision**: Each variant carries the offending value(s) so the
//!   message alone identifies the problem.
//!
//! ## Invariants
//!
//! * A `NegativeVariance` error is raised for any requested noise variance
//!   below zero; variance exactly zero is valid and produces the
//!   deterministic combination.
//!
//! ## Non-goals
//!
//! * This module does not perform validation itself (see `engine::validator`).

// External dependencies
use thiserror::Error;

// ============================================================================
// Error Enum
// ============================================================================

/// Error conditions surfaced by experiment configuration and execution.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AmenabilityError {
    /// An input sequence was empty.
    #[error("Input sequence is empty")]
    EmptyInput,

    /// A numeric input was NaN or infinite.
    #[error("Invalid numeric value: {0}")]
    InvalidNumericValue(String),

    /// The trial count was zero.
    #[error("Invalid trials: {got} (must be at least 1)")]
    InvalidTrials {
        /// Requested trial count.
        got: usize,
    },

    /// A noise variance below zero was requested.
    #[error("Negative variance: {got} (noise variance must be >= 0)")]
    NegativeVariance {
        /// Requested variance.
        got: f64,
    },

    /// The plotting backend failed while writing a figure.
    #[error("Unable to render plot '{path}': {reason}")]
    Render {
        /// Target image path.
        path: String,
        /// Backend-reported failure.
        reason: String,
    },
}
