//! Experiment output: the norm-difference trace.
//!
//! ## Purpose
//!
//! This module defines the single artifact a convergence run produces:
//! an ordered sequence of per-iteration deviations between the noisy and
//! the exact combination, one non-negative real per trial.
//!
//! ## Invariants
//!
//! * The trace has exactly one entry per trial, in iteration order.
//! * Every entry is non-negative (it is a Euclidean norm).

use std::fmt;
use std::ops::Range;

// ============================================================================
// Norm Trace
// ============================================================================

/// The recorded per-iteration norm differences of a convergence run.
#[derive(Debug, Clone, PartialEq)]
pub struct NormTrace {
    values: Vec<f64>,
}

impl NormTrace {
    /// Wrap a recorded sequence of norm differences.
    pub(crate) fn new(values: Vec<f64>) -> Self {
        Self { values }
    }

    /// Number of recorded iterations.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the trace is empty.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// The recorded values in iteration order.
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// The largest recorded deviation, or 0 for an empty trace.
    pub fn max_value(&self) -> f64 {
        self.values.iter().cloned().fold(0.0, f64::max)
    }

    /// The mean deviation over the half-open index range `range`.
    ///
    /// Used by stationarity/monotonicity checks; returns 0 for an empty
    /// range.
    pub fn window_mean(&self, range: Range<usize>) -> f64 {
        let window = &self.values[range];
        if window.is_empty() {
            return 0.0;
        }
        window.iter().sum::<f64>() / window.len() as f64
    }

    /// Consume the trace, yielding the raw values.
    pub fn into_values(self) -> Vec<f64> {
        self.values
    }

    /// Iterate the trace as `(n, value)` points with 1-based `n`.
    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.values
            .iter()
            .enumerate()
            .map(|(i, &v)| ((i + 1) as f64, v))
    }
}

impl fmt::Display for NormTrace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Norm-difference trace:")?;
        writeln!(f, "  Trials: {}", self.len())?;
        if let (Some(first), Some(last)) = (self.values.first(), self.values.last()) {
            writeln!(f, "  First deviation: {:.6}", first)?;
            writeln!(f, "  Last deviation:  {:.6}", last)?;
        }
        write!(f, "  Max deviation:   {:.6}", self.max_value())
    }
}
