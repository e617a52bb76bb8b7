//! High-level API for the convergence experiments.
//!
//! ## Purpose
//!
//! This module provides the primary user-facing entry point. It implements
//! a fluent builder for configuring an experiment (trial count, variance
//! schedule, RNG seed) and selecting one of the two algebra variants.
//!
//! ## Design notes
//!
//! * **Ergonomic**: Fluent builder with the original scripts' parameters
//!   as defaults (100 trials, decreasing variance from 1.0, seed 42).
//! * **Variant selection**: `.convolution(..)` / `.triangular(..)` move
//!   the builder into a concrete runner; `run()` validates and drives.
//! * **Reproducible**: The runner owns a `StdRng` seeded from the
//!   configured seed, so equal configurations produce identical traces.
//!
//! ### Configuration flow
//!
//! 1. Create an [`ExperimentBuilder`] via `Experiment::new()`.
//! 2. Chain configuration methods (`.trials()`, `.schedule()`, `.seed()`).
//! 3. Select a variant to get a runner, then call `.run()`.

// External dependencies
use rand::rngs::StdRng;
use rand::SeedableRng;

// Internal dependencies
use crate::algebra::triangular::TriangularElement;
use crate::engine::driver::ConvergenceDriver;
use crate::engine::output::NormTrace;
use crate::primitives::errors::AmenabilityError;
use crate::stochastic::schedule::VarianceSchedule;

/// Default trial count of the original scripts.
const DEFAULT_TRIALS: usize = 100;

/// Default RNG seed for reproducible runs.
const DEFAULT_SEED: u64 = 42;

// ============================================================================
// Experiment Builder
// ============================================================================

/// Entry point for configuring a convergence experiment.
///
/// ```
/// use amenability_rs::prelude::*;
///
/// let trace = Experiment::new()
///     .trials(50)
///     .schedule(Decreasing { initial: 1.0 })
///     .seed(7)
///     .convolution(&DEMO_F, &DEMO_G)
///     .run()?;
///
/// assert_eq!(trace.len(), 50);
/// # Result::<(), AmenabilityError>::Ok(())
/// ```
pub struct Experiment;

impl Experiment {
    /// Start a new experiment configuration with the original defaults.
    #[allow(clippy::new_ret_no_self)]
    pub fn new() -> ExperimentBuilder {
        ExperimentBuilder::default()
    }
}

/// Fluent builder carrying the shared experiment parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExperimentBuilder {
    /// Number of trials to run.
    pub trials: usize,

    /// Variance schedule for the noise.
    pub schedule: VarianceSchedule,

    /// Seed for the injected random source.
    pub seed: u64,
}

impl Default for ExperimentBuilder {
    fn default() -> Self {
        Self {
            trials: DEFAULT_TRIALS,
            schedule: VarianceSchedule::default(),
            seed: DEFAULT_SEED,
        }
    }
}

impl ExperimentBuilder {
    /// Set the number of trials (must be at least 1).
    pub fn trials(mut self, trials: usize) -> Self {
        self.trials = trials;
        self
    }

    /// Set the variance schedule.
    pub fn schedule(mut self, schedule: VarianceSchedule) -> Self {
        self.schedule = schedule;
        self
    }

    /// Set the RNG seed.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Select the convolution variant over the sequences `f` and `g`.
    pub fn convolution(self, f: &[f64], g: &[f64]) -> ConvolutionExperiment {
        ConvolutionExperiment {
            builder: self,
            f: f.to_vec(),
            g: g.to_vec(),
        }
    }

    /// Select the matrix variant over the triangular elements `lhs`, `rhs`.
    pub fn triangular(
        self,
        lhs: TriangularElement<f64>,
        rhs: TriangularElement<f64>,
    ) -> TriangularExperiment {
        TriangularExperiment {
            builder: self,
            lhs,
            rhs,
        }
    }

    fn driver(&self) -> Result<ConvergenceDriver, AmenabilityError> {
        ConvergenceDriver::new(self.trials, self.schedule)
    }

    fn rng(&self) -> StdRng {
        StdRng::seed_from_u64(self.seed)
    }
}

// ============================================================================
// Variant Runners
// ============================================================================

/// A fully configured convolution experiment, ready to run.
#[derive(Debug, Clone, PartialEq)]
pub struct ConvolutionExperiment {
    builder: ExperimentBuilder,
    f: Vec<f64>,
    g: Vec<f64>,
}

impl ConvolutionExperiment {
    /// Validate the configuration and run the trial loop.
    pub fn run(&self) -> Result<NormTrace, AmenabilityError> {
        let driver = self.builder.driver()?;
        let mut rng = self.builder.rng();
        driver.run_convolution(&self.f, &self.g, &mut rng)
    }
}

/// A fully configured triangular-product experiment, ready to run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TriangularExperiment {
    builder: ExperimentBuilder,
    lhs: TriangularElement<f64>,
    rhs: TriangularElement<f64>,
}

impl TriangularExperiment {
    /// Validate the configuration and run the trial loop.
    pub fn run(&self) -> Result<NormTrace, AmenabilityError> {
        let driver = self.builder.driver()?;
        let mut rng = self.builder.rng();
        driver.run_triangular(&self.lhs, &self.rhs, &mut rng)
    }
}
