//! # amenability-rs — Probabilistic Amenability Experiments
//!
//! Numerical experiments on the "probabilistic amenability" of two small
//! Banach-algebra-like structures: deterministic combination rules are
//! perturbed with zero-mean Gaussian noise, and the norm of the deviation
//! from the exact result is recorded per iteration as the noise variance
//! shrinks.
//!
//! ## The two variants
//!
//! - **Convolution**: two fixed decaying sequences in ℓ¹(ℤ) are combined
//!   by "same"-mode linear convolution; every output position receives an
//!   independent `N(0, v)` perturbation.
//! - **Triangular product**: two 2×2 upper-triangular elements
//!   `(a, x, b)` are combined by the rule
//!   `(a, x, b) · (a', x', b') = (a·a', a·x' + x·b', b·b')`; the three
//!   structural entries receive independent `N(0, v)` perturbations and
//!   the bottom-left entry stays exactly zero.
//!
//! Both variants share one control loop: for `n = 1..=N` compute the
//! variance from a schedule (fixed, or decaying as `v₀/n`), run the noisy
//! combination, and record the Euclidean norm of the difference against
//! the exact combination. The recorded trace converges to zero under the
//! decreasing schedule and stays stationary under the fixed one.
//!
//! ## Quick Start
//!
//! ```rust
//! use amenability_rs::prelude::*;
//!
//! // Convolution variant with the original demo sequences.
//! let trace = Experiment::new()
//!     .trials(100)
//!     .schedule(Decreasing { initial: 1.0 })
//!     .seed(42)
//!     .convolution(&DEMO_F, &DEMO_G)
//!     .run()?;
//!
//! assert_eq!(trace.len(), 100);
//! println!("{trace}");
//! # Result::<(), AmenabilityError>::Ok(())
//! ```
//!
//! ```rust,no_run
//! use amenability_rs::prelude::*;
//!
//! // Matrix variant with a fixed variance, rendered to a PNG.
//! let trace = Experiment::new()
//!     .schedule(Fixed(1.0))
//!     .triangular(DEMO_LHS, DEMO_RHS)
//!     .run()?;
//!
//! let plot = TracePlot::new(std::env::temp_dir().join("fixed_variance.png"))
//!     .title("Probabilistic Amenability: Norm Difference with Fixed Variance")
//!     .y_label("E[|e_n * t - t|] with Fixed Variance");
//! plot.render(&trace)?;
//! # Result::<(), AmenabilityError>::Ok(())
//! ```
//!
//! ## Reproducibility
//!
//! The random source is injected, never process-wide: the fluent API owns
//! a `StdRng` seeded from `.seed(..)` (default 42), and the lower-level
//! [`prelude::ConvergenceDriver`] accepts any `&mut impl Rng`. Equal
//! configurations produce byte-identical traces.
//!
//! ## Error handling
//!
//! Every fallible operation returns `Result<_, AmenabilityError>`.
//! Negative noise variance is rejected, never clamped; zero variance is
//! valid and reproduces the deterministic combination exactly.

#![deny(missing_docs)]

// ============================================================================
// Internal Modules
// ============================================================================

// Layer 1: Primitives - the crate-wide error enum.
mod primitives;

// Layer 2: Math - pure numeric helpers (Euclidean norms).
mod math;

// Layer 3: Algebra - deterministic combination rules
// (convolution, triangular product) and the demo constants.
mod algebra;

// Layer 4: Stochastic - variance schedules and the noisy
// combination operators with an injected RNG.
mod stochastic;

// Layer 5: Engine - validation, the shared trial loop, and the
// norm-difference trace output.
mod engine;

// Render collaborator - PNG export of finished traces. The numeric
// core never depends on this module.
mod render;

// High-level fluent API for configuring and running experiments.
mod api;

// ============================================================================
// Prelude
// ============================================================================

/// Standard experiment prelude.
///
/// This module is intended to be wildcard-imported for convenient access
/// to the most commonly used types:
///
/// ```
/// use amenability_rs::prelude::*;
/// ```
pub mod prelude {
    pub use crate::algebra::sequence::demo::{DEMO_F, DEMO_G};
    pub use crate::algebra::sequence::{convolve_full, convolve_same};
    pub use crate::algebra::triangular::demo::{DEMO_LHS, DEMO_RHS};
    pub use crate::algebra::triangular::TriangularElement;
    pub use crate::api::{
        ConvolutionExperiment, Experiment, ExperimentBuilder, TriangularExperiment,
    };
    pub use crate::engine::driver::ConvergenceDriver;
    pub use crate::engine::output::NormTrace;
    pub use crate::math::norm::{euclidean_norm, norm_diff};
    pub use crate::primitives::errors::AmenabilityError;
    pub use crate::render::plot::TracePlot;
    pub use crate::stochastic::noise::{noisy_convolution, noisy_triangular_product};
    pub use crate::stochastic::schedule::VarianceSchedule;
    pub use crate::stochastic::schedule::VarianceSchedule::{Decreasing, Fixed};
}

// ============================================================================
// Testing re-exports
// ============================================================================

/// Internal modules for development and testing.
///
/// This module re-exports internal modules for development and testing
/// purposes. It is only available with the `dev` feature enabled.
///
/// **Warning**: These are internal implementation details and may change
/// without notice. Do not use in production code.
#[cfg(feature = "dev")]
pub mod internals {
    /// Internal primitive types.
    pub mod primitives {
        pub use crate::primitives::*;
    }
    /// Internal math functions.
    pub mod math {
        pub use crate::math::*;
    }
    /// Internal algebra rules.
    pub mod algebra {
        pub use crate::algebra::*;
    }
    /// Internal stochastic operators.
    pub mod stochastic {
        pub use crate::stochastic::*;
    }
    /// Internal execution engine.
    pub mod engine {
        pub use crate::engine::*;
    }
    /// Internal render collaborator.
    pub mod render {
        pub use crate::render::*;
    }
    /// Internal API.
    pub mod api {
        pub use crate::api::*;
    }
}
