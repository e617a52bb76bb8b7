//! Layer 5: Engine
//!
//! # Purpose
//!
//! This layer orchestrates a convergence run:
//! - Fail-fast validation of configuration and inputs
//! - The shared trial loop producing a norm-difference trace
//! - The trace output type consumed by the render collaborator

/// Convergence driver running the shared trial loop.
pub mod driver;

/// The norm-difference trace output type.
pub mod output;

/// Fail-fast validation of configuration and data.
pub mod validator;
