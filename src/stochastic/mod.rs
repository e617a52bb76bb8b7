//! Layer 4: Stochastic
//!
//! # Purpose
//!
//! This layer turns the deterministic combination rules of the algebra
//! layer into their noise-perturbed analogues:
//! - Variance schedules (fixed, decreasing `v₀/n`)
//! - Noisy combination operators with an injected random source

/// Noisy combination operators for both algebra variants.
pub mod noise;

/// Variance schedules (fixed and decreasing).
pub mod schedule;
