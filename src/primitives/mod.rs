//! Layer 1: Primitives
//!
//! # Purpose
//!
//! This layer provides the fundamental types shared by every other layer.
//! For this crate that is exactly one thing: the error enum.

/// Crate-wide error types.
pub mod errors;
