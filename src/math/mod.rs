//! Layer 2: Math
//!
//! # Purpose
//!
//! This layer provides the pure mathematical functions used throughout the
//! experiments:
//! - Euclidean norms for difference measurement
//!
//! These are reusable building blocks with no experiment-specific logic.
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Engine
//!   ↓
//! Layer 4: Stochastic
//!   ↓
//! Layer 3: Algebra
//!   ↓
//! Layer 2: Math ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

/// Euclidean norm and norm-of-difference computation.
pub mod norm;
