//! Render collaborator: PNG export of finished traces.
//!
//! # Purpose
//!
//! This module sits outside the numeric core. The engine hands it a
//! finished trace; it hands nothing back. Tests of the core never need
//! it, and it can be stubbed or replaced wholesale.

/// Line-plot rendering of norm-difference traces.
pub mod plot;
