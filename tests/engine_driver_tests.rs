//! Tests for the convergence driver.
//!
//! These tests verify:
//! - Trace shape invariants (length, non-negativity)
//! - Determinism under a fixed seed
//! - Convergence in expectation under the decreasing schedule
//! - Stationarity under the fixed schedule
//! - Configuration validation

use rand::rngs::StdRng;
use rand::SeedableRng;

use amenability_rs::prelude::*;

// ============================================================================
// Helper Functions
// ============================================================================

/// Average the traces of `runs` convolution experiments with distinct seeds.
fn averaged_convolution_trace(trials: usize, schedule: VarianceSchedule, runs: u64) -> Vec<f64> {
    let driver = ConvergenceDriver::new(trials, schedule).unwrap();
    let mut mean = vec![0.0; trials];

    for seed in 0..runs {
        let mut rng = StdRng::seed_from_u64(seed);
        let trace = driver.run_convolution(&DEMO_F, &DEMO_G, &mut rng).unwrap();
        for (m, v) in mean.iter_mut().zip(trace.values().iter()) {
            *m += v / runs as f64;
        }
    }

    mean
}

fn window_mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

// ============================================================================
// Trace Shape
// ============================================================================

#[test]
fn test_trace_has_one_entry_per_trial() {
    let driver = ConvergenceDriver::new(37, VarianceSchedule::default()).unwrap();
    let mut rng = StdRng::seed_from_u64(0);

    let trace = driver.run_convolution(&DEMO_F, &DEMO_G, &mut rng).unwrap();
    assert_eq!(trace.len(), 37);

    let trace = driver.run_triangular(&DEMO_LHS, &DEMO_RHS, &mut rng).unwrap();
    assert_eq!(trace.len(), 37);
}

#[test]
fn test_trace_entries_are_nonnegative_and_finite() {
    let driver = ConvergenceDriver::new(200, Fixed(2.0)).unwrap();
    let mut rng = StdRng::seed_from_u64(11);

    let trace = driver.run_triangular(&DEMO_LHS, &DEMO_RHS, &mut rng).unwrap();
    for &v in trace.values() {
        assert!(v >= 0.0);
        assert!(v.is_finite());
    }
}

#[test]
fn test_zero_variance_schedule_gives_zero_trace() {
    let driver = ConvergenceDriver::new(25, Fixed(0.0)).unwrap();
    let mut rng = StdRng::seed_from_u64(0);

    let trace = driver.run_convolution(&DEMO_F, &DEMO_G, &mut rng).unwrap();
    assert!(trace.values().iter().all(|&v| v == 0.0));
    assert_eq!(trace.max_value(), 0.0);
}

// ============================================================================
// Determinism
// ============================================================================

#[test]
fn test_same_seed_gives_identical_trace() {
    let driver = ConvergenceDriver::new(50, VarianceSchedule::default()).unwrap();

    let mut rng_a = StdRng::seed_from_u64(123);
    let mut rng_b = StdRng::seed_from_u64(123);

    let a = driver.run_convolution(&DEMO_F, &DEMO_G, &mut rng_a).unwrap();
    let b = driver.run_convolution(&DEMO_F, &DEMO_G, &mut rng_b).unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_different_seeds_give_different_traces() {
    let driver = ConvergenceDriver::new(50, VarianceSchedule::default()).unwrap();

    let mut rng_a = StdRng::seed_from_u64(1);
    let mut rng_b = StdRng::seed_from_u64(2);

    let a = driver.run_convolution(&DEMO_F, &DEMO_G, &mut rng_a).unwrap();
    let b = driver.run_convolution(&DEMO_F, &DEMO_G, &mut rng_b).unwrap();
    assert_ne!(a, b);
}

// ============================================================================
// Convergence Properties
// ============================================================================

#[test]
fn test_decreasing_schedule_trace_decays_in_expectation() {
    // Average 50 runs: the expected deviation scales as sqrt(v0/n), so the
    // first-10 window mean must dominate the last-10 window mean by far.
    let mean = averaged_convolution_trace(100, Decreasing { initial: 1.0 }, 50);

    let early = window_mean(&mean[..10]);
    let late = window_mean(&mean[90..]);

    assert!(
        late < early / 2.0,
        "expected decay: early window {early}, late window {late}"
    );
    // Tends toward zero: at n≈100 the per-entry std is 0.1, so the
    // averaged deviation over 10 flattened entries sits near 0.3.
    assert!(late < 0.6, "late window {late} should approach zero");
}

#[test]
fn test_fixed_schedule_trace_is_stationary() {
    // Average 50 runs: with constant variance the expected deviation has
    // no trend, so early and late window means agree within sampling noise.
    let mean = averaged_convolution_trace(100, Fixed(1.0), 50);

    let early = window_mean(&mean[..20]);
    let late = window_mean(&mean[80..]);

    assert!(
        (early - late).abs() < 0.3 * early.max(late),
        "no drift expected: early window {early}, late window {late}"
    );
}

// ============================================================================
// Configuration Validation
// ============================================================================

#[test]
fn test_zero_trials_is_rejected() {
    let err = ConvergenceDriver::new(0, VarianceSchedule::default()).unwrap_err();
    assert_eq!(err, AmenabilityError::InvalidTrials { got: 0 });
}

#[test]
fn test_negative_schedule_is_rejected() {
    let err = ConvergenceDriver::new(10, Fixed(-1.0)).unwrap_err();
    assert_eq!(err, AmenabilityError::NegativeVariance { got: -1.0 });

    let err = ConvergenceDriver::new(10, Decreasing { initial: -0.25 }).unwrap_err();
    assert_eq!(err, AmenabilityError::NegativeVariance { got: -0.25 });
}

#[test]
fn test_empty_sequence_is_rejected() {
    let driver = ConvergenceDriver::new(10, VarianceSchedule::default()).unwrap();
    let mut rng = StdRng::seed_from_u64(0);

    let err = driver.run_convolution(&[], &DEMO_G, &mut rng).unwrap_err();
    assert_eq!(err, AmenabilityError::EmptyInput);
}

#[test]
fn test_non_finite_element_is_rejected() {
    let driver = ConvergenceDriver::new(10, VarianceSchedule::default()).unwrap();
    let mut rng = StdRng::seed_from_u64(0);

    let bad = TriangularElement::new(f64::NAN, 0.0, 1.0);
    let err = driver.run_triangular(&bad, &DEMO_RHS, &mut rng).unwrap_err();
    assert!(matches!(err, AmenabilityError::InvalidNumericValue(_)));
}
