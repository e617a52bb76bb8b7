//! Tests for linear convolution of summable sequences.
//!
//! These tests verify:
//! - Full convolution against hand-computed references
//! - "Same"-mode centering against NumPy's `mode='same'` semantics
//! - The golden value for the original demo sequences

use approx::assert_relative_eq;

use amenability_rs::prelude::*;

// ============================================================================
// Full Convolution
// ============================================================================

#[test]
fn test_convolve_full_small_reference() {
    // np.convolve([1, 2, 3], [0, 1, 0.5]) == [0, 1, 2.5, 4, 1.5]
    let out = convolve_full(&[1.0, 2.0, 3.0], &[0.0, 1.0, 0.5]);
    let expected = [0.0, 1.0, 2.5, 4.0, 1.5];

    assert_eq!(out.len(), expected.len());
    for (o, e) in out.iter().zip(expected.iter()) {
        assert_relative_eq!(o, e, epsilon = 1e-12);
    }
}

#[test]
fn test_convolve_full_output_length() {
    let out = convolve_full(&[1.0; 7], &[1.0; 4]);
    assert_eq!(out.len(), 7 + 4 - 1);
}

#[test]
fn test_convolve_full_is_commutative() {
    let f = [1.0, 0.5, 0.25];
    let g = [0.5, 0.25, 0.125, 0.0625];
    let fg = convolve_full(&f, &g);
    let gf = convolve_full(&g, &f);

    for (a, b) in fg.iter().zip(gf.iter()) {
        assert_relative_eq!(a, b, epsilon = 1e-12);
    }
}

#[test]
fn test_convolve_full_empty_input() {
    assert!(convolve_full::<f64>(&[], &[1.0]).is_empty());
    assert!(convolve_full::<f64>(&[1.0], &[]).is_empty());
}

// ============================================================================
// "Same"-Mode Convolution
// ============================================================================

#[test]
fn test_convolve_same_small_reference() {
    // np.convolve([1, 2, 3], [0, 1, 0.5], 'same') == [1, 2.5, 4]
    let out = convolve_same(&[1.0, 2.0, 3.0], &[0.0, 1.0, 0.5]);
    let expected = [1.0, 2.5, 4.0];

    assert_eq!(out.len(), expected.len());
    for (o, e) in out.iter().zip(expected.iter()) {
        assert_relative_eq!(o, e, epsilon = 1e-12);
    }
}

#[test]
fn test_convolve_same_even_kernel_centering() {
    // np.convolve([1, 1, 1, 1], [1, 1], 'same') == [1, 2, 2, 2]
    let out = convolve_same(&[1.0, 1.0, 1.0, 1.0], &[1.0, 1.0]);
    let expected = [1.0, 2.0, 2.0, 2.0];

    assert_eq!(out.len(), expected.len());
    for (o, e) in out.iter().zip(expected.iter()) {
        assert_relative_eq!(o, e, epsilon = 1e-12);
    }
}

#[test]
fn test_convolve_same_output_length_is_longer_input() {
    let out = convolve_same(&[1.0; 10], &[1.0; 4]);
    assert_eq!(out.len(), 10);

    let out = convolve_same(&[1.0; 4], &[1.0; 10]);
    assert_eq!(out.len(), 10);
}

// ============================================================================
// Demo Sequence Golden
// ============================================================================

#[test]
fn test_demo_sequences_golden_value() {
    // Centered window of the full convolution of the two decaying demo
    // sequences; computed by hand (and matching np.convolve(f, g, 'same')).
    let out = convolve_same(&DEMO_F, &DEMO_G);
    let expected = [
        0.09375, 0.03125, 0.0078125, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0,
    ];

    assert_eq!(out.len(), 10);
    for (o, e) in out.iter().zip(expected.iter()) {
        assert_relative_eq!(o, e, epsilon = 1e-12);
    }
}
