//! Tests for the crate-wide error enum.

use amenability_rs::prelude::*;

#[test]
fn test_error_display() {
    // EmptyInput
    let err = AmenabilityError::EmptyInput;
    assert_eq!(format!("{}", err), "Input sequence is empty");

    // InvalidNumericValue
    let err = AmenabilityError::InvalidNumericValue("f[2]=NaN".to_string());
    assert_eq!(format!("{}", err), "Invalid numeric value: f[2]=NaN");

    // InvalidTrials
    let err = AmenabilityError::InvalidTrials { got: 0 };
    assert_eq!(format!("{}", err), "Invalid trials: 0 (must be at least 1)");

    // NegativeVariance
    let err = AmenabilityError::NegativeVariance { got: -0.5 };
    assert_eq!(
        format!("{}", err),
        "Negative variance: -0.5 (noise variance must be >= 0)"
    );

    // Render
    let err = AmenabilityError::Render {
        path: "out.png".to_string(),
        reason: "backend error: boom".to_string(),
    };
    assert_eq!(
        format!("{}", err),
        "Unable to render plot 'out.png': backend error: boom"
    );
}

#[test]
fn test_error_is_std_error() {
    fn assert_error<E: std::error::Error>(_: &E) {}
    assert_error(&AmenabilityError::EmptyInput);
}

#[test]
fn test_error_equality() {
    assert_eq!(
        AmenabilityError::InvalidTrials { got: 0 },
        AmenabilityError::InvalidTrials { got: 0 }
    );
    assert_ne!(
        AmenabilityError::NegativeVariance { got: -1.0 },
        AmenabilityError::NegativeVariance { got: -2.0 }
    );
}
