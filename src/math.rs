//! Shared numerical primitives.

/// Primary scalar type used across the crate.
pub type Scalar = f64;

/// Returns `numerator / denominator` when `|denominator| > epsilon`, else `0.0`.
///
/// NaN denominators fail the comparison and also yield `0.0`.
#[must_use]
pub fn guarded_ratio(numerator: Scalar, denominator: Scalar, epsilon: Scalar) -> Scalar {
    if denominator.abs() > epsilon {
        numerator / denominator
    } else {
        0.0
    }
}
