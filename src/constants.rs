//! Baseline physical constants and the frequency to period conversion.
//!
//! ## Accuracy
//!
//! Gravitational acceleration is fixed at 9.8 m/s² rather than the standard
//! 9.806 65 m/s². Every pendulum formula in [`crate::oscillators`] uses this
//! value, so a mathematical pendulum of length 9.8 m has a cyclic frequency of
//! exactly 1 rad/s.

use std::f64::consts::TAU;

use crate::math::Scalar;

/// Gravitational acceleration _g_ in metres per second squared (m/s²).
pub const STANDARD_GRAVITY: Scalar = 9.8;

/// Absolute threshold below which a cyclic frequency is treated as zero when
/// forming the period/frequency ratio.
pub const RATIO_EPSILON: Scalar = 1e-14;

/// Returns the oscillation period (s) for a cyclic frequency `omega` (rad/s).
#[inline]
#[must_use]
pub fn period_from_cyclic_frequency(omega: Scalar) -> Scalar {
    TAU / omega
}
