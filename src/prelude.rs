//! Convenience re-exports for working with oscillators.

pub use crate::constants::*;
pub use crate::errors::PendulumError;
pub use crate::math::{guarded_ratio, Scalar};
pub use crate::oscillators::{
    ratio, CompoundPendulum, ElectricOscillatingCircuit, MathematicalPendulum, Oscillating,
    Oscillator, OscillatorKind, ParameterSpec, SpringPendulum,
};
pub use crate::report::{collect_reports, format_general, OscillationReport, DEFAULT_PRECISION};
pub use crate::session::Session;
pub use crate::units::{
    Capacitance, CyclicFrequency, Farad, Henry, InertiaMoment, Kilogram, KilogramMetreSquared,
    Length, Mass, Metre, Period, Quantity, RadianPerSecond, Second, Unit,
};
