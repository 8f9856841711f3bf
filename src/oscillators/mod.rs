//! Oscillator archetypes and their closed-form characteristics.
//!
//! Each archetype is its own struct implementing [`Oscillating`]. The closed
//! set of all four is [`Oscillator`], which is what collections hold.
//!
//! Frequencies and periods are computed from independent formulas; for
//! positive parameters they satisfy `T = 2π / ω` up to rounding. Parameters
//! are never validated, so degenerate inputs surface as `NaN` or `inf`.

mod circuit;
mod kind;
mod pendulum;

use tracing::debug;

use crate::constants::RATIO_EPSILON;
use crate::errors::PendulumError;
use crate::math::{guarded_ratio, Scalar};
use crate::units::{CyclicFrequency, Period};

pub use circuit::ElectricOscillatingCircuit;
pub use kind::{OscillatorKind, ParameterSpec};
pub use pendulum::{CompoundPendulum, MathematicalPendulum, SpringPendulum};

/// Query contract shared by every oscillator.
pub trait Oscillating {
    /// Human-readable name, `"<kind display name> <label>"`.
    fn name(&self) -> &str;

    /// Cyclic (angular) frequency ω in rad/s.
    fn cyclic_frequency(&self) -> Scalar;

    /// Oscillation period T in seconds.
    fn oscillation_period(&self) -> Scalar;

    /// Cyclic frequency tagged with its unit.
    fn cyclic_frequency_quantity(&self) -> CyclicFrequency {
        CyclicFrequency::new(self.cyclic_frequency())
    }

    /// Oscillation period tagged with its unit.
    fn oscillation_period_quantity(&self) -> Period {
        Period::new(self.oscillation_period())
    }
}

/// Any one of the four supported oscillators.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "snake_case"))]
#[derive(Debug, Clone, PartialEq)]
pub enum Oscillator {
    /// LC circuit.
    ElectricCircuit(ElectricOscillatingCircuit),
    /// Mathematical pendulum.
    Mathematical(MathematicalPendulum),
    /// Spring pendulum.
    Spring(SpringPendulum),
    /// Compound pendulum.
    Compound(CompoundPendulum),
}

impl Oscillator {
    /// Builds an oscillator of `kind` from raw parameters given in the order
    /// of [`OscillatorKind::parameters`].
    ///
    /// # Errors
    ///
    /// Returns [`PendulumError::ParameterCount`] when `values` does not hold
    /// exactly the number of parameters `kind` needs.
    pub fn build(
        kind: OscillatorKind,
        label: &str,
        values: &[Scalar],
    ) -> Result<Self, PendulumError> {
        let oscillator = match (kind, values) {
            (OscillatorKind::ElectricCircuit, &[inductance, capacitance]) => Self::ElectricCircuit(
                ElectricOscillatingCircuit::new(label, inductance, capacitance),
            ),
            (OscillatorKind::Mathematical, &[length]) => {
                Self::Mathematical(MathematicalPendulum::new(label, length))
            }
            (OscillatorKind::Spring, &[weight]) => Self::Spring(SpringPendulum::new(label, weight)),
            (OscillatorKind::Compound, &[inertia_moment, weight, length]) => Self::Compound(
                CompoundPendulum::new(label, inertia_moment, weight, length),
            ),
            _ => {
                return Err(PendulumError::ParameterCount {
                    kind,
                    expected: kind.parameters().len(),
                    found: values.len(),
                })
            }
        };
        debug!(%kind, name = oscillator.name(), "built oscillator");
        Ok(oscillator)
    }

    /// Returns the archetype tag.
    #[must_use]
    pub const fn kind(&self) -> OscillatorKind {
        match self {
            Self::ElectricCircuit(_) => OscillatorKind::ElectricCircuit,
            Self::Mathematical(_) => OscillatorKind::Mathematical,
            Self::Spring(_) => OscillatorKind::Spring,
            Self::Compound(_) => OscillatorKind::Compound,
        }
    }
}

impl Oscillating for Oscillator {
    fn name(&self) -> &str {
        match self {
            Self::ElectricCircuit(o) => o.name(),
            Self::Mathematical(o) => o.name(),
            Self::Spring(o) => o.name(),
            Self::Compound(o) => o.name(),
        }
    }

    fn cyclic_frequency(&self) -> Scalar {
        match self {
            Self::ElectricCircuit(o) => o.cyclic_frequency(),
            Self::Mathematical(o) => o.cyclic_frequency(),
            Self::Spring(o) => o.cyclic_frequency(),
            Self::Compound(o) => o.cyclic_frequency(),
        }
    }

    fn oscillation_period(&self) -> Scalar {
        match self {
            Self::ElectricCircuit(o) => o.oscillation_period(),
            Self::Mathematical(o) => o.oscillation_period(),
            Self::Spring(o) => o.oscillation_period(),
            Self::Compound(o) => o.oscillation_period(),
        }
    }
}

impl From<ElectricOscillatingCircuit> for Oscillator {
    fn from(value: ElectricOscillatingCircuit) -> Self {
        Self::ElectricCircuit(value)
    }
}

impl From<MathematicalPendulum> for Oscillator {
    fn from(value: MathematicalPendulum) -> Self {
        Self::Mathematical(value)
    }
}

impl From<SpringPendulum> for Oscillator {
    fn from(value: SpringPendulum) -> Self {
        Self::Spring(value)
    }
}

impl From<CompoundPendulum> for Oscillator {
    fn from(value: CompoundPendulum) -> Self {
        Self::Compound(value)
    }
}

/// Period divided by cyclic frequency, or `0.0` when `|ω| <= 1e-14`.
#[must_use]
pub fn ratio<O: Oscillating + ?Sized>(oscillator: &O) -> Scalar {
    guarded_ratio(
        oscillator.oscillation_period(),
        oscillator.cyclic_frequency(),
        RATIO_EPSILON,
    )
}
