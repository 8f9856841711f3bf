use std::f64::consts::TAU;

use crate::math::Scalar;
use crate::units::{Capacitance, Inductance};

use super::{Oscillating, OscillatorKind};

/// Ideal LC circuit.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct ElectricOscillatingCircuit {
    name: String,
    inductance: Inductance,
    capacitance: Capacitance,
}

impl ElectricOscillatingCircuit {
    /// Creates a circuit; `label` is appended to the kind's display name.
    #[must_use]
    pub fn new(label: impl AsRef<str>, inductance_h: Scalar, capacitance_f: Scalar) -> Self {
        Self {
            name: format!("{} {}", OscillatorKind::ElectricCircuit, label.as_ref()),
            inductance: Inductance::new(inductance_h),
            capacitance: Capacitance::new(capacitance_f),
        }
    }

    /// Inductance in henries.
    #[must_use]
    pub const fn inductance(&self) -> Scalar {
        self.inductance.value()
    }

    /// Capacitance in farads.
    #[must_use]
    pub const fn capacitance(&self) -> Scalar {
        self.capacitance.value()
    }
}

impl Oscillating for ElectricOscillatingCircuit {
    fn name(&self) -> &str {
        &self.name
    }

    fn cyclic_frequency(&self) -> Scalar {
        1.0 / (self.inductance() * self.capacitance()).sqrt()
    }

    fn oscillation_period(&self) -> Scalar {
        TAU * (self.inductance() * self.capacitance()).sqrt()
    }
}
