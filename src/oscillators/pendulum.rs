use std::f64::consts::TAU;

use crate::constants::STANDARD_GRAVITY;
use crate::math::Scalar;
use crate::units::{InertiaMoment, Length, Mass};

use super::{Oscillating, OscillatorKind};

/// Point mass on a massless string in the small-angle limit.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct MathematicalPendulum {
    name: String,
    length: Length,
}

impl MathematicalPendulum {
    /// Creates a pendulum; `label` is appended to the kind's display name.
    #[must_use]
    pub fn new(label: impl AsRef<str>, length_m: Scalar) -> Self {
        Self {
            name: format!("{} {}", OscillatorKind::Mathematical, label.as_ref()),
            length: Length::new(length_m),
        }
    }

    /// String length in metres.
    #[must_use]
    pub const fn length(&self) -> Scalar {
        self.length.value()
    }
}

impl Oscillating for MathematicalPendulum {
    fn name(&self) -> &str {
        &self.name
    }

    fn cyclic_frequency(&self) -> Scalar {
        (STANDARD_GRAVITY / self.length()).sqrt()
    }

    fn oscillation_period(&self) -> Scalar {
        TAU * (self.length() / STANDARD_GRAVITY).sqrt()
    }
}

/// Spring pendulum.
///
/// The weight enters the formulas where a length would for the mathematical
/// pendulum, so both kinds share the same frequency/period shape.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct SpringPendulum {
    name: String,
    weight: Mass,
}

impl SpringPendulum {
    /// Creates a spring pendulum; `label` is appended to the kind's display name.
    #[must_use]
    pub fn new(label: impl AsRef<str>, weight_kg: Scalar) -> Self {
        Self {
            name: format!("{} {}", OscillatorKind::Spring, label.as_ref()),
            weight: Mass::new(weight_kg),
        }
    }

    /// Suspended weight in kilograms.
    #[must_use]
    pub const fn weight(&self) -> Scalar {
        self.weight.value()
    }
}

impl Oscillating for SpringPendulum {
    fn name(&self) -> &str {
        &self.name
    }

    fn cyclic_frequency(&self) -> Scalar {
        (STANDARD_GRAVITY / self.weight()).sqrt()
    }

    fn oscillation_period(&self) -> Scalar {
        TAU * (self.weight() / STANDARD_GRAVITY).sqrt()
    }
}

/// Rigid body swinging about a fixed pivot (physical pendulum).
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct CompoundPendulum {
    name: String,
    inertia_moment: InertiaMoment,
    weight: Mass,
    length: Length,
}

impl CompoundPendulum {
    /// Creates a compound pendulum; `label` is appended to the kind's display name.
    ///
    /// `length_m` is the pivot to centre-of-mass distance.
    #[must_use]
    pub fn new(
        label: impl AsRef<str>,
        inertia_moment_kg_m2: Scalar,
        weight_kg: Scalar,
        length_m: Scalar,
    ) -> Self {
        Self {
            name: format!("{} {}", OscillatorKind::Compound, label.as_ref()),
            inertia_moment: InertiaMoment::new(inertia_moment_kg_m2),
            weight: Mass::new(weight_kg),
            length: Length::new(length_m),
        }
    }

    /// Moment of inertia about the pivot in kg·m².
    #[must_use]
    pub const fn inertia_moment(&self) -> Scalar {
        self.inertia_moment.value()
    }

    /// Body weight in kilograms.
    #[must_use]
    pub const fn weight(&self) -> Scalar {
        self.weight.value()
    }

    /// Pivot to centre-of-mass distance in metres.
    #[must_use]
    pub const fn length(&self) -> Scalar {
        self.length.value()
    }

    fn restoring_torque_per_radian(&self) -> Scalar {
        self.weight() * self.length() * STANDARD_GRAVITY
    }
}

impl Oscillating for CompoundPendulum {
    fn name(&self) -> &str {
        &self.name
    }

    fn cyclic_frequency(&self) -> Scalar {
        (self.restoring_torque_per_radian() / self.inertia_moment()).sqrt()
    }

    fn oscillation_period(&self) -> Scalar {
        TAU * (self.inertia_moment() / self.restoring_torque_per_radian()).sqrt()
    }
}
