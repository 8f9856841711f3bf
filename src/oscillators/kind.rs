use std::fmt;

/// Tag identifying one of the four oscillator archetypes.
///
/// Menu selectors map onto kinds as `1..=4` in declaration order.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OscillatorKind {
    /// LC circuit.
    ElectricCircuit,
    /// Point mass on a massless string.
    Mathematical,
    /// Mass on a spring.
    Spring,
    /// Rigid body swinging about a pivot.
    Compound,
}

/// One numeric input required to build an oscillator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParameterSpec {
    /// Parameter noun as used in prompts (e.g. `inertia moment`).
    pub label: &'static str,
    /// Unit caption as used in prompts (e.g. `kilogram*metre^2`).
    pub unit: &'static str,
}

const INDUCTANCE: ParameterSpec = ParameterSpec {
    label: "inductance",
    unit: "henry",
};
const CAPACITANCE: ParameterSpec = ParameterSpec {
    label: "capacitance",
    unit: "farad",
};
const LENGTH: ParameterSpec = ParameterSpec {
    label: "length",
    unit: "metre",
};
const WEIGHT: ParameterSpec = ParameterSpec {
    label: "weight",
    unit: "kilogram",
};
const INERTIA_MOMENT: ParameterSpec = ParameterSpec {
    label: "inertia moment",
    unit: "kilogram*metre^2",
};

const CIRCUIT_PARAMETERS: &[ParameterSpec] = &[INDUCTANCE, CAPACITANCE];
const MATHEMATICAL_PARAMETERS: &[ParameterSpec] = &[LENGTH];
const SPRING_PARAMETERS: &[ParameterSpec] = &[WEIGHT];
const COMPOUND_PARAMETERS: &[ParameterSpec] = &[INERTIA_MOMENT, WEIGHT, LENGTH];

impl OscillatorKind {
    /// All kinds in menu order.
    pub const ALL: [Self; 4] = [
        Self::ElectricCircuit,
        Self::Mathematical,
        Self::Spring,
        Self::Compound,
    ];

    /// Maps a 1-based menu selector onto a kind.
    #[must_use]
    pub fn from_selector(selector: i64) -> Option<Self> {
        match selector {
            1 => Some(Self::ElectricCircuit),
            2 => Some(Self::Mathematical),
            3 => Some(Self::Spring),
            4 => Some(Self::Compound),
            _ => None,
        }
    }

    /// The 1-based menu selector for this kind.
    #[must_use]
    pub const fn selector(self) -> u8 {
        match self {
            Self::ElectricCircuit => 1,
            Self::Mathematical => 2,
            Self::Spring => 3,
            Self::Compound => 4,
        }
    }

    /// Capitalised name used as the prefix of every oscillator name.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::ElectricCircuit => "Electric oscillating circuit",
            Self::Mathematical => "Mathematical pendulum",
            Self::Spring => "Spring pendulum",
            Self::Compound => "Compound pendulum",
        }
    }

    /// Lowercase noun used in prompts.
    #[must_use]
    pub const fn noun(self) -> &'static str {
        match self {
            Self::ElectricCircuit => "electric oscillating circuit",
            Self::Mathematical => "mathematical pendulum",
            Self::Spring => "spring pendulum",
            Self::Compound => "compound pendulum",
        }
    }

    /// Numeric parameters in the order the constructors take them.
    #[must_use]
    pub const fn parameters(self) -> &'static [ParameterSpec] {
        match self {
            Self::ElectricCircuit => CIRCUIT_PARAMETERS,
            Self::Mathematical => MATHEMATICAL_PARAMETERS,
            Self::Spring => SPRING_PARAMETERS,
            Self::Compound => COMPOUND_PARAMETERS,
        }
    }
}

impl fmt::Display for OscillatorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selectors_round_trip_in_menu_order() {
        for (i, kind) in OscillatorKind::ALL.iter().enumerate() {
            assert_eq!(usize::from(kind.selector()), i + 1);
            assert_eq!(OscillatorKind::from_selector(i as i64 + 1), Some(*kind));
        }
    }

    #[test]
    fn out_of_range_selectors_are_rejected() {
        for selector in [-1, 0, 5, 42] {
            assert_eq!(OscillatorKind::from_selector(selector), None);
        }
    }

    #[test]
    fn compound_parameters_follow_constructor_order() {
        let labels: Vec<_> = OscillatorKind::Compound
            .parameters()
            .iter()
            .map(|p| p.label)
            .collect();
        assert_eq!(labels, ["inertia moment", "weight", "length"]);
    }
}
