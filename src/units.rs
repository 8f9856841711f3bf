//! Zero-cost typed quantities.
//!
//! A [`Quantity`] pairs a raw value with a marker type naming its SI unit, so
//! an inductance cannot be passed where a length is expected. Markers carry a
//! display symbol used when the quantity is formatted.

use std::fmt;
use std::marker::PhantomData;

use crate::math::Scalar;

/// Marker trait implemented by unit types.
pub trait Unit {
    /// Symbol appended when a quantity is displayed.
    const SYMBOL: &'static str;
}

macro_rules! define_unit {
    ($(#[$meta:meta])* $name:ident => $symbol:literal) => {
        $(#[$meta])*
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
        pub struct $name;

        impl Unit for $name {
            const SYMBOL: &'static str = $symbol;
        }
    };
}

define_unit!(
    /// Inductance in henries.
    Henry => "H"
);
define_unit!(
    /// Capacitance in farads.
    Farad => "F"
);
define_unit!(
    /// Length in metres.
    Metre => "m"
);
define_unit!(
    /// Mass in kilograms.
    Kilogram => "kg"
);
define_unit!(
    /// Moment of inertia in kilogram square metres.
    KilogramMetreSquared => "kg·m²"
);
define_unit!(
    /// Time in seconds.
    Second => "s"
);
define_unit!(
    /// Cyclic (angular) frequency in radians per second.
    RadianPerSecond => "rad/s"
);

/// A value tagged with its unit.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(
        transparent,
        bound(serialize = "T: serde::Serialize", deserialize = "T: serde::Deserialize<'de>")
    )
)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quantity<T, U> {
    value: T,
    #[cfg_attr(feature = "serde", serde(skip))]
    unit: PhantomData<U>,
}

impl<T: Copy, U> Quantity<T, U> {
    /// Wraps a raw value.
    #[must_use]
    pub const fn new(value: T) -> Self {
        Self {
            value,
            unit: PhantomData,
        }
    }

    /// Returns the raw value.
    #[must_use]
    pub const fn value(&self) -> T {
        self.value
    }
}

impl<T: fmt::Display, U: Unit> fmt::Display for Quantity<T, U> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match f.precision() {
            Some(precision) => write!(f, "{:.*} {}", precision, self.value, U::SYMBOL),
            None => write!(f, "{} {}", self.value, U::SYMBOL),
        }
    }
}

/// Inductance quantity.
pub type Inductance = Quantity<Scalar, Henry>;
/// Capacitance quantity.
pub type Capacitance = Quantity<Scalar, Farad>;
/// Length quantity.
pub type Length = Quantity<Scalar, Metre>;
/// Mass quantity.
pub type Mass = Quantity<Scalar, Kilogram>;
/// Moment of inertia quantity.
pub type InertiaMoment = Quantity<Scalar, KilogramMetreSquared>;
/// Oscillation period quantity.
pub type Period = Quantity<Scalar, Second>;
/// Cyclic frequency quantity.
pub type CyclicFrequency = Quantity<Scalar, RadianPerSecond>;
