//! Per-oscillator result records and their text rendering.

use std::fmt;
use std::io::{self, Write};

use crate::math::Scalar;
use crate::oscillators::{ratio, Oscillating};

/// Significant digits used when no precision is requested.
pub const DEFAULT_PRECISION: usize = 6;

/// Computed characteristics of one oscillator in a collection.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct OscillationReport {
    /// 1-based position in the collection.
    pub index: usize,
    /// Oscillator name.
    pub name: String,
    /// Cyclic frequency ω in rad/s.
    pub cyclic_frequency: Scalar,
    /// Oscillation period T in seconds.
    pub oscillation_period: Scalar,
    /// T / ω, or zero for a vanishing frequency.
    pub ratio: Scalar,
}

impl OscillationReport {
    /// Evaluates `oscillator` and records the results under `index`.
    #[must_use]
    pub fn new<O: Oscillating + ?Sized>(index: usize, oscillator: &O) -> Self {
        Self {
            index,
            name: oscillator.name().to_owned(),
            cyclic_frequency: oscillator.cyclic_frequency(),
            oscillation_period: oscillator.oscillation_period(),
            ratio: ratio(oscillator),
        }
    }

    /// Writes the four report lines and a blank separator line.
    pub fn write_text<W: Write>(&self, mut writer: W, precision: usize) -> io::Result<()> {
        writeln!(writer, "The {} is the {}.", self.index, self.name)?;
        writeln!(
            writer,
            "It has cyclic frequency {}.",
            format_general(self.cyclic_frequency, precision)
        )?;
        writeln!(
            writer,
            "It has square oscillation period {}.",
            format_general(self.oscillation_period, precision)
        )?;
        writeln!(
            writer,
            "The (oscillation period)/(cyclic frequency) ratio is {}.",
            format_general(self.ratio, precision)
        )?;
        writeln!(writer)?;
        Ok(())
    }
}

/// Formats with the precision flag as significant digits, e.g. `{report:.8}`.
impl fmt::Display for OscillationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut buffer = Vec::new();
        self.write_text(&mut buffer, f.precision().unwrap_or(DEFAULT_PRECISION))
            .map_err(|_| fmt::Error)?;
        f.write_str(&String::from_utf8_lossy(&buffer))
    }
}

/// Reports for `oscillators`, numbered from 1 in iteration order.
#[must_use]
pub fn collect_reports<'a, O, I>(oscillators: I) -> Vec<OscillationReport>
where
    O: Oscillating + 'a,
    I: IntoIterator<Item = &'a O>,
{
    oscillators
        .into_iter()
        .enumerate()
        .map(|(i, oscillator)| OscillationReport::new(i + 1, oscillator))
        .collect()
}

/// Formats `value` like the C `%g` conversion with `precision` significant
/// digits: fixed notation for decimal exponents in `-4..precision`,
/// scientific otherwise, trailing zeros removed. Non-finite values use their
/// `Display` form.
#[must_use]
pub fn format_general(value: Scalar, precision: usize) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    let precision = precision.max(1);
    let scientific = format!("{:.*e}", precision - 1, value);
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return scientific;
    };
    let Ok(exponent) = exponent.parse::<i32>() else {
        return scientific;
    };

    let digits = i32::try_from(precision).unwrap_or(i32::MAX);
    if exponent < -4 || exponent >= digits {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!("{}e{sign}{:02}", trim_fraction(mantissa), exponent.unsigned_abs())
    } else {
        let decimals = usize::try_from(digits - 1 - exponent).unwrap_or(0);
        trim_fraction(&format!("{value:.decimals$}")).to_owned()
    }
}

fn trim_fraction(text: &str) -> &str {
    if text.contains('.') {
        text.trim_end_matches('0').trim_end_matches('.')
    } else {
        text
    }
}
