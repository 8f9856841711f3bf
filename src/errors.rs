//! Shared error types used across submodules.

use thiserror::Error;

use crate::oscillators::OscillatorKind;

/// Top-level error type for the crate.
#[derive(Debug, Error)]
pub enum PendulumError {
    /// Wraps failures of the underlying input or output stream.
    #[error(transparent)]
    Io(#[from] std::io::Error),
    /// Raised when input ends before a required token was read.
    #[error("unexpected end of input while reading {expected}")]
    UnexpectedEof {
        /// Description of the awaited token.
        expected: String,
    },
    /// Raised when the oscillator count is not a non-negative integer.
    #[error("invalid number of pendulums: {input:?}")]
    InvalidCount {
        /// Offending token.
        input: String,
    },
    /// Raised when a numeric parameter cannot be parsed.
    #[error("invalid {field}: {input:?} is not a number")]
    InvalidNumber {
        /// Parameter being read.
        field: String,
        /// Offending token.
        input: String,
    },
    /// Raised when an oscillator is built from the wrong number of parameters.
    #[error("{kind} takes {expected} parameter(s), got {found}")]
    ParameterCount {
        /// Requested archetype.
        kind: OscillatorKind,
        /// Parameters the archetype needs.
        expected: usize,
        /// Parameters supplied.
        found: usize,
    },
}
