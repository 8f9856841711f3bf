#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![warn(clippy::all, clippy::cargo, clippy::nursery, missing_docs)]
#![doc = include_str!("../README.md")]

/// Physical constants and the frequency to period conversion.
pub mod constants;
/// Strongly typed unit helpers and quantity abstractions.
pub mod units;
/// Shared scalar type and numeric guards.
pub mod math;
/// Oscillator variants and their closed-form characteristics.
pub mod oscillators;
/// Per-oscillator result records and their text rendering.
pub mod report;
/// Prompt-driven input/output session over generic streams.
pub mod session;
/// Error types shared across modules.
pub mod errors;

/// Common exports for downstream crates.
pub mod prelude;
