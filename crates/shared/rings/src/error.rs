//! # Ring Errors
//!
//! This module defines the [`RingError`] enum and [`Result`] type used for
//! reporting conversion and arithmetic failures. Every error is an
//! input-contract violation: it aborts the single call that produced it and
//! is surfaced to the caller unchanged, with no local recovery or retry.

use thiserror::Error;

/// A specialized [`Result`] type for ring operations.
pub type Result<T> = std::result::Result<T, RingError>;

/// A specialized [`RingError`] enum for ring-related failures.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum RingError {
    /// Input coordinate outside the ring's valid domain for the requested
    /// conversion direction. Never silently clamped.
    #[error("value {value} is outside the valid range [{min}, {max}]")]
    Range { value: f64, min: f64, max: f64 },

    /// Zero divisor passed to ring division.
    #[error("division by zero on the ring")]
    DivisionByZero,

    /// Mathematically undefined argument for a real-valued function.
    #[error("{function}({argument}) is undefined")]
    Domain { function: &'static str, argument: f64 },
}
