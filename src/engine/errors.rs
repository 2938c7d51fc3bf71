// ============================================================================
// Numeric Errors
// Error types for arbitrary-precision arithmetic operations
// ============================================================================

use std::fmt;

/// Errors that can occur while constructing or operating on big integers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumericError {
    /// Input text contained a non-digit character
    InvalidFormat,
    /// Attempted division by zero
    DivisionByZero,
    /// Conversion would lose significant digits
    PrecisionLoss,
    /// Value does not fit the target representation
    Overflow,
}

impl fmt::Display for NumericError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericError::InvalidFormat => {
                write!(f, "invalid format: value should be numeric")
            },
            NumericError::DivisionByZero => write!(f, "division by zero"),
            NumericError::PrecisionLoss => write!(
                f,
                "precision loss: conversion would lose significant digits"
            ),
            NumericError::Overflow => {
                write!(f, "overflow: value does not fit the target representation")
            },
        }
    }
}

impl std::error::Error for NumericError {}

/// Result type alias for numeric operations
pub type NumericResult<T> = Result<T, NumericError>;
