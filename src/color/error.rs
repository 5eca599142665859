//! Color mapping error types

use thiserror::Error;

/// Errors that can occur while mapping a sample to a color
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ColorError {
    /// Sample or bound was NaN (or the bound was infinite)
    #[error("Non-finite {what}: {value}")]
    NonFinite { what: &'static str, value: f64 },

    /// Bound must be a non-negative magnitude
    #[error("Negative bound: {0}")]
    NegativeBound(f64),

    /// Boundary sampling offset must be finite and positive
    #[error("Invalid epsilon: {0} (must be a finite number > 0)")]
    InvalidEpsilon(f64),

    /// Unknown ramp mode name
    #[error("Unknown ramp mode: {0} (expected literal or symmetric)")]
    UnknownRampMode(String),
}

/// Result type alias for color operations
pub type ColorResult<T> = Result<T, ColorError>;
