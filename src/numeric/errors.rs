// ============================================================================
// Numeric Errors
// Error types for calculator arithmetic and literal parsing
// ============================================================================

use std::fmt;

/// Errors that can occur while parsing or combining numeric values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumericError {
    /// Attempted division by zero
    DivisionByZero,
    /// Square root of a negative value
    NegativeRadicand,
    /// Literal text could not be consumed as a number
    MalformedLiteral,
    /// Result does not fit the backend's representation
    Overflow,
    /// Integer-power backends only accept exponents >= 0
    NegativeExponent,
}

impl fmt::Display for NumericError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericError::DivisionByZero => write!(f, "divide by zero"),
            NumericError::NegativeRadicand => write!(f, "negative square root"),
            NumericError::MalformedLiteral => write!(f, "malformed number"),
            NumericError::Overflow => write!(f, "arithmetic overflow"),
            NumericError::NegativeExponent => write!(f, "negative exponent not supported"),
        }
    }
}

impl std::error::Error for NumericError {}

/// Result type alias for numeric operations
pub type NumericResult<T> = Result<T, NumericError>;
