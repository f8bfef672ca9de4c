// ============================================================================
// Engine Errors
// Everything a single command can fail with
// ============================================================================

use crate::domain::StackError;
use crate::numeric::NumericError;
use thiserror::Error;

/// A failed command. Never fatal: the interpreter reports it and moves on
/// to the next character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum CalcError {
    #[error(transparent)]
    Stack(#[from] StackError),

    #[error(transparent)]
    Numeric(#[from] NumericError),

    #[error("invalid command")]
    InvalidCommand(char),

    /// `k` literal negative, too large, or not an integer-representable value
    #[error("invalid precision")]
    InvalidPrecision,
}

impl CalcError {
    /// Diagnostic line as shown to the user
    pub fn diagnostic(&self) -> String {
        format!("cdc: {self}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_diagnostic_format() {
        let err = CalcError::from(NumericError::DivisionByZero);
        assert_eq!(err.diagnostic(), "cdc: divide by zero");

        let err = CalcError::from(StackError::AlreadyCleared);
        assert_eq!(err.diagnostic(), "cdc: stack already cleared");

        assert_eq!(
            CalcError::InvalidCommand('x').diagnostic(),
            "cdc: invalid command"
        );
    }
}
