// ============================================================================
// cdc Library
// Reverse-Polish desk calculator engine with pluggable numeric backends
// ============================================================================

//! # cdc
//!
//! A line-oriented, stack-based (reverse-Polish) calculator.
//!
//! ## Features
//!
//! - **Single-character opcodes** (`+ - * / ^ v p b s d c q k _`) and
//!   decimal literals, evaluated left to right
//! - **Pluggable numeric backends**: IEEE-754 doubles, 96-bit exact
//!   decimals, and arbitrary-precision decimals (`bigdecimal` feature)
//! - **Configurable precision** for display and internal rounding
//! - **Non-fatal errors**: every failure is reported and the line goes on
//!
//! ## Example
//!
//! ```rust
//! use cdc::prelude::*;
//! use std::sync::Arc;
//!
//! let handler = Arc::new(RecordingEventHandler::new());
//! let mut calc = create_from_config(CalculatorConfig::classic(), handler.clone()).unwrap();
//!
//! calc.execute_line("3 4 + p");
//! calc.execute_line("5 0 /");
//!
//! assert_eq!(handler.lines(), vec!["7.0000", "cdc: divide by zero"]);
//! assert_eq!(calc.stack_snapshot(), vec!["0.0000", "7.0000"]);
//! ```

pub mod domain;
pub mod engine;
pub mod interfaces;
pub mod numeric;

// Re-exports for convenience
pub mod prelude {
    pub use crate::domain::{
        BinaryOp, CalculatorConfig, Command, DomainErrorPolicy, NumericBackendType,
        OperandStack, StackError, UnaryOp,
    };
    pub use crate::engine::{
        create_from_config, run_session, CalcError, CalculatorBuilder, Dispatcher, Interpreter,
        SessionSummary,
    };
    pub use crate::interfaces::{
        CalcEvent, EventHandler, LineEvaluator, LoggingEventHandler, NoOpEventHandler,
        NumericValue, RecordingEventHandler, WriterEventHandler,
    };
    pub use crate::numeric::NumericError;
}

#[cfg(test)]
mod integration_tests {
    use super::prelude::*;
    use std::sync::Arc;

    fn session(backend: NumericBackendType) -> (Box<dyn LineEvaluator>, Arc<RecordingEventHandler>) {
        let handler = Arc::new(RecordingEventHandler::new());
        let calc = create_from_config(CalculatorConfig::new(backend), handler.clone()).unwrap();
        (calc, handler)
    }

    fn available_backends() -> Vec<NumericBackendType> {
        [
            NumericBackendType::Float,
            NumericBackendType::Decimal,
            NumericBackendType::BigDecimal,
        ]
        .into_iter()
        .filter(NumericBackendType::is_available)
        .collect()
    }

    #[test]
    fn test_addition_scenario() {
        for backend in available_backends() {
            let (mut calc, handler) = session(backend);
            calc.execute_line("3 4 +\n");
            assert_eq!(calc.stack_snapshot(), vec!["7.0000"], "{backend}");
            calc.execute_line("p\n");
            assert_eq!(handler.lines(), vec!["7.0000"], "{backend}");
        }
    }

    #[test]
    fn test_divide_by_zero_scenario() {
        for backend in available_backends() {
            let (mut calc, handler) = session(backend);
            calc.execute_line("5 0 /\n");
            assert_eq!(handler.lines(), vec!["cdc: divide by zero"], "{backend}");
            assert_eq!(calc.stack_snapshot(), vec!["0.0000"], "{backend}");
        }
    }

    #[test]
    fn test_negative_square_root_scenario() {
        for backend in available_backends() {
            let (mut calc, handler) = session(backend);
            calc.execute_line("_4 v\n");
            assert_eq!(handler.lines(), vec!["cdc: negative square root"], "{backend}");
            assert_eq!(calc.stack_snapshot(), vec!["0.0000"], "{backend}");
        }
    }

    #[test]
    fn test_clear_empty_scenario() {
        for backend in available_backends() {
            let (mut calc, handler) = session(backend);
            calc.execute_line("c\n");
            assert_eq!(handler.lines(), vec!["cdc: stack already cleared"], "{backend}");
        }
    }

    #[test]
    fn test_integer_power_scenario() {
        for backend in available_backends() {
            let (mut calc, _) = session(backend);
            calc.execute_line("2 3 ^\n");
            assert_eq!(calc.stack_snapshot(), vec!["8.0000"], "{backend}");
        }
    }

    #[test]
    fn test_precision_scenario() {
        for backend in available_backends() {
            let (mut calc, handler) = session(backend);
            calc.execute_line("k5 3.14159265 p\n");
            assert_eq!(handler.lines(), vec!["3.14159"], "{backend}");
            assert_eq!(calc.precision(), 5);
        }
    }

    #[test]
    fn test_negative_zero_prints_unsigned() {
        for backend in available_backends() {
            let (mut calc, handler) = session(backend);
            calc.execute_line("_0 p _0.00001 p");
            assert_eq!(handler.lines(), vec!["0.0000", "0.0000"], "{backend}");
        }
    }

    #[test]
    fn test_extreme_exponents_are_reported() {
        for backend in available_backends() {
            let (mut calc, _) = session(backend);
            calc.execute_line("1e-9000000000000000000 d * s");
            calc.execute_line("1e9000000000000000000 2 ^ s");
            assert!(calc.is_running(), "{backend}");
            assert_eq!(calc.stack_snapshot().len(), calc.stack_size(), "{backend}");
        }
    }

    #[cfg(feature = "bigdecimal")]
    #[test]
    fn test_big_decimal_extreme_exponents() {
        let (mut calc, handler) = session(NumericBackendType::BigDecimal);
        calc.execute_line("1e-9000000000000000000 d * s");
        assert_eq!(
            handler.lines(),
            vec![
                "cdc: malformed number",
                "cdc: stack is empty",
                "cdc: stack is empty",
                "0"
            ]
        );

        let (mut calc, handler) = session(NumericBackendType::BigDecimal);
        calc.execute_line("1e-60000 d * s");
        assert_eq!(handler.lines(), vec!["cdc: arithmetic overflow", "1"]);
        assert_eq!(calc.stack_snapshot(), vec!["0.0000"]);
    }

    #[cfg(feature = "bigdecimal")]
    #[test]
    fn test_big_decimal_division_follows_precision() {
        let (mut calc, handler) = session(NumericBackendType::BigDecimal);
        calc.execute_line("k150 1 3 / p");
        assert_eq!(handler.lines(), vec![format!("0.{}", "3".repeat(150))]);
    }

    #[test]
    fn test_size_is_plain_integer() {
        let (mut calc, handler) = session(NumericBackendType::Float);
        calc.execute_line("1 2 3 s");
        assert_eq!(handler.lines(), vec!["3"]);
    }

    #[test]
    fn test_mixed_line() {
        let (mut calc, handler) = session(NumericBackendType::Decimal);
        calc.execute_line("k2 10 3 / p d * p _1.5 b");
        assert_eq!(
            handler.lines(),
            vec!["3.33", "11.11", "-1.50", "11.11"]
        );
    }
}
