// ============================================================================
// Domain Models Module
// Contains the calculator's core entities and value objects
// ============================================================================

pub mod command;
pub mod config;
pub mod stack;

pub use command::{BinaryOp, Command, Lexer, Token, UnaryOp};
pub use config::{
    CalculatorConfig, DomainErrorPolicy, NumericBackendType, DEFAULT_MAX_PRECISION,
    DEFAULT_PRECISION,
};
pub use stack::{OperandStack, StackError};
