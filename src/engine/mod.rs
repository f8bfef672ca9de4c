// ============================================================================
// Engine Module
// Contains the calculator's evaluation logic
// ============================================================================

mod dispatcher;
mod errors;
mod interpreter;
mod session;

pub mod factory;

pub use dispatcher::Dispatcher;
pub use errors::CalcError;
pub use factory::{create_from_config, CalculatorBuilder};
pub use interpreter::Interpreter;
pub use session::{run_session, SessionSummary};
