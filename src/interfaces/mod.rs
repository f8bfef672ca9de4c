// ============================================================================
// Interfaces Module
// Contains all trait definitions and contracts
// ============================================================================

mod evaluator;
mod event_handler;
mod numeric_value;

pub use evaluator::LineEvaluator;
pub use event_handler::{
    CalcEvent, EventHandler, LoggingEventHandler, NoOpEventHandler, RecordingEventHandler,
    WriterEventHandler,
};
pub use numeric_value::NumericValue;
