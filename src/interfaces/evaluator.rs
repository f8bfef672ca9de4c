// ============================================================================
// Line Evaluator Interface
// Backend-independent handle on a calculator session
// ============================================================================

use super::CalcEvent;

/// Object-safe view of an interpreter, so the numeric backend can be picked
/// at runtime (see [`create_from_config`](crate::engine::create_from_config)).
pub trait LineEvaluator {
    /// Evaluate one input line and return the events it produced
    fn execute_line(&mut self, line: &str) -> Vec<CalcEvent>;

    /// `false` once `q` has been evaluated
    fn is_running(&self) -> bool;

    /// Current number of fractional digits
    fn precision(&self) -> u32;

    /// Number of operands on the stack
    fn stack_size(&self) -> usize;

    /// Stack rendered top to bottom at the current precision
    fn stack_snapshot(&self) -> Vec<String>;

    /// Release the stack at end of session, returning how many operands
    /// were dropped
    fn shutdown(&mut self) -> usize;

    /// Name of the numeric backend, for logging
    fn backend_name(&self) -> &'static str;
}
