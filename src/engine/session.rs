// ============================================================================
// Session Loop
// Feeds input lines to an evaluator until EOF or `q`
// ============================================================================

use crate::interfaces::LineEvaluator;
use std::io::{self, BufRead};

/// What happened during a session
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionSummary {
    /// Lines handed to the evaluator
    pub lines: usize,
    /// Operands released at shutdown
    pub released: usize,
}

/// Run a session: evaluate lines until input ends or the evaluator stops
/// running, then shut it down.
///
/// # Errors
/// Only I/O errors from `input` are returned; calculator errors are
/// reported through the evaluator's event handler.
pub fn run_session<R: BufRead>(
    evaluator: &mut dyn LineEvaluator,
    input: R,
) -> io::Result<SessionSummary> {
    let mut summary = SessionSummary::default();

    for line in input.lines() {
        let line = line?;
        evaluator.execute_line(&line);
        summary.lines += 1;

        if !evaluator.is_running() {
            tracing::debug!(lines = summary.lines, "quit requested");
            break;
        }
    }

    summary.released = evaluator.shutdown();
    tracing::debug!(?summary, "session finished");
    Ok(summary)
}
