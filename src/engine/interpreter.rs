// ============================================================================
// Command Interpreter
// Core evaluation loop: scans a line and drives the stack
// ============================================================================

use super::dispatcher::Dispatcher;
use super::errors::CalcError;
use crate::domain::{CalculatorConfig, Command, Lexer, OperandStack, Token};
use crate::interfaces::{CalcEvent, EventHandler, LineEvaluator, NumericValue};
use std::sync::Arc;

/// Transient state of one line's scan.
///
/// Each flag is consumed by the next literal; whatever is left at the end
/// of the line is dropped.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct ParseFlags {
    pending_negate: bool,
    pending_precision: bool,
}

/// Evaluator context: the operand stack, the session precision and the
/// running flag, generic over the numeric backend.
pub struct Interpreter<N: NumericValue> {
    /// Operand stack; sole owner of every value
    stack: OperandStack<N>,

    /// Fractional digits for display and backend rounding
    precision: u32,

    /// Upper bound for `k`
    max_precision: u32,

    /// Cleared by `q`
    running: bool,

    dispatcher: Dispatcher,

    /// Receives every event after a line completes
    event_handler: Arc<dyn EventHandler>,
}

impl<N: NumericValue> Interpreter<N> {
    /// Create an interpreter from configuration (not validated here; see
    /// [`create_from_config`](super::create_from_config))
    pub fn new(config: &CalculatorConfig, event_handler: Arc<dyn EventHandler>) -> Self {
        Self {
            stack: OperandStack::new(),
            precision: config.precision,
            max_precision: config.max_precision,
            running: true,
            dispatcher: Dispatcher::new(config.domain_error_policy),
            event_handler,
        }
    }

    /// Evaluate one line of input.
    ///
    /// Never fails: every error is reported as a
    /// [`CalcEvent::Diagnostic`] and scanning resumes with the next
    /// character.
    pub fn execute_line(&mut self, line: &str) -> Vec<CalcEvent> {
        let mut events = Vec::new();
        let mut flags = ParseFlags::default();

        for token in Lexer::new(line) {
            tracing::trace!(?token, "scanned token");
            let outcome = match token {
                Token::Command(command) => self.execute_command(command, &mut flags, &mut events),
                Token::Literal(text) => self.consume_literal(text, &mut flags, &mut events),
                Token::Invalid(c) => Err(CalcError::InvalidCommand(c)),
            };
            if let Err(error) = outcome {
                tracing::debug!(%error, "command failed");
                events.push(CalcEvent::Diagnostic { error });
            }
        }

        if flags != ParseFlags::default() {
            tracing::trace!(?flags, "discarding unconsumed parse flags");
        }

        self.event_handler.on_events(events.clone());
        events
    }

    /// Read-only access to the operand stack
    pub fn stack(&self) -> &OperandStack<N> {
        &self.stack
    }

    pub fn precision(&self) -> u32 {
        self.precision
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Drain the stack at end of session
    pub fn shutdown(&mut self) -> usize {
        if self.stack.is_empty() {
            return 0;
        }
        let released = self.stack.clear().unwrap_or(0);
        tracing::debug!(released, "released operand stack at shutdown");
        self.event_handler
            .on_event(CalcEvent::StackCleared { released });
        released
    }

    // ========================================================================
    // Private methods
    // ========================================================================

    fn execute_command(
        &mut self,
        command: Command,
        flags: &mut ParseFlags,
        events: &mut Vec<CalcEvent>,
    ) -> Result<(), CalcError> {
        match command {
            Command::Binary(op) => {
                self.dispatcher
                    .apply_binary(&mut self.stack, op, self.precision)?;
            }
            Command::Unary(op) => {
                self.dispatcher
                    .apply_unary(&mut self.stack, op, self.precision)?;
            }
            Command::PrintTop => {
                let top = self.stack.peek(0)?;
                events.push(CalcEvent::ValuePrinted {
                    text: top.format_fixed(self.precision),
                });
            }
            Command::Dump => {
                for value in self.stack.dump() {
                    events.push(CalcEvent::ValuePrinted {
                        text: value.format_fixed(self.precision),
                    });
                }
            }
            Command::PrintSize => {
                events.push(CalcEvent::SizePrinted {
                    size: self.stack.size(),
                });
            }
            Command::Duplicate => self.stack.duplicate_top()?,
            Command::Clear => {
                let released = self.stack.clear()?;
                events.push(CalcEvent::StackCleared { released });
            }
            Command::Quit => {
                self.running = false;
                events.push(CalcEvent::QuitRequested);
            }
            Command::SetPrecision => flags.pending_precision = true,
            Command::Negate => flags.pending_negate = true,
        }
        Ok(())
    }

    fn consume_literal(
        &mut self,
        text: &str,
        flags: &mut ParseFlags,
        events: &mut Vec<CalcEvent>,
    ) -> Result<(), CalcError> {
        let parsed = N::parse_literal(text, self.precision);

        if flags.pending_precision {
            flags.pending_precision = false;
            let precision = parsed?
                .to_precision()
                .filter(|p| *p <= self.max_precision)
                .ok_or(CalcError::InvalidPrecision)?;
            tracing::debug!(from = self.precision, to = precision, "precision changed");
            self.precision = precision;
            events.push(CalcEvent::PrecisionChanged { precision });
            return Ok(());
        }

        let negate = std::mem::take(&mut flags.pending_negate);
        let value = parsed?;
        let value = if negate { value.negate() } else { value };
        self.stack.push(value)?;
        Ok(())
    }
}

impl<N: NumericValue> LineEvaluator for Interpreter<N> {
    fn execute_line(&mut self, line: &str) -> Vec<CalcEvent> {
        Interpreter::execute_line(self, line)
    }

    fn is_running(&self) -> bool {
        self.running
    }

    fn precision(&self) -> u32 {
        self.precision
    }

    fn stack_size(&self) -> usize {
        self.stack.size()
    }

    fn stack_snapshot(&self) -> Vec<String> {
        self.stack
            .dump()
            .map(|value| value.format_fixed(self.precision))
            .collect()
    }

    fn shutdown(&mut self) -> usize {
        Interpreter::shutdown(self)
    }

    fn backend_name(&self) -> &'static str {
        N::NAME
    }
}
