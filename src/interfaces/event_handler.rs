// ============================================================================
// Event Handler Interface
// Defines the contract for consuming calculator output and diagnostics
// ============================================================================

use crate::engine::CalcError;
use parking_lot::Mutex;
use std::io::Write;

/// Events emitted while a line is evaluated
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CalcEvent {
    /// A value was printed (`=`, `p`, or one line of `b`)
    ValuePrinted { text: String },

    /// Stack size was printed (`s`)
    SizePrinted { size: usize },

    /// A command failed; processing continued
    Diagnostic { error: CalcError },

    /// Precision changed via `k`
    PrecisionChanged { precision: u32 },

    /// Stack emptied via `c` or at shutdown
    StackCleared { released: usize },

    /// `q` was seen; no further lines will be read
    QuitRequested,
}

impl CalcEvent {
    /// The output line for user-visible events, `None` for state changes.
    pub fn render(&self) -> Option<String> {
        match self {
            CalcEvent::ValuePrinted { text } => Some(text.clone()),
            CalcEvent::SizePrinted { size } => Some(size.to_string()),
            CalcEvent::Diagnostic { error } => Some(error.diagnostic()),
            CalcEvent::PrecisionChanged { .. }
            | CalcEvent::StackCleared { .. }
            | CalcEvent::QuitRequested => None,
        }
    }
}

/// Event handler trait for processing calculator events
/// Implementations can print, log, record, etc.
pub trait EventHandler: Send + Sync {
    /// Handle a calculator event
    fn on_event(&self, event: CalcEvent);

    /// Batch event handler (optional optimization)
    fn on_events(&self, events: Vec<CalcEvent>) {
        for event in events {
            self.on_event(event);
        }
    }
}

/// No-op event handler for testing
pub struct NoOpEventHandler;

impl EventHandler for NoOpEventHandler {
    fn on_event(&self, _event: CalcEvent) {
        // Do nothing
    }
}

/// Logging event handler
pub struct LoggingEventHandler;

impl EventHandler for LoggingEventHandler {
    fn on_event(&self, event: CalcEvent) {
        tracing::debug!("Calculator event: {:?}", event);
    }
}

/// Writes rendered lines to any `Write` sink (stdout for the binary)
pub struct WriterEventHandler<W: Write + Send> {
    out: Mutex<W>,
}

impl<W: Write + Send> WriterEventHandler<W> {
    pub fn new(out: W) -> Self {
        Self {
            out: Mutex::new(out),
        }
    }

    pub fn into_inner(self) -> W {
        self.out.into_inner()
    }
}

impl WriterEventHandler<std::io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }
}

impl<W: Write + Send> EventHandler for WriterEventHandler<W> {
    fn on_event(&self, event: CalcEvent) {
        if let Some(line) = event.render() {
            let mut out = self.out.lock();
            if let Err(e) = writeln!(out, "{line}") {
                tracing::warn!("failed to write calculator output: {e}");
            }
        }
    }

    fn on_events(&self, events: Vec<CalcEvent>) {
        let mut out = self.out.lock();
        for line in events.iter().filter_map(CalcEvent::render) {
            if let Err(e) = writeln!(out, "{line}") {
                tracing::warn!("failed to write calculator output: {e}");
                return;
            }
        }
        if let Err(e) = out.flush() {
            tracing::warn!("failed to flush calculator output: {e}");
        }
    }
}

/// Collects every event it receives
#[derive(Default)]
pub struct RecordingEventHandler {
    events: Mutex<Vec<CalcEvent>>,
}

impl RecordingEventHandler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the events seen so far
    pub fn events(&self) -> Vec<CalcEvent> {
        self.events.lock().clone()
    }

    /// Rendered output lines seen so far
    pub fn lines(&self) -> Vec<String> {
        self.events.lock().iter().filter_map(CalcEvent::render).collect()
    }
}

impl EventHandler for RecordingEventHandler {
    fn on_event(&self, event: CalcEvent) {
        self.events.lock().push(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::StackError;

    #[test]
    fn test_noop_handler() {
        let handler = NoOpEventHandler;
        handler.on_event(CalcEvent::QuitRequested);
        // Should not panic
    }

    #[test]
    fn test_render() {
        let printed = CalcEvent::ValuePrinted {
            text: "7.0000".to_string(),
        };
        assert_eq!(printed.render().as_deref(), Some("7.0000"));
        assert_eq!(
            CalcEvent::SizePrinted { size: 3 }.render().as_deref(),
            Some("3")
        );
        let diagnostic = CalcEvent::Diagnostic {
            error: StackError::EmptyStack.into(),
        };
        assert_eq!(diagnostic.render().as_deref(), Some("cdc: stack is empty"));
        assert_eq!(CalcEvent::PrecisionChanged { precision: 2 }.render(), None);
    }

    #[test]
    fn test_writer_handler_writes_visible_lines() {
        let handler = WriterEventHandler::new(Vec::new());
        handler.on_events(vec![
            CalcEvent::ValuePrinted {
                text: "1.00".to_string(),
            },
            CalcEvent::StackCleared { released: 1 },
            CalcEvent::SizePrinted { size: 0 },
        ]);
        let output = String::from_utf8(handler.into_inner()).unwrap();
        assert_eq!(output, "1.00\n0\n");
    }

    #[test]
    fn test_recording_handler() {
        let handler = RecordingEventHandler::new();
        handler.on_events(vec![
            CalcEvent::SizePrinted { size: 2 },
            CalcEvent::QuitRequested,
        ]);
        assert_eq!(handler.events().len(), 2);
        assert_eq!(handler.lines(), vec!["2".to_string()]);
    }
}
