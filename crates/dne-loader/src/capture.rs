//! In-memory capture of diagnostic output for the audit trail.
//!
//! Provides a custom tracing layer that records every event emitted while a
//! load session is open as a formatted `LEVEL: message` line. The session
//! scope attaches the layer as the thread-default subscriber and the audit
//! recorder reads the accumulated text back through the same handle.

use std::fmt::Write as FmtWrite;
use std::sync::{Arc, Mutex};
use tracing::subscriber::DefaultGuard;
use tracing::{Event, Subscriber};
use tracing_subscriber::layer::{Context, SubscriberExt};
use tracing_subscriber::Layer;

/// Handle to the captured log lines of one load session.
///
/// Cloning the sink clones the handle, not the buffer; all clones observe
/// the same lines. A fresh sink is constructed per session so captured text
/// never leaks from one session into the next.
#[derive(Debug, Clone, Default)]
pub struct LogSink {
    lines: Arc<Mutex<Vec<String>>>,
}

impl LogSink {
    /// Create a new, empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Install this sink as the thread-default subscriber.
    ///
    /// Every event emitted on this thread while the returned guard is alive
    /// is captured. Dropping the guard detaches the sink, on every exit path.
    pub fn attach(&self) -> DefaultGuard {
        let subscriber = tracing_subscriber::registry().with(CaptureLayer {
            lines: Arc::clone(&self.lines),
        });
        tracing::subscriber::set_default(subscriber)
    }

    /// The captured lines, newline-joined, in emission order.
    pub fn contents(&self) -> String {
        self.lines
            .lock()
            .map(|lines| lines.join("\n"))
            .unwrap_or_default()
    }

    /// Number of captured lines.
    pub fn len(&self) -> usize {
        self.lines.lock().map(|lines| lines.len()).unwrap_or(0)
    }

    /// Whether nothing has been captured yet.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A tracing layer that appends formatted log lines to a shared buffer.
struct CaptureLayer {
    lines: Arc<Mutex<Vec<String>>>,
}

impl<S> Layer<S> for CaptureLayer
where
    S: Subscriber,
{
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let mut visitor = MessageVisitor::new();
        event.record(&mut visitor);

        let line = format!("{}: {}", event.metadata().level(), visitor.message);

        if let Ok(mut lines) = self.lines.lock() {
            lines.push(line);
        }
    }
}

/// Visitor for extracting the message from a tracing event.
struct MessageVisitor {
    message: String,
}

impl MessageVisitor {
    fn new() -> Self {
        Self {
            message: String::new(),
        }
    }
}

impl tracing::field::Visit for MessageVisitor {
    fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
        if field.name() == "message" {
            let _ = write!(self.message, "{:?}", value);
        } else {
            if !self.message.is_empty() {
                self.message.push(' ');
            }
            let _ = write!(self.message, "{}={:?}", field.name(), value);
        }
    }

    fn record_str(&mut self, field: &tracing::field::Field, value: &str) {
        if field.name() == "message" {
            self.message.push_str(value);
        } else {
            if !self.message.is_empty() {
                self.message.push(' ');
            }
            let _ = write!(self.message, "{}={}", field.name(), value);
        }
    }

    fn record_i64(&mut self, field: &tracing::field::Field, value: i64) {
        if !self.message.is_empty() {
            self.message.push(' ');
        }
        let _ = write!(self.message, "{}={}", field.name(), value);
    }

    fn record_u64(&mut self, field: &tracing::field::Field, value: u64) {
        if !self.message.is_empty() {
            self.message.push(' ');
        }
        let _ = write!(self.message, "{}={}", field.name(), value);
    }

    fn record_bool(&mut self, field: &tracing::field::Field, value: bool) {
        if !self.message.is_empty() {
            self.message.push(' ');
        }
        let _ = write!(self.message, "{}={}", field.name(), value);
    }
}
