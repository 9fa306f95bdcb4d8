//! Log sinks
//!
//! A sink is the destination that actually records a composed line. The
//! facade only depends on the narrow [`LogSink`] contract; where the line ends
//! up (liblog, a `tracing` subscriber, a terminal, a test buffer) is the
//! sink's business.

#[cfg(target_os = "android")]
mod android;
mod console;
mod memory;
mod tracing_sink;

#[cfg(target_os = "android")]
pub use android::AndroidSink;
pub use console::ConsoleSink;
pub use memory::{CapturedLine, MemorySink};
pub use tracing_sink::{init_subscriber, TracingSink};

use std::error::Error;
use std::sync::Arc;

use crate::Severity;

/// Native log priority, numbered like `android.util.Log`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Priority {
    Verbose = 2,
    Debug = 3,
    Info = 4,
    Warn = 5,
    Error = 6,
    /// The "what a terrible failure" channel
    Assert = 7,
}

impl Priority {
    /// Single-letter code used by logcat
    pub fn as_char(&self) -> char {
        match self {
            Priority::Verbose => 'V',
            Priority::Debug => 'D',
            Priority::Info => 'I',
            Priority::Warn => 'W',
            Priority::Error => 'E',
            Priority::Assert => 'A',
        }
    }
}

impl From<Severity> for Priority {
    fn from(severity: Severity) -> Self {
        match severity {
            Severity::Trace => Priority::Verbose,
            Severity::Debug => Priority::Debug,
            Severity::Info => Priority::Info,
            Severity::Warn => Priority::Warn,
            Severity::Error => Priority::Error,
            Severity::Fatal => Priority::Assert,
        }
    }
}

/// What a sink receives for every emitted line
#[derive(Debug, Clone, Copy)]
pub struct SinkRecord<'a> {
    pub priority: Priority,
    pub tag: &'a str,
    /// Fully composed line (thread, call site and message)
    pub text: &'a str,
    /// Error attached by the `err = ...` form of the entry points
    pub error: Option<&'a (dyn Error + 'a)>,
}

impl SinkRecord<'_> {
    /// Text followed by the rendered error trace, if any
    pub fn full_text(&self) -> String {
        match self.error {
            Some(err) => format!("{}\n{}", self.text, error_trace(err)),
            None => self.text.to_string(),
        }
    }
}

/// Destination for composed log lines
///
/// Implementations must be callable from any thread and must not fail the
/// caller; write errors are swallowed.
pub trait LogSink: Send + Sync {
    fn write(&self, record: &SinkRecord<'_>);
}

impl<S: LogSink + ?Sized> LogSink for Arc<S> {
    fn write(&self, record: &SinkRecord<'_>) {
        (**self).write(record)
    }
}

/// Render an error and its `source()` chain, one cause per line
pub fn error_trace(err: &dyn Error) -> String {
    let mut trace = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        trace.push_str("\nCaused by: ");
        trace.push_str(&cause.to_string());
        source = cause.source();
    }
    trace
}

/// The sink that writes to the current platform's native log
///
/// liblog on Android, the `tracing` dispatcher everywhere else.
pub fn platform_default() -> Arc<dyn LogSink> {
    #[cfg(target_os = "android")]
    {
        Arc::new(AndroidSink)
    }
    #[cfg(not(target_os = "android"))]
    {
        Arc::new(TracingSink)
    }
}
