//! The logging facade
//!
//! A [`Logger`] owns its configuration and sink. It gates each call on
//! severity, formats the message, attributes it to its call site and hands
//! the composed line to the sink.

mod caller;
pub mod global;

pub use caller::{current_thread_name, thread_field, CallSite, LogRecord, THREAD_FIELD_WIDTH};

use std::error::Error;
use std::fmt;
use std::sync::Arc;

use crate::config::LogConfig;
use crate::error::{LogError, Result};
use crate::format::{format_message, Arg};
use crate::platform::{enable_debug_diagnostics, AppContext, Platform};
use crate::sink::{LogSink, SinkRecord};

/// Ordered log severity
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Severity {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
    Fatal,
}

impl Severity {
    pub const ALL: [Severity; 6] = [
        Severity::Trace,
        Severity::Debug,
        Severity::Info,
        Severity::Warn,
        Severity::Error,
        Severity::Fatal,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Trace => "TRACE",
            Severity::Debug => "DEBUG",
            Severity::Info => "INFO",
            Severity::Warn => "WARN",
            Severity::Error => "ERROR",
            Severity::Fatal => "FATAL",
        }
    }

    /// Warn and above ignore the enabled flag
    pub fn always_emitted(&self) -> bool {
        *self >= Severity::Warn
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Formats and forwards leveled log calls to a sink
pub struct Logger {
    config: LogConfig,
    sink: Arc<dyn LogSink>,
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl Logger {
    /// Build a logger without touching platform diagnostics
    pub fn new(config: LogConfig, sink: Arc<dyn LogSink>) -> Self {
        Self { config, sink }
    }

    /// Startup initialization, called from the application's create hook
    ///
    /// Fails with [`LogError::MissingContext`] before anything else happens
    /// when `context` is `None`. With logging enabled, the platform's debug
    /// diagnostics (strict mode, lifecycle debug logging) are switched on as
    /// far as its SDK level allows.
    pub fn init<C: AppContext + ?Sized>(
        context: Option<&C>,
        config: LogConfig,
        platform: &dyn Platform,
        sink: Arc<dyn LogSink>,
    ) -> Result<Self> {
        let context = context.ok_or(LogError::MissingContext)?;

        if config.enabled {
            enable_debug_diagnostics(platform);
        }

        tracing::debug!(
            package = context.package_name(),
            tag = %config.tag,
            enabled = config.enabled,
            "Logger initialised"
        );
        Ok(Self::new(config, sink))
    }

    pub fn config(&self) -> &LogConfig {
        &self.config
    }

    pub fn tag(&self) -> &str {
        &self.config.tag
    }

    /// Whether a call at `severity` reaches the sink
    pub fn is_enabled(&self, severity: Severity) -> bool {
        severity.always_emitted() || self.config.enabled
    }

    /// Log a printf-style template with positional arguments
    ///
    /// Returns an error only when the template cannot be formatted with
    /// `args` by either formatting tier. Suppressed calls never fail.
    pub fn log(
        &self,
        severity: Severity,
        site: &CallSite,
        message: &str,
        args: &[Arg],
    ) -> Result<()> {
        if !self.is_enabled(severity) {
            return Ok(());
        }

        let message = format_message(message, args)?;
        self.dispatch(&LogRecord {
            severity,
            thread: current_thread_name(),
            site,
            message,
            error: None,
        });
        Ok(())
    }

    /// Log literal text with an attached error
    pub fn log_error(
        &self,
        severity: Severity,
        site: &CallSite,
        message: &str,
        err: &dyn Error,
    ) -> Result<()> {
        if !self.is_enabled(severity) {
            return Ok(());
        }

        self.dispatch(&LogRecord {
            severity,
            thread: current_thread_name(),
            site,
            message: message.to_string(),
            error: Some(err),
        });
        Ok(())
    }

    fn dispatch(&self, record: &LogRecord<'_>) {
        let text = record.line();
        self.sink.write(&SinkRecord {
            priority: record.severity.into(),
            tag: &self.config.tag,
            text: &text,
            error: record.error,
        });
    }
}
