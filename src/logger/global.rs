//! Process-wide logger slot used by the context-free logging macros
//!
//! Written once during startup, read without locking afterwards. Calls made
//! before a logger is installed are dropped.

use std::error::Error;
use std::sync::{Arc, OnceLock};

use super::{CallSite, Logger, Severity};
use crate::config::LogConfig;
use crate::error::{LogError, Result};
use crate::format::Arg;
use crate::platform::{AppContext, HostPlatform, Platform};
use crate::sink::{self, LogSink};

static LOGGER: OnceLock<Logger> = OnceLock::new();

/// Initialize the global logger with the platform's native sink
///
/// `debug` enables sub-Warn logging and the platform debug diagnostics.
///
/// Off Android the default sink is [`TracingSink`](crate::sink::TracingSink),
/// which only forwards `tracing` events. Install a subscriber first, e.g.
/// with [`sink::init_subscriber`](crate::sink::init_subscriber), or nothing
/// is printed.
pub fn init<C: AppContext + ?Sized>(
    context: Option<&C>,
    debug: bool,
    tag: impl Into<String>,
) -> Result<&'static Logger> {
    init_with(
        context,
        LogConfig::new(tag, debug),
        &HostPlatform::new(),
        sink::platform_default(),
    )
}

/// Initialize the global logger with explicit collaborators
pub fn init_with<C: AppContext + ?Sized>(
    context: Option<&C>,
    config: LogConfig,
    platform: &dyn Platform,
    sink: Arc<dyn LogSink>,
) -> Result<&'static Logger> {
    let context = context.ok_or(LogError::MissingContext)?;
    if LOGGER.get().is_some() {
        return Err(LogError::AlreadyInitialized);
    }
    install(Logger::init(Some(context), config, platform, sink)?)
}

/// Install an already-built logger
pub fn install(logger: Logger) -> Result<&'static Logger> {
    LOGGER
        .set(logger)
        .map_err(|_| LogError::AlreadyInitialized)?;
    tracing::debug!("Global logger installed");
    LOGGER.get().ok_or(LogError::AlreadyInitialized)
}

/// The installed logger, if any
pub fn logger() -> Option<&'static Logger> {
    LOGGER.get()
}

/// Log through the global logger; a no-op before initialization
pub fn log(severity: Severity, site: &CallSite, message: &str, args: &[Arg]) -> Result<()> {
    match logger() {
        Some(logger) => logger.log(severity, site, message, args),
        None => Ok(()),
    }
}

/// Log with an attached error through the global logger
pub fn log_error(severity: Severity, site: &CallSite, message: &str, err: &dyn Error) -> Result<()> {
    match logger() {
        Some(logger) => logger.log_error(severity, site, message, err),
        None => Ok(()),
    }
}
