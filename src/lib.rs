//! easylog - leveled logging facade for mobile applications
//!
//! Messages are printf-style templates formatted with positional arguments,
//! prefixed with the calling thread and function, and forwarded to the
//! platform's native log (liblog on Android, `tracing` elsewhere).
//!
//! ```ignore
//! let config = easylog::LogConfig::for_build("SampleApp");
//! // Off Android, lines become `tracing` events; they need a subscriber to show up
//! easylog::sink::init_subscriber(&config)?;
//! easylog::init(Some("com.example.app"), config.enabled, config.tag.as_str())?;
//!
//! easylog::trace!("Hello from MainActivity")?;
//! easylog::debug!("Called with %d arguments", args.len())?;
//! easylog::error!("Error occurred", err = e)?;
//! ```
//!
//! Below Warn, calls are dropped unless logging was enabled at `init`.

mod macros;

pub mod config;
pub mod error;
pub mod format;
pub mod logger;
pub mod platform;
pub mod sink;

pub use config::LogConfig;
pub use error::{FormatError, LogError, Result};
pub use format::Arg;
pub use logger::global::{self, init, init_with, install};
pub use logger::{CallSite, LogRecord, Logger, Severity};
pub use platform::{AppContext, HostPlatform, Platform};
pub use sink::{LogSink, Priority, SinkRecord};
