//! Bridge into the `tracing` ecosystem
//!
//! On hosts without a native log daemon the composed lines become `tracing`
//! events, so whatever subscriber the application installed renders them.

use anyhow::Result;
use tracing::Level;
use tracing_subscriber::EnvFilter;

use super::{error_trace, LogSink, Priority, SinkRecord};
use crate::config::LogConfig;

/// Target attached to every forwarded event
pub const TARGET: &str = "easylog";

/// Forwards lines to the current `tracing` dispatcher
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl TracingSink {
    /// The `tracing` level a priority is emitted at
    pub fn level(priority: Priority) -> Level {
        match priority {
            Priority::Verbose => Level::TRACE,
            Priority::Debug => Level::DEBUG,
            Priority::Info => Level::INFO,
            Priority::Warn => Level::WARN,
            Priority::Error | Priority::Assert => Level::ERROR,
        }
    }
}

// `tracing::event!` needs a constant level, hence one arm per level
macro_rules! forward {
    ($level:expr, $record:expr) => {{
        let record = $record;
        let fatal = record.priority == Priority::Assert;
        match record.error {
            Some(err) => tracing::event!(
                target: TARGET,
                $level,
                tag = record.tag,
                fatal,
                error = %error_trace(err),
                "{}",
                record.text
            ),
            None => tracing::event!(
                target: TARGET,
                $level,
                tag = record.tag,
                fatal,
                "{}",
                record.text
            ),
        }
    }};
}

impl LogSink for TracingSink {
    fn write(&self, record: &SinkRecord<'_>) {
        match record.priority {
            Priority::Verbose => forward!(Level::TRACE, record),
            Priority::Debug => forward!(Level::DEBUG, record),
            Priority::Info => forward!(Level::INFO, record),
            Priority::Warn => forward!(Level::WARN, record),
            Priority::Error | Priority::Assert => forward!(Level::ERROR, record),
        }
    }
}

/// Install a global fmt subscriber sized to the logger configuration
///
/// Filter priority: `RUST_LOG` > `trace` when logging is enabled > `warn`.
pub fn init_subscriber(config: &LogConfig) -> Result<()> {
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if config.enabled {
        EnvFilter::new("trace")
    } else {
        EnvFilter::new("warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .compact()
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to install tracing subscriber: {e}"))
}
