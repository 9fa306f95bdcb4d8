//! Call-site attribution and line assembly

use std::error::Error;

use super::Severity;

/// Width of the thread-name column at the start of every line
pub const THREAD_FIELD_WIDTH: usize = 30;

const PROBE_SUFFIX: &str = "::__easylog_probe";
const CLOSURE_SUFFIX: &str = "::{{closure}}";

/// Where a log call was written, captured at compile time by [`call_site!`](crate::call_site)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CallSite {
    module: &'static str,
    function: &'static str,
    file: &'static str,
    line: u32,
}

impl CallSite {
    /// `probe` is the type name of a function item declared inside the
    /// calling function, e.g. `app::net::Client::connect::__easylog_probe`.
    pub fn new(module: &'static str, probe: &'static str, file: &'static str, line: u32) -> Self {
        Self {
            module,
            function: enclosing_function(probe),
            file,
            line,
        }
    }

    /// Path of the enclosing type or module (`app::net::Client`)
    pub fn class(&self) -> &'static str {
        match self.function.rsplit_once("::") {
            Some((class, _)) => class,
            None => self.module,
        }
    }

    /// Name of the enclosing function (`connect`)
    pub fn method(&self) -> &'static str {
        match self.function.rsplit_once("::") {
            Some((_, method)) => method,
            None => self.function,
        }
    }

    pub fn module(&self) -> &'static str {
        self.module
    }

    pub fn file(&self) -> &'static str {
        self.file
    }

    pub fn line(&self) -> u32 {
        self.line
    }
}

/// Strip the probe and any closure frames from a probe type name
fn enclosing_function(probe: &'static str) -> &'static str {
    let mut path = probe.strip_suffix(PROBE_SUFFIX).unwrap_or(probe);
    while let Some(outer) = path.strip_suffix(CLOSURE_SUFFIX) {
        path = outer;
    }
    path
}

/// Name of the current thread, or its id when it has none
pub fn current_thread_name() -> String {
    let thread = std::thread::current();
    match thread.name() {
        Some(name) => name.to_string(),
        None => format!("{:?}", thread.id()),
    }
}

/// Pad or cut a thread name to exactly [`THREAD_FIELD_WIDTH`] characters
pub fn thread_field(name: &str) -> String {
    let name: String = name.chars().take(THREAD_FIELD_WIDTH).collect();
    format!("{name:<width$}", width = THREAD_FIELD_WIDTH)
}

/// One log call on its way to the sink
#[derive(Debug)]
pub struct LogRecord<'a> {
    pub severity: Severity,
    pub thread: String,
    pub site: &'a CallSite,
    /// Message after formatting
    pub message: String,
    pub error: Option<&'a (dyn Error + 'a)>,
}

impl LogRecord<'_> {
    /// `<thread:30><class>.<method>(): <message>`
    pub fn line(&self) -> String {
        format!(
            "{}{}.{}(): {}",
            thread_field(&self.thread),
            self.site.class(),
            self.site.method(),
            self.message
        )
    }
}
