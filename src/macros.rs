//! Leveled logging macros
//!
//! Each level accepts the same forms:
//!
//! ```ignore
//! debug!("Called with %d arguments", count);          // global logger, template + args
//! error!("Upload failed", err = io_error);             // global logger, literal text + error
//! info!(logger: &logger, "%s connected", peer);       // explicit logger
//! ```
//!
//! Every form evaluates to `easylog::Result<()>`.

/// Capture the [`CallSite`](crate::CallSite) of the enclosing function
#[macro_export]
macro_rules! call_site {
    () => {{
        fn __easylog_probe() {}
        fn __easylog_type_name<T>(_: T) -> &'static str {
            ::core::any::type_name::<T>()
        }
        $crate::CallSite::new(
            module_path!(),
            __easylog_type_name(__easylog_probe),
            file!(),
            line!(),
        )
    }};
}

#[doc(hidden)]
#[macro_export]
macro_rules! __easylog_log {
    ($severity:expr, logger: $logger:expr, $message:expr, err = $err:expr $(,)?) => {
        $crate::Logger::log_error($logger, $severity, &$crate::call_site!(), $message, &$err)
    };
    ($severity:expr, logger: $logger:expr, $message:expr $(, $arg:expr)* $(,)?) => {
        $crate::Logger::log(
            $logger,
            $severity,
            &$crate::call_site!(),
            $message,
            &[$($crate::Arg::from($arg)),*],
        )
    };
    ($severity:expr, $message:expr, err = $err:expr $(,)?) => {
        $crate::global::log_error($severity, &$crate::call_site!(), $message, &$err)
    };
    ($severity:expr, $message:expr $(, $arg:expr)* $(,)?) => {
        $crate::global::log(
            $severity,
            &$crate::call_site!(),
            $message,
            &[$($crate::Arg::from($arg)),*],
        )
    };
}

/// Log at [`Severity::Trace`](crate::Severity::Trace) (Android verbose)
#[macro_export]
macro_rules! trace {
    ($($tt:tt)+) => { $crate::__easylog_log!($crate::Severity::Trace, $($tt)+) };
}

/// Log at [`Severity::Debug`](crate::Severity::Debug)
#[macro_export]
macro_rules! debug {
    ($($tt:tt)+) => { $crate::__easylog_log!($crate::Severity::Debug, $($tt)+) };
}

/// Log at [`Severity::Info`](crate::Severity::Info)
#[macro_export]
macro_rules! info {
    ($($tt:tt)+) => { $crate::__easylog_log!($crate::Severity::Info, $($tt)+) };
}

/// Log at [`Severity::Warn`](crate::Severity::Warn); emitted even when logging is disabled
#[macro_export]
macro_rules! warn {
    ($($tt:tt)+) => { $crate::__easylog_log!($crate::Severity::Warn, $($tt)+) };
}

/// Log at [`Severity::Error`](crate::Severity::Error); emitted even when logging is disabled
#[macro_export]
macro_rules! error {
    ($($tt:tt)+) => { $crate::__easylog_log!($crate::Severity::Error, $($tt)+) };
}

/// Log at [`Severity::Fatal`](crate::Severity::Fatal), the assert channel
#[macro_export]
macro_rules! fatal {
    ($($tt:tt)+) => { $crate::__easylog_log!($crate::Severity::Fatal, $($tt)+) };
}
