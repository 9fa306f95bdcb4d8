//! Host platform collaborators
//!
//! Strict runtime diagnostics and lifecycle-manager debug logging are
//! capabilities of the host OS. The facade only toggles them, behind the SDK
//! level that introduced each one.

use std::sync::atomic::{AtomicBool, Ordering};

/// SDK levels that gate platform capabilities
pub mod sdk {
    /// Strict mode policies
    pub const GINGERBREAD: u32 = 9;
    /// Fragment and loader manager debug logging
    pub const HONEYCOMB: u32 = 11;
}

/// Context handed to `init` from the application's startup hook
pub trait AppContext {
    /// Identifier of the running application
    fn package_name(&self) -> &str;
}

impl AppContext for str {
    fn package_name(&self) -> &str {
        self
    }
}

impl AppContext for String {
    fn package_name(&self) -> &str {
        self
    }
}

/// Platform capabilities the facade can switch on
pub trait Platform: Send + Sync {
    /// SDK level of the running platform
    fn sdk_version(&self) -> u32;

    /// Turn aggressive thread/VM policy checks on, or back to lax policies
    fn set_strict_mode(&self, enabled: bool);

    /// Verbose internal logging in component lifecycle managers
    fn enable_lifecycle_debug_logging(&self, enabled: bool);
}

/// Enable every debug diagnostic the platform version supports
pub fn enable_debug_diagnostics(platform: &dyn Platform) {
    let version = platform.sdk_version();
    if version >= sdk::GINGERBREAD {
        platform.set_strict_mode(true);
    }
    if version >= sdk::HONEYCOMB {
        platform.enable_lifecycle_debug_logging(true);
    }
}

/// Platform stand-in for hosts without the native capabilities
///
/// Records the requested toggles and reports them through `tracing`.
#[derive(Debug)]
pub struct HostPlatform {
    sdk_version: u32,
    strict_mode: AtomicBool,
    lifecycle_debug: AtomicBool,
}

impl HostPlatform {
    /// A host that claims every SDK level
    pub fn new() -> Self {
        Self::with_sdk_version(u32::MAX)
    }

    pub fn with_sdk_version(sdk_version: u32) -> Self {
        Self {
            sdk_version,
            strict_mode: AtomicBool::new(false),
            lifecycle_debug: AtomicBool::new(false),
        }
    }

    pub fn strict_mode(&self) -> bool {
        self.strict_mode.load(Ordering::Acquire)
    }

    pub fn lifecycle_debug_logging(&self) -> bool {
        self.lifecycle_debug.load(Ordering::Acquire)
    }
}

impl Default for HostPlatform {
    fn default() -> Self {
        Self::new()
    }
}

impl Platform for HostPlatform {
    fn sdk_version(&self) -> u32 {
        self.sdk_version
    }

    fn set_strict_mode(&self, enabled: bool) {
        self.strict_mode.store(enabled, Ordering::Release);
        tracing::debug!(enabled, "strict mode policies updated");
    }

    fn enable_lifecycle_debug_logging(&self, enabled: bool) {
        self.lifecycle_debug.store(enabled, Ordering::Release);
        tracing::debug!(enabled, "lifecycle manager debug logging updated");
    }
}
