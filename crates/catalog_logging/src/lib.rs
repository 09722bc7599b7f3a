#![deny(missing_docs)]
//! Shared logging utilities for the catalog workspace.
//!
//! This crate provides the `catalog_*` logging macros used across the codebase,
//! a thread-local request context that tags log lines with the fetch they
//! belong to, and a minimal test initializer for the global logger.

use std::cell::Cell;

#[doc(hidden)]
pub use log;

thread_local! {
    /// Thread-local storage for the request id currently being handled.
    static REQUEST_ID: Cell<Option<u64>> = const { Cell::new(None) };
}

/// Sets the request id for the current thread.
/// Every `catalog_*` log line emitted on this thread is prefixed with it
/// until it is cleared.
pub fn set_request_context(request_id: Option<u64>) {
    REQUEST_ID.with(|v| v.set(request_id));
}

/// Retrieves the request id for the current thread, if any.
pub fn request_context() -> Option<u64> {
    REQUEST_ID.with(|v| v.get())
}

/// Scoped request context: sets the id on creation and restores the previous
/// value when dropped.
pub struct RequestScope {
    previous: Option<u64>,
}

impl RequestScope {
    /// Enters the context of `request_id` for the current thread.
    pub fn enter(request_id: u64) -> Self {
        let previous = request_context();
        set_request_context(Some(request_id));
        Self { previous }
    }
}

impl Drop for RequestScope {
    fn drop(&mut self) {
        set_request_context(self.previous);
    }
}

/// Prefix inserted by the logging macros. Not meant to be called directly.
#[doc(hidden)]
pub fn request_prefix() -> String {
    match request_context() {
        Some(id) => format!("[req {id}] "),
        None => String::new(),
    }
}

/// Logs a trace-level message using the global logging facade.
#[macro_export]
macro_rules! catalog_trace {
    ($($arg:tt)*) => {{
        $crate::log::trace!("{}{}", $crate::request_prefix(), format_args!($($arg)*));
    }};
}

/// Logs an info-level message using the global logging facade.
#[macro_export]
macro_rules! catalog_info {
    ($($arg:tt)*) => {{
        $crate::log::info!("{}{}", $crate::request_prefix(), format_args!($($arg)*));
    }};
}

/// Logs a debug-level message using the global logging facade.
#[macro_export]
macro_rules! catalog_debug {
    ($($arg:tt)*) => {{
        $crate::log::debug!("{}{}", $crate::request_prefix(), format_args!($($arg)*));
    }};
}

/// Logs a warn-level message using the global logging facade.
#[macro_export]
macro_rules! catalog_warn {
    ($($arg:tt)*) => {{
        $crate::log::warn!("{}{}", $crate::request_prefix(), format_args!($($arg)*));
    }};
}

/// Logs an error-level message using the global logging facade.
#[macro_export]
macro_rules! catalog_error {
    ($($arg:tt)*) => {{
        $crate::log::error!("{}{}", $crate::request_prefix(), format_args!($($arg)*));
    }};
}

/// Initializes a simple terminal logger for use in unit tests.
///
/// This safely no-ops if another logger has already been initialized.
pub fn initialize_for_tests() {
    use simplelog::{ColorChoice, CombinedLogger, Config, TermLogger, TerminalMode};

    // Use debug level in debug builds, info in release builds.
    let level = if cfg!(debug_assertions) {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    // Ignore the error if a logger was already set by another test.
    let _ = CombinedLogger::init(vec![TermLogger::new(
        level,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )]);
}
