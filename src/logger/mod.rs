//! Structured logging for the inspector
//!
//! - Standard log levels (Error/Warning/Info/Debug/Verbose)
//! - Per-module debug control via `--debug-<module>` flags
//! - Colored, timestamped lines on standard error, so standard output only
//!   carries the inspection summary
//!
//! ## Usage
//!
//! ```rust,no_run
//! use whirlpool_inspector::logger::{self, LogTag};
//!
//! logger::init();
//! logger::error(LogTag::System, "Startup failed");
//! logger::debug(LogTag::Api, "Request details"); // Only with --debug-api
//! ```

mod config;
mod core;
mod format;
mod levels;
mod tags;

pub use levels::LogLevel;
pub use tags::LogTag;

/// Initialize the logger from the process arguments
///
/// Call once at startup, before any logging occurs.
pub fn init() {
    config::init_from_args();
}

/// Log at ERROR level (always shown)
pub fn error(tag: LogTag, message: &str) {
    core::log_internal(tag, LogLevel::Error, message);
}

/// Log at DEBUG level
///
/// Only shown when the `--debug-<module>` flag matching `tag` is present.
pub fn debug(tag: LogTag, message: &str) {
    core::log_internal(tag, LogLevel::Debug, message);
}

/// Log at VERBOSE level (only with `--verbose`)
pub fn verbose(tag: LogTag, message: &str) {
    core::log_internal(tag, LogLevel::Verbose, message);
}
