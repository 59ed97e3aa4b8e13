//! Structured logging for the sweeper
//!
//! - Standard log levels (Error/Warning/Info/Debug/Verbose)
//! - Per-module debug control via --debug-<module> flags
//! - Colored console output, optional plain file copy via --log-file
//!
//! ## Usage
//!
//! ```rust
//! use wallet_sweeper::logger::{self, LogTag};
//!
//! logger::info(LogTag::Sweep, "Assembling sweep transaction");
//! logger::warning(LogTag::Sweep, "Recipient token account missing, skipping");
//! logger::debug(LogTag::Rpc, "getBalance -> 1000000000"); // Only with --debug-rpc
//! ```
//!
//! Call `logger::init()` once at startup, after the argument store is final.

mod config;
mod core;
mod file;
mod format;
mod levels;
mod tags;

pub use config::{get_logger_config, init_from_args, set_logger_config, LoggerConfig};
pub use levels::LogLevel;
pub use tags::LogTag;

/// Initialize the logger system
///
/// Reads debug/verbosity flags from the argument store and opens the log
/// file when one was requested.
pub fn init() {
    config::init_from_args();
    file::init_file_logging();
}

/// Log at ERROR level (always shown)
pub fn error(tag: LogTag, message: &str) {
    core::log_internal(tag, LogLevel::Error, message);
}

/// Log at WARNING level (still shown with --quiet)
pub fn warning(tag: LogTag, message: &str) {
    core::log_internal(tag, LogLevel::Warning, message);
}

/// Log at INFO level (normal operation, hidden by --quiet)
pub fn info(tag: LogTag, message: &str) {
    core::log_internal(tag, LogLevel::Info, message);
}

/// Log at DEBUG level, shown only with --debug-<tag>
pub fn debug(tag: LogTag, message: &str) {
    core::log_internal(tag, LogLevel::Debug, message);
}

/// Log at VERBOSE level, shown only with --verbose or --verbose-<tag>
pub fn verbose(tag: LogTag, message: &str) {
    core::log_internal(tag, LogLevel::Verbose, message);
}

/// Flush pending file writes; call before exit
pub fn flush() {
    file::flush_file_logging();
}
