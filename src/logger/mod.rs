//! Logger module
//!
//! Provides logging utilities for the calculator server:
//! - Startup notice
//! - Access logging with multiple formats
//! - Error, warning and debug logging
//! - File-based logging support

mod format;
pub mod writer;

pub use format::AccessLogEntry;

use crate::config::Config;
use std::net::SocketAddr;

/// Initialize the logger with configuration
///
/// Should be called once at application startup.
pub fn init(config: &Config) -> std::io::Result<()> {
    writer::init(
        config.logging.access_log_file.as_deref(),
        config.logging.error_log_file.as_deref(),
        config.logging.debug_enabled(),
    )
}

/// Write to info/access log
fn write_info(message: &str) {
    match writer::get() {
        Some(w) => w.write_info(message),
        None => println!("{message}"),
    }
}

/// Write to error log
fn write_error(message: &str) {
    match writer::get() {
        Some(w) => w.write_error(message),
        None => eprintln!("{message}"),
    }
}

/// The one line the server always prints once it is listening
fn startup_message(port: u16) -> String {
    format!("Calculator API running on port {port}")
}

pub fn log_server_start(addr: &SocketAddr) {
    write_info(&startup_message(addr.port()));
}

pub fn log_connection_accepted(peer_addr: &SocketAddr) {
    log_debug(|| format!("[Connection] Accepted from: {peer_addr}"));
}

pub fn log_connection_error(err: &impl std::fmt::Debug) {
    write_error(&format!("[ERROR] Failed to serve connection: {err:?}"));
}

pub fn log_error(message: &str) {
    write_error(&format!("[ERROR] {message}"));
}

pub fn log_warning(message: &str) {
    write_error(&format!("[WARN] {message}"));
}

/// Whether the configured level is `debug` or `trace`
pub fn debug_enabled() -> bool {
    writer::get().is_some_and(writer::LogWriter::debug_enabled)
}

/// Only builds and writes the message when debug logging is on
pub fn log_debug(message: impl FnOnce() -> String) {
    if debug_enabled() {
        write_info(&format!("[DEBUG] {}", message()));
    }
}

pub fn log_access(entry: &AccessLogEntry, format: &str) {
    let line = entry.format(format);
    match writer::get() {
        Some(w) => w.write_access(&line),
        None => println!("{line}"),
    }
}
