//! Logger module
//!
//! Provides logging utilities for the download server including:
//! - Server lifecycle logging
//! - Access logging with multiple formats
//! - Error and warning logging, filtered by `logging.level`
//! - File-based logging support

mod format;
mod level;
pub mod writer;

pub use format::AccessLogEntry;
pub use level::LogLevel;

use crate::config::{AppState, Config};
use std::net::SocketAddr;
use std::path::Path;

/// Initialize the logger with configuration
///
/// Should be called once at application startup.
pub fn init(config: &Config) -> std::io::Result<()> {
    let level = config
        .logging
        .level
        .parse::<LogLevel>()
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidInput, e))?;
    writer::init(
        level,
        config.logging.access_log_file.as_deref(),
        config.logging.error_log_file.as_deref(),
    )
}

fn enabled(level: LogLevel) -> bool {
    writer::get().map_or(true, |w| w.enabled(level))
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

fn write_access(message: &str) {
    match writer::get() {
        Some(w) => w.write_access(message),
        None => println!("{message}"),
    }
}

fn info(message: &str) {
    if enabled(LogLevel::Info) {
        write_info(message);
    }
}

pub fn log_server_start(addr: &SocketAddr, config: &Config) {
    if !enabled(LogLevel::Info) {
        return;
    }
    write_info("======================================");
    write_info("Download server started successfully");
    write_info(&format!("Listening on: http://{addr}"));
    write_info(&format!("Log level: {}", config.logging.level));
    if let Some(workers) = config.server.workers {
        write_info(&format!("Worker threads: {workers}"));
    }
    if let Some(max_conn) = config.performance.max_connections {
        write_info(&format!("Max connections: {max_conn}"));
    }
    if let Some(ref path) = config.logging.access_log_file {
        write_info(&format!("Access log: {path}"));
    }
    if let Some(ref path) = config.logging.error_log_file {
        write_info(&format!("Error log: {path}"));
    }
    write_info(&format!("Download root: {}", config.downloads.root.display()));
    write_info("======================================\n");
}

/// Log the route table, one line per download
pub fn log_routes(state: &AppState) {
    if !enabled(LogLevel::Info) {
        return;
    }
    for (path, target) in state.sorted_downloads() {
        write_info(&format!("[Route] {path} -> {}", target.file.display()));
        if !target.file.is_file() {
            log_warning(&format!(
                "Download file for {path} is missing or not a regular file: {}",
                target.file.display()
            ));
        }
    }
    let health = &state.config.routes.health;
    if health.enabled {
        write_info(&format!(
            "[Route] {} , {} -> health probe",
            health.liveness_path, health.readiness_path
        ));
    }
}

pub fn log_signal_handlers_registered() {
    info(&format!(
        "[SIGNAL] SIGTERM / SIGINT trigger graceful shutdown (pid {})",
        std::process::id()
    ));
}

pub fn log_shutdown_requested(signal: &str) {
    info(&format!("\n[SIGNAL] {signal} received, shutting down..."));
}

pub fn log_server_stopped() {
    info("[Shutdown] Listener closed, in-flight connections finish in the background");
}

pub fn log_connection_accepted(peer_addr: &SocketAddr) {
    log_debug(&format!("[Connection] Accepted from: {peer_addr}"));
}

pub fn log_connection_error(err: &impl std::fmt::Debug) {
    write_error(&format!("[ERROR] Failed to serve connection: {err:?}"));
}

/// A download target could not be read
pub fn log_read_failure(path: &Path, err: &impl std::fmt::Display) {
    log_error(&format!("Failed to read '{}': {err}", path.display()));
}

pub fn log_error(message: &str) {
    write_error(&format!("[ERROR] {message}"));
}

pub fn log_warning(message: &str) {
    if enabled(LogLevel::Warn) {
        write_error(&format!("[WARN] {message}"));
    }
}

pub fn log_debug(message: &str) {
    if enabled(LogLevel::Debug) {
        write_info(&format!("[DEBUG] {message}"));
    }
}

/// Log formatted access log entry
pub fn log_access(entry: &AccessLogEntry, format: &str) {
    write_access(&entry.format(format));
}
