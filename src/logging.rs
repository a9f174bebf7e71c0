//! Logging setup.
//!
//! The terminal UI owns stdout, so it logs to a file. Headless commands log
//! to stderr. `RUST_LOG` overrides the configured level in both cases.

use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::config::LogConfig;
use crate::error::PomoError;

fn filter(level: &str) -> Result<EnvFilter, PomoError> {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .map_err(|e| PomoError::Config(format!("Invalid log level '{level}': {e}")))
}

/// Send log output to `path`, appending.
///
/// # Errors
///
/// Returns an error if the file cannot be opened or the level is invalid.
pub fn init_file(config: &LogConfig, path: &Path) -> Result<(), PomoError> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| PomoError::Config(format!("Failed to open log file {}: {e}", path.display())))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter(&config.level)?)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .try_init()
        .map_err(|e| PomoError::Config(format!("Failed to initialize logging: {e}")))
}

/// Send log output to stderr.
///
/// # Errors
///
/// Returns an error if the level is invalid.
pub fn init_stderr(config: &LogConfig) -> Result<(), PomoError> {
    tracing_subscriber::fmt()
        .with_env_filter(filter(&config.level)?)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| PomoError::Config(format!("Failed to initialize logging: {e}")))
}
