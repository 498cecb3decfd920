//! Tracing setup
//!
//! The TUI owns stdout and the alternate screen, so log output can only go to
//! a file. Without a log file no subscriber is installed and every `tracing`
//! macro is a no-op.

use crate::error::AppError;
use std::fs::File;
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "info";

/// Install a global subscriber writing to `log_file`, if one is given.
///
/// The filter comes from `RUST_LOG`, falling back to `info`.
pub fn init(log_file: Option<&Path>) -> Result<(), AppError> {
    let Some(path) = log_file else {
        return Ok(());
    };

    let file = File::create(path)
        .map_err(|e| AppError::Logging(format!("cannot create {}: {}", path.display(), e)))?;
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true)
        .try_init()
        .map_err(|e| AppError::Logging(e.to_string()))?;

    tracing::info!(target: "sortty::startup", path = %path.display(), "logging initialized");
    Ok(())
}
