//! Diagnostic log sink.
//!
//! Every hook invocation appends its input, decode failures and decisions to
//! a plain-text log. Several hook processes may append concurrently; records
//! can interleave, which is acceptable for a debug log.

use std::fs::{File, OpenOptions};
use std::path::Path;
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing::Subscriber;
use tracing_subscriber::EnvFilter;

use crate::config::LoggingConfig;

/// Install the global subscriber. Without a configured file, nothing is
/// installed and tracing events are dropped.
pub fn init(config: &LoggingConfig) -> Result<()> {
    let Some(path) = &config.file else {
        return Ok(());
    };

    let subscriber = file_subscriber(path, &config.level)?;
    tracing::subscriber::set_global_default(subscriber)
        .context("failed to install tracing subscriber")?;
    Ok(())
}

/// Subscriber appending uncolored records to `path`.
pub fn file_subscriber(path: &Path, level: &str) -> Result<impl Subscriber + Send + Sync> {
    let file = open_append(path)?;
    let filter = EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("debug"));

    Ok(tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .finish())
}

fn open_append(path: &Path) -> Result<File> {
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("failed to open log file {}", path.display()))
}
