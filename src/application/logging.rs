//! # Logging Setup
//!
//! Installs the global tracing subscriber.
//! Stdout belongs to the MCP transport, so console output goes to stderr.
//! An optional session log file is written through a non-blocking appender.

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::domain::config::LoggingConfig;

/// Builds the filter. `RUST_LOG` takes precedence over the configured level.
pub fn env_filter(level: &str) -> Result<EnvFilter> {
    match EnvFilter::try_from_default_env() {
        Ok(filter) => Ok(filter),
        Err(_) => EnvFilter::try_new(level).with_context(|| format!("Invalid log filter: {level}")),
    }
}

/// Creates the log directory and clears the previous session log.
pub fn prepare_log_file(dir: &Path, file: &str) -> Result<PathBuf> {
    if !dir.exists() {
        fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create log directory {}", dir.display()))?;
    }

    let log_path = dir.join(file);
    if log_path.exists() {
        let _ = fs::remove_file(&log_path);
    }
    Ok(log_path)
}

/// Initializes logging. Keep the returned guard alive until exit so the
/// file writer flushes.
pub fn init(config: &LoggingConfig) -> Result<Option<WorkerGuard>> {
    let env_filter = env_filter(&config.level)?;

    let (file_layer, guard) = match &config.dir {
        Some(dir) => {
            prepare_log_file(dir, &config.file)?;
            let file_appender = tracing_appender::rolling::never(dir, &config.file);
            let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
            let layer = tracing_subscriber::fmt::layer()
                .with_writer(non_blocking)
                .with_ansi(false);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    let console_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(false);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .with(console_layer)
        .try_init()
        .context("Failed to install tracing subscriber")?;

    Ok(guard)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_prepare_log_file_creates_dir() {
        let temp_dir = TempDir::new().unwrap();
        let dir = temp_dir.path().join("logs/nested");

        let path = prepare_log_file(&dir, "session.log").unwrap();
        assert!(dir.is_dir());
        assert_eq!(path, dir.join("session.log"));
    }

    #[test]
    fn test_prepare_log_file_clears_previous_session() {
        let temp_dir = TempDir::new().unwrap();
        let previous = temp_dir.path().join("session.log");
        fs::write(&previous, "old session").unwrap();

        prepare_log_file(temp_dir.path(), "session.log").unwrap();
        assert!(!previous.exists());
    }

    #[test]
    fn test_env_filter_rejects_garbage() {
        // only meaningful when RUST_LOG is not set for the test run
        if std::env::var_os("RUST_LOG").is_none() {
            assert!(env_filter("info,rmcp=warn").is_ok());
            assert!(env_filter("info,rmcp=notalevel").is_err());
        }
    }
}
