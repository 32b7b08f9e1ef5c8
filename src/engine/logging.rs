//! File logging setup.
//!
//! The terminal UI owns stdout, so log lines go to a daily rolling file
//! instead of the console. Transcript text and vitals values are never
//! logged; events carry field keys, modes and outcomes only.

use crate::engine::config::LoggingConfig;
use std::path::PathBuf;
use std::sync::OnceLock;
use thiserror::Error;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::EnvFilter;

/// Held for the life of the process so buffered lines are flushed on exit
static LOG_GUARD: OnceLock<WorkerGuard> = OnceLock::new();

#[derive(Error, Debug)]
pub enum LoggingError {
    #[error("Could not determine home directory")]
    NoHomeDir,

    #[error("Failed to create log directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to install log subscriber: {0}")]
    Init(String),
}

/// Resolve the log directory, falling back to ~/.vitals-voice/logs
pub fn log_directory(config: &LoggingConfig) -> Result<PathBuf, LoggingError> {
    match &config.directory {
        Some(dir) => Ok(dir.clone()),
        None => dirs::home_dir()
            .map(|home| home.join(".vitals-voice").join("logs"))
            .ok_or(LoggingError::NoHomeDir),
    }
}

/// Install the global subscriber. Returns the directory logs are written to.
pub fn init_logging(config: &LoggingConfig) -> Result<PathBuf, LoggingError> {
    let log_dir = log_directory(config)?;
    std::fs::create_dir_all(&log_dir).map_err(|source| LoggingError::CreateDir {
        path: log_dir.clone(),
        source,
    })?;

    let file_appender = RollingFileAppender::new(Rotation::DAILY, &log_dir, &config.file_prefix);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(non_blocking)
        .with_ansi(false)
        .with_target(true)
        .try_init()
        .map_err(|e| LoggingError::Init(e.to_string()))?;

    LOG_GUARD.set(guard).ok();

    tracing::info!(
        event = "logging_initialized",
        log_dir = %log_dir.display(),
        "Logging initialized"
    );

    Ok(log_dir)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_directory_is_used() {
        let config = LoggingConfig {
            directory: Some(PathBuf::from("/var/tmp/vitals")),
            ..LoggingConfig::default()
        };
        assert_eq!(
            log_directory(&config).unwrap(),
            PathBuf::from("/var/tmp/vitals")
        );
    }

    #[test]
    fn test_default_directory_under_home() {
        let config = LoggingConfig::default();
        if let Ok(dir) = log_directory(&config) {
            assert!(dir.ends_with(".vitals-voice/logs"));
        }
    }
}
