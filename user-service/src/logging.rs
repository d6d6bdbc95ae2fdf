// Tracing setup
// The terminal UI owns stdout, so the screen logs to a rolling file while
// the CLI can log to stderr.

use crate::config::AppConfig;
use crate::error::{ServiceError, ServiceResult};

use std::fs;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

pub const LOG_FILE_PREFIX: &str = "userdeck.log";

/// `RUST_LOG` when set, otherwise the configured level
pub fn env_filter(config: &AppConfig) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level))
}

/// Install a daily-rolling file subscriber. Keep the guard alive until exit
/// or buffered lines are lost.
pub fn init_file_logging(config: &AppConfig) -> ServiceResult<WorkerGuard> {
    fs::create_dir_all(&config.log_dir).map_err(|e| {
        ServiceError::Config(format!(
            "Failed to create log directory {}: {}",
            config.log_dir.display(),
            e
        ))
    })?;

    let appender = tracing_appender::rolling::daily(&config.log_dir, LOG_FILE_PREFIX);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::fmt()
        .with_env_filter(env_filter(config))
        .with_writer(writer)
        .with_ansi(false)
        .try_init()
        .map_err(|e| ServiceError::Config(format!("Failed to install logger: {}", e)))?;

    Ok(guard)
}

/// Install a stderr subscriber for command-line use
pub fn init_stderr_logging(config: &AppConfig) -> ServiceResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(config))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| ServiceError::Config(format!("Failed to install logger: {}", e)))
}
