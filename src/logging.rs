//! File logging. The terminal belongs to the UI, so nothing is logged to stdout.

use crate::error::AppError;
use std::path::PathBuf;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Environment variable that overrides the configured log level.
pub const LOG_ENV: &str = "BOOK_EXPLORER_LOG";

/// Directory the daily log files are written to.
pub fn log_dir() -> PathBuf {
    crate::config::project_dirs()
        .map(|dirs| dirs.data_dir().join("logs"))
        .unwrap_or_else(|| PathBuf::from("./logs"))
}

/// Install the global subscriber. The returned guard flushes on drop and must
/// live until the program exits.
pub fn init(default_level: &str) -> Result<WorkerGuard, AppError> {
    let dir = log_dir();
    std::fs::create_dir_all(&dir)?;

    let file_appender = RollingFileAppender::new(Rotation::DAILY, &dir, "book-explorer.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_new(default_level))
        .map_err(|e| AppError::Logging(e.to_string()))?;

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_ansi(false).with_writer(non_blocking))
        .try_init()
        .map_err(|e| AppError::Logging(e.to_string()))?;

    tracing::info!(dir = %dir.display(), "logging initialized");
    Ok(guard)
}
