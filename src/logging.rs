use std::fs::{File, OpenOptions};
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::error::{AppError, AppResult};

/// Overrides the configured level, e.g. `DECK_LOG=deck=debug`.
pub const LOG_ENV: &str = "DECK_LOG";

/// Where log records go.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogTarget<'a> {
    /// Nothing is installed; the terminal UI owns stdout and stderr.
    Disabled,
    File(&'a Path),
    Stderr,
}

pub fn init(target: LogTarget<'_>, level: &str) -> AppResult<()> {
    if target == LogTarget::Disabled {
        return Ok(());
    }
    let filter = build_filter(level)?;
    match target {
        LogTarget::Disabled => Ok(()),
        LogTarget::File(path) => {
            let file = open_log_file(path)?;
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_ansi(false)
                .with_target(true)
                .with_writer(Mutex::new(file))
                .try_init()
                .map_err(|err| AppError::logging(err.to_string()))
        }
        LogTarget::Stderr => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .try_init()
            .map_err(|err| AppError::logging(err.to_string())),
    }
}

fn build_filter(level: &str) -> AppResult<EnvFilter> {
    match std::env::var(LOG_ENV) {
        Ok(directives) if !directives.trim().is_empty() => EnvFilter::try_new(directives)
            .map_err(|err| AppError::logging(format!("invalid {LOG_ENV}: {err}"))),
        _ => EnvFilter::try_new(level)
            .map_err(|err| AppError::logging(format!("invalid log level \"{level}\": {err}"))),
    }
}

fn open_log_file(path: &Path) -> AppResult<File> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent).map_err(|source| {
            AppError::io_with_context(
                source,
                format!("failed to create log directory: {}", parent.display()),
            )
        })?;
    }
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|source| {
            AppError::io_with_context(source, format!("failed to open log file: {}", path.display()))
        })
}
