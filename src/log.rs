// src/log.rs
use std::path::Path;

use tracing_appender::{non_blocking::WorkerGuard, rolling::RollingFileAppender};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::consts::LOG_FILE;
use crate::error::{Result, ScrapeError};
use crate::file::ensure_directory;

/// Install the global subscriber: stderr plus `<logs_dir>/parser.log`.
/// Level comes from `RUST_LOG`, default `info`.
///
/// Keep the returned guard alive until exit, or buffered file lines are lost.
pub fn init(logs_dir: &Path) -> Result<WorkerGuard> {
    let (file_writer, guard) = tracing_appender::non_blocking(file_appender(logs_dir)?);

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .with(fmt::layer().with_writer(file_writer).with_ansi(false))
        .try_init()
        .map_err(|e| ScrapeError::Configuration(format!("logging: {e}")))?;

    Ok(guard)
}

/// Single appended file, never rotated.
fn file_appender(logs_dir: &Path) -> Result<RollingFileAppender> {
    ensure_directory(logs_dir)?;
    Ok(tracing_appender::rolling::never(logs_dir, LOG_FILE))
}
