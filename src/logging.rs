//! Tracing setup: stderr output plus a per-launch log file.
//!
//! Log files are timestamped and pruned to a bounded count. Initialization
//! failures are reported to the caller so the binary can keep running with
//! logging disabled instead of aborting.

use std::{
    fs,
    path::{Path, PathBuf},
    sync::OnceLock,
    time::SystemTime,
};

use time::{OffsetDateTime, format_description::FormatItem, macros::format_description};
use tracing_appender::{non_blocking::WorkerGuard, rolling};
use tracing_subscriber::{EnvFilter, Registry, fmt, prelude::*};

use crate::app_dirs;

/// How many old log files to keep around.
const MAX_LOG_FILES: usize = 8;

static LOG_GUARD: OnceLock<WorkerGuard> = OnceLock::new();

/// Errors that may occur while initializing logging.
#[derive(Debug, thiserror::Error)]
pub enum LoggingError {
    /// The log directory could not be resolved or created.
    #[error(transparent)]
    AppDir(#[from] app_dirs::AppDirError),
    /// Old log files could not be enumerated or removed.
    #[error("failed to prune log directory {path}: {source}")]
    Prune {
        /// Log directory being pruned.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },
    /// The log file name timestamp could not be formatted.
    #[error("failed to format log file timestamp: {0}")]
    FormatTime(#[from] time::error::Format),
    /// Another subscriber was already installed.
    #[error("failed to install global tracing subscriber: {0}")]
    SetGlobal(#[from] tracing::subscriber::SetGlobalDefaultError),
}

/// Initialize tracing to stderr and a fresh log file.
///
/// Idempotent: calls after the first are no-ops.
pub fn init() -> Result<(), LoggingError> {
    if LOG_GUARD.get().is_some() {
        return Ok(());
    }

    let log_dir = app_dirs::logs_dir()?;
    prune_old_logs(&log_dir)?;
    let file_name = log_file_name()?;
    let (file_writer, guard) = tracing_appender::non_blocking(rolling::never(&log_dir, &file_name));

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = Registry::default()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(fmt::layer().with_ansi(false).with_writer(file_writer));
    tracing::subscriber::set_global_default(subscriber)?;
    let _ = LOG_GUARD.set(guard);

    tracing::debug!(path = %log_dir.join(file_name).display(), "logging initialized");
    Ok(())
}

fn log_file_name() -> Result<String, LoggingError> {
    const STAMP: &[FormatItem<'_>] =
        format_description!("[year][month][day]-[hour][minute][second]");
    let now = OffsetDateTime::now_local().unwrap_or_else(|_| OffsetDateTime::now_utc());
    Ok(format!("handspeak-{}.log", now.format(STAMP)?))
}

/// Remove the oldest log files until at most `MAX_LOG_FILES - 1` remain,
/// leaving room for the file this launch is about to create.
fn prune_old_logs(dir: &Path) -> Result<(), LoggingError> {
    let map_err = |source| LoggingError::Prune {
        path: dir.to_path_buf(),
        source,
    };
    let mut logs: Vec<(SystemTime, PathBuf)> = fs::read_dir(dir)
        .map_err(map_err)?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.extension().and_then(|ext| ext.to_str()) == Some("log"))
        .map(|path| {
            let modified = fs::metadata(&path)
                .and_then(|meta| meta.modified())
                .unwrap_or(SystemTime::UNIX_EPOCH);
            (modified, path)
        })
        .collect();
    logs.sort_by_key(|(modified, _)| *modified);

    let keep = MAX_LOG_FILES.saturating_sub(1);
    let excess = logs.len().saturating_sub(keep);
    for (_, path) in logs.drain(..excess) {
        fs::remove_file(&path).map_err(map_err)?;
    }
    Ok(())
}
