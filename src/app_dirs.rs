//! Filesystem locations for handspeak's config and log files.
//!
//! Everything lives under a single `.handspeak` folder in the OS config
//! directory. `HANDSPEAK_CONFIG_HOME` overrides the base, which tests and
//! portable installs rely on.

use std::path::PathBuf;

use directories::BaseDirs;
use thiserror::Error;

/// Name of the application folder under the OS config root.
pub const APP_DIR_NAME: &str = ".handspeak";

/// Environment variable overriding the base directory.
pub const CONFIG_HOME_VAR: &str = "HANDSPEAK_CONFIG_HOME";

/// Errors raised while resolving or creating application directories.
#[derive(Debug, Error)]
pub enum AppDirError {
    /// No platform base directory could be determined.
    #[error("no suitable base directory available for application files")]
    NoBaseDir,
    /// The directory could not be created.
    #[error("failed to create application directory {path}: {source}")]
    CreateDir {
        /// Directory that could not be created.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },
}

/// The `.handspeak` root, created on first use.
pub fn app_root_dir() -> Result<PathBuf, AppDirError> {
    let base = std::env::var_os(CONFIG_HOME_VAR)
        .map(PathBuf::from)
        .or_else(|| BaseDirs::new().map(|dirs| dirs.config_dir().to_path_buf()))
        .ok_or(AppDirError::NoBaseDir)?;
    ensure_dir(base.join(APP_DIR_NAME))
}

/// The log directory under the application root, created on first use.
pub fn logs_dir() -> Result<PathBuf, AppDirError> {
    ensure_dir(app_root_dir()?.join("logs"))
}

/// Path of the TOML settings file. The parent directory is created; the file
/// itself may not exist yet.
pub fn config_file() -> Result<PathBuf, AppDirError> {
    Ok(app_root_dir()?.join("config.toml"))
}

fn ensure_dir(path: PathBuf) -> Result<PathBuf, AppDirError> {
    std::fs::create_dir_all(&path).map_err(|source| AppDirError::CreateDir {
        path: path.clone(),
        source,
    })?;
    Ok(path)
}
