//! Application settings persisted as TOML.
//!
//! Config keys: `user_id`, `frame_interval_ms`, `speech.rate`,
//! `speech.pitch`, `speech.volume`. A missing file yields defaults; a
//! malformed file is an error the caller surfaces rather than silently
//! discarding the user's edits.

use std::io::Write;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::app_dirs::{self, AppDirError};
use crate::profiles::DEFAULT_USER;

/// Errors raised while loading or saving the configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The config location could not be resolved.
    #[error(transparent)]
    AppDir(#[from] AppDirError),
    /// The config file exists but could not be read.
    #[error("failed to read config file {path}: {source}")]
    Read {
        /// File being read.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },
    /// The config file contains invalid TOML.
    #[error("failed to parse config file {path}: {source}")]
    Parse {
        /// File being parsed.
        path: PathBuf,
        /// Underlying TOML error.
        source: toml::de::Error,
    },
    /// The settings could not be serialized.
    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
    /// The config file could not be written.
    #[error("failed to write config file {path}: {source}")]
    Write {
        /// File being written.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },
}

/// Announcement voice settings handed to the speech collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpeechSettings {
    /// Speaking rate multiplier.
    #[serde(default = "default_rate")]
    pub rate: f32,
    /// Voice pitch multiplier.
    #[serde(default = "default_pitch")]
    pub pitch: f32,
    /// Output volume in `[0, 100]`.
    #[serde(default = "default_volume")]
    pub volume: f32,
}

impl Default for SpeechSettings {
    fn default() -> Self {
        Self {
            rate: default_rate(),
            pitch: default_pitch(),
            volume: default_volume(),
        }
    }
}

/// Persisted application settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// User profile selected at startup.
    #[serde(default = "default_user_id")]
    pub user_id: String,
    /// Interval between classified frames, in milliseconds.
    #[serde(default = "default_frame_interval_ms")]
    pub frame_interval_ms: u64,
    /// Voice settings for announcements.
    #[serde(default)]
    pub speech: SpeechSettings,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            user_id: default_user_id(),
            frame_interval_ms: default_frame_interval_ms(),
            speech: SpeechSettings::default(),
        }
    }
}

impl Config {
    /// Clamp out-of-range values instead of rejecting the file.
    fn normalized(mut self) -> Self {
        self.speech.volume = self.speech.volume.clamp(0.0, 100.0);
        self.speech.rate = self.speech.rate.max(0.1);
        self.speech.pitch = self.speech.pitch.max(0.1);
        if self.frame_interval_ms == 0 {
            self.frame_interval_ms = default_frame_interval_ms();
        }
        self
    }
}

fn default_user_id() -> String {
    DEFAULT_USER.to_string()
}

fn default_frame_interval_ms() -> u64 {
    33
}

fn default_rate() -> f32 {
    1.0
}

fn default_pitch() -> f32 {
    1.0
}

fn default_volume() -> f32 {
    80.0
}

/// Load settings from the default location; a missing file yields defaults.
pub fn load() -> Result<Config, ConfigError> {
    load_from_path(&app_dirs::config_file()?)
}

/// Load settings from a specific path; a missing file yields defaults.
pub fn load_from_path(path: &Path) -> Result<Config, ConfigError> {
    let text = match std::fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            return Ok(Config::default());
        }
        Err(source) => {
            return Err(ConfigError::Read {
                path: path.to_path_buf(),
                source,
            });
        }
    };
    let config: Config = toml::from_str(&text).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(config.normalized())
}

/// Persist settings to the default location.
pub fn save(config: &Config) -> Result<(), ConfigError> {
    save_to_path(config, &app_dirs::config_file()?)
}

/// Persist settings to a specific path, creating parent directories.
///
/// The file is written via a temporary sibling and renamed into place so a
/// crash mid-write cannot leave a truncated config behind.
pub fn save_to_path(config: &Config, path: &Path) -> Result<(), ConfigError> {
    let write_err = |source| ConfigError::Write {
        path: path.to_path_buf(),
        source,
    };
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(write_err)?;
    }
    let data = toml::to_string_pretty(config)?;
    let tmp = path.with_extension("toml.tmp");
    let mut file = std::fs::File::create(&tmp).map_err(write_err)?;
    file.write_all(data.as_bytes()).map_err(write_err)?;
    file.sync_all().map_err(write_err)?;
    std::fs::rename(&tmp, path).map_err(write_err)?;
    Ok(())
}
