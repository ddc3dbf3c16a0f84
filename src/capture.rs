//! Recorded landmark captures in JSON Lines form.
//!
//! Each line holds one video frame's estimator output: optional left and
//! right point lists. The replay binary feeds these through a session in
//! place of a live camera pipeline.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::landmarks::HandFrame;

/// Errors raised while reading a capture file.
#[derive(Debug, Error)]
pub enum CaptureError {
    /// The capture file could not be opened.
    #[error("failed to open capture file {path}: {source}")]
    Open {
        /// File being opened.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },
    /// A line could not be read from the capture file.
    #[error("failed to read line {line} of {path}: {source}")]
    ReadLine {
        /// File being read.
        path: PathBuf,
        /// One-based line number.
        line: usize,
        /// Underlying I/O error.
        source: std::io::Error,
    },
    /// A line was not a valid frame record.
    #[error("invalid frame record at line {line} of {path}: {source}")]
    Parse {
        /// File being parsed.
        path: PathBuf,
        /// One-based line number.
        line: usize,
        /// Underlying JSON error.
        source: serde_json::Error,
    },
}

/// One recorded frame of estimator output.
///
/// Point lists are carried verbatim; validation (length, finiteness) happens
/// when a [`HandFrame`] is built, so malformed hands degrade to absent
/// exactly as live input would.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CaptureFrame {
    /// Left-hand points, if the estimator saw that hand.
    #[serde(default)]
    pub left: Option<Vec<[f32; 3]>>,
    /// Right-hand points, if the estimator saw that hand.
    #[serde(default)]
    pub right: Option<Vec<[f32; 3]>>,
}

impl CaptureFrame {
    /// Validated left-hand frame, absent when missing or malformed.
    pub fn left_hand(&self) -> Option<HandFrame> {
        self.left.as_deref().and_then(HandFrame::from_points)
    }

    /// Validated right-hand frame, absent when missing or malformed.
    pub fn right_hand(&self) -> Option<HandFrame> {
        self.right.as_deref().and_then(HandFrame::from_points)
    }
}

/// Read every frame of a JSON Lines capture file. Blank lines are skipped.
pub fn read_capture(path: &Path) -> Result<Vec<CaptureFrame>, CaptureError> {
    let file = File::open(path).map_err(|source| CaptureError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    let mut frames = Vec::new();
    for (index, line) in BufReader::new(file).lines().enumerate() {
        let line_number = index + 1;
        let line = line.map_err(|source| CaptureError::ReadLine {
            path: path.to_path_buf(),
            line: line_number,
            source,
        })?;
        if line.trim().is_empty() {
            continue;
        }
        let frame = serde_json::from_str(&line).map_err(|source| CaptureError::Parse {
            path: path.to_path_buf(),
            line: line_number,
            source,
        })?;
        frames.push(frame);
    }
    Ok(frames)
}
