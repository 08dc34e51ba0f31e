//! Error types for the duplicate scanner
//!
//! Only `DirectoryNotFound` ends a run. The per-file variants are logged by
//! the stage that hit them and the batch carries on without that file.

use serde::Serialize;
use std::error::Error as _;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while scanning for or removing duplicate images
#[derive(Error, Debug)]
pub enum DedupError {
    #[error("Images directory {} does not exist", .path.display())]
    DirectoryNotFound { path: PathBuf },

    #[error("Failed to read {}: {source}", .path.display())]
    FileRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to remove {}: {source}", .path.display())]
    FileDelete {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to walk {}: {source}", .path.display())]
    Walk {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },
}

impl DedupError {
    /// Path the error refers to
    pub fn path(&self) -> &PathBuf {
        match self {
            DedupError::DirectoryNotFound { path }
            | DedupError::FileRead { path, .. }
            | DedupError::FileDelete { path, .. }
            | DedupError::Walk { path, .. } => path,
        }
    }
}

pub type Result<T> = std::result::Result<T, DedupError>;

/// A file a stage had to skip, with the cause as shown to the user
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FailedFile {
    pub path: PathBuf,
    pub reason: String,
}

impl From<&DedupError> for FailedFile {
    fn from(err: &DedupError) -> Self {
        let reason = err
            .source()
            .map(ToString::to_string)
            .unwrap_or_else(|| err.to_string());
        Self {
            path: err.path().clone(),
            reason,
        }
    }
}
