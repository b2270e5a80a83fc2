// src/error.rs
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Per-file failure. The walk records these and keeps going; none of them
/// ever aborts a scan.
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("Failed to read {}: {source}", path.display())]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read {}: invalid UTF-8 at byte {offset}", path.display())]
    InvalidUtf8 { path: PathBuf, offset: u64 },
}

impl ScanError {
    pub fn file_read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::FileRead {
            path: path.into(),
            source,
        }
    }

    /// The file this error is about.
    pub fn path(&self) -> &Path {
        match self {
            Self::FileRead { path, .. } | Self::InvalidUtf8 { path, .. } => path,
        }
    }
}

pub type Result<T> = std::result::Result<T, ScanError>;
