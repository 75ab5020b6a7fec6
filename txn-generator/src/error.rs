use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("File {} not found", .0.display())]
    NotFound(PathBuf),
    #[error("JSON is invalid: {0}")]
    InvalidJson(#[source] serde_json::Error),
    #[error("{} does not have the expected structure", .0.display())]
    UnexpectedStructure(PathBuf),
    #[error("Permission denied when writing to {}", .0.display())]
    PermissionDenied(PathBuf),
    #[error("I/O Error: {0}")]
    IoError(#[from] io::Error),
    #[error("Unable to serialize transaction data: {0}")]
    Serialize(#[source] serde_json::Error),
}

impl StoreError {
    /// Classifies a write failure on `path`, keeping permission problems apart from other I/O
    /// errors.
    #[must_use]
    pub fn from_write(path: PathBuf, err: io::Error) -> Self {
        match err.kind() {
            io::ErrorKind::PermissionDenied => StoreError::PermissionDenied(path),
            _ => StoreError::IoError(err),
        }
    }

    /// Classifies a read failure on `path`, treating a missing file as a first run.
    #[must_use]
    pub fn from_read(path: PathBuf, err: io::Error) -> Self {
        match err.kind() {
            io::ErrorKind::NotFound => StoreError::NotFound(path),
            _ => StoreError::IoError(err),
        }
    }
}
