use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Library-wide error type for layla operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// A scaffold directory could not be created or is not a directory.
    #[error("Failed to create directory {}: {source}", path.display())]
    PathCreation {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A scaffold file could not be opened or written.
    #[error("Failed to write file {}: {source}", path.display())]
    FileWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Bucket enforcement was requested but no bucket was given.
    #[error("No S3 bucket given. Pass --bucket or drop --require-bucket.")]
    MissingBucket,

    /// Embedded template could not be loaded or rendered.
    #[error("Template error: {0}")]
    Template(String),
}

impl AppError {
    pub(crate) fn path_creation(path: impl Into<PathBuf>, source: io::Error) -> Self {
        AppError::PathCreation { path: path.into(), source }
    }

    pub(crate) fn file_write(path: impl Into<PathBuf>, source: io::Error) -> Self {
        AppError::FileWrite { path: path.into(), source }
    }

    /// Provide an `io::ErrorKind`-like view for callers matching on I/O outcomes.
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            AppError::PathCreation { source, .. } | AppError::FileWrite { source, .. } => {
                source.kind()
            }
            AppError::MissingBucket => io::ErrorKind::InvalidInput,
            AppError::Template(_) => io::ErrorKind::InvalidData,
        }
    }
}
