//!
//! The history store error.
//!

use std::path::PathBuf;
use std::time::Duration;

///
/// The history store error.
///
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Error reading a history file.
    #[error("Reading history file {path:?}: {error}")]
    Reading {
        /// The underlying IO error.
        error: std::io::Error,
        /// The path to the history file.
        path: PathBuf,
    },
    /// Error writing a history file.
    #[error("Writing history file {path:?}: {error}")]
    Writing {
        /// The underlying IO error.
        error: std::io::Error,
        /// The path to the history file.
        path: PathBuf,
    },
    /// Error parsing a history file.
    #[error("Parsing history file {path:?}: {error}")]
    Parsing {
        /// The underlying JSON parsing error.
        error: serde_json::Error,
        /// The path to the history file.
        path: PathBuf,
    },
    /// The history file belongs to another repository.
    #[error("History file {path:?} belongs to repository `{repository}`")]
    Conflict {
        /// The repository recorded in the file.
        repository: String,
        /// The path to the history file.
        path: PathBuf,
    },
    /// Error creating a lock file.
    #[error("Locking history file {path:?}: {error}")]
    Locking {
        /// The underlying IO error.
        error: std::io::Error,
        /// The path to the lock file.
        path: PathBuf,
    },
    /// The lock file is held by someone else for too long.
    #[error("Lock file {path:?} is still held after {timeout:?}")]
    LockTimeout {
        /// The path to the lock file.
        path: PathBuf,
        /// The time spent waiting.
        timeout: Duration,
    },
    /// Error listing the history files.
    #[error("Listing history files with `{pattern}`: {error}")]
    Listing {
        /// The glob pattern.
        pattern: String,
        /// The description of the problem.
        error: String,
    },
}

impl Error {
    ///
    /// Whether the load-merge-save sequence may succeed if restarted.
    ///
    /// Corrupt or foreign documents stay corrupt, while IO and lock contention are transient.
    ///
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Reading { .. }
            | Self::Writing { .. }
            | Self::Locking { .. }
            | Self::LockTimeout { .. } => true,
            Self::Parsing { .. } | Self::Conflict { .. } | Self::Listing { .. } => false,
        }
    }
}
