//!
//! The tracker error.
//!

use crate::model::key::HistoryKey;
use crate::normalizer::error::Error as NormalizerError;
use crate::store::error::Error as StoreError;

///
/// The tracker error.
///
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The run cannot be normalized or is inconsistent with its history.
    #[error("{0}")]
    Normalizer(#[from] NormalizerError),
    /// The store failed in a way that retrying cannot fix.
    #[error("{0}")]
    Store(#[from] StoreError),
    /// The store kept failing until the retry budget ran out.
    #[error("Storing {key} failed after {attempts} attempts: {error}")]
    RetriesExhausted {
        /// The history key.
        key: HistoryKey,
        /// The number of attempts made.
        attempts: usize,
        /// The error of the last attempt.
        error: StoreError,
    },
    /// The history has no entries.
    #[error("History {0} is empty")]
    EmptyHistory(HistoryKey),
    /// The history has no entry of the commit.
    #[error("History {key} has no entry of commit `{commit_id}`")]
    MissingEntry {
        /// The history key.
        key: HistoryKey,
        /// The commit identifier.
        commit_id: String,
    },
}
