//!
//! The outcome of merging an entry into a history.
//!

use serde::Deserialize;
use serde::Serialize;

///
/// The outcome of merging an entry into a history.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Outcome {
    /// The entry has been appended.
    Appended,
    /// An entry for the same commit already exists; the history is unchanged.
    Duplicate,
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Appended => write!(f, "appended"),
            Self::Duplicate => write!(f, "duplicate"),
        }
    }
}
