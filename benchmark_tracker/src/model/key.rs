//!
//! The identifier of a suite history.
//!

use serde::Deserialize;
use serde::Serialize;

///
/// The identifier of a suite history: a repository and a benchmark suite within it.
///
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct HistoryKey {
    /// The repository URL.
    pub repository: String,
    /// The suite label.
    pub suite: String,
}

impl HistoryKey {
    ///
    /// A shortcut constructor.
    ///
    pub fn new(repository: impl Into<String>, suite: impl Into<String>) -> Self {
        Self {
            repository: repository.into(),
            suite: suite.into(),
        }
    }
}

impl std::fmt::Display for HistoryKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} [{}]", self.repository, self.suite)
    }
}
