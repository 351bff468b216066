//!
//! The persisted document of benchmark histories.
//!

use chrono::DateTime;
use chrono::Utc;
use indexmap::IndexMap;
use serde::Deserialize;
use serde::Serialize;

use crate::model::entry::Entry;
use crate::model::history::SuiteHistory;
use crate::model::key::HistoryKey;

///
/// The persisted document of benchmark histories.
///
/// A document may hold several suites, e.g. suites whose labels map to the same
/// file name. Saving one suite keeps the others.
///
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    /// The time of the last append as epoch milliseconds.
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub last_update: DateTime<Utc>,
    /// The repository URL.
    pub repo_url: String,
    /// The entries in arrival order, by suite label.
    pub entries: IndexMap<String, Vec<Entry>>,
}

impl Document {
    ///
    /// Builds the document of a single suite history.
    ///
    pub fn from_history(key: &HistoryKey, history: &SuiteHistory) -> Self {
        let mut entries = IndexMap::with_capacity(1);
        entries.insert(key.suite.clone(), history.entries().to_vec());

        Self {
            last_update: history.last_update().unwrap_or(DateTime::UNIX_EPOCH),
            repo_url: key.repository.clone(),
            entries,
        }
    }

    ///
    /// Replaces the entries of one suite, keeping the other suites as they are.
    ///
    pub fn with_history(mut self, suite: &str, history: &SuiteHistory) -> Self {
        self.entries
            .insert(suite.to_owned(), history.entries().to_vec());
        if let Some(last_update) = history.last_update() {
            self.last_update = self.last_update.max(last_update);
        }
        self
    }

    ///
    /// Extracts the history of a suite. A suite absent from the document has an empty history.
    ///
    pub fn into_history(mut self, suite: &str) -> SuiteHistory {
        match self.entries.shift_remove(suite) {
            Some(entries) if !entries.is_empty() => {
                SuiteHistory::from_parts(entries, Some(self.last_update))
            }
            _ => SuiteHistory::new(),
        }
    }

    ///
    /// Returns the suite labels in document order.
    ///
    pub fn suites(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}
