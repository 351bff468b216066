//!
//! The ordered history of a benchmark suite.
//!

use chrono::DateTime;
use chrono::Utc;
use indexmap::IndexSet;

use crate::model::entry::Entry;

///
/// The ordered history of a benchmark suite.
///
/// Entries are kept in arrival order, which is not necessarily commit order.
/// Use [`SuiteHistory::sorted_by_commit_time`] for a commit-chronological view.
///
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SuiteHistory {
    /// The entries in arrival order.
    entries: Vec<Entry>,
    /// The recording time of the most recently appended entry.
    last_update: Option<DateTime<Utc>>,
}

impl SuiteHistory {
    ///
    /// Creates an empty history.
    ///
    pub fn new() -> Self {
        Self::default()
    }

    ///
    /// Restores a history from its persisted parts.
    ///
    pub fn from_parts(entries: Vec<Entry>, last_update: Option<DateTime<Utc>>) -> Self {
        Self {
            entries,
            last_update,
        }
    }

    ///
    /// Appends an entry and moves `last_update` to its recording time.
    ///
    pub(crate) fn push(&mut self, entry: Entry) {
        self.last_update = Some(entry.recorded_at);
        self.entries.push(entry);
    }

    ///
    /// Returns the entries in arrival order.
    ///
    pub fn entries(&self) -> &[Entry] {
        self.entries.as_slice()
    }

    ///
    /// Returns the recording time of the most recently appended entry.
    ///
    pub fn last_update(&self) -> Option<DateTime<Utc>> {
        self.last_update
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    ///
    /// Returns the arrival position of the entry for a commit.
    ///
    pub fn position(&self, commit_id: &str) -> Option<usize> {
        self.entries
            .iter()
            .position(|entry| entry.commit_id() == commit_id)
    }

    ///
    /// Returns the entry for a commit.
    ///
    pub fn find(&self, commit_id: &str) -> Option<&Entry> {
        self.position(commit_id).map(|index| &self.entries[index])
    }

    ///
    /// Returns the most recently appended entry.
    ///
    pub fn latest(&self) -> Option<&Entry> {
        self.entries.last()
    }

    ///
    /// Returns all benchmark names in order of first appearance.
    ///
    pub fn benchmark_names(&self) -> IndexSet<&str> {
        self.entries
            .iter()
            .flat_map(|entry| entry.benches.keys())
            .map(String::as_str)
            .collect()
    }

    ///
    /// Returns the unit a benchmark was first recorded with.
    ///
    pub fn canonical_unit(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find_map(|entry| entry.get(name))
            .map(|measurement| measurement.unit.as_str())
    }

    ///
    /// Returns the entries sorted by commit timestamp.
    ///
    /// The sort is stable, so entries of commits with equal timestamps keep their arrival order.
    ///
    pub fn sorted_by_commit_time(&self) -> Vec<&Entry> {
        let mut entries: Vec<&Entry> = self.entries.iter().collect();
        entries.sort_by_key(|entry| entry.commit.timestamp);
        entries
    }
}
