//!
//! The history merger.
//!


pub mod outcome;

use crate::model::entry::Entry;
use crate::model::history::SuiteHistory;

use self::outcome::Outcome;

///
/// Merges an entry into a history.
///
/// An entry whose commit is already in the history leaves it unchanged, so a retried
/// CI job is never counted twice. Otherwise the entry is appended in arrival order,
/// whatever its commit time, and `last_update` moves to its recording time. New
/// benchmark names are accepted as they come.
///
pub fn merge(mut history: SuiteHistory, entry: Entry) -> (SuiteHistory, Outcome) {
    if history.position(entry.commit_id()).is_some() {
        return (history, Outcome::Duplicate);
    }

    history.push(entry);
    (history, Outcome::Appended)
}
