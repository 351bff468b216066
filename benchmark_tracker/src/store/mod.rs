//!
//! The history store.
//!

#[cfg(test)]
mod tests;

pub mod error;
pub mod file;
pub mod memory;

use crate::model::history::SuiteHistory;
use crate::model::key::HistoryKey;

use self::error::Error;

///
/// Durable storage of suite histories.
///
/// `save` replaces the stored history atomically: a concurrent `load` observes either
/// the whole old or the whole new history. The load-merge-save sequence must be run
/// while holding the guard returned by `lock`.
///
pub trait IStore {
    /// The guard releasing the lock when dropped.
    type Lock;

    ///
    /// Locks the history against concurrent load-merge-save sequences of other processes.
    ///
    fn lock(&self, key: &HistoryKey) -> Result<Self::Lock, Error>;

    ///
    /// Loads a history. A history that was never saved is empty.
    ///
    fn load(&self, key: &HistoryKey) -> Result<SuiteHistory, Error>;

    ///
    /// Replaces the stored history.
    ///
    fn save(&self, key: &HistoryKey, history: &SuiteHistory) -> Result<(), Error>;
}
