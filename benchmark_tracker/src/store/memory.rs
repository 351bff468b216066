//!
//! The in-memory history store.
//!

use std::collections::HashMap;
use std::sync::RwLock;

use crate::model::history::SuiteHistory;
use crate::model::key::HistoryKey;
use crate::store::error::Error;
use crate::store::IStore;

///
/// The in-memory history store.
///
/// Nothing outlives the process, so the in-process lock of the tracker is enough.
///
#[derive(Debug, Default)]
pub struct MemoryStore {
    /// The histories.
    inner: RwLock<HashMap<HistoryKey, SuiteHistory>>,
}

impl MemoryStore {
    ///
    /// Creates an empty store.
    ///
    pub fn new() -> Self {
        Self::default()
    }

    ///
    /// Returns the keys of all stored histories.
    ///
    pub fn keys(&self) -> Vec<HistoryKey> {
        let mut keys: Vec<HistoryKey> = self.inner.read().expect("Sync").keys().cloned().collect();
        keys.sort();
        keys
    }
}

impl IStore for MemoryStore {
    type Lock = ();

    fn lock(&self, _key: &HistoryKey) -> Result<Self::Lock, Error> {
        Ok(())
    }

    fn load(&self, key: &HistoryKey) -> Result<SuiteHistory, Error> {
        Ok(self
            .inner
            .read()
            .expect("Sync")
            .get(key)
            .cloned()
            .unwrap_or_default())
    }

    fn save(&self, key: &HistoryKey, history: &SuiteHistory) -> Result<(), Error> {
        self.inner
            .write()
            .expect("Sync")
            .insert(key.to_owned(), history.to_owned());
        Ok(())
    }
}
