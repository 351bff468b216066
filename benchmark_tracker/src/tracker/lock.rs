//!
//! The in-process per-key lock.
//!

use std::collections::HashMap;
use std::hash::Hash;
use std::sync::Arc;
use std::sync::Mutex;

///
/// The in-process per-key lock.
///
/// Ingestions of different keys proceed in parallel, while ingestions of one key take turns.
/// A mutex is kept only while some ingestion of its key holds it.
///
#[derive(Debug)]
pub struct KeyedLock<K> {
    /// The mutexes by key, created on first use.
    inner: Mutex<HashMap<K, Arc<Mutex<()>>>>,
}

impl<K> Default for KeyedLock<K> {
    fn default() -> Self {
        Self {
            inner: Mutex::new(HashMap::new()),
        }
    }
}

impl<K> KeyedLock<K>
where
    K: Clone + Eq + Hash,
{
    ///
    /// Returns the mutex of the key.
    ///
    pub fn get(&self, key: &K) -> Arc<Mutex<()>> {
        self.inner
            .lock()
            .expect("Sync")
            .entry(key.to_owned())
            .or_default()
            .clone()
    }

    ///
    /// Gives back the mutex of the key, forgetting it if nobody else holds it.
    ///
    pub fn release(&self, key: &K, mutex: Arc<Mutex<()>>) {
        let mut inner = self.inner.lock().expect("Sync");
        drop(mutex);
        if inner
            .get(key)
            .is_some_and(|mutex| Arc::strong_count(mutex) == 1)
        {
            inner.remove(key);
        }
    }

    ///
    /// Returns the number of keys with a mutex in use.
    ///
    pub fn len(&self) -> usize {
        self.inner.lock().expect("Sync").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
