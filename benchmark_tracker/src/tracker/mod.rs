//!
//! The ingestion pipeline.
//!


pub mod error;
pub mod ingestion;
pub mod lock;
pub mod run;

use crate::detector;
use crate::detector::config::Config;
use crate::detector::Detection;
use crate::merger;
use crate::merger::outcome::Outcome;
use crate::model::entry::Entry;
use crate::model::history::SuiteHistory;
use crate::model::key::HistoryKey;
use crate::normalizer;
use crate::store::IStore;

use self::error::Error;
use self::ingestion::Ingestion;
use self::lock::KeyedLock;
use self::run::Run;

///
/// The ingestion pipeline.
///
/// Normalizes a run, merges it into its history, and classifies it against the history.
///
#[derive(Debug)]
pub struct Tracker<S> {
    /// The history store.
    store: S,
    /// The in-process locks by history key.
    locks: KeyedLock<HistoryKey>,
    /// The number of times a failed load-merge-save sequence is restarted.
    retries: usize,
}

impl<S> Tracker<S>
where
    S: IStore,
{
    /// The default number of restarts of a failed load-merge-save sequence.
    pub const DEFAULT_RETRIES: usize = 3;

    ///
    /// A shortcut constructor.
    ///
    pub fn new(store: S, retries: usize) -> Self {
        Self {
            store,
            locks: KeyedLock::default(),
            retries,
        }
    }

    ///
    /// Returns the history store.
    ///
    pub fn store(&self) -> &S {
        &self.store
    }

    ///
    /// Ingests a run into the history of `key`.
    ///
    /// A run that cannot be normalized, or that changes the unit of a benchmark, leaves
    /// the history untouched. A run of an already recorded commit is not appended, even
    /// if its units differ, and is reported against the entry recorded first.
    ///
    pub fn ingest(&self, key: &HistoryKey, run: Run, config: &Config) -> Result<Ingestion, Error> {
        let benches = normalizer::normalize_all(run.tool, run.raws.iter().map(String::as_str))?;
        let entry = Entry::new(run.commit, run.recorded_at, run.tool.to_string(), benches);

        let mutex = self.locks.get(key);
        let result = {
            let _guard = mutex.lock().expect("Sync");
            self.store_with_retries(key, &entry)
        };
        self.locks.release(key, mutex);
        let (history, outcome) = result?;

        let entry = match outcome {
            Outcome::Appended => entry,
            Outcome::Duplicate => history.find(entry.commit_id()).cloned().unwrap_or(entry),
        };
        let comparisons = detector::detect(&history, &entry, config);
        Ok(Ingestion {
            outcome,
            entry,
            comparisons,
        })
    }

    ///
    /// Classifies a stored entry of the history of `key`.
    ///
    /// Without a commit identifier, the most recently appended entry is classified.
    ///
    pub fn detect(
        &self,
        key: &HistoryKey,
        commit_id: Option<&str>,
        config: &Config,
    ) -> Result<(Entry, Detection), Error> {
        let history = self.store.load(key)?;
        let entry = match commit_id {
            Some(commit_id) => history.find(commit_id).ok_or_else(|| Error::MissingEntry {
                key: key.to_owned(),
                commit_id: commit_id.to_owned(),
            })?,
            None => history
                .latest()
                .ok_or_else(|| Error::EmptyHistory(key.to_owned()))?,
        };

        let comparisons = detector::detect(&history, entry, config);
        Ok((entry.to_owned(), comparisons))
    }

    ///
    /// Runs the load-merge-save sequence, restarting it from a fresh load on transient
    /// store failures.
    ///
    fn store_with_retries(
        &self,
        key: &HistoryKey,
        entry: &Entry,
    ) -> Result<(SuiteHistory, Outcome), Error> {
        let attempts = self.retries + 1;
        let mut attempt = 1;
        loop {
            match self.store_once(key, entry) {
                Err(Error::Store(error)) if error.is_retryable() => {
                    if attempt >= attempts {
                        return Err(Error::RetriesExhausted {
                            key: key.to_owned(),
                            attempts,
                            error,
                        });
                    }
                    tracing::warn!("Attempt {attempt}/{attempts} of storing {key} failed: {error}");
                    attempt += 1;
                }
                result => return result,
            }
        }
    }

    ///
    /// Runs the load-merge-save sequence once under the store lock.
    ///
    fn store_once(&self, key: &HistoryKey, entry: &Entry) -> Result<(SuiteHistory, Outcome), Error> {
        let _lock = self.store.lock(key)?;

        let history = self.store.load(key)?;
        if history.position(entry.commit_id()).is_none() {
            normalizer::ensure_units(&history, &entry.benches)?;
        }
        let (history, outcome) = merger::merge(history, entry.to_owned());
        match outcome {
            Outcome::Appended => {
                self.store.save(key, &history)?;
                tracing::info!(
                    "Appended commit `{}` with {} benchmarks to {key}",
                    entry.commit_id(),
                    entry.benches.len()
                );
            }
            Outcome::Duplicate => {
                tracing::warn!(
                    "Commit `{}` is already recorded in {key}, skipping",
                    entry.commit_id()
                );
            }
        }
        Ok((history, outcome))
    }
}
