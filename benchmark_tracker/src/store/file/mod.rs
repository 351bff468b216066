//!
//! The file history store.
//!

pub mod format;
pub mod lock;

use std::io::Write;
use std::path::Path;
use std::path::PathBuf;
use std::time::Duration;

use crate::model::document::Document;
use crate::model::history::SuiteHistory;
use crate::model::key::HistoryKey;
use crate::store::error::Error;
use crate::store::IStore;

use self::format::Format;
use self::lock::LockFile;

lazy_static::lazy_static! {
    ///
    /// Characters not allowed in a path component.
    ///
    static ref UNSAFE: regex::Regex = regex::Regex::new(r"[^A-Za-z0-9._-]+").expect("Always valid");
}

///
/// The file history store.
///
/// Every history lives in its own file, `<root>/<repository>/<suite>.<extension>`.
///
#[derive(Debug, Clone)]
pub struct FileStore {
    /// The root directory.
    root: PathBuf,
    /// The file format.
    format: Format,
    /// The time to wait for a held lock file.
    lock_timeout: Duration,
}

impl FileStore {
    /// The default time to wait for a held lock file.
    pub const DEFAULT_LOCK_TIMEOUT: Duration = Duration::from_secs(60);

    ///
    /// A shortcut constructor.
    ///
    pub fn new(root: PathBuf, format: Format) -> Self {
        Self {
            root,
            format,
            lock_timeout: Self::DEFAULT_LOCK_TIMEOUT,
        }
    }

    ///
    /// Sets the time to wait for a held lock file.
    ///
    pub fn with_lock_timeout(mut self, lock_timeout: Duration) -> Self {
        self.lock_timeout = lock_timeout;
        self
    }

    ///
    /// Returns the path of the history file.
    ///
    pub fn path(&self, key: &HistoryKey) -> PathBuf {
        self.directory(key).join(format!(
            "{}.{}",
            Self::component(key.suite.as_str()),
            self.format.extension()
        ))
    }

    ///
    /// Returns the keys of all stored histories.
    ///
    /// A suite kept in a file named after another suite is not listed, since its own
    /// path does not lead to it.
    ///
    pub fn keys(&self) -> Result<Vec<HistoryKey>, Error> {
        let pattern = format!(
            "{}/*/*.{}",
            glob::Pattern::escape(self.root.to_string_lossy().as_ref()),
            self.format.extension()
        );
        let paths = glob::glob(pattern.as_str()).map_err(|error| Error::Listing {
            pattern: pattern.clone(),
            error: error.to_string(),
        })?;

        let mut keys = Vec::new();
        for path in paths {
            let path = path.map_err(|error| Error::Listing {
                pattern: pattern.clone(),
                error: error.to_string(),
            })?;
            if let Some(document) = Self::read(path.as_path())? {
                keys.extend(
                    document
                        .suites()
                        .map(|suite| HistoryKey::new(document.repo_url.as_str(), suite))
                        .filter(|key| self.path(key) == path),
                );
            }
        }
        keys.sort();
        keys.dedup();
        Ok(keys)
    }

    ///
    /// Returns the directory of the repository's history files.
    ///
    fn directory(&self, key: &HistoryKey) -> PathBuf {
        let repository = key
            .repository
            .split_once("://")
            .map_or(key.repository.as_str(), |(_scheme, rest)| rest);
        self.root.join(Self::component(repository))
    }

    ///
    /// Converts a name into a single safe path component.
    ///
    fn component(name: &str) -> String {
        let component = UNSAFE.replace_all(name, "_");
        let component = component.trim_matches('_');
        if component.chars().all(|character| character == '.') {
            component.replace('.', "_") + "_"
        } else {
            component.to_owned()
        }
    }

    ///
    /// Reads a document. A missing file has no document.
    ///
    fn read(path: &Path) -> Result<Option<Document>, Error> {
        let text = match std::fs::read_to_string(path) {
            Ok(text) => text,
            Err(error) if error.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(error) => {
                return Err(Error::Reading {
                    error,
                    path: path.to_owned(),
                })
            }
        };
        Format::parse(text.as_str())
            .map(Some)
            .map_err(|error| Error::Parsing {
                error,
                path: path.to_owned(),
            })
    }
}

impl IStore for FileStore {
    type Lock = LockFile;

    fn lock(&self, key: &HistoryKey) -> Result<Self::Lock, Error> {
        let directory = self.directory(key);
        let path = self.path(key).with_extension("lock");
        std::fs::create_dir_all(directory.as_path())
            .map_err(|error| Error::Locking { error, path: directory })?;
        LockFile::acquire(path, self.lock_timeout)
    }

    fn load(&self, key: &HistoryKey) -> Result<SuiteHistory, Error> {
        let path = self.path(key);
        let document = match Self::read(path.as_path())? {
            Some(document) => document,
            None => return Ok(SuiteHistory::new()),
        };
        if document.repo_url != key.repository {
            return Err(Error::Conflict {
                repository: document.repo_url,
                path,
            });
        }

        let history = document.into_history(key.suite.as_str());
        tracing::debug!("Loaded {} entries of {key} from {path:?}", history.len());
        Ok(history)
    }

    fn save(&self, key: &HistoryKey, history: &SuiteHistory) -> Result<(), Error> {
        let directory = self.directory(key);
        let path = self.path(key);
        std::fs::create_dir_all(directory.as_path()).map_err(|error| Error::Writing {
            error,
            path: directory.clone(),
        })?;

        let document = match Self::read(path.as_path())? {
            Some(document) if document.repo_url != key.repository => {
                return Err(Error::Conflict {
                    repository: document.repo_url,
                    path,
                });
            }
            Some(document) => document.with_history(key.suite.as_str(), history),
            None => Document::from_history(key, history),
        };
        let contents = self.format.serialize(&document);
        let writing = |error: std::io::Error| Error::Writing {
            error,
            path: path.clone(),
        };
        let mut file = tempfile::NamedTempFile::new_in(directory.as_path()).map_err(writing)?;
        file.write_all(contents.as_bytes()).map_err(writing)?;
        file.as_file().sync_all().map_err(writing)?;
        file.persist(path.as_path())
            .map_err(|error| writing(error.error))?;

        tracing::debug!("Saved {} entries of {key} to {path:?}", history.len());
        Ok(())
    }
}
