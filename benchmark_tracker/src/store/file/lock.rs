//!
//! The cross-process lock file.
//!

use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;
use std::time::Duration;
use std::time::Instant;

use crate::store::error::Error;

///
/// The cross-process lock file, removed when dropped.
///
#[derive(Debug)]
pub struct LockFile {
    /// The path to the lock file.
    path: PathBuf,
}

impl LockFile {
    /// The delay between attempts to create a held lock file.
    pub const POLL_INTERVAL: Duration = Duration::from_millis(50);

    ///
    /// Creates the lock file exclusively, waiting while another process holds it.
    ///
    pub fn acquire(path: PathBuf, timeout: Duration) -> Result<Self, Error> {
        let started = Instant::now();
        loop {
            match OpenOptions::new().write(true).create_new(true).open(&path) {
                Ok(mut file) => {
                    if let Err(error) = writeln!(file, "{}", std::process::id()) {
                        tracing::debug!("Lock file {path:?} owner writing: {error}");
                    }
                    return Ok(Self { path });
                }
                Err(error) if error.kind() == std::io::ErrorKind::AlreadyExists => {
                    if started.elapsed() >= timeout {
                        return Err(Error::LockTimeout { path, timeout });
                    }
                    std::thread::sleep(Self::POLL_INTERVAL);
                }
                Err(error) => return Err(Error::Locking { error, path }),
            }
        }
    }
}

impl Drop for LockFile {
    fn drop(&mut self) {
        if let Err(error) = std::fs::remove_file(&self.path) {
            tracing::warn!("Lock file {:?} removing: {error}", self.path);
        }
    }
}
