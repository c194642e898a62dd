//! JSON-file-based storage backend.
//!
//! Stores each entry in a separate `<key>.json` file under a configurable
//! directory (default: `$XDG_DATA_HOME/expense-tracker-rs/`).

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};

use crate::error::{LedgerError, Result};

/// Application name used for the XDG data directory.
const APP_NAME: &str = "expense-tracker-rs";

/// Extension appended to every entry file.
const ENTRY_EXTENSION: &str = "json";

/// File-backed storage that persists each entry as a JSON file.
///
/// Writes go to a temporary file that is then renamed over the entry, so
/// a reader never observes a half-written value.
///
/// # File layout
///
/// ```text
/// <dir>/
///   transactions.json
///   transactionIdCounter.json
/// ```
#[derive(Debug)]
pub struct FileStorage {
    /// Root directory containing all entry files.
    dir: PathBuf,
    /// Mutex serializing concurrent in-process access.
    lock: Mutex<()>,
}

impl FileStorage {
    /// Creates a new file storage rooted at the given directory.
    ///
    /// Creates the directory (and parents) if it does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created.
    #[inline]
    pub fn new(dir: PathBuf) -> Result<Self> {
        fs::create_dir_all(&dir).map_err(storage_io_error)?;
        Ok(Self {
            dir,
            lock: Mutex::new(()),
        })
    }

    /// Returns the default XDG-compliant data directory for this application.
    ///
    /// On Linux: `$XDG_DATA_HOME/expense-tracker-rs/` (typically
    /// `~/.local/share/expense-tracker-rs/`).
    ///
    /// # Errors
    ///
    /// Returns an error if the platform data directory cannot be determined.
    #[inline]
    pub fn default_dir() -> Result<PathBuf> {
        dirs::data_dir()
            .map(|data_path| data_path.join(APP_NAME))
            .ok_or_else(|| {
                LedgerError::Storage("could not determine platform data directory".into())
            })
    }

    /// Returns the directory this storage writes to.
    #[inline]
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    // ── Private helpers ─────────────────────────────────────────────

    /// Returns the full path of the file holding `key`.
    fn path(&self, key: &str) -> Result<PathBuf> {
        validate_key(key)?;
        Ok(self.dir.join(format!("{key}.{ENTRY_EXTENSION}")))
    }

    /// Acquires the in-process mutex guard and executes `op`.
    fn with_lock<R, F: FnOnce() -> Result<R>>(&self, op: F) -> Result<R> {
        let _guard: MutexGuard<'_, ()> = self.lock.lock().map_err(|err| lock_poison_error(&err))?;
        op()
    }
}

// ── Free-standing helpers ───────────────────────────────────────────────

/// Rejects keys that could escape the storage directory.
fn validate_key(key: &str) -> Result<()> {
    let valid = !key.is_empty()
        && key
            .chars()
            .all(|ch| ch.is_ascii_alphanumeric() || ch == '_' || ch == '-');
    if valid {
        Ok(())
    } else {
        Err(LedgerError::Storage(
            format!("invalid storage key {key:?}").into(),
        ))
    }
}

/// Wraps an I/O error into a [`LedgerError::Storage`].
fn storage_io_error(err: std::io::Error) -> LedgerError {
    LedgerError::Storage(Box::new(err))
}

/// Wraps a mutex poison error into a [`LedgerError::Storage`].
fn lock_poison_error<T>(err: &std::sync::PoisonError<T>) -> LedgerError {
    LedgerError::Storage(err.to_string().into())
}

impl super::Storage for FileStorage {
    #[inline]
    fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.path(key)?;
        self.with_lock(|| match fs::read_to_string(&path) {
            Ok(contents) => Ok(Some(contents)),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(storage_io_error(err)),
        })
    }

    #[inline]
    fn set(&self, key: &str, value: &str) -> Result<()> {
        let path = self.path(key)?;
        let tmp_path = self.dir.join(format!("{key}.{ENTRY_EXTENSION}.tmp"));
        self.with_lock(|| {
            fs::write(&tmp_path, value).map_err(storage_io_error)?;
            fs::rename(&tmp_path, &path).map_err(storage_io_error)
        })
    }

    #[inline]
    fn remove(&self, key: &str) -> Result<()> {
        let path = self.path(key)?;
        self.with_lock(|| match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(storage_io_error(err)),
        })
    }
}
