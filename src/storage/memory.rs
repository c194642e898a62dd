//! In-memory storage backend for testing.
//!
//! Provides [`InMemoryStorage`], a thread-safe in-memory implementation of
//! [`super::Storage`]. Ideal for unit tests where file I/O is undesirable.

use std::collections::HashMap;
use std::sync::Mutex;

use crate::error::{LedgerError, Result};

/// Thread-safe in-memory storage for testing.
///
/// # Example
///
/// ```rust
/// use expense_tracker_rs::ledger::Ledger;
/// use expense_tracker_rs::storage::InMemoryStorage;
///
/// let ledger = Ledger::load(InMemoryStorage::new());
/// assert!(ledger.transactions().is_empty());
/// ```
#[derive(Debug, Default)]
pub struct InMemoryStorage {
    /// Stored values keyed by entry name.
    entries: Mutex<HashMap<String, String>>,
}

impl InMemoryStorage {
    /// Creates a new empty in-memory storage.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a storage pre-populated with the given entries.
    #[inline]
    #[must_use]
    pub fn with_entries<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let map = entries
            .into_iter()
            .map(|(key, value)| (key.into(), value.into()))
            .collect();
        Self {
            entries: Mutex::new(map),
        }
    }

    /// Acquires the inner lock and applies a closure.
    fn with_lock<R, F: FnOnce(&mut HashMap<String, String>) -> R>(&self, op: F) -> Result<R> {
        let mut entries = self.entries.lock().map_err(|err| lock_error(&err))?;
        Ok(op(&mut entries))
    }
}

/// Wraps a mutex poison error.
fn lock_error<T>(err: &std::sync::PoisonError<T>) -> LedgerError {
    LedgerError::Storage(err.to_string().into())
}

impl super::Storage for InMemoryStorage {
    #[inline]
    fn get(&self, key: &str) -> Result<Option<String>> {
        self.with_lock(|entries| entries.get(key).cloned())
    }

    #[inline]
    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.with_lock(|entries| {
            let _old = entries.insert(key.to_owned(), value.to_owned());
        })
    }

    #[inline]
    fn remove(&self, key: &str) -> Result<()> {
        self.with_lock(|entries| {
            let _old = entries.remove(key);
        })
    }
}
