//! Pluggable key-value storage backends for persisting the ledger.
//!
//! The ledger keeps two independent entries: the serialized transaction
//! array and the id counter. Backends only move opaque strings; encoding
//! is the ledger's concern.

#[cfg(feature = "storage-file")]
mod file;
mod memory;

#[cfg(feature = "storage-file")]
pub use file::FileStorage;
pub use memory::InMemoryStorage;

use crate::error::Result;

/// Synchronous key-value storage backend.
///
/// All methods take `&self`; implementations use interior mutability
/// (e.g. `Mutex`) for mutation. A `set` replaces the whole value.
pub trait Storage: core::fmt::Debug + Send + Sync {
    /// Returns the value stored under `key`, or `Ok(None)` if absent.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage backend fails to read.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Stores `value` under `key`, overwriting any previous value.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage backend fails to write.
    fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Removes the value under `key`. Removing an absent key is not an
    /// error.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage backend fails to write.
    fn remove(&self, key: &str) -> Result<()>;
}
