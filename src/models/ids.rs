//! Newtype wrapper for transaction identifiers.

use serde::{Deserialize, Serialize};

/// Unique identifier for a transaction within a ledger.
///
/// Identifiers are issued from the ledger's counter and serialize as a
/// bare JSON integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TransactionId(u64);

impl TransactionId {
    /// Creates a new identifier from the given value.
    #[inline]
    #[must_use]
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Returns a reference to the inner value.
    #[inline]
    #[must_use]
    pub const fn as_inner(&self) -> &u64 {
        &self.0
    }

    /// Consumes the wrapper and returns the inner value.
    #[inline]
    #[must_use]
    pub const fn into_inner(self) -> u64 {
        self.0
    }
}

impl core::fmt::Display for TransactionId {
    #[inline]
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl From<u64> for TransactionId {
    #[inline]
    fn from(value: u64) -> Self {
        Self(value)
    }
}
