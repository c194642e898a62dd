//! Error types for the expense ledger.

/// Reasons a new transaction is rejected by [`crate::ledger::Ledger::add`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// Description is empty or whitespace only.
    #[error("transaction text must not be empty")]
    EmptyText,
    /// Amount is NaN or infinite.
    #[error("amount must be a finite number")]
    NonFiniteAmount,
    /// Category is empty.
    #[error("category must not be empty")]
    EmptyCategory,
    /// Category is not in the configured set.
    #[error("unknown category: {0}")]
    UnknownCategory(String),
    /// Date is empty.
    #[error("date must not be empty")]
    EmptyDate,
    /// Date is not a `YYYY-MM-DD` calendar date.
    #[error("invalid date {0:?}, expected YYYY-MM-DD")]
    InvalidDate(String),
}

/// All errors that can occur when using the ledger.
#[derive(Debug, thiserror::Error)]
pub enum LedgerError {
    /// Input for a new transaction is missing or malformed.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Imported data is not an array of well-formed transactions.
    #[error("invalid import format: {0}")]
    ImportFormat(String),

    /// JSON serialization or deserialization failed.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Every identifier has been issued; no further transaction can be
    /// added.
    #[error("transaction ids exhausted")]
    IdsExhausted,

    /// Storage backend failed.
    #[error("storage error: {0}")]
    Storage(Box<dyn core::error::Error + Send + Sync>),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = core::result::Result<T, LedgerError>;
