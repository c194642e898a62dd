//! Data models for the expense ledger.
//!
//! This module contains the [`Transaction`] record, its newtype
//! identifier, the view filter selectors, and the derived totals types.

mod filters;
mod ids;
mod totals;
mod transaction;

pub use chrono::NaiveDate;
pub use filters::{CategoryFilter, TypeFilter};
pub use ids::TransactionId;
pub use totals::{CategoryShare, Totals};
pub use transaction::Transaction;
