//! Personal expense ledger.
//!
//! This crate records dated, categorized income and expense transactions,
//! persists them to a key-value [`storage::Storage`] backend, and derives
//! the views a front-end needs: running totals, an expense breakdown by
//! category, and a filtered, date-sorted transaction list.
//!
//! ```
//! use expense_tracker_rs::ledger::Ledger;
//! use expense_tracker_rs::storage::InMemoryStorage;
//!
//! let mut ledger = Ledger::load(InMemoryStorage::new());
//! let lunch = ledger.add("Lunch", -200.0, "food", "2024-01-10")?;
//! assert_eq!(lunch.id.into_inner(), 1);
//! assert_eq!(ledger.totals().expense, 200.0);
//! # Ok::<(), expense_tracker_rs::error::LedgerError>(())
//! ```

pub mod aggregate;
pub mod config;
pub mod error;
pub mod filter;
pub mod ledger;
pub mod models;
pub mod storage;
pub mod transfer;
pub mod view;
