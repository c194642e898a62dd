//! Transaction model.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::TransactionId;

/// A single recorded income or expense.
///
/// The sign of `amount` classifies the transaction: positive is income,
/// negative is expense. A zero amount is neither.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// Identifier issued by the ledger counter.
    pub id: TransactionId,
    /// Free-form description (never empty).
    pub text: String,
    /// Signed amount.
    pub amount: f64,
    /// Category label.
    pub category: String,
    /// Calendar date (serialized as `YYYY-MM-DD`).
    pub date: NaiveDate,
}

impl Transaction {
    /// Returns `true` for a strictly positive amount.
    #[inline]
    #[must_use]
    pub fn is_income(&self) -> bool {
        self.amount > 0.0_f64
    }

    /// Returns `true` for a strictly negative amount.
    #[inline]
    #[must_use]
    pub fn is_expense(&self) -> bool {
        self.amount < 0.0_f64
    }

    /// Formats the amount as a sign followed by the absolute value with two
    /// decimals, e.g. `-200.00` or `+5000.00`.
    #[inline]
    #[must_use]
    pub fn signed_amount(&self) -> String {
        let sign = if self.is_expense() { '-' } else { '+' };
        format!("{sign}{:.2}", self.amount.abs())
    }
}
