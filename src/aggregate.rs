//! Totals and category breakdowns over a transaction snapshot.
//!
//! Everything here is pure: functions take a slice and never touch the
//! ledger or storage. Sums are accumulated at full precision and rounded
//! once on output.

use std::collections::BTreeMap;

use crate::models::{CategoryShare, Totals, Transaction};

/// Rounds to two decimals, normalizing negative zero.
fn round_cents(value: f64) -> f64 {
    (value * 100.0_f64).round() / 100.0_f64 + 0.0_f64
}

/// Rounds to one decimal, normalizing negative zero.
fn round_tenths(value: f64) -> f64 {
    (value * 10.0_f64).round() / 10.0_f64 + 0.0_f64
}

/// Computes balance, income and expense.
///
/// `income` sums positive amounts, `expense` is the absolute value of the
/// sum of negative amounts. Zero amounts count toward neither.
#[inline]
#[must_use]
pub fn totals(transactions: &[Transaction]) -> Totals {
    let mut balance = 0.0_f64;
    let mut income = 0.0_f64;
    let mut spent = 0.0_f64;
    for tx in transactions {
        balance += tx.amount;
        if tx.is_income() {
            income += tx.amount;
        } else if tx.is_expense() {
            spent += tx.amount;
        }
    }
    Totals {
        balance: round_cents(balance),
        income: round_cents(income),
        expense: round_cents(spent.abs()),
    }
}

/// Sums expenses per category.
///
/// Only negative amounts contribute, as absolute values. Categories with
/// no expenses are absent rather than mapped to zero.
#[inline]
#[must_use]
pub fn expense_by_category(transactions: &[Transaction]) -> BTreeMap<String, f64> {
    let mut breakdown: BTreeMap<String, f64> = BTreeMap::new();
    for tx in transactions.iter().filter(|tx| tx.is_expense()) {
        *breakdown.entry(tx.category.clone()).or_insert(0.0_f64) += tx.amount.abs();
    }
    breakdown
}

/// Converts a breakdown into chart slices, largest first.
///
/// Each slice carries its percentage of the total (one decimal). Returns
/// an empty vector for an empty breakdown.
#[inline]
#[must_use]
pub fn expense_shares(breakdown: &BTreeMap<String, f64>) -> Vec<CategoryShare> {
    let total: f64 = breakdown.values().sum();
    if total <= 0.0_f64 {
        return Vec::new();
    }
    let mut shares: Vec<CategoryShare> = breakdown
        .iter()
        .map(|(category, &amount)| CategoryShare {
            category: category.clone(),
            amount: round_cents(amount),
            percent: round_tenths(amount / total * 100.0_f64),
        })
        .collect();
    shares.sort_by(|left, right| right.amount.total_cmp(&left.amount));
    shares
}
