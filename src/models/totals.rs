//! Derived summary values.

use serde::{Deserialize, Serialize};

/// Running totals over a set of transactions, rounded to cents.
#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Totals {
    /// Sum of all amounts.
    pub balance: f64,
    /// Sum of positive amounts.
    pub income: f64,
    /// Absolute value of the sum of negative amounts.
    pub expense: f64,
}

/// One slice of the expense breakdown chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryShare {
    /// Category label as stored.
    pub category: String,
    /// Total spent in this category (positive).
    pub amount: f64,
    /// Share of all expenses, in percent with one decimal.
    pub percent: f64,
}

impl CategoryShare {
    /// Returns the category with its first character upper-cased, for
    /// chart legends.
    #[inline]
    #[must_use]
    pub fn label(&self) -> String {
        let mut chars = self.category.chars();
        chars.next().map_or_else(String::new, |first| {
            first.to_uppercase().chain(chars).collect()
        })
    }
}
