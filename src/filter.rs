//! Filtered, date-sorted views over the ledger.

use crate::models::{CategoryFilter, Transaction, TypeFilter};

/// Composable view filter combining a category and a type selector.
///
/// # Examples
///
/// ```
/// use expense_tracker_rs::filter::ViewFilter;
/// use expense_tracker_rs::models::TypeFilter;
///
/// let filter = ViewFilter::new().category("food").kind(TypeFilter::Expense);
/// assert_eq!(filter.kind, TypeFilter::Expense);
/// ```
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ViewFilter {
    /// Category selector.
    pub category: CategoryFilter,
    /// Sign selector.
    pub kind: TypeFilter,
}

impl ViewFilter {
    /// Creates a filter that matches every transaction.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Restricts to the given category; `"all"` clears the restriction.
    #[inline]
    #[must_use]
    pub fn category(mut self, selector: &str) -> Self {
        self.category = CategoryFilter::from_selector(selector);
        self
    }

    /// Restricts by transaction sign.
    #[inline]
    #[must_use]
    pub const fn kind(mut self, kind: TypeFilter) -> Self {
        self.kind = kind;
        self
    }

    /// Returns `true` if the transaction satisfies both selectors.
    #[inline]
    #[must_use]
    pub fn matches(&self, tx: &Transaction) -> bool {
        self.category.accepts(&tx.category) && matches_kind(self.kind, tx)
    }

    /// Applies the filter, newest first.
    #[inline]
    #[must_use]
    pub fn apply<'tx>(&self, transactions: &'tx [Transaction]) -> Vec<&'tx Transaction> {
        filter(transactions, &self.category, self.kind)
    }
}

/// Checks the sign criteria. Zero amounts pass only [`TypeFilter::All`].
fn matches_kind(kind: TypeFilter, tx: &Transaction) -> bool {
    match kind {
        TypeFilter::All => true,
        TypeFilter::Income => tx.is_income(),
        TypeFilter::Expense => tx.is_expense(),
    }
}

/// Keeps transactions matching both selectors and sorts them by date,
/// most recent first.
///
/// The sort is stable: transactions sharing a date keep their ledger
/// order. Returns an empty vector when nothing matches.
#[inline]
#[must_use]
pub fn filter<'tx>(
    transactions: &'tx [Transaction],
    category: &CategoryFilter,
    kind: TypeFilter,
) -> Vec<&'tx Transaction> {
    let mut view: Vec<&Transaction> = transactions
        .iter()
        .filter(|tx| category.accepts(&tx.category) && matches_kind(kind, tx))
        .collect();
    view.sort_by(|left, right| right.date.cmp(&left.date));
    view
}
