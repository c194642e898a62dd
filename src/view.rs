//! Presentation contract and the view-update controller.
//!
//! The [`Presenter`] trait is everything the ledger needs from a user
//! interface. [`Tracker`] drives it: each user action mutates the
//! [`Ledger`], which persists itself, and then the affected views are
//! recomputed and handed to the presenter.

use std::collections::BTreeMap;

use crate::error::Result;
use crate::filter::ViewFilter;
use crate::ledger::Ledger;
use crate::models::{Totals, Transaction, TransactionId};
use crate::storage::Storage;

/// Confirmation prompt shown before deleting one transaction.
pub const REMOVE_PROMPT: &str = "Are you sure you want to delete this transaction?";

/// Confirmation prompt shown before deleting every transaction.
pub const CLEAR_PROMPT: &str =
    "Are you sure you want to delete ALL transactions? This action cannot be undone.";

/// Notification after a successful add.
pub const ADDED_MESSAGE: &str = "Transaction added successfully!";

/// Notification after a removal.
pub const DELETED_MESSAGE: &str = "Transaction deleted";

/// Notification after clearing the ledger.
pub const CLEARED_MESSAGE: &str = "All transactions cleared";

/// Notification after a successful import.
pub const IMPORTED_MESSAGE: &str = "Data imported successfully!";

/// Placeholder for an empty transaction list.
pub const EMPTY_LIST_MESSAGE: &str = "No transactions found";

/// Placeholder for an empty expense chart.
pub const EMPTY_CHART_MESSAGE: &str = "No expense data available";

/// Style of an advisory notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NotificationKind {
    /// Something was created.
    Success,
    /// Neutral information, e.g. a deletion.
    Info,
}

/// User interface collaborator.
///
/// Render calls receive derived data only and cannot reach the ledger.
pub trait Presenter {
    /// Draws the filtered transaction list. An empty slice should show
    /// [`EMPTY_LIST_MESSAGE`].
    fn render_list(&mut self, view: &[&Transaction]);

    /// Draws balance, income and expense.
    fn render_totals(&mut self, totals: &Totals);

    /// Draws the expense-by-category chart. An empty map should show
    /// [`EMPTY_CHART_MESSAGE`] rather than fail.
    fn render_chart(&mut self, breakdown: &BTreeMap<String, f64>);

    /// Shows an advisory message. Has no effect on ledger state.
    fn notify(&mut self, message: &str, kind: NotificationKind);

    /// Asks a yes/no question and blocks until answered.
    fn confirm(&mut self, prompt: &str) -> bool;
}

/// Result of a confirmed-or-declined removal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemoveOutcome {
    /// The transaction existed and was deleted.
    Removed,
    /// Confirmed, but no transaction had that id.
    NotFound,
    /// The user declined; nothing changed and nothing was written.
    Cancelled,
}

/// Couples a ledger with a presenter and the active list filter.
#[derive(Debug)]
pub struct Tracker<S: Storage, P: Presenter> {
    /// The ledger store.
    ledger: Ledger<S>,
    /// The user interface.
    presenter: P,
    /// Filter applied to the rendered list.
    filter: ViewFilter,
}

impl<S: Storage, P: Presenter> Tracker<S, P> {
    /// Creates a tracker with a match-all filter. Nothing is rendered
    /// until [`Tracker::refresh`] or an action is called.
    #[inline]
    #[must_use]
    pub fn new(ledger: Ledger<S>, presenter: P) -> Self {
        Self {
            ledger,
            presenter,
            filter: ViewFilter::new(),
        }
    }

    /// Returns the ledger.
    #[inline]
    #[must_use]
    pub const fn ledger(&self) -> &Ledger<S> {
        &self.ledger
    }

    /// Returns the presenter.
    #[inline]
    #[must_use]
    pub const fn presenter(&self) -> &P {
        &self.presenter
    }

    /// Returns the presenter mutably.
    #[inline]
    pub const fn presenter_mut(&mut self) -> &mut P {
        &mut self.presenter
    }

    /// Returns the active list filter.
    #[inline]
    #[must_use]
    pub const fn filter(&self) -> &ViewFilter {
        &self.filter
    }

    /// Consumes the tracker, returning the ledger and presenter.
    #[inline]
    #[must_use]
    pub fn into_parts(self) -> (Ledger<S>, P) {
        (self.ledger, self.presenter)
    }

    /// Re-renders the list, totals and chart.
    #[inline]
    pub fn refresh(&mut self) {
        self.render_list();
        self.presenter.render_totals(&self.ledger.totals());
        self.presenter
            .render_chart(&self.ledger.expense_by_category());
    }

    /// Changes the list filter and re-renders the list only.
    #[inline]
    pub fn set_filter(&mut self, filter: ViewFilter) {
        self.filter = filter;
        self.render_list();
    }

    /// Adds a transaction, refreshes every view and notifies success.
    ///
    /// # Errors
    ///
    /// Returns the ledger's validation error; nothing is rendered then.
    #[inline]
    pub fn add(&mut self, text: &str, amount: f64, category: &str, date: &str) -> Result<Transaction> {
        let tx = self.ledger.add(text, amount, category, date)?;
        self.refresh();
        self.presenter.notify(ADDED_MESSAGE, NotificationKind::Success);
        Ok(tx)
    }

    /// Asks for confirmation, then removes a transaction.
    #[inline]
    pub fn remove(&mut self, id: TransactionId) -> RemoveOutcome {
        if !self.presenter.confirm(REMOVE_PROMPT) {
            return RemoveOutcome::Cancelled;
        }
        let removed = self.ledger.remove(id);
        self.refresh();
        if removed {
            self.presenter.notify(DELETED_MESSAGE, NotificationKind::Info);
            RemoveOutcome::Removed
        } else {
            RemoveOutcome::NotFound
        }
    }

    /// Asks for confirmation, then clears the ledger. Returns whether the
    /// ledger was cleared.
    #[inline]
    pub fn clear_all(&mut self) -> bool {
        if !self.presenter.confirm(CLEAR_PROMPT) {
            return false;
        }
        self.ledger.clear_all();
        self.refresh();
        self.presenter.notify(CLEARED_MESSAGE, NotificationKind::Info);
        true
    }

    /// Replaces the ledger with an imported document.
    ///
    /// # Errors
    ///
    /// Returns the ledger's import error; nothing is rendered then.
    #[inline]
    pub fn import_json(&mut self, json: &str) -> Result<usize> {
        let count = self.ledger.import_json(json)?;
        self.refresh();
        self.presenter
            .notify(IMPORTED_MESSAGE, NotificationKind::Success);
        Ok(count)
    }

    /// Serializes the ledger for export.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    #[inline]
    pub fn export_json(&self) -> Result<String> {
        self.ledger.export_json()
    }

    /// Renders the list under the active filter.
    fn render_list(&mut self) {
        let view = self.ledger.view(&self.filter);
        self.presenter.render_list(&view);
    }
}
