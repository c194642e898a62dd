//! The ledger store: the only owner and mutator of transaction data.
//!
//! A [`Ledger`] holds the transaction sequence and the id counter, loads
//! both from a [`Storage`] backend at startup, and writes both back after
//! every mutation.
//!
//! # Persistence
//!
//! Writes after a mutation are best-effort: a failing backend is logged
//! and the in-memory operation still succeeds. Call [`Ledger::save`]
//! directly to observe storage errors.

use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::aggregate;
use crate::config::LedgerConfig;
use crate::error::{LedgerError, Result, ValidationError};
use crate::filter::ViewFilter;
use crate::models::{Totals, Transaction, TransactionId};
use crate::storage::Storage;
use crate::transfer;

/// Storage key holding the serialized transaction array.
pub const TRANSACTIONS_KEY: &str = "transactions";

/// Storage key holding the serialized next-id counter.
pub const COUNTER_KEY: &str = "transactionIdCounter";

/// First identifier issued by an empty ledger.
const FIRST_ID: u64 = 1;

/// Date format accepted by [`Ledger::add`].
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Ordered transactions plus the id counter, bound to a storage backend.
#[derive(Debug)]
pub struct Ledger<S: Storage> {
    /// Persistence backend.
    storage: S,
    /// Validation settings.
    config: LedgerConfig,
    /// Transactions in insertion order.
    transactions: Vec<Transaction>,
    /// Next identifier to issue; greater than every id ever issued.
    next_id: u64,
}

impl<S: Storage> Ledger<S> {
    /// Loads a ledger from storage with the default configuration.
    ///
    /// Missing or corrupt entries fall back to an empty ledger.
    #[inline]
    #[must_use]
    pub fn load(storage: S) -> Self {
        Self::load_with_config(storage, LedgerConfig::default())
    }

    /// Loads a ledger from storage.
    ///
    /// Each entry is restored independently: an absent or unparsable
    /// transaction array yields an empty sequence, an absent or unparsable
    /// counter yields `1`. A counter that does not exceed every stored id
    /// is raised to `max id + 1`.
    #[inline]
    #[must_use]
    #[tracing::instrument(skip_all)]
    pub fn load_with_config(storage: S, config: LedgerConfig) -> Self {
        let transactions: Vec<Transaction> =
            read_entry(&storage, TRANSACTIONS_KEY).unwrap_or_default();
        let stored_counter: u64 = read_entry(&storage, COUNTER_KEY)
            .filter(|&counter| counter >= FIRST_ID)
            .unwrap_or(FIRST_ID);

        let floor = id_floor(&transactions);
        let next_id = if stored_counter < floor {
            tracing::warn!(
                stored = stored_counter,
                raised_to = floor,
                "id counter behind stored transactions"
            );
            floor
        } else {
            stored_counter
        };

        tracing::debug!(count = transactions.len(), next_id, "ledger loaded");
        Self {
            storage,
            config,
            transactions,
            next_id,
        }
    }

    /// Returns all transactions in insertion order.
    #[inline]
    #[must_use]
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    /// Returns the identifier the next [`Ledger::add`] will assign.
    #[inline]
    #[must_use]
    pub const fn next_id(&self) -> TransactionId {
        TransactionId::new(self.next_id)
    }

    /// Returns the number of stored transactions.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    /// Returns `true` if the ledger holds no transactions.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    /// Looks up a transaction by id.
    #[inline]
    #[must_use]
    pub fn get(&self, id: TransactionId) -> Option<&Transaction> {
        self.transactions.iter().find(|tx| tx.id == id)
    }

    /// Returns the validation settings.
    #[inline]
    #[must_use]
    pub const fn config(&self) -> &LedgerConfig {
        &self.config
    }

    /// Returns the storage backend.
    #[inline]
    #[must_use]
    pub const fn storage(&self) -> &S {
        &self.storage
    }

    /// Validates and appends a new transaction.
    ///
    /// `text` and `category` are trimmed; `date` must be `YYYY-MM-DD`. On
    /// success the transaction receives the current counter value as its
    /// id and the counter advances.
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError::Validation`] if any field is missing or
    /// malformed, or [`LedgerError::IdsExhausted`] once the counter has
    /// reached `u64::MAX`. The ledger is unchanged in either case.
    #[inline]
    pub fn add(&mut self, text: &str, amount: f64, category: &str, date: &str) -> Result<Transaction> {
        let (text, category, date) = self.validate(text, amount, category, date)?;
        let following = self.next_id.checked_add(1).ok_or(LedgerError::IdsExhausted)?;
        let tx = Transaction {
            id: TransactionId::new(self.next_id),
            text,
            amount,
            category,
            date,
        };
        self.next_id = following;
        self.transactions.push(tx.clone());
        tracing::debug!(id = %tx.id, amount, category = %tx.category, "transaction added");
        self.persist();
        Ok(tx)
    }

    /// Removes the transaction with the given id.
    ///
    /// Returns whether a transaction was removed; an unknown id is a
    /// no-op. Ids are never reissued.
    #[inline]
    pub fn remove(&mut self, id: TransactionId) -> bool {
        let before = self.transactions.len();
        self.transactions.retain(|tx| tx.id != id);
        let removed = self.transactions.len() != before;
        tracing::debug!(%id, removed, "transaction remove");
        self.persist();
        removed
    }

    /// Empties the ledger and resets the counter to `1`.
    #[inline]
    pub fn clear_all(&mut self) {
        let count = self.transactions.len();
        self.transactions.clear();
        self.next_id = FIRST_ID;
        tracing::debug!(count, "ledger cleared");
        self.persist();
    }

    /// Replaces the whole ledger with imported transactions.
    ///
    /// The counter is raised past the largest imported id if needed and
    /// is never lowered. Returns the number of imported transactions.
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError::ImportFormat`] if the document is not an
    /// array of well-formed transactions with distinct ids. The ledger is
    /// unchanged in that case.
    #[inline]
    #[tracing::instrument(skip_all)]
    pub fn import_json(&mut self, json: &str) -> Result<usize> {
        let imported = transfer::parse_import(json)?;
        let count = imported.len();
        self.next_id = self.next_id.max(id_floor(&imported));
        self.transactions = imported;
        tracing::debug!(count, next_id = self.next_id, "ledger imported");
        self.persist();
        Ok(count)
    }

    /// Serializes the ledger as a pretty-printed JSON array.
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError::Serialization`] if encoding fails.
    #[inline]
    pub fn export_json(&self) -> Result<String> {
        transfer::export_json(&self.transactions)
    }

    /// Writes the transaction array and counter to storage.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or either storage write fails.
    #[inline]
    pub fn save(&self) -> Result<()> {
        let transactions = serde_json::to_string(&self.transactions)?;
        let counter = serde_json::to_string(&self.next_id)?;
        self.storage.set(TRANSACTIONS_KEY, &transactions)?;
        self.storage.set(COUNTER_KEY, &counter)
    }

    /// Computes totals over the whole ledger.
    #[inline]
    #[must_use]
    pub fn totals(&self) -> Totals {
        aggregate::totals(&self.transactions)
    }

    /// Computes the expense breakdown over the whole ledger.
    #[inline]
    #[must_use]
    pub fn expense_by_category(&self) -> BTreeMap<String, f64> {
        aggregate::expense_by_category(&self.transactions)
    }

    /// Returns the filtered view, newest first.
    #[inline]
    #[must_use]
    pub fn view(&self, filter: &ViewFilter) -> Vec<&Transaction> {
        filter.apply(&self.transactions)
    }

    /// Saves, logging instead of returning failures.
    fn persist(&self) {
        if let Err(err) = self.save() {
            tracing::warn!(error = %err, "failed to persist ledger");
        }
    }

    /// Checks and normalizes the fields of a new transaction.
    fn validate(
        &self,
        text: &str,
        amount: f64,
        category: &str,
        date: &str,
    ) -> core::result::Result<(String, String, NaiveDate), ValidationError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(ValidationError::EmptyText);
        }
        if !amount.is_finite() {
            return Err(ValidationError::NonFiniteAmount);
        }
        let category = category.trim();
        if category.is_empty() {
            return Err(ValidationError::EmptyCategory);
        }
        if !self.config.is_recognized(category) {
            return Err(ValidationError::UnknownCategory(category.to_owned()));
        }
        let date = date.trim();
        if date.is_empty() {
            return Err(ValidationError::EmptyDate);
        }
        let parsed = NaiveDate::parse_from_str(date, DATE_FORMAT)
            .map_err(|_err| ValidationError::InvalidDate(date.to_owned()))?;
        Ok((text.to_owned(), category.to_owned(), parsed))
    }
}

/// Reads and decodes one storage entry, treating every failure as absent.
///
/// An entry that fails to decode is deleted from storage.
fn read_entry<T, S>(storage: &S, key: &str) -> Option<T>
where
    T: serde::de::DeserializeOwned,
    S: Storage,
{
    let raw = match storage.get(key) {
        Ok(raw) => raw?,
        Err(err) => {
            tracing::warn!(key, error = %err, "failed to read stored entry");
            return None;
        }
    };
    match serde_json::from_str(&raw) {
        Ok(value) => Some(value),
        Err(err) => {
            tracing::warn!(key, error = %LedgerError::from(err), "discarding corrupt stored entry");
            if let Err(remove_err) = storage.remove(key) {
                tracing::warn!(key, error = %remove_err, "failed to delete corrupt stored entry");
            }
            None
        }
    }
}

/// Smallest counter value that exceeds every id in `transactions`.
fn id_floor(transactions: &[Transaction]) -> u64 {
    transactions
        .iter()
        .map(|tx| tx.id.into_inner().saturating_add(1))
        .max()
        .unwrap_or(FIRST_ID)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TypeFilter;
    use crate::storage::InMemoryStorage;

    fn empty() -> Ledger<InMemoryStorage> {
        Ledger::load(InMemoryStorage::new())
    }

    fn close(left: f64, right: f64) -> bool {
        (left - right).abs() < 1e-9
    }

    /// Storage whose writes always fail.
    #[derive(Debug, Default)]
    struct FailingStorage;

    impl Storage for FailingStorage {
        fn get(&self, _key: &str) -> Result<Option<String>> {
            Err(LedgerError::Storage("read failed".into()))
        }
        fn set(&self, _key: &str, _value: &str) -> Result<()> {
            Err(LedgerError::Storage("write failed".into()))
        }
        fn remove(&self, _key: &str) -> Result<()> {
            Err(LedgerError::Storage("write failed".into()))
        }
    }

    #[test]
    fn load_empty_storage() {
        let ledger = empty();
        assert!(ledger.is_empty());
        assert_eq!(ledger.next_id(), TransactionId::new(1));
    }

    #[test]
    fn add_assigns_counter_and_persists() {
        let mut ledger = empty();
        let tx = ledger.add("Lunch", -200.0, "food", "2024-01-10").unwrap();
        assert_eq!(tx.id, TransactionId::new(1));
        assert_eq!(ledger.len(), 1);
        assert_eq!(ledger.next_id(), TransactionId::new(2));

        let stored = ledger.storage().get(COUNTER_KEY).unwrap();
        assert_eq!(stored.as_deref(), Some("2"));
        let stored_txs = ledger.storage().get(TRANSACTIONS_KEY).unwrap().unwrap();
        assert!(stored_txs.contains("\"Lunch\""));
    }

    #[test]
    fn scenario_lunch_then_salary() {
        let mut ledger = empty();
        let _lunch = ledger.add("Lunch", -200.0, "food", "2024-01-10").unwrap();
        let totals = ledger.totals();
        assert!(close(totals.balance, -200.0));
        assert!(close(totals.income, 0.0));
        assert!(close(totals.expense, 200.0));

        let salary = ledger.add("Salary", 5000.0, "salary", "2024-01-01").unwrap();
        assert!(close(ledger.totals().balance, 4800.0));

        let income = ledger.view(&ViewFilter::new().kind(TypeFilter::Income));
        assert_eq!(income.len(), 1);
        assert_eq!(income[0].id, salary.id);

        let all = ledger.view(&ViewFilter::new());
        assert_eq!(all[0].text, "Lunch");
        assert_eq!(all[1].text, "Salary");

        assert!(ledger.remove(TransactionId::new(1)));
        assert_eq!(ledger.len(), 1);
        assert!(ledger.expense_by_category().is_empty());
    }

    #[test]
    fn add_trims_text_and_category() {
        let mut ledger = empty();
        let tx = ledger.add("  Coffee ", -3.5, " food ", " 2024-05-01 ").unwrap();
        assert_eq!(tx.text, "Coffee");
        assert_eq!(tx.category, "food");
        assert_eq!(tx.date, NaiveDate::from_ymd_opt(2024, 5, 1).unwrap());
    }

    #[test]
    fn add_rejects_invalid_input_without_mutation() {
        let mut ledger = empty();
        let cases = [
            ("", 100.0, "food", "2024-01-01", ValidationError::EmptyText),
            ("   ", 100.0, "food", "2024-01-01", ValidationError::EmptyText),
            ("x", f64::NAN, "food", "2024-01-01", ValidationError::NonFiniteAmount),
            ("x", f64::INFINITY, "food", "2024-01-01", ValidationError::NonFiniteAmount),
            ("x", 1.0, "", "2024-01-01", ValidationError::EmptyCategory),
            ("x", 1.0, "crypto", "2024-01-01", ValidationError::UnknownCategory("crypto".to_owned())),
            ("x", 1.0, "food", "", ValidationError::EmptyDate),
            ("x", 1.0, "food", "2024-02-30", ValidationError::InvalidDate("2024-02-30".to_owned())),
            ("x", 1.0, "food", "01/02/2024", ValidationError::InvalidDate("01/02/2024".to_owned())),
        ];
        for (text, amount, category, date, expected) in cases {
            let err = ledger.add(text, amount, category, date).unwrap_err();
            assert!(
                matches!(err, LedgerError::Validation(ref got) if *got == expected),
                "unexpected error {err}"
            );
        }
        assert!(ledger.is_empty());
        assert_eq!(ledger.next_id(), TransactionId::new(1));
        assert!(ledger.storage().get(TRANSACTIONS_KEY).unwrap().is_none());
    }

    #[test]
    fn unrestricted_config_accepts_any_category() {
        let mut ledger =
            Ledger::load_with_config(InMemoryStorage::new(), LedgerConfig::unrestricted());
        let tx = ledger.add("Gift", -20.0, "presents", "2024-01-01").unwrap();
        assert_eq!(tx.category, "presents");
    }

    #[test]
    fn zero_amount_is_allowed() {
        let mut ledger = empty();
        let tx = ledger.add("Refund pending", 0.0, "other", "2024-01-01").unwrap();
        assert!(!tx.is_income() && !tx.is_expense());
    }

    #[test]
    fn remove_is_idempotent_and_ids_not_recycled() {
        let mut ledger = empty();
        let _a = ledger.add("a", -1.0, "food", "2024-01-01").unwrap();
        let b = ledger.add("b", -2.0, "food", "2024-01-02").unwrap();
        assert!(ledger.remove(b.id));
        assert!(!ledger.remove(b.id));
        assert_eq!(ledger.len(), 1);

        let c = ledger.add("c", -3.0, "food", "2024-01-03").unwrap();
        assert_eq!(c.id, TransactionId::new(3));
    }

    #[test]
    fn remove_unknown_is_noop() {
        let mut ledger = empty();
        let _a = ledger.add("a", -1.0, "food", "2024-01-01").unwrap();
        assert!(!ledger.remove(TransactionId::new(99)));
        assert_eq!(ledger.len(), 1);
    }

    #[test]
    fn clear_all_resets_counter() {
        let mut ledger = empty();
        let _a = ledger.add("a", -1.0, "food", "2024-01-01").unwrap();
        let _b = ledger.add("b", 2.0, "salary", "2024-01-02").unwrap();
        ledger.clear_all();
        assert!(ledger.is_empty());
        assert_eq!(ledger.next_id(), TransactionId::new(1));
        assert_eq!(ledger.storage().get(COUNTER_KEY).unwrap().as_deref(), Some("1"));
        assert_eq!(
            ledger.storage().get(TRANSACTIONS_KEY).unwrap().as_deref(),
            Some("[]")
        );
    }

    #[test]
    fn save_then_load_roundtrip() {
        let mut ledger = empty();
        let _a = ledger.add("Lunch", -200.0, "food", "2024-01-10").unwrap();
        let _b = ledger.add("Salary", 5000.0, "salary", "2024-01-01").unwrap();
        assert!(ledger.remove(TransactionId::new(1)));
        ledger.save().unwrap();

        let storage = InMemoryStorage::with_entries([
            (
                TRANSACTIONS_KEY,
                ledger.storage().get(TRANSACTIONS_KEY).unwrap().unwrap(),
            ),
            (COUNTER_KEY, ledger.storage().get(COUNTER_KEY).unwrap().unwrap()),
        ]);
        let restored = Ledger::load(storage);
        assert_eq!(restored.transactions(), ledger.transactions());
        assert_eq!(restored.next_id(), ledger.next_id());
    }

    #[test]
    fn load_tolerates_corrupt_entries() {
        let storage = InMemoryStorage::with_entries([
            (TRANSACTIONS_KEY, "{not json"),
            (COUNTER_KEY, "\"seven\""),
        ]);
        let ledger = Ledger::load(storage);
        assert!(ledger.is_empty());
        assert_eq!(ledger.next_id(), TransactionId::new(1));
        assert_eq!(ledger.storage().get(TRANSACTIONS_KEY).unwrap(), None);
        assert_eq!(ledger.storage().get(COUNTER_KEY).unwrap(), None);
    }

    #[test]
    fn load_treats_null_and_zero_as_absent() {
        let storage =
            InMemoryStorage::with_entries([(TRANSACTIONS_KEY, "null"), (COUNTER_KEY, "0")]);
        let ledger = Ledger::load(storage);
        assert!(ledger.is_empty());
        assert_eq!(ledger.next_id(), TransactionId::new(1));
    }

    #[test]
    fn load_keeps_valid_entry_when_other_is_corrupt() {
        let storage = InMemoryStorage::with_entries([
            (
                TRANSACTIONS_KEY,
                r#"[{"id":4,"text":"a","amount":-1,"category":"food","date":"2024-01-01"}]"#,
            ),
            (COUNTER_KEY, "garbage"),
        ]);
        let ledger = Ledger::load(storage);
        assert_eq!(ledger.len(), 1);
        assert_eq!(ledger.next_id(), TransactionId::new(5));
    }

    #[test]
    fn load_keeps_counter_ahead_of_ids() {
        let storage = InMemoryStorage::with_entries([
            (
                TRANSACTIONS_KEY,
                r#"[{"id":2,"text":"a","amount":-1,"category":"food","date":"2024-01-01"}]"#,
            ),
            (COUNTER_KEY, "10"),
        ]);
        let ledger = Ledger::load(storage);
        assert_eq!(ledger.next_id(), TransactionId::new(10));
    }

    #[test]
    fn load_survives_storage_failure() {
        let ledger = Ledger::load(FailingStorage);
        assert!(ledger.is_empty());
    }

    #[test]
    fn mutation_succeeds_when_persistence_fails() {
        let mut ledger = Ledger::load(FailingStorage);
        let tx = ledger.add("a", -1.0, "food", "2024-01-01").unwrap();
        assert_eq!(ledger.get(tx.id), Some(&tx));
        assert!(ledger.save().is_err());
    }

    #[test]
    fn import_replaces_content() {
        let mut ledger = empty();
        let _old = ledger.add("old", -1.0, "food", "2024-01-01").unwrap();
        let json = r#"[
            {"id": 1, "text": "a", "amount": -10, "category": "food", "date": "2024-01-01"},
            {"id": 2, "text": "b", "amount": 20, "category": "salary", "date": "2024-01-02"},
            {"id": 3, "text": "c", "amount": -30, "category": "bills", "date": "2024-01-03"}
        ]"#;
        assert_eq!(ledger.import_json(json).unwrap(), 3);
        assert_eq!(ledger.len(), 3);
        assert!(ledger.transactions().iter().all(|tx| tx.text != "old"));
        assert_eq!(ledger.next_id(), TransactionId::new(4));
    }

    #[test]
    fn import_never_lowers_counter() {
        let mut ledger = empty();
        for day in 1..=5 {
            let _tx = ledger
                .add("x", -1.0, "food", &format!("2024-01-0{day}"))
                .unwrap();
        }
        let json = r#"[{"id": 1, "text": "a", "amount": -10, "category": "food", "date": "2024-01-01"}]"#;
        let _count = ledger.import_json(json).unwrap();
        assert_eq!(ledger.next_id(), TransactionId::new(6));
    }

    #[test]
    fn failed_import_leaves_ledger_untouched() {
        let mut ledger = empty();
        let _a = ledger.add("a", -1.0, "food", "2024-01-01").unwrap();
        assert!(matches!(
            ledger.import_json(r#"{"not": "an array"}"#),
            Err(LedgerError::ImportFormat(_))
        ));
        assert_eq!(ledger.len(), 1);
        assert_eq!(ledger.transactions()[0].text, "a");
    }

    #[test]
    fn export_matches_transactions() {
        let mut ledger = empty();
        let _a = ledger.add("a", -1.0, "food", "2024-01-01").unwrap();
        let json = ledger.export_json().unwrap();
        let parsed = transfer::parse_import(&json).unwrap();
        assert_eq!(parsed, ledger.transactions());
    }

    #[test]
    fn ids_stay_distinct() {
        let mut ledger = empty();
        for idx in 0..20_u32 {
            let _tx = ledger.add("x", f64::from(idx), "other", "2024-01-01").unwrap();
            if idx % 3 == 0 {
                let _removed = ledger.remove(TransactionId::new(u64::from(idx)));
            }
        }
        let mut ids: Vec<_> = ledger.transactions().iter().map(|tx| tx.id).collect();
        let total = ids.len();
        ids.dedup();
        assert_eq!(ids.len(), total);
        assert!(ids.iter().all(|id| *id < ledger.next_id()));
    }

    #[test]
    fn add_fails_once_ids_are_exhausted() {
        let stored = r#"[{"id": 18446744073709551615, "text": "a", "amount": -1, "category": "food", "date": "2024-01-01"}]"#;
        let storage = InMemoryStorage::with_entries([(TRANSACTIONS_KEY, stored)]);
        let mut ledger = Ledger::load(storage);
        assert_eq!(ledger.next_id(), TransactionId::new(u64::MAX));

        let err = ledger.add("b", -2.0, "food", "2024-01-02").unwrap_err();
        assert!(matches!(err, LedgerError::IdsExhausted));
        assert_eq!(ledger.len(), 1);
        assert_eq!(ledger.next_id(), TransactionId::new(u64::MAX));
    }

    #[test]
    fn add_fails_with_maximal_stored_counter() {
        let storage = InMemoryStorage::with_entries([(COUNTER_KEY, u64::MAX.to_string())]);
        let mut ledger = Ledger::load(storage);
        assert!(matches!(
            ledger.add("b", -2.0, "food", "2024-01-02"),
            Err(LedgerError::IdsExhausted)
        ));
        assert!(ledger.is_empty());
    }

    #[test]
    fn import_of_maximal_id_is_rejected() {
        let mut ledger = empty();
        let json = r#"[{"id": 18446744073709551615, "text": "a", "amount": -1, "category": "food", "date": "2024-01-01"}]"#;
        assert!(matches!(
            ledger.import_json(json),
            Err(LedgerError::ImportFormat(_))
        ));
        assert!(ledger.is_empty());
        let tx = ledger.add("b", -2.0, "food", "2024-01-02").unwrap();
        assert_eq!(tx.id, TransactionId::new(1));
    }

    #[test]
    fn import_of_blank_fields_is_rejected() {
        let mut ledger = empty();
        let json = r#"[{"id": 1, "text": "   ", "amount": -1, "category": "", "date": "2024-01-01"}]"#;
        assert!(matches!(
            ledger.import_json(json),
            Err(LedgerError::ImportFormat(_))
        ));
        assert!(ledger.is_empty());
    }

    #[cfg(feature = "storage-file")]
    #[test]
    fn file_storage_roundtrip() {
        use crate::storage::FileStorage;

        let dir = tempfile::tempdir().unwrap();
        let mut ledger = Ledger::load(FileStorage::new(dir.path().to_path_buf()).unwrap());
        let _a = ledger.add("Lunch", -200.0, "food", "2024-01-10").unwrap();
        let _b = ledger.add("Salary", 5000.0, "salary", "2024-01-01").unwrap();
        let _c = ledger.add("Bus", -2.5, "transport", "2024-01-11").unwrap();
        assert!(ledger.remove(TransactionId::new(3)));

        let reopened = Ledger::load(FileStorage::new(dir.path().to_path_buf()).unwrap());
        assert_eq!(reopened.transactions(), ledger.transactions());
        assert_eq!(reopened.next_id(), TransactionId::new(4));
        assert_eq!(reopened.next_id(), ledger.next_id());
    }
}
