//! JSON import and export of the transaction array.

use std::collections::HashSet;

use chrono::NaiveDate;

use crate::error::{LedgerError, Result};
use crate::models::Transaction;

/// Prefix of exported file names.
const EXPORT_PREFIX: &str = "expense_tracker";

/// Parses an imported document into transactions.
///
/// The document must be a JSON array of objects with `id`, `text`,
/// `amount`, `category` and `date` fields, with pairwise distinct ids
/// below `u64::MAX`, non-blank text and a non-empty category.
///
/// # Errors
///
/// Returns [`LedgerError::ImportFormat`] for anything else.
#[inline]
pub fn parse_import(json: &str) -> Result<Vec<Transaction>> {
    let value: serde_json::Value = serde_json::from_str(json)
        .map_err(|err| LedgerError::ImportFormat(format!("not valid JSON: {err}")))?;
    if !value.is_array() {
        return Err(LedgerError::ImportFormat(
            "expected a JSON array of transactions".to_owned(),
        ));
    }
    let transactions: Vec<Transaction> = serde_json::from_value(value)
        .map_err(|err| LedgerError::ImportFormat(format!("malformed transaction: {err}")))?;

    if let Some(bad) = transactions.iter().find_map(element_problem) {
        return Err(LedgerError::ImportFormat(bad));
    }

    let mut seen = HashSet::with_capacity(transactions.len());
    if let Some(dup) = transactions.iter().find(|tx| !seen.insert(tx.id)) {
        return Err(LedgerError::ImportFormat(format!(
            "duplicate transaction id {}",
            dup.id
        )));
    }
    Ok(transactions)
}

/// Describes why an imported transaction cannot enter the ledger.
fn element_problem(tx: &Transaction) -> Option<String> {
    if tx.id.into_inner() == u64::MAX {
        return Some(format!("transaction id {} is out of range", tx.id));
    }
    if tx.text.trim().is_empty() {
        return Some(format!("transaction {} has empty text", tx.id));
    }
    if tx.category.trim().is_empty() {
        return Some(format!("transaction {} has empty category", tx.id));
    }
    None
}

/// Serializes transactions as a pretty-printed JSON array.
///
/// # Errors
///
/// Returns [`LedgerError::Serialization`] if encoding fails.
#[inline]
pub fn export_json(transactions: &[Transaction]) -> Result<String> {
    serde_json::to_string_pretty(transactions).map_err(LedgerError::from)
}

/// Returns the default export file name for the given day, e.g.
/// `expense_tracker_2024-01-10.json`.
#[inline]
#[must_use]
pub fn export_file_name(date: NaiveDate) -> String {
    format!("{EXPORT_PREFIX}_{}.json", date.format("%Y-%m-%d"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TransactionId;

    const THREE: &str = r#"[
        {"id": 1, "text": "Lunch", "amount": -200, "category": "food", "date": "2024-01-10"},
        {"id": 2, "text": "Salary", "amount": 5000, "category": "salary", "date": "2024-01-01"},
        {"id": 7, "text": "Bus", "amount": -2.5, "category": "transport", "date": "2024-01-11"}
    ]"#;

    #[test]
    fn parses_well_formed_array() {
        let txs = parse_import(THREE).unwrap();
        assert_eq!(txs.len(), 3);
        assert_eq!(txs[2].id, TransactionId::new(7));
        assert_eq!(txs[0].text, "Lunch");
    }

    #[test]
    fn empty_array_is_valid() {
        assert!(parse_import("[]").unwrap().is_empty());
    }

    #[test]
    fn rejects_non_array() {
        let err = parse_import(r#"{"id": 1}"#).unwrap_err();
        assert!(matches!(err, LedgerError::ImportFormat(_)));
        assert!(err.to_string().contains("array"));
    }

    #[test]
    fn rejects_invalid_json() {
        assert!(matches!(
            parse_import("not json"),
            Err(LedgerError::ImportFormat(_))
        ));
    }

    #[test]
    fn rejects_malformed_element() {
        let json = r#"[{"id": 1, "text": "x", "amount": "ten", "category": "food", "date": "2024-01-01"}]"#;
        assert!(matches!(
            parse_import(json),
            Err(LedgerError::ImportFormat(_))
        ));
    }

    #[test]
    fn rejects_duplicate_ids() {
        let json = r#"[
            {"id": 1, "text": "a", "amount": 1, "category": "food", "date": "2024-01-01"},
            {"id": 1, "text": "b", "amount": 2, "category": "food", "date": "2024-01-02"}
        ]"#;
        let err = parse_import(json).unwrap_err();
        assert!(err.to_string().contains("duplicate transaction id 1"));
    }

    #[test]
    fn rejects_blank_text() {
        let json = r#"[{"id": 3, "text": "   ", "amount": -1, "category": "food", "date": "2024-01-01"}]"#;
        let err = parse_import(json).unwrap_err();
        assert!(matches!(err, LedgerError::ImportFormat(_)));
        assert!(err.to_string().contains("transaction 3 has empty text"));
    }

    #[test]
    fn rejects_empty_category() {
        let json = r#"[{"id": 4, "text": "Bus", "amount": -1, "category": " ", "date": "2024-01-01"}]"#;
        let err = parse_import(json).unwrap_err();
        assert!(err.to_string().contains("transaction 4 has empty category"));
    }

    #[test]
    fn rejects_maximal_id() {
        let json = r#"[{"id": 18446744073709551615, "text": "a", "amount": -1, "category": "food", "date": "2024-01-01"}]"#;
        let err = parse_import(json).unwrap_err();
        assert!(err.to_string().contains("out of range"));
    }

    #[test]
    fn export_is_pretty_and_reimportable() {
        let txs = parse_import(THREE).unwrap();
        let json = export_json(&txs).unwrap();
        assert!(json.starts_with("[\n"));
        assert!(json.contains("\"date\": \"2024-01-10\""));
        assert_eq!(parse_import(&json).unwrap(), txs);
    }

    #[test]
    fn export_file_name_uses_date() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 7).unwrap();
        assert_eq!(export_file_name(date), "expense_tracker_2024-03-07.json");
    }
}
