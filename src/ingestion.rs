use crate::error::{AnalysisError, Result};
use crate::schema::TrialBalanceRow;
use serde_json::Value;
use std::collections::BTreeMap;

/// One untyped row of a tabular import (CSV, JSON body, spreadsheet export):
/// column name to raw cell value.
pub type RawRecord = BTreeMap<String, Value>;

const REQUIRED_COLUMNS: [&str; 3] = ["account", "debit", "credit"];

/// Lenient amount coercion for imported cells: numbers pass through, numeric
/// strings are parsed (French exports with spaces as thousands separators and
/// a comma decimal separator included), everything else becomes 0.0. This is
/// a deliberate accept-garbage-input policy for ledger exports, applied only
/// to amount columns.
pub fn parse_amount(value: &Value) -> f64 {
    match value {
        Value::Number(n) => n.as_f64().unwrap_or(0.0),
        Value::String(s) => {
            let cleaned: String = s
                .trim()
                .chars()
                .filter(|c| !c.is_whitespace() && *c != '\u{a0}')
                .map(|c| if c == ',' { '.' } else { c })
                .collect();
            cleaned.parse::<f64>().unwrap_or(0.0)
        }
        _ => 0.0,
    }
}

fn cell_to_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.trim().to_string(),
        Value::Number(n) => n.to_string(),
        _ => String::new(),
    }
}

/// Normalizes raw imported records into typed trial balance rows.
///
/// The required columns `account`, `debit` and `credit` must all be present
/// in the table (checked against the first record, which stands in for the
/// header). Account codes are trimmed; amounts go through [`parse_amount`].
/// An empty table normalizes to an empty row set.
pub fn normalize_trial_balance(records: &[RawRecord]) -> Result<Vec<TrialBalanceRow>> {
    if let Some(first) = records.first() {
        let missing: Vec<&str> = REQUIRED_COLUMNS
            .iter()
            .filter(|col| !first.contains_key(**col))
            .copied()
            .collect();
        if !missing.is_empty() {
            return Err(AnalysisError::Validation {
                details: format!("missing required columns: {}", missing.join(", ")),
            });
        }
    }

    let rows = records
        .iter()
        .map(|record| TrialBalanceRow {
            account: record.get("account").map(cell_to_string).unwrap_or_default(),
            label: record
                .get("label")
                .map(cell_to_string)
                .filter(|s| !s.is_empty()),
            debit: record.get("debit").map(parse_amount).unwrap_or(0.0),
            credit: record.get("credit").map(parse_amount).unwrap_or(0.0),
        })
        .collect();

    Ok(rows)
}
