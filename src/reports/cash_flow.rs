use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::classify;
use crate::journal::JournalEntry;

/// Net cash movement for one activity label.
///
/// Unlike every other report, rows are keyed by the account display name
/// used directly as the activity label, not by account id: two distinct
/// accounts sharing a name merge into one row. That keying difference is
/// deliberate and observable; keep it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CashFlowRow {
    pub activity: String,
    pub amount: f64,
}

/// Sums debit-normal cash movement per activity label.
pub fn build_cash_flow(entries: &[JournalEntry]) -> Vec<CashFlowRow> {
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut rows: Vec<CashFlowRow> = Vec::new();

    for entry in entries {
        for line in &entry.lines {
            if !classify::is_cash_activity(&line.account_name) {
                continue;
            }
            let slot = *index.entry(line.account_name.clone()).or_insert_with(|| {
                rows.push(CashFlowRow {
                    activity: line.account_name.clone(),
                    amount: 0.0,
                });
                rows.len() - 1
            });
            rows[slot].amount += line.debit() - line.credit();
        }
    }
    rows
}
