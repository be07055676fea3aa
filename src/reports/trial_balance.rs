use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::journal::{AccountId, JournalEntry};

/// Cumulative debit and credit totals for one account across all
/// entries.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TrialBalanceRow {
    pub account_id: AccountId,
    pub account_name: String,
    pub debit: f64,
    pub credit: f64,
}

/// Sums every line into one row per distinct account id, in
/// first-encountered order.
///
/// No balance invariant is checked here; callers wanting to verify that
/// the books balance sum the rows themselves.
pub fn build_trial_balance(entries: &[JournalEntry]) -> Vec<TrialBalanceRow> {
    let mut index: HashMap<AccountId, usize> = HashMap::new();
    let mut rows: Vec<TrialBalanceRow> = Vec::new();

    for entry in entries {
        for line in &entry.lines {
            let slot = *index.entry(line.account_id.clone()).or_insert_with(|| {
                rows.push(TrialBalanceRow {
                    account_id: line.account_id.clone(),
                    account_name: line.account_name.clone(),
                    debit: 0.0,
                    credit: 0.0,
                });
                rows.len() - 1
            });
            rows[slot].debit += line.debit();
            rows[slot].credit += line.credit();
        }
    }
    rows
}
