use std::collections::HashMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::journal::{AccountId, JournalEntry};

/// One ledger posting, carrying the running balance for its account as
/// of this row in traversal order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LedgerRow {
    pub account_id: AccountId,
    pub account_name: String,
    pub date: NaiveDate,
    pub description: String,
    pub debit: f64,
    pub credit: f64,
    pub balance: f64,
}

/// Flattens the entry set into postings with per-account running
/// balances.
///
/// Entries are iterated in the order supplied (the engine keeps newest
/// first) and are never re-sorted by date. One balance accumulator per
/// account id, seeded at zero, persists across entries for the whole
/// pass: `balance = previous + debit - credit`. Output rows follow the
/// flattened (entry, line) traversal order, so rows for different
/// accounts stay interleaved rather than grouped.
pub fn build_ledger(entries: &[JournalEntry]) -> Vec<LedgerRow> {
    let mut balances: HashMap<AccountId, f64> = HashMap::new();
    let mut rows = Vec::new();

    for entry in entries {
        for line in &entry.lines {
            let debit = line.debit();
            let credit = line.credit();
            let balance = balances.entry(line.account_id.clone()).or_insert(0.0);
            *balance += debit - credit;
            rows.push(LedgerRow {
                account_id: line.account_id.clone(),
                account_name: line.account_name.clone(),
                date: entry.date,
                description: entry.description.clone(),
                debit,
                credit,
                balance: *balance,
            });
        }
    }
    rows
}
