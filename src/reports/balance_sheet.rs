use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::classify::{self, BalanceCategory};
use crate::journal::{AccountId, JournalEntry};

/// Aggregated balance-sheet amount for one classified account.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BalanceSheetRow {
    pub account_id: AccountId,
    pub account_name: String,
    pub amount: f64,
    pub category: BalanceCategory,
}

/// Buckets classified accounts into asset, liability, and equity rows.
///
/// Amounts are debit-normal across all three categories: a debit line
/// adds, a credit line subtracts. A credit-heavy liability account will
/// therefore show a negative amount. That convention is replicated from
/// the system of record on purpose; do not invert it without a product
/// decision.
pub fn build_balance_sheet(entries: &[JournalEntry]) -> Vec<BalanceSheetRow> {
    let mut index: HashMap<AccountId, usize> = HashMap::new();
    let mut rows: Vec<BalanceSheetRow> = Vec::new();

    for entry in entries {
        for line in &entry.lines {
            let Some(category) = classify::balance_category(&line.account_name) else {
                continue;
            };
            let slot = *index.entry(line.account_id.clone()).or_insert_with(|| {
                rows.push(BalanceSheetRow {
                    account_id: line.account_id.clone(),
                    account_name: line.account_name.clone(),
                    amount: 0.0,
                    category,
                });
                rows.len() - 1
            });
            rows[slot].amount += line.debit() - line.credit();
        }
    }
    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    use crate::journal::{JournalLine, Side};

    fn entry(lines: Vec<JournalLine>) -> JournalEntry {
        let date = NaiveDate::from_ymd_opt(2024, 2, 1).unwrap();
        JournalEntry::new(date, "test", lines)
    }

    #[test]
    fn debit_normal_signs_apply_to_every_category() {
        let entries = vec![entry(vec![
            JournalLine::new("1000", "Cash", Side::Debit, 500.0),
            JournalLine::new("2000", "Accounts Payable", Side::Credit, 300.0),
            JournalLine::new("3000", "Owner Equity", Side::Credit, 200.0),
        ])];

        let rows = build_balance_sheet(&entries);
        assert_eq!(rows.len(), 3);

        assert_eq!(rows[0].category, BalanceCategory::Asset);
        assert_eq!(rows[0].amount, 500.0);

        // Credit-side liability and equity postings come out negative
        // under the debit-normal convention.
        assert_eq!(rows[1].category, BalanceCategory::Liability);
        assert_eq!(rows[1].amount, -300.0);
        assert_eq!(rows[2].category, BalanceCategory::Equity);
        assert_eq!(rows[2].amount, -200.0);
    }

    #[test]
    fn amounts_net_across_entries() {
        let entries = vec![
            entry(vec![JournalLine::new("1000", "Cash", Side::Debit, 100.0)]),
            entry(vec![JournalLine::new("1000", "Cash", Side::Credit, 40.0)]),
        ];

        let rows = build_balance_sheet(&entries);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].amount, 60.0);
    }

    #[test]
    fn income_only_accounts_do_not_appear() {
        let entries = vec![entry(vec![
            JournalLine::new("4000", "Sales Revenue", Side::Credit, 100.0),
            JournalLine::new("1000", "Cash", Side::Debit, 100.0),
        ])];

        let rows = build_balance_sheet(&entries);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].account_name, "Cash");
    }
}
