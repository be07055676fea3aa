use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::classify::{self, IncomeCategory};
use crate::journal::{AccountId, JournalEntry};

/// Aggregated income-statement amount for one classified account.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct IncomeStatementRow {
    pub account_id: AccountId,
    pub account_name: String,
    pub amount: f64,
    pub category: IncomeCategory,
}

/// Buckets classified accounts into revenue and expense rows.
///
/// Amounts accumulate at face value: debit-typed and credit-typed lines
/// both add their raw amount. The line side never drives the sign here;
/// only the name-based classification picks the category tag. Accounts
/// matching no income keyword are excluded.
pub fn build_income_statement(entries: &[JournalEntry]) -> Vec<IncomeStatementRow> {
    let mut index: HashMap<AccountId, usize> = HashMap::new();
    let mut rows: Vec<IncomeStatementRow> = Vec::new();

    for entry in entries {
        for line in &entry.lines {
            let Some(category) = classify::income_category(&line.account_name) else {
                continue;
            };
            let slot = *index.entry(line.account_id.clone()).or_insert_with(|| {
                rows.push(IncomeStatementRow {
                    account_id: line.account_id.clone(),
                    account_name: line.account_name.clone(),
                    amount: 0.0,
                    category,
                });
                rows.len() - 1
            });
            rows[slot].amount += line.amount;
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
    fn amounts_accumulate_at_face_value_regardless_of_side() {
        let entries = vec![
            entry(vec![
                JournalLine::new("4000", "Sales Revenue", Side::Credit, 100.0),
                JournalLine::new("1000", "Petty Float", Side::Debit, 100.0),
            ]),
            entry(vec![
                // A debit against revenue still adds at face value.
                JournalLine::new("4000", "Sales Revenue", Side::Debit, 25.0),
                JournalLine::new("1000", "Petty Float", Side::Credit, 25.0),
            ]),
        ];

        let rows = build_income_statement(&entries);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].account_name, "Sales Revenue");
        assert_eq!(rows[0].amount, 125.0);
        assert_eq!(rows[0].category, IncomeCategory::Revenue);
    }

    #[test]
    fn unclassified_accounts_are_excluded() {
        let entries = vec![entry(vec![
            JournalLine::new("9999", "Suspense", Side::Debit, 10.0),
            JournalLine::new("5100", "Rent Expense", Side::Credit, 10.0),
        ])];

        let rows = build_income_statement(&entries);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].account_name, "Rent Expense");
        assert_eq!(rows[0].category, IncomeCategory::Expense);
    }

    #[test]
    fn distinct_account_ids_stay_separate_rows() {
        let entries = vec![entry(vec![
            JournalLine::new("5100", "Rent Expense", Side::Debit, 10.0),
            JournalLine::new("5200", "Rent Expense", Side::Debit, 15.0),
        ])];

        let rows = build_income_statement(&entries);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].amount, 10.0);
        assert_eq!(rows[1].amount, 15.0);
    }
}
