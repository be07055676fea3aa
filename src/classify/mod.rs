//! Lexical account classification.
//!
//! Accounts carry no trusted type field; statements classify them by
//! keyword matching over the human-readable display name. Rules live in
//! ordered tables so behavior is data rather than scattered conditionals,
//! and the exact keyword sets and precedence are load-bearing: changing
//! them silently reclassifies existing accounts.
//!
//! Classification is per statement family. The `tax` keyword appears in
//! both the expense and liability sets on purpose (tax expense vs. tax
//! payable), so one account can legitimately show up on the income
//! statement and the balance sheet.

use serde::{Deserialize, Serialize};

/// Income-statement category tags.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum IncomeCategory {
    Revenue,
    Expense,
}

/// Balance-sheet category tags.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum BalanceCategory {
    Asset,
    Liability,
    Equity,
}

const REVENUE_KEYWORDS: &[&str] = &["revenue", "sales", "income", "turnover"];
const EXPENSE_KEYWORDS: &[&str] = &[
    "expense",
    "cost",
    "supplies",
    "rent",
    "utilities",
    "salary",
    "wage",
    "insurance",
    "maintenance",
    "tax",
];
const ASSET_KEYWORDS: &[&str] = &["cash", "asset", "receivable", "inventory", "prepaid", "bank"];
const LIABILITY_KEYWORDS: &[&str] = &["liability", "payable", "loan", "accrued", "tax"];
const EQUITY_KEYWORDS: &[&str] = &["equity", "capital", "retained", "drawing"];
const CASH_ACTIVITY_KEYWORDS: &[&str] = &["cash", "bank", "checking", "savings"];

/// Ordered rule tables; within a family the first matching rule wins.
const INCOME_RULES: &[(&[&str], IncomeCategory)] = &[
    (REVENUE_KEYWORDS, IncomeCategory::Revenue),
    (EXPENSE_KEYWORDS, IncomeCategory::Expense),
];

const BALANCE_RULES: &[(&[&str], BalanceCategory)] = &[
    (ASSET_KEYWORDS, BalanceCategory::Asset),
    (LIABILITY_KEYWORDS, BalanceCategory::Liability),
    (EQUITY_KEYWORDS, BalanceCategory::Equity),
];

fn matches_any(account_name: &str, keywords: &[&str]) -> bool {
    let lowered = account_name.to_lowercase();
    keywords.iter().any(|keyword| lowered.contains(keyword))
}

/// Classifies an account name for the income statement. A miss excludes
/// the account from that statement; it is not an error.
pub fn income_category(account_name: &str) -> Option<IncomeCategory> {
    INCOME_RULES
        .iter()
        .find(|(keywords, _)| matches_any(account_name, keywords))
        .map(|(_, category)| *category)
}

/// Classifies an account name for the balance sheet.
pub fn balance_category(account_name: &str) -> Option<BalanceCategory> {
    BALANCE_RULES
        .iter()
        .find(|(keywords, _)| matches_any(account_name, keywords))
        .map(|(_, category)| *category)
}

/// Whether an account name counts as cash activity for the cash-flow
/// summary.
pub fn is_cash_activity(account_name: &str) -> bool {
    matches_any(account_name, CASH_ACTIVITY_KEYWORDS)
}
