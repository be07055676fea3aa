//! Pure report generators.
//!
//! Each generator consumes the full entry set in the order supplied and
//! rebuilds its rows from scratch. None of them perform I/O, mutate the
//! entries, or enforce the double-entry invariant; they aggregate
//! whatever they are given.

pub mod balance_sheet;
pub mod cash_flow;
pub mod income_statement;
pub mod ledger;
pub mod trial_balance;

pub use balance_sheet::{build_balance_sheet, BalanceSheetRow};
pub use cash_flow::{build_cash_flow, CashFlowRow};
pub use income_statement::{build_income_statement, IncomeStatementRow};
pub use ledger::{build_ledger, LedgerRow};
pub use trial_balance::{build_trial_balance, TrialBalanceRow};
