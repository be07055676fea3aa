//! Journal domain models: entries, debit/credit lines, and the advisory
//! double-entry balance check.

pub mod entry;

pub use entry::{is_balanced, AccountId, JournalEntry, JournalLine, NewJournalEntry, Side};
