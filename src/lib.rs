#![doc(test(attr(deny(warnings))))]

//! Accounting Core derives a general ledger, trial balance, income
//! statement, balance sheet, and cash-flow summary from an append-only
//! set of double-entry journal entries. Reports are recomputed wholesale
//! from the current entry set on every mutation; nothing derived is ever
//! persisted, so the reports can never drift from source truth.

pub mod classify;
pub mod engine;
pub mod errors;
pub mod gateway;
pub mod journal;
pub mod reports;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Accounting Core tracing initialized.");
    });
}

#[cfg(test)]
mod tests {
    #[test]
    fn init_does_not_panic() {
        super::init();
    }
}
