//! Recalculation orchestrator.
//!
//! Owns the in-memory journal-entry set and the five derived report
//! collections. Every mutation (create, delete, explicit reload) flips
//! all report families to loading, reruns every generator synchronously
//! against the updated set, and flips them back to ready. Mutations take
//! `&mut self`, so ownership serializes them without a lock.

use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::errors::Result;
use crate::gateway::JournalGateway;
use crate::journal::{is_balanced, JournalEntry, NewJournalEntry};
use crate::reports::{
    build_balance_sheet, build_cash_flow, build_income_statement, build_ledger,
    build_trial_balance, BalanceSheetRow, CashFlowRow, IncomeStatementRow, LedgerRow,
    TrialBalanceRow,
};

/// Lifecycle of one report family between mutations.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ReportStatus {
    Loading,
    #[default]
    Ready,
}

/// Per-family refresh flags. All five flip together around a recompute,
/// but each family is individually queryable by consumers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RefreshFlags {
    pub ledger: ReportStatus,
    pub trial_balance: ReportStatus,
    pub income_statement: ReportStatus,
    pub balance_sheet: ReportStatus,
    pub cash_flow: ReportStatus,
}

impl RefreshFlags {
    fn set_all(&mut self, status: ReportStatus) {
        self.ledger = status;
        self.trial_balance = status;
        self.income_statement = status;
        self.balance_sheet = status;
        self.cash_flow = status;
    }
}

/// Hook letting synchronous consumers witness both recompute phases:
/// first every family loading, then every family ready. Test harnesses
/// and polling UIs rely on seeing both.
pub trait ReportObserver: Send + Sync {
    fn reports_loading(&self) {}
    fn reports_ready(&self) {}
}

/// The five derived collections published after each recompute.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Reports {
    pub ledger: Vec<LedgerRow>,
    pub trial_balance: Vec<TrialBalanceRow>,
    pub income_statement: Vec<IncomeStatementRow>,
    pub balance_sheet: Vec<BalanceSheetRow>,
    pub cash_flow: Vec<CashFlowRow>,
}

impl Reports {
    fn derive(entries: &[JournalEntry]) -> Self {
        Self {
            ledger: build_ledger(entries),
            trial_balance: build_trial_balance(entries),
            income_statement: build_income_statement(entries),
            balance_sheet: build_balance_sheet(entries),
            cash_flow: build_cash_flow(entries),
        }
    }
}

/// Facade that owns the in-memory entry set, drives the gateway, and
/// republishes all five derived collections on every mutation.
///
/// Gateway failures leave the entry set and the previously derived
/// reports untouched: consumers keep showing the last good state with
/// `refresh_error` as the "failed to refresh" indicator.
pub struct AccountingEngine {
    gateway: Box<dyn JournalGateway>,
    /// Newest first; `add_entry` prepends. Generators iterate this order
    /// as-is, never re-sorting by date.
    entries: Vec<JournalEntry>,
    reports: Reports,
    flags: RefreshFlags,
    refresh_error: Option<String>,
    observer: Option<Box<dyn ReportObserver>>,
}

impl AccountingEngine {
    /// Creates an engine with an empty entry set. Call [`reload`] to pull
    /// the journal from the gateway.
    ///
    /// [`reload`]: AccountingEngine::reload
    pub fn new(gateway: Box<dyn JournalGateway>) -> Self {
        Self {
            gateway,
            entries: Vec::new(),
            reports: Reports::default(),
            flags: RefreshFlags::default(),
            refresh_error: None,
            observer: None,
        }
    }

    pub fn with_observer(mut self, observer: Box<dyn ReportObserver>) -> Self {
        self.observer = Some(observer);
        self
    }

    /// Re-fetches every entry from the gateway, replaces the in-memory
    /// set wholesale, and recomputes all reports.
    pub fn reload(&mut self) -> Result<()> {
        match self.gateway.list() {
            Ok(entries) => {
                self.entries = entries;
                self.refresh_error = None;
                self.recompute();
                info!(entries = self.entries.len(), "journal reloaded");
                Ok(())
            }
            Err(err) => {
                warn!(error = %err, "journal reload failed; keeping prior reports");
                self.refresh_error = Some(err.to_string());
                Err(err)
            }
        }
    }

    /// Creates an entry via the gateway, prepends it to the in-memory
    /// set, recomputes, and returns the created entry.
    pub fn add_entry(&mut self, entry: NewJournalEntry) -> Result<JournalEntry> {
        match self.gateway.create(entry) {
            Ok(created) => {
                self.entries.insert(0, created.clone());
                self.refresh_error = None;
                self.recompute();
                info!(entry_id = %created.id, "journal entry created");
                Ok(created)
            }
            Err(err) => {
                warn!(error = %err, "entry creation failed; keeping prior reports");
                self.refresh_error = Some(err.to_string());
                Err(err)
            }
        }
    }

    /// Deletes an entry via the gateway, drops it from the in-memory set,
    /// and recomputes.
    pub fn remove_entry(&mut self, id: Uuid) -> Result<()> {
        match self.gateway.delete(id) {
            Ok(()) => {
                self.entries.retain(|entry| entry.id != id);
                self.refresh_error = None;
                self.recompute();
                info!(entry_id = %id, "journal entry deleted");
                Ok(())
            }
            Err(err) => {
                warn!(error = %err, entry_id = %id, "entry deletion failed; keeping prior reports");
                self.refresh_error = Some(err.to_string());
                Err(err)
            }
        }
    }

    /// Advisory double-entry pre-check for callers; the recompute path
    /// never enforces it.
    pub fn validate(entry: &JournalEntry) -> bool {
        is_balanced(entry)
    }

    pub fn entries(&self) -> &[JournalEntry] {
        &self.entries
    }

    pub fn ledger(&self) -> &[LedgerRow] {
        &self.reports.ledger
    }

    pub fn trial_balance(&self) -> &[TrialBalanceRow] {
        &self.reports.trial_balance
    }

    pub fn income_statement(&self) -> &[IncomeStatementRow] {
        &self.reports.income_statement
    }

    pub fn balance_sheet(&self) -> &[BalanceSheetRow] {
        &self.reports.balance_sheet
    }

    pub fn cash_flow(&self) -> &[CashFlowRow] {
        &self.reports.cash_flow
    }

    pub fn reports(&self) -> &Reports {
        &self.reports
    }

    pub fn ledger_refreshing(&self) -> bool {
        self.flags.ledger == ReportStatus::Loading
    }

    pub fn trial_balance_refreshing(&self) -> bool {
        self.flags.trial_balance == ReportStatus::Loading
    }

    pub fn income_statement_refreshing(&self) -> bool {
        self.flags.income_statement == ReportStatus::Loading
    }

    pub fn balance_sheet_refreshing(&self) -> bool {
        self.flags.balance_sheet == ReportStatus::Loading
    }

    pub fn cash_flow_refreshing(&self) -> bool {
        self.flags.cash_flow == ReportStatus::Loading
    }

    /// Message from the most recent failed gateway call, cleared by the
    /// next successful mutation or reload. Prior reports stay published
    /// while this is set.
    pub fn refresh_error(&self) -> Option<&str> {
        self.refresh_error.as_deref()
    }

    fn recompute(&mut self) {
        self.flags.set_all(ReportStatus::Loading);
        if let Some(observer) = &self.observer {
            observer.reports_loading();
        }

        self.reports = Reports::derive(&self.entries);

        self.flags.set_all(ReportStatus::Ready);
        if let Some(observer) = &self.observer {
            observer.reports_ready();
        }
        debug!(
            entries = self.entries.len(),
            ledger_rows = self.reports.ledger.len(),
            "derived reports recomputed"
        );
    }
}
