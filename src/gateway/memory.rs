use std::sync::Mutex;

use uuid::Uuid;

use crate::errors::{EngineError, Result};
use crate::journal::{JournalEntry, NewJournalEntry};

use super::JournalGateway;

/// In-memory gateway for tests and embedded use.
///
/// Entries live newest first, matching the engine's prepend-on-create
/// convention, so `list` hands back the exact traversal order the
/// generators expect.
#[derive(Default)]
pub struct InMemoryGateway {
    entries: Mutex<Vec<JournalEntry>>,
}

impl InMemoryGateway {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts the gateway with pre-existing entries, newest first.
    pub fn seeded(entries: Vec<JournalEntry>) -> Self {
        Self {
            entries: Mutex::new(entries),
        }
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, Vec<JournalEntry>>> {
        self.entries
            .lock()
            .map_err(|_| EngineError::Storage("journal store mutex poisoned".into()))
    }
}

impl JournalGateway for InMemoryGateway {
    fn list(&self) -> Result<Vec<JournalEntry>> {
        Ok(self.lock()?.clone())
    }

    fn create(&self, entry: NewJournalEntry) -> Result<JournalEntry> {
        let created = entry.into_entry();
        self.lock()?.insert(0, created.clone());
        Ok(created)
    }

    fn delete(&self, id: Uuid) -> Result<()> {
        let mut entries = self.lock()?;
        let before = entries.len();
        entries.retain(|entry| entry.id != id);
        if entries.len() == before {
            return Err(EngineError::NotFound(id));
        }
        Ok(())
    }
}
