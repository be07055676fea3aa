//! Persistence seam for raw journal entries.
//!
//! The engine never owns durable storage; it talks to a gateway that
//! lists, creates, and deletes entries. Entries are opaque records to the
//! gateway and derived reports are never written through it.

pub mod json_store;
pub mod memory;

use uuid::Uuid;

use crate::errors::Result;
use crate::journal::{JournalEntry, NewJournalEntry};

/// Abstraction over persistence backends that own the raw journal
/// entries. Backends assign entry ids and decide durability.
pub trait JournalGateway: Send + Sync {
    /// Returns every stored entry, newest first.
    fn list(&self) -> Result<Vec<JournalEntry>>;

    /// Persists a new entry and returns it with its assigned id.
    fn create(&self, entry: NewJournalEntry) -> Result<JournalEntry>;

    /// Deletes the entry with the given id.
    fn delete(&self, id: Uuid) -> Result<()>;
}

pub use json_store::JsonJournalStore;
pub use memory::InMemoryGateway;
