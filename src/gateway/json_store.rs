use std::{
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
    sync::Mutex,
};

use uuid::Uuid;

use crate::errors::{EngineError, Result};
use crate::journal::{JournalEntry, NewJournalEntry};

use super::JournalGateway;

const JOURNAL_FILE: &str = "journal.json";
const TMP_SUFFIX: &str = "tmp";

/// File-backed gateway storing the journal as a single JSON document.
///
/// Writes go through a temp file and rename so a crash mid-write cannot
/// leave a truncated journal behind. A missing file reads as an empty
/// journal.
pub struct JsonJournalStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl JsonJournalStore {
    /// Opens (or prepares) a store rooted at `root`, falling back to the
    /// platform data directory when none is given.
    pub fn new(root: Option<PathBuf>) -> Result<Self> {
        let root = resolve_base(root);
        ensure_dir(&root)?;
        Ok(Self {
            path: root.join(JOURNAL_FILE),
            write_lock: Mutex::new(()),
        })
    }

    pub fn new_default() -> Result<Self> {
        Self::new(None)
    }

    pub fn journal_path(&self) -> &Path {
        &self.path
    }

    fn read_entries(&self) -> Result<Vec<JournalEntry>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let data = fs::read_to_string(&self.path)?;
        Ok(serde_json::from_str(&data)?)
    }

    fn write_entries(&self, entries: &[JournalEntry]) -> Result<()> {
        let json = serde_json::to_string_pretty(entries)?;
        let tmp = tmp_path(&self.path);
        write_atomic(&tmp, &json)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

impl JournalGateway for JsonJournalStore {
    fn list(&self) -> Result<Vec<JournalEntry>> {
        self.read_entries()
    }

    fn create(&self, entry: NewJournalEntry) -> Result<JournalEntry> {
        let _guard = self
            .write_lock
            .lock()
            .map_err(|_| EngineError::Storage("journal store lock poisoned".into()))?;
        let mut entries = self.read_entries()?;
        let created = entry.into_entry();
        entries.insert(0, created.clone());
        self.write_entries(&entries)?;
        Ok(created)
    }

    fn delete(&self, id: Uuid) -> Result<()> {
        let _guard = self
            .write_lock
            .lock()
            .map_err(|_| EngineError::Storage("journal store lock poisoned".into()))?;
        let mut entries = self.read_entries()?;
        let before = entries.len();
        entries.retain(|entry| entry.id != id);
        if entries.len() == before {
            return Err(EngineError::NotFound(id));
        }
        self.write_entries(&entries)
    }
}

fn resolve_base(root: Option<PathBuf>) -> PathBuf {
    root.unwrap_or_else(|| {
        dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("accounting_core")
    })
}

fn ensure_dir(path: &Path) -> Result<()> {
    if !path.exists() {
        fs::create_dir_all(path)?;
    }
    Ok(())
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

fn write_atomic(path: &Path, data: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        ensure_dir(parent)?;
    }
    let mut file = File::create(path)?;
    file.write_all(data.as_bytes())?;
    file.flush()?;
    Ok(())
}
