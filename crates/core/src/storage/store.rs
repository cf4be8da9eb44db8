use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use crate::errors::LedgerError;

/// The synchronous key-value byte store the ledger persists through.
///
/// An absent key is a perfectly valid state (first run). Implementations
/// only move bytes; what those bytes mean is the storage manager's
/// business.
pub trait StateStore {
    /// Read the value stored under `key`. `Ok(None)` when the key has
    /// never been written.
    fn read(&self, key: &str) -> Result<Option<Vec<u8>>, LedgerError>;

    /// Write (or overwrite) the value stored under `key`.
    fn write(&mut self, key: &str, value: &[u8]) -> Result<(), LedgerError>;
}

/// In-memory store for tests and throwaway sessions. Contents vanish
/// with the value.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: HashMap<String, Vec<u8>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl StateStore for MemoryStore {
    fn read(&self, key: &str) -> Result<Option<Vec<u8>>, LedgerError> {
        Ok(self.entries.get(key).cloned())
    }

    fn write(&mut self, key: &str, value: &[u8]) -> Result<(), LedgerError> {
        self.entries.insert(key.to_string(), value.to_vec());
        Ok(())
    }
}

/// File-backed store: each key lives in its own `<key>.json` file under
/// a base directory. The directory is created on first write, so reads
/// against a missing directory just report an absent key.
#[derive(Debug)]
pub struct FileStore {
    base_dir: PathBuf,
}

impl FileStore {
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.base_dir.join(format!("{key}.json"))
    }
}

impl StateStore for FileStore {
    fn read(&self, key: &str) -> Result<Option<Vec<u8>>, LedgerError> {
        match fs::read(self.path_for(key)) {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn write(&mut self, key: &str, value: &[u8]) -> Result<(), LedgerError> {
        fs::create_dir_all(&self.base_dir)?;
        fs::write(self.path_for(key), value)?;
        Ok(())
    }
}
