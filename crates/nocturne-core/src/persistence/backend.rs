//! Journal file persistence operations.
//!
//! # File Structure
//!
//! The full entry collection is saved to:
//! ```text
//! ~/.local/share/nocturne/dreams.json
//! ```
//!
//! # Design Notes
//!
//! - **Atomic writes**: Write to temp file, then rename (prevents corruption)
//! - **Missing file is empty**: A first launch has no file; `load` returns an
//!   empty collection, not an error
//! - **Quarantine**: An unreadable file is renamed aside before the store
//!   moves on, so the bytes stay available for manual recovery

use std::fs;
use std::path::{Path, PathBuf};

use crate::paths;

use super::codec::{decode_entries, encode_entries, CodecError};
use super::types::DreamEntry;

/// File name of the journal inside the data directory.
const JOURNAL_FILE: &str = "dreams.json";

/// Suffix appended to an unreadable journal when it is quarantined.
const CORRUPT_SUFFIX: &str = "corrupt";

/// Error type for journal storage operations.
#[derive(Debug)]
pub enum StorageError {
    /// IO error (permission denied, disk full, etc.)
    Io(std::io::Error),
    /// Encoding error while serializing entries for a save
    Codec(CodecError),
    /// The storage location could not be resolved
    NoStorageDir(String),
}

impl std::fmt::Display for StorageError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StorageError::Io(e) => write!(f, "IO error: {e}"),
            StorageError::Codec(e) => write!(f, "codec error: {e}"),
            StorageError::NoStorageDir(e) => write!(f, "no storage directory: {e}"),
        }
    }
}

impl std::error::Error for StorageError {}

impl From<std::io::Error> for StorageError {
    fn from(e: std::io::Error) -> Self {
        StorageError::Io(e)
    }
}

impl From<CodecError> for StorageError {
    fn from(e: CodecError) -> Self {
        StorageError::Codec(e)
    }
}

/// The single on-disk location behind the record store.
///
/// Only ever written by the store's save worker; read once at startup.
#[derive(Debug, Clone)]
pub struct JournalBackend {
    dir: PathBuf,
}

impl JournalBackend {
    /// Backend rooted at an explicit directory. Used by tests and by
    /// frontends that manage their own data directory.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Backend at the well-known application data directory.
    pub fn default_location() -> Result<Self, StorageError> {
        let dir = paths::data_dir().map_err(StorageError::NoStorageDir)?;
        Ok(Self { dir })
    }

    /// Path of the journal file.
    pub fn journal_path(&self) -> PathBuf {
        self.dir.join(JOURNAL_FILE)
    }

    /// Load the full entry collection.
    ///
    /// A missing file yields an empty collection. An unreadable file is
    /// quarantined (renamed to `dreams.json.corrupt`), logged, and also
    /// yields an empty collection; only filesystem failures surface as
    /// errors.
    pub fn load(&self) -> Result<Vec<DreamEntry>, StorageError> {
        let path = self.journal_path();

        if !path.exists() {
            return Ok(Vec::new());
        }

        let bytes = fs::read(&path)?;
        match decode_entries(&bytes) {
            Ok(entries) => Ok(entries),
            Err(err) => {
                log::warn!(
                    "Journal at {} is unreadable ({}), quarantining and starting empty",
                    path.display(),
                    err
                );
                self.quarantine(&path);
                Ok(Vec::new())
            }
        }
    }

    /// Save the full entry collection.
    ///
    /// # Atomic Write Strategy
    ///
    /// 1. Write to `dreams.json.tmp`
    /// 2. Rename to `dreams.json`
    ///
    /// This prevents data corruption if the write is interrupted. Each save
    /// fully supersedes the previous on-disk content.
    pub fn save(&self, entries: &[DreamEntry]) -> Result<(), StorageError> {
        fs::create_dir_all(&self.dir)?;

        let file_path = self.journal_path();
        let temp_path = self.dir.join(format!("{JOURNAL_FILE}.tmp"));

        let bytes = encode_entries(entries)?;
        fs::write(&temp_path, bytes)?;
        fs::rename(&temp_path, &file_path)?;

        Ok(())
    }

    /// Rename an unreadable journal aside so its bytes survive the next save.
    fn quarantine(&self, path: &Path) {
        let quarantine_path = self.dir.join(format!("{JOURNAL_FILE}.{CORRUPT_SUFFIX}"));
        if let Err(err) = fs::rename(path, &quarantine_path) {
            log::error!(
                "Failed to quarantine unreadable journal {}: {}",
                path.display(),
                err
            );
        }
    }
}
