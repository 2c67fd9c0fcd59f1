//! JSON-file key-value implementation of `ScoreHistoryStore`.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};

use geoquiz_core::error::DomainError;
use geoquiz_core::history::{GameSummary, HISTORY_KEY, ScoreHistoryStore, append_bounded};
use tracing::debug;
use uuid::Uuid;

/// Stores each key as `<dir>/<key>.json`.
///
/// Writes from one store instance are serialized. Two instances pointed at
/// the same file do not coordinate with each other.
#[derive(Debug)]
pub struct JsonFileHistoryStore {
    dir: PathBuf,
    key: String,
    write_lock: Mutex<()>,
}

impl JsonFileHistoryStore {
    /// Creates a store for the score log under `dir`.
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self::with_key(dir, HISTORY_KEY)
    }

    /// Creates a store for an arbitrary key under `dir`.
    #[must_use]
    pub fn with_key(dir: impl Into<PathBuf>, key: impl Into<String>) -> Self {
        Self {
            dir: dir.into(),
            key: key.into(),
            write_lock: Mutex::new(()),
        }
    }

    /// File backing this store's key.
    #[must_use]
    pub fn path(&self) -> PathBuf {
        self.dir.join(format!("{}.json", self.key))
    }

    /// A temp file no other write shares.
    fn temp_path(&self) -> PathBuf {
        self.dir
            .join(format!(".{}.{}.json.tmp", self.key, Uuid::new_v4().simple()))
    }

    fn lock(&self) -> Result<MutexGuard<'_, ()>, DomainError> {
        self.write_lock
            .lock()
            .map_err(|e| DomainError::Infrastructure(format!("history file lock poisoned: {e}")))
    }

    fn read(&self) -> Result<Vec<GameSummary>, DomainError> {
        let path = self.path();
        let bytes = match fs::read(&path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(storage_error("reading", &path, &e)),
        };

        serde_json::from_slice(&bytes).map_err(|e| {
            DomainError::Serialization(format!("decoding {}: {e}", path.display()))
        })
    }

    fn write(&self, history: &[GameSummary]) -> Result<(), DomainError> {
        fs::create_dir_all(&self.dir).map_err(|e| storage_error("creating", &self.dir, &e))?;

        let bytes = serde_json::to_vec_pretty(history)
            .map_err(|e| DomainError::Serialization(format!("encoding score history: {e}")))?;

        // Readers never observe a partially written log.
        let temp = self.temp_path();
        if let Err(e) = fs::write(&temp, bytes) {
            let _ = fs::remove_file(&temp);
            return Err(storage_error("writing", &temp, &e));
        }
        let path = self.path();
        if let Err(e) = fs::rename(&temp, &path) {
            let _ = fs::remove_file(&temp);
            return Err(storage_error("replacing", &path, &e));
        }

        debug!(path = %path.display(), entries = history.len(), "score history saved");
        Ok(())
    }
}

fn storage_error(action: &str, path: &Path, e: &std::io::Error) -> DomainError {
    DomainError::Storage(format!("{action} {}: {e}", path.display()))
}

impl ScoreHistoryStore for JsonFileHistoryStore {
    fn load(&self) -> Result<Vec<GameSummary>, DomainError> {
        self.read()
    }

    fn save(&self, history: &[GameSummary]) -> Result<(), DomainError> {
        let _guard = self.lock()?;
        self.write(history)
    }

    fn append(&self, entry: GameSummary) -> Result<(), DomainError> {
        let _guard = self.lock()?;
        let history = self.read()?;
        self.write(&append_bounded(history, entry))
    }
}
