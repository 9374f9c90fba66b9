//=========================================================================
// Score Store
//=========================================================================
//
// Persistence for the single high score (key "score").
//
// Implementations:
//   RonScoreStore:    durable, one RON file on disk
//   MemoryScoreStore: volatile, for tests and as a fallback
//
// The session reads once at startup and writes only when a finished run
// beats the high score, never per tick.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::debug;
use serde::{Deserialize, Serialize};

//=== Internal Dependencies ===============================================

use super::error::StoreError;

//=== ScoreStore Trait ====================================================

/// Key-value store holding the high score.
///
/// `Send` because the session lives on the logic thread.
pub trait ScoreStore: Send {
    /// Returns the stored score, or 0 if none has been recorded.
    fn get(&self) -> Result<u32, StoreError>;

    /// Replaces the stored score.
    fn set(&mut self, score: u32) -> Result<(), StoreError>;
}

//=== RonScoreStore =======================================================

#[derive(Debug, Serialize, Deserialize)]
struct ScoreRecord {
    score: u32,
}

/// High score persisted as `(score: N)` in a RON file.
///
/// Writes go to a sibling temp file first and are renamed into place, so
/// a crash mid-write leaves the previous score intact.
#[derive(Debug, Clone)]
pub struct RonScoreStore {
    path: PathBuf,
}

impl RonScoreStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ScoreStore for RonScoreStore {
    fn get(&self) -> Result<u32, StoreError> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!(target: "store", "No score file at {}, starting at 0", self.path.display());
                return Ok(0);
            }
            Err(e) => return Err(StoreError::Read(e)),
        };

        ron::from_str::<ScoreRecord>(&text)
            .map(|record| record.score)
            .map_err(|e| StoreError::Corrupt(e.to_string()))
    }

    fn set(&mut self, score: u32) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(StoreError::Write)?;
        }

        let text = ron::ser::to_string_pretty(&ScoreRecord { score }, Default::default())
            .map_err(|e| StoreError::Corrupt(e.to_string()))?;

        let tmp = self.path.with_extension("ron.tmp");
        fs::write(&tmp, text).map_err(StoreError::Write)?;
        fs::rename(&tmp, &self.path).map_err(StoreError::Write)?;

        debug!(target: "store", "Saved high score {} to {}", score, self.path.display());
        Ok(())
    }
}

//=== MemoryScoreStore ====================================================

/// Volatile store; loses its value with the process.
#[derive(Debug, Clone, Default)]
pub struct MemoryScoreStore {
    score: Option<u32>,
}

impl MemoryScoreStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_score(score: u32) -> Self {
        Self { score: Some(score) }
    }
}

impl ScoreStore for MemoryScoreStore {
    fn get(&self) -> Result<u32, StoreError> {
        Ok(self.score.unwrap_or(0))
    }

    fn set(&mut self, score: u32) -> Result<(), StoreError> {
        self.score = Some(score);
        Ok(())
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_reads_as_zero() {
        let dir = tempfile::tempdir().unwrap();
        let store = RonScoreStore::new(dir.path().join("score.ron"));
        assert_eq!(store.get().unwrap(), 0);
    }

    #[test]
    fn saved_score_survives_a_new_store() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("score.ron");

        let mut store = RonScoreStore::new(&path);
        store.set(17).unwrap();

        let reopened = RonScoreStore::new(&path);
        assert_eq!(reopened.get().unwrap(), 17);
        assert!(!path.with_extension("ron.tmp").exists());
    }

    #[test]
    fn overwrite_replaces_previous_score() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = RonScoreStore::new(dir.path().join("score.ron"));
        store.set(3).unwrap();
        store.set(8).unwrap();
        assert_eq!(store.get().unwrap(), 8);
    }

    #[test]
    fn garbage_file_is_corrupt() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("score.ron");
        fs::write(&path, "not a score").unwrap();

        let store = RonScoreStore::new(&path);
        assert!(matches!(store.get(), Err(StoreError::Corrupt(_))));
    }

    #[test]
    fn directory_path_is_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let store = RonScoreStore::new(dir.path());
        assert!(store.get().is_err());
    }

    #[test]
    fn memory_store_defaults_to_zero() {
        let mut store = MemoryScoreStore::new();
        assert_eq!(store.get().unwrap(), 0);
        store.set(5).unwrap();
        assert_eq!(store.get().unwrap(), 5);
        assert_eq!(MemoryScoreStore::with_score(9).get().unwrap(), 9);
    }
}
