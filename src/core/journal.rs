//! Journal store: mood check-ins persisted as a JSON array, newest first
//!
//! Appends are read-modify-write, so every mutation in the process goes
//! through one lock and each save replaces the file by rename.

use lazy_static::lazy_static;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};
use tracing::{debug, info};
use crate::error::Result;
use crate::types::MoodCheckIn;

lazy_static! {
    static ref WRITE_LOCK: Mutex<()> = Mutex::new(());
}

/// Held for the whole load-modify-save cycle
fn write_guard() -> MutexGuard<'static, ()> {
    // The guarded value is (), so a poisoned lock is still usable
    WRITE_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// File-backed check-in history
#[derive(Debug, Clone)]
pub struct JournalStore {
    path: PathBuf,
}

impl JournalStore {
    /// Bind to a file; nothing is read until `load`
    pub fn open(path: impl AsRef<Path>) -> Self {
        Self { path: path.as_ref().to_path_buf() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// All check-ins, newest first. A missing or empty file is an empty journal.
    pub fn load(&self) -> Result<Vec<MoodCheckIn>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let json = std::fs::read_to_string(&self.path)?;
        if json.trim().is_empty() {
            return Ok(Vec::new());
        }
        let entries: Vec<MoodCheckIn> = serde_json::from_str(&json)?;
        debug!(path = %self.path.display(), entries = entries.len(), "Loaded journal");
        Ok(entries)
    }

    /// Prepend a check-in and persist. Returns the new entry count.
    pub fn append(&self, check_in: MoodCheckIn) -> Result<usize> {
        let _guard = write_guard();
        let mut entries = self.load()?;
        entries.insert(0, check_in);
        self.save(&entries)?;
        Ok(entries.len())
    }

    /// Drop every entry
    pub fn clear(&self) -> Result<()> {
        let _guard = write_guard();
        self.save(&[])?;
        info!(path = %self.path.display(), "Cleared journal");
        Ok(())
    }

    fn save(&self, entries: &[MoodCheckIn]) -> Result<()> {
        if let Some(dir) = self.path.parent().filter(|d| !d.as_os_str().is_empty()) {
            std::fs::create_dir_all(dir)?;
        }
        let json = serde_json::to_string_pretty(entries)?;
        let mut tmp = self.path.clone().into_os_string();
        tmp.push(".tmp");
        let tmp = PathBuf::from(tmp);
        std::fs::write(&tmp, json)?;
        std::fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ManoError;
    use crate::types::MoodResult;
    use tempfile::tempdir;

    fn entry(text: &str) -> MoodCheckIn {
        MoodCheckIn::new(
            text,
            MoodResult {
                emotion: "Neutral".into(),
                analysis: "No strong emotion detected; you are checking in.".into(),
                advice: "Can you tell me more?".into(),
            },
        )
    }

    #[test]
    fn test_missing_file_is_empty() {
        let dir = tempdir().unwrap();
        let store = JournalStore::open(dir.path().join("none.json"));
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn test_append_newest_first() {
        let dir = tempdir().unwrap();
        let store = JournalStore::open(dir.path().join("nested/history.json"));
        store.append(entry("first")).unwrap();
        let count = store.append(entry("second")).unwrap();
        assert_eq!(count, 2);
        let entries = store.load().unwrap();
        assert_eq!(entries[0].entry, "second");
        assert_eq!(entries[1].entry, "first");
    }

    #[test]
    fn test_clear() {
        let dir = tempdir().unwrap();
        let store = JournalStore::open(dir.path().join("history.json"));
        store.append(entry("one")).unwrap();
        store.clear().unwrap();
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn test_concurrent_appends_keep_file_valid() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("history.json");
        let handles: Vec<_> = (0..16)
            .map(|t| {
                let store = JournalStore::open(&path);
                std::thread::spawn(move || {
                    for i in 0..10 {
                        store.append(entry(&format!("{}-{}", t, i))).unwrap();
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        let entries = JournalStore::open(&path).load().unwrap();
        assert_eq!(entries.len(), 160);
        assert!(!dir.path().join("history.json.tmp").exists());
    }

    #[test]
    fn test_corrupt_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("history.json");
        std::fs::write(&path, "{not json").unwrap();
        let err = JournalStore::open(&path).load().unwrap_err();
        assert!(matches!(err, ManoError::Json(_)));
    }
}
