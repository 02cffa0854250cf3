use std::cell::RefCell;
use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

use super::error::Result;

/// Durable per-site key/value store holding one serialized record per key.
///
/// Reads never fail: a missing or unreadable record is simply absent.
/// Writes are synchronous and best-effort; callers decide whether a write
/// failure is worth surfacing (the settings layer swallows it and keeps
/// the in-memory value).
pub trait Storage {
    fn read(&self, key: &str) -> Option<String>;
    fn write(&self, key: &str, value: &str) -> Result<()>;
    fn remove(&self, key: &str);
}

/// File-backed storage: one `<key>.json` per record under a root directory.
pub struct FileStorage {
    root: PathBuf,
}

impl FileStorage {
    /// Storage rooted at the platform config directory (cross-platform).
    pub fn new() -> Self {
        let mut root = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        root.push("reelfolio");
        Self { root }
    }

    /// Storage rooted at an explicit directory.
    pub fn at(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn record_path(&self, key: &str) -> PathBuf {
        self.root.join(format!("{key}.json"))
    }
}

impl Default for FileStorage {
    fn default() -> Self {
        Self::new()
    }
}

impl Storage for FileStorage {
    fn read(&self, key: &str) -> Option<String> {
        fs::read_to_string(self.record_path(key)).ok()
    }

    fn write(&self, key: &str, value: &str) -> Result<()> {
        fs::create_dir_all(&self.root)?;
        fs::write(self.record_path(key), value)?;
        Ok(())
    }

    fn remove(&self, key: &str) {
        let _ = fs::remove_file(self.record_path(key));
    }
}

/// In-memory storage. Backs tests, and doubles as the session-only store
/// when durable storage is unavailable (state survives the session but not
/// a reload, the accepted degradation).
#[derive(Default)]
pub struct MemoryStorage {
    records: RefCell<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Storage for MemoryStorage {
    fn read(&self, key: &str) -> Option<String> {
        self.records.borrow().get(key).cloned()
    }

    fn write(&self, key: &str, value: &str) -> Result<()> {
        self.records
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) {
        self.records.borrow_mut().remove(key);
    }
}

/// Storage that rejects every write. Used in tests to exercise the
/// write-failure path.
#[cfg(test)]
pub struct UnwritableStorage;

#[cfg(test)]
impl Storage for UnwritableStorage {
    fn read(&self, _key: &str) -> Option<String> {
        None
    }

    fn write(&self, key: &str, _value: &str) -> Result<()> {
        Err(super::error::AppError::Storage(format!(
            "cannot write record {key}"
        )))
    }

    fn remove(&self, _key: &str) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_file_storage_round_trip() {
        let dir = tempdir().unwrap();
        let storage = FileStorage::at(dir.path().join("reelfolio"));

        assert!(storage.read("design-settings").is_none());
        storage.write("design-settings", "{\"colors\":{}}").unwrap();
        assert_eq!(
            storage.read("design-settings").as_deref(),
            Some("{\"colors\":{}}")
        );

        storage.remove("design-settings");
        assert!(storage.read("design-settings").is_none());
    }

    #[test]
    fn test_file_storage_creates_root_on_write() {
        let dir = tempdir().unwrap();
        let storage = FileStorage::at(dir.path().join("nested").join("deeper"));
        storage.write("admin-auth", "{}").unwrap();
        assert!(dir.path().join("nested/deeper/admin-auth.json").exists());
    }

    #[test]
    fn test_file_storage_remove_missing_is_noop() {
        let dir = tempdir().unwrap();
        let storage = FileStorage::at(dir.path());
        storage.remove("never-written");
    }

    #[test]
    fn test_memory_storage() {
        let storage = MemoryStorage::new();
        storage.write("long-form", "[]").unwrap();
        assert_eq!(storage.read("long-form").as_deref(), Some("[]"));
        storage.remove("long-form");
        assert!(storage.read("long-form").is_none());
    }

    #[test]
    fn test_unwritable_storage_errors() {
        let storage = UnwritableStorage;
        assert!(storage.write("x", "y").is_err());
        assert!(storage.read("x").is_none());
    }
}
