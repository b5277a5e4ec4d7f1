use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};

use anyhow::Context;

pub trait Storage: Send + Sync {
    fn get_item(&self, key: &str) -> anyhow::Result<Option<String>>;
    fn set_item(&self, key: &str, value: &str) -> anyhow::Result<()>;
}

#[derive(Debug, Default)]
pub struct MemoryStorage {
    items: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Storage for MemoryStorage {
    fn get_item(&self, key: &str) -> anyhow::Result<Option<String>> {
        let items = self.items.lock().unwrap_or_else(PoisonError::into_inner);
        Ok(items.get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> anyhow::Result<()> {
        let mut items = self.items.lock().unwrap_or_else(PoisonError::into_inner);
        items.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_items(&self) -> anyhow::Result<HashMap<String, String>> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(HashMap::new()),
            Err(e) => {
                return Err(e).with_context(|| format!("failed to read {}", self.path.display()))
            }
        };
        if raw.trim().is_empty() {
            return Ok(HashMap::new());
        }
        serde_json::from_str(&raw).with_context(|| format!("failed to parse {}", self.path.display()))
    }
}

impl Storage for FileStorage {
    fn get_item(&self, key: &str) -> anyhow::Result<Option<String>> {
        Ok(self.read_items()?.remove(key))
    }

    fn set_item(&self, key: &str, value: &str) -> anyhow::Result<()> {
        let mut items = self.read_items().unwrap_or_else(|e| {
            tracing::warn!(error = %format!("{e:#}"), "discarding unreadable client storage");
            HashMap::new()
        });
        items.insert(key.to_string(), value.to_string());

        if let Some(dir) = self.path.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(dir)
                .with_context(|| format!("failed to create {}", dir.display()))?;
        }
        let json = serde_json::to_string_pretty(&items)?;
        fs::write(&self.path, json).with_context(|| format!("failed to write {}", self.path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_roundtrip() {
        let storage = MemoryStorage::new();
        assert_eq!(storage.get_item("gs_lang").unwrap(), None);
        storage.set_item("gs_lang", "ro").unwrap();
        assert_eq!(storage.get_item("gs_lang").unwrap().as_deref(), Some("ro"));
    }

    #[test]
    fn test_file_storage_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("client").join("storage.json");

        FileStorage::new(&path).set_item("gs_lang", "en").unwrap();
        FileStorage::new(&path).set_item("gs_bookings", "[]").unwrap();

        let storage = FileStorage::new(&path);
        assert_eq!(storage.get_item("gs_lang").unwrap().as_deref(), Some("en"));
        assert_eq!(storage.get_item("gs_bookings").unwrap().as_deref(), Some("[]"));
    }

    #[test]
    fn test_file_storage_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileStorage::new(dir.path().join("nothing.json"));
        assert_eq!(storage.get_item("gs_lang").unwrap(), None);
    }

    #[test]
    fn test_file_storage_corrupt_read_errors_and_write_recovers() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("storage.json");
        fs::write(&path, "{{{").unwrap();

        let storage = FileStorage::new(&path);
        assert!(storage.get_item("gs_lang").is_err());

        storage.set_item("gs_lang", "ru").unwrap();
        assert_eq!(storage.get_item("gs_lang").unwrap().as_deref(), Some("ru"));
    }
}
