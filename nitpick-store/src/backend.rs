//! Persistence backends for the history store
//!
//! The store itself only ever sees one opaque blob. Backends decide where
//! that blob lives; callers pick a backend explicitly instead of the store
//! probing its environment.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::{Error, Result};

/// Trait for history blob persistence
pub trait StorageBackend: Send + Sync {
    /// Load the persisted blob, or `None` if nothing has been stored yet
    fn load(&self) -> Result<Option<String>>;

    /// Replace the persisted blob
    fn store(&self, blob: &str) -> Result<()>;

    /// Remove the persisted blob entirely
    fn clear(&self) -> Result<()>;
}

/// Durable backend holding the history as a single JSON file on disk
#[derive(Debug)]
pub struct JsonFileBackend {
    path: PathBuf,
}

impl JsonFileBackend {
    /// Create a backend over a specific file path
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Get the default history file path (~/.local/share/nitpick/history.json)
    pub fn default_path() -> Result<PathBuf> {
        let data_dir = dirs::data_dir().ok_or(Error::NoDataDir)?;
        Ok(data_dir.join("nitpick").join("history.json"))
    }

    /// Get the file path this backend writes to
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl StorageBackend for JsonFileBackend {
    fn load(&self) -> Result<Option<String>> {
        match std::fs::read_to_string(&self.path) {
            Ok(blob) => Ok(Some(blob)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn store(&self, blob: &str) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&self.path, blob)?;
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

/// In-memory backend for tests and ephemeral sessions
#[derive(Debug, Default)]
pub struct MemoryBackend {
    blob: Mutex<Option<String>>,
}

impl MemoryBackend {
    /// Create an empty in-memory backend
    pub fn new() -> Self {
        Self::default()
    }
}

impl StorageBackend for MemoryBackend {
    fn load(&self) -> Result<Option<String>> {
        Ok(self.blob.lock().unwrap().clone())
    }

    fn store(&self, blob: &str) -> Result<()> {
        *self.blob.lock().unwrap() = Some(blob.to_string());
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        *self.blob.lock().unwrap() = None;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_file_backend_load_missing_file() {
        let dir = TempDir::new().unwrap();
        let backend = JsonFileBackend::new(dir.path().join("history.json"));
        assert!(backend.load().unwrap().is_none());
    }

    #[test]
    fn test_file_backend_store_creates_parent_dirs() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("deep").join("history.json");
        let backend = JsonFileBackend::new(&path);

        backend.store("[]").unwrap();

        assert!(path.exists());
        assert_eq!(backend.load().unwrap().unwrap(), "[]");
    }

    #[test]
    fn test_file_backend_clear_is_idempotent() {
        let dir = TempDir::new().unwrap();
        let backend = JsonFileBackend::new(dir.path().join("history.json"));

        backend.store("[]").unwrap();
        backend.clear().unwrap();
        backend.clear().unwrap();

        assert!(backend.load().unwrap().is_none());
    }

    #[test]
    fn test_memory_backend_round_trip() {
        let backend = MemoryBackend::new();
        assert!(backend.load().unwrap().is_none());

        backend.store("blob").unwrap();
        assert_eq!(backend.load().unwrap().unwrap(), "blob");

        backend.clear().unwrap();
        assert!(backend.load().unwrap().is_none());
    }
}
