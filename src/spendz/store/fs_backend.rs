use super::StorageBackend;
use crate::error::{Result, SpendzError};
use std::fs;
use std::path::{Path, PathBuf};
use uuid::Uuid;

/// File-based storage backend. Each key maps to `<root>/<key>.json`.
pub struct FsBackend {
    root: PathBuf,
}

impl FsBackend {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn blob_path(&self, key: &str) -> PathBuf {
        self.root.join(format!("{}.json", key))
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(SpendzError::Io)?;
        }
        Ok(())
    }
}

impl StorageBackend for FsBackend {
    fn read(&self, key: &str) -> Result<Option<String>> {
        let path = self.blob_path(key);
        if !path.exists() {
            return Ok(None);
        }
        let payload = fs::read_to_string(path).map_err(SpendzError::Io)?;
        Ok(Some(payload))
    }

    fn write(&self, key: &str, payload: &str) -> Result<()> {
        self.ensure_dir()
            .map_err(|e| SpendzError::Persistence(e.to_string()))?;

        let target = self.blob_path(key);

        // Atomic write: the target only ever contains a complete payload.
        let tmp = self.root.join(format!(".{}-{}.tmp", key, Uuid::new_v4()));
        fs::write(&tmp, payload).map_err(|e| SpendzError::Persistence(e.to_string()))?;
        fs::rename(&tmp, &target).map_err(|e| SpendzError::Persistence(e.to_string()))?;

        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        let path = self.blob_path(key);
        if path.exists() {
            fs::remove_file(path).map_err(SpendzError::Io)?;
        }
        Ok(())
    }
}
