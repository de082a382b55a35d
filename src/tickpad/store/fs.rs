use super::KeyValueStore;
use crate::error::{Result, TickpadError};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

pub const STORAGE_FILENAME: &str = "storage.json";

/// File-backed key-value store rooted at a data directory.
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn storage_path(&self) -> PathBuf {
        self.root.join(STORAGE_FILENAME)
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(TickpadError::Io)?;
        }
        Ok(())
    }

    fn read_all(&self) -> Result<BTreeMap<String, String>> {
        let path = self.storage_path();
        if !path.exists() {
            return Ok(BTreeMap::new());
        }
        let content = fs::read(&path).map_err(TickpadError::Io)?;
        match serde_json::from_slice(&content) {
            Ok(values) => Ok(values),
            Err(err) => {
                // Same recovery as a corrupt snapshot: start over rather than fail.
                warn!(path = %path.display(), error = %err, "storage file unreadable, starting empty");
                Ok(BTreeMap::new())
            }
        }
    }

    fn write_all(&self, values: &BTreeMap<String, String>) -> Result<()> {
        self.ensure_dir()?;
        let path = self.storage_path();
        let tmp = self.root.join(format!("{}.tmp", STORAGE_FILENAME));
        let content = serde_json::to_string_pretty(values).map_err(TickpadError::Serialization)?;
        fs::write(&tmp, content).map_err(TickpadError::Io)?;
        fs::rename(&tmp, &path).map_err(TickpadError::Io)?;
        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn load(&self, key: &str) -> Result<Option<String>> {
        let mut values = self.read_all()?;
        Ok(values.remove(key))
    }

    fn save(&mut self, key: &str, value: &str) -> Result<()> {
        let mut values = self.read_all()?;
        values.insert(key.to_string(), value.to_string());
        self.write_all(&values)?;
        debug!(key, bytes = value.len(), "saved");
        Ok(())
    }
}
