//! JSON-file backed store.
//!
//! The file holds a single JSON object mapping keys to string values. Every
//! operation re-reads the file, so values written by a previous process are
//! visible until cleared. Writes go to a sibling temp file that is renamed
//! over the original, so a crash mid-write leaves the old contents intact.

use crate::{KeyValueStore, StoreError, StoreErrorResult};

use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use serde_json::{Map, Value};
use tempfile::NamedTempFile;

#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    // Serializes read-modify-write cycles within this process
    write_lock: Mutex<()>,
}

impl FileStore {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    fn read_map(&self) -> StoreErrorResult<Map<String, Value>> {
        if !self.path.exists() {
            return Ok(Map::new());
        }

        let contents =
            std::fs::read_to_string(&self.path).map_err(|e| StoreError::io(&self.path, e))?;

        if contents.trim().is_empty() {
            return Ok(Map::new());
        }

        serde_json::from_str(&contents).map_err(|e| StoreError::corrupt(&self.path, e))
    }

    /// Like `read_map`, but a corrupt file is discarded so writes can recover.
    fn read_map_for_write(&self) -> StoreErrorResult<Map<String, Value>> {
        match self.read_map() {
            Err(e @ StoreError::Corrupt { .. }) => {
                log::warn!("Discarding corrupt store file: {}", e);
                Ok(Map::new())
            }
            other => other,
        }
    }

    fn dir(&self) -> &Path {
        match self.path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => dir,
            _ => Path::new("."),
        }
    }

    fn write_map(&self, map: &Map<String, Value>) -> StoreErrorResult<()> {
        let dir = self.dir();
        if !dir.exists() {
            std::fs::create_dir_all(dir).map_err(|e| StoreError::io(dir, e))?;
        }

        let contents =
            serde_json::to_vec_pretty(map).map_err(|e| StoreError::corrupt(&self.path, e))?;

        let mut staged = NamedTempFile::new_in(dir).map_err(|e| StoreError::io(dir, e))?;
        staged
            .write_all(&contents)
            .and_then(|()| staged.as_file().sync_all())
            .map_err(|e| StoreError::io(staged.path(), e))?;
        staged
            .persist(&self.path)
            .map_err(|e| StoreError::io(&self.path, e.error))?;

        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> StoreErrorResult<Option<String>> {
        let map = self.read_map()?;
        Ok(map.get(key).and_then(Value::as_str).map(String::from))
    }

    fn set(&self, key: &str, value: &str) -> StoreErrorResult<()> {
        let _guard = self.write_lock.lock().map_err(|_| StoreError::poisoned())?;
        let mut map = self.read_map_for_write()?;
        map.insert(key.to_string(), Value::String(value.to_string()));
        self.write_map(&map)
    }

    fn clear(&self, key: &str) -> StoreErrorResult<()> {
        let _guard = self.write_lock.lock().map_err(|_| StoreError::poisoned())?;
        let mut map = self.read_map_for_write()?;
        if map.remove(key).is_some() {
            self.write_map(&map)?;
        }
        Ok(())
    }
}
