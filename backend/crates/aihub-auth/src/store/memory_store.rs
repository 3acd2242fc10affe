use crate::{KeyValueStore, StoreError, StoreErrorResult};

use std::collections::HashMap;
use std::sync::RwLock;

/// In-process store. Contents vanish with the process.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RwLock<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> StoreErrorResult<Option<String>> {
        let entries = self.entries.read().map_err(|_| StoreError::poisoned())?;
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> StoreErrorResult<()> {
        let mut entries = self.entries.write().map_err(|_| StoreError::poisoned())?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn clear(&self, key: &str) -> StoreErrorResult<()> {
        let mut entries = self.entries.write().map_err(|_| StoreError::poisoned())?;
        entries.remove(key);
        Ok(())
    }
}
