use std::collections::HashMap;

use super::{
    PreferenceStore,
    StorageError,
};

/// Storage that lives as long as the process.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    /// Stored key/value pairs
    values: HashMap<String, String>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
