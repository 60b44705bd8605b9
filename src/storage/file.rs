//! JSON ファイルによる永続ストレージ
//!
//! ファイルは `{"key": "value", ...}` 形式。書き込みのたびに全体を書き直す。

use std::collections::BTreeMap;
use std::path::{
    Path,
    PathBuf,
};

use super::{
    PreferenceStore,
    StorageError,
};

/// JSON ファイルに保存するストレージ
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    /// 保存先のパス
    path: PathBuf,
}

impl JsonFileStore {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// ファイル全体を読む（ファイルがなければ空）
    fn read_all(&self) -> Result<BTreeMap<String, String>, StorageError> {
        if !self.path.exists() {
            return Ok(BTreeMap::new());
        }
        let content = std::fs::read_to_string(&self.path)?;
        if content.trim().is_empty() {
            return Ok(BTreeMap::new());
        }
        Ok(serde_json::from_str(&content)?)
    }
}

impl PreferenceStore for JsonFileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.read_all()?.remove(key))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut values = self.read_all()?;
        values.insert(key.to_string(), value.to_string());

        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&self.path, serde_json::to_string_pretty(&values)?)?;
        tracing::trace!(path = ?self.path, key, "Stored preference");
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::fs;

    use rstest::rstest;
    use tempfile::TempDir;

    use super::*;

    #[rstest]
    fn missing_file_reads_as_empty() {
        let temp_dir = TempDir::new().unwrap();
        let store = JsonFileStore::new(temp_dir.path().join("storage.json"));

        assert_eq!(store.get("siteLanguage").unwrap(), None);
    }

    #[rstest]
    fn values_survive_a_new_store_instance() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested/storage.json");

        let mut store = JsonFileStore::new(&path);
        store.set("siteLanguage", "en").unwrap();
        store.set("courseApp_currentUser", "{}").unwrap();

        let reopened = JsonFileStore::new(&path);
        assert_eq!(reopened.get("siteLanguage").unwrap().as_deref(), Some("en"));
        assert_eq!(reopened.get("courseApp_currentUser").unwrap().as_deref(), Some("{}"));
    }

    #[rstest]
    fn corrupt_file_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("storage.json");
        fs::write(&path, "[1, 2").unwrap();

        let store = JsonFileStore::new(&path);

        assert!(matches!(store.get("siteLanguage"), Err(StorageError::Parse(_))));
    }
}
