//! Durable key/value storage for the persisted language preference.

/// JSON file backed store
mod file;
/// In-memory store
mod memory;

pub use file::JsonFileStore;
pub use memory::MemoryStore;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Failed to access storage file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Storage file is not a JSON object of strings: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Synchronous string key/value storage surviving reloads.
pub trait PreferenceStore: Send + std::fmt::Debug {
    /// # Errors
    /// Backend read failure
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// # Errors
    /// Backend write failure
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}
