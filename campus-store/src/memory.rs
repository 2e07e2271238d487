use crate::storage::{StorageAdapter, StorageError};
use std::collections::HashMap;
use std::sync::Mutex;

/// In-memory storage backend.
///
/// The substitutable fake for tests and ephemeral hosts; documents live only
/// as long as the instance.
#[derive(Default)]
pub struct MemoryStorage {
    documents: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StorageAdapter for MemoryStorage {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        let documents = self.documents.lock().unwrap_or_else(|e| e.into_inner());
        Ok(documents.get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut documents = self.documents.lock().unwrap_or_else(|e| e.into_inner());
        documents.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_key_reads_as_none() {
        let storage = MemoryStorage::new();
        assert!(storage.read("usiu_events_v1").unwrap().is_none());
    }

    #[test]
    fn test_write_overwrites_prior_value() {
        let storage = MemoryStorage::new();
        storage.write("doc", "first").unwrap();
        storage.write("doc", "second").unwrap();
        assert_eq!(storage.read("doc").unwrap().as_deref(), Some("second"));
    }
}
