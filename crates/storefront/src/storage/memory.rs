//! In-memory storage backend.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

use super::{Storage, StorageError};

/// Storage backend holding every slot in memory.
///
/// Clones share the same slot map, so several stores can sit on one
/// backend. Nothing survives the process; use [`JsonFileStorage`] for
/// durable slots.
///
/// [`JsonFileStorage`]: super::JsonFileStorage
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    slots: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStorage {
    /// Create an empty in-memory backend.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl Storage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let slots = self.slots.lock().unwrap_or_else(PoisonError::into_inner);
        Ok(slots.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut slots = self.slots.lock().unwrap_or_else(PoisonError::into_inner);
        slots.insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}
