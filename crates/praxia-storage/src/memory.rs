use std::collections::BTreeMap;

use serde::{de::DeserializeOwned, Serialize};
use tokio::sync::RwLock;
use tracing::debug;

use crate::error::StorageError;

/// In-process JSON object store.
///
/// Each call is one atomic round-trip; the most recent write to a key is
/// always visible to the next read. Keys are ordered, so prefix scans
/// return lexicographic order.
#[derive(Debug, Default)]
pub struct MemoryStore {
    objects: RwLock<BTreeMap<String, Vec<u8>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load and deserialize one object. A missing key is a valid
    /// "not started" state, not an error.
    pub async fn get_json<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, StorageError> {
        let objects = self.objects.read().await;
        match objects.get(key) {
            Some(bytes) => Ok(Some(serde_json::from_slice(bytes)?)),
            None => Ok(None),
        }
    }

    /// Serialize and store one object, replacing any previous value.
    pub async fn put_json<T: Serialize>(&self, key: &str, value: &T) -> Result<(), StorageError> {
        let bytes = serde_json::to_vec_pretty(value)?;
        debug!(key, bytes = bytes.len(), "put object");
        self.objects.write().await.insert(key.to_string(), bytes);
        Ok(())
    }

    /// The lexicographically last key under a prefix, if any.
    pub async fn last_key_under(&self, prefix: &str) -> Option<String> {
        let objects = self.objects.read().await;
        objects
            .range(prefix.to_string()..)
            .take_while(|(k, _)| k.starts_with(prefix))
            .last()
            .map(|(k, _)| k.clone())
    }

    pub async fn delete(&self, key: &str) -> Result<(), StorageError> {
        let mut objects = self.objects.write().await;
        objects
            .remove(key)
            .map(|_| ())
            .ok_or_else(|| StorageError::NotFound {
                key: key.to_string(),
            })
    }
}
