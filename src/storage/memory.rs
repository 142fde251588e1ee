use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use super::{KeyValueStore, StorageError};

/// In-memory key-value store.
///
/// Clones share the same map, so a test can keep a handle and inspect what a
/// repository wrote.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: Arc<RwLock<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-populated with `entries`.
    pub fn with_entries<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let map = entries.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
        Self {
            entries: Arc::new(RwLock::new(map)),
        }
    }

    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.read().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: String) -> Result<(), StorageError> {
        self.entries.write().await.insert(key.to_string(), value);
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.entries.write().await.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clones_share_entries() {
        tokio_test::block_on(async {
            let store = MemoryStore::new();
            let handle = store.clone();

            store.set("a", "1".to_string()).await.unwrap();
            assert_eq!(handle.get("a").await.unwrap().as_deref(), Some("1"));
            assert_eq!(handle.len().await, 1);

            handle.remove("a").await.unwrap();
            assert!(store.is_empty().await);
        });
    }

    #[test]
    fn test_with_entries() {
        let store = MemoryStore::with_entries([("k", "v")]);
        let value = tokio_test::block_on(store.get("k")).unwrap();
        assert_eq!(value.as_deref(), Some("v"));
    }
}
