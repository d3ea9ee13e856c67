use crate::core::snapshot::FinancialSnapshot;
use crate::store::SnapshotStore;
use anyhow::Result;
use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::Mutex;

/// In-memory store used in tests. Mirrors the disk store's contract without
/// touching the filesystem.
pub struct MemoryStore {
    snapshot: Mutex<Option<FinancialSnapshot>>,
    prefs: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            snapshot: Mutex::new(None),
            prefs: Mutex::new(HashMap::new()),
        }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SnapshotStore for MemoryStore {
    async fn load(&self) -> Option<FinancialSnapshot> {
        self.snapshot.lock().await.clone()
    }

    async fn save(&self, snapshot: &FinancialSnapshot) -> Result<()> {
        *self.snapshot.lock().await = Some(snapshot.clone());
        Ok(())
    }

    async fn clear(&self) -> Result<()> {
        *self.snapshot.lock().await = None;
        Ok(())
    }

    async fn pref(&self, key: &str) -> Option<String> {
        self.prefs.lock().await.get(key).cloned()
    }

    async fn set_pref(&self, key: &str, value: &str) -> Result<()> {
        self.prefs
            .lock()
            .await
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::generate;

    #[tokio::test]
    async fn test_memory_store_round_trip() {
        let store = MemoryStore::new();
        assert!(store.load().await.is_none());

        let snapshot = generate::parse_statement("", &|| ());
        store.save(&snapshot).await.unwrap();
        assert!(store.load().await.is_some());

        store.clear().await.unwrap();
        assert!(store.load().await.is_none());
    }

    #[tokio::test]
    async fn test_memory_store_prefs() {
        let store = MemoryStore::new();
        assert!(store.pref("compactTables").await.is_none());

        store.set_pref("compactTables", "true").await.unwrap();
        assert_eq!(
            store.pref("compactTables").await.as_deref(),
            Some("true")
        );
    }
}
