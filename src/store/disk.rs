use crate::core::snapshot::FinancialSnapshot;
use crate::store::{SNAPSHOT_KEY, SnapshotStore};
use anyhow::{Context, Result};
use async_trait::async_trait;
use fjall::{Keyspace, PartitionCreateOptions, PartitionHandle, PersistMode};
use std::path::Path;
use tracing::{debug, warn};

/// Fjall-backed store. The snapshot and the display preferences live in
/// separate partitions of one keyspace under the app's data directory.
pub struct DiskStore {
    keyspace: Keyspace,
    snapshot: PartitionHandle,
    prefs: PartitionHandle,
}

impl DiskStore {
    pub fn open(path: &Path) -> Result<Self> {
        std::fs::create_dir_all(path)
            .with_context(|| format!("Failed to create data directory: {}", path.display()))?;

        let keyspace = fjall::Config::new(path)
            .open()
            .with_context(|| format!("Failed to open data store at {}", path.display()))?;
        let snapshot = keyspace
            .open_partition("snapshot", PartitionCreateOptions::default())
            .context("Failed to open snapshot partition")?;
        let prefs = keyspace
            .open_partition("prefs", PartitionCreateOptions::default())
            .context("Failed to open prefs partition")?;

        Ok(Self {
            keyspace,
            snapshot,
            prefs,
        })
    }

    fn persist(&self) -> Result<()> {
        self.keyspace
            .persist(PersistMode::SyncAll)
            .context("Failed to flush data store")
    }
}

#[async_trait]
impl SnapshotStore for DiskStore {
    async fn load(&self) -> Option<FinancialSnapshot> {
        let bytes = match self.snapshot.get(SNAPSHOT_KEY) {
            Ok(Some(bytes)) => bytes,
            Ok(None) => {
                debug!("No stored snapshot");
                return None;
            }
            Err(e) => {
                warn!("Failed to read stored snapshot: {e}");
                return None;
            }
        };

        match serde_json::from_slice(&bytes) {
            Ok(snapshot) => {
                debug!("Loaded stored snapshot");
                Some(snapshot)
            }
            Err(e) => {
                // Corrupt state is unrecoverable; drop it so the next import
                // starts clean.
                warn!("Stored snapshot is corrupt, clearing it: {e}");
                if let Err(e) = self.snapshot.remove(SNAPSHOT_KEY) {
                    warn!("Failed to clear corrupt snapshot: {e}");
                }
                None
            }
        }
    }

    async fn save(&self, snapshot: &FinancialSnapshot) -> Result<()> {
        let bytes = serde_json::to_vec(snapshot).context("Failed to serialize snapshot")?;
        self.snapshot
            .insert(SNAPSHOT_KEY, bytes)
            .context("Failed to persist snapshot")?;
        self.persist()?;
        debug!("Persisted snapshot");
        Ok(())
    }

    async fn clear(&self) -> Result<()> {
        self.snapshot
            .remove(SNAPSHOT_KEY)
            .context("Failed to clear stored snapshot")?;
        self.persist()?;
        debug!("Cleared stored snapshot");
        Ok(())
    }

    async fn pref(&self, key: &str) -> Option<String> {
        match self.prefs.get(key) {
            Ok(Some(bytes)) => String::from_utf8(bytes.to_vec()).ok(),
            Ok(None) => None,
            Err(e) => {
                warn!("Failed to read preference {key}: {e}");
                None
            }
        }
    }

    async fn set_pref(&self, key: &str, value: &str) -> Result<()> {
        self.prefs
            .insert(key, value)
            .with_context(|| format!("Failed to persist preference {key}"))?;
        self.persist()?;
        Ok(())
    }
}
