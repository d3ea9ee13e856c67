pub mod disk;
pub mod memory;

use crate::core::snapshot::FinancialSnapshot;
use anyhow::Result;
use async_trait::async_trait;

/// Key under which the serialized snapshot is stored.
pub const SNAPSHOT_KEY: &str = "financialData";

/// Preference key for the table color theme.
pub const PREF_THEME_MODE: &str = "themeMode";

/// Preference key for compact table layout.
pub const PREF_COMPACT_TABLES: &str = "compactTables";

/// Local persistence for the financial snapshot and a handful of display
/// preferences. There is exactly one snapshot per store; saving replaces it.
#[async_trait]
pub trait SnapshotStore: Send + Sync {
    /// Returns the stored snapshot, if any. A snapshot that fails to
    /// deserialize is cleared and treated as absent.
    async fn load(&self) -> Option<FinancialSnapshot>;

    async fn save(&self, snapshot: &FinancialSnapshot) -> Result<()>;

    async fn clear(&self) -> Result<()>;

    async fn pref(&self, key: &str) -> Option<String>;

    async fn set_pref(&self, key: &str, value: &str) -> Result<()>;
}
