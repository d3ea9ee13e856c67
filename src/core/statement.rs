//! Statement ingestion abstractions

use anyhow::Result;
use async_trait::async_trait;
use std::path::Path;

/// Extracts the raw text of an uploaded bank statement. Implementations only
/// need to surface text; all interpretation happens downstream in the
/// snapshot generator.
#[async_trait]
pub trait StatementParser: Send + Sync {
    async fn extract_text(&self, path: &Path) -> Result<String>;
}
