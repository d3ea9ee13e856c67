use crate::core::statement::StatementParser;
use anyhow::{Context, Result, anyhow};
use async_trait::async_trait;
use std::path::Path;
use tracing::debug;

/// Reads a statement PDF and extracts its text. Only the file signature is
/// validated up front; anything `pdf-extract` cannot handle surfaces as a
/// processing error.
pub struct PdfStatementParser;

impl PdfStatementParser {
    pub fn new() -> Self {
        Self
    }
}

impl Default for PdfStatementParser {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl StatementParser for PdfStatementParser {
    async fn extract_text(&self, path: &Path) -> Result<String> {
        let bytes = tokio::fs::read(path)
            .await
            .with_context(|| format!("Failed to read statement file: {}", path.display()))?;

        if !bytes.starts_with(b"%PDF-") {
            anyhow::bail!("{} is not a PDF file", path.display());
        }

        let text = pdf_extract::extract_text_from_mem(&bytes)
            .map_err(|e| anyhow!("Failed to extract text from {}: {e}", path.display()))?;

        debug!(
            chars = text.len(),
            "Extracted statement text from {}",
            path.display()
        );
        Ok(text)
    }
}
