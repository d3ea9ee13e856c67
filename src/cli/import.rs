use super::{dashboard, ui};
use crate::core::config::AppConfig;
use crate::core::generate;
use crate::core::statement::StatementParser;
use crate::store::SnapshotStore;
use anyhow::{Context, Result};
use std::path::Path;
use tracing::info;

/// Imports a bank statement: extract text, synthesize the snapshot, persist
/// it, then land on the dashboard.
pub async fn import(
    file: &Path,
    parser: &(dyn StatementParser + Send + Sync),
    store: &(dyn SnapshotStore + Send + Sync),
    config: &AppConfig,
    options: &ui::ViewOptions,
) -> Result<()> {
    let spinner = ui::new_spinner("Extracting statement text...");
    let text = parser
        .extract_text(file)
        .await
        .context("Failed to process bank statement. Please try again.")?;
    spinner.finish_and_clear();

    let pb = ui::new_progress_bar(generate::SECTION_COUNT, true);
    pb.set_message("Processing statement...");
    let snapshot = generate::parse_statement(&text, &|| pb.inc(1));
    pb.finish_and_clear();

    store.save(&snapshot).await?;
    info!("Imported statement for {}", snapshot.profile.name);

    dashboard::run(&snapshot, config, options)
}

/// Installs a generated snapshot without needing a statement file.
pub async fn demo(
    store: &(dyn SnapshotStore + Send + Sync),
    config: &AppConfig,
    options: &ui::ViewOptions,
) -> Result<()> {
    let pb = ui::new_progress_bar(generate::SECTION_COUNT, true);
    pb.set_message("Generating demo data...");
    let snapshot = generate::parse_statement("Demo Bank Statement", &|| pb.inc(1));
    pb.finish_and_clear();

    store.save(&snapshot).await?;
    info!("Installed demo snapshot");

    dashboard::run(&snapshot, config, options)
}

/// Removes the stored snapshot.
pub async fn reset(store: &(dyn SnapshotStore + Send + Sync)) -> Result<()> {
    store.clear().await?;
    info!("Cleared stored snapshot");
    println!(
        "{}",
        ui::style_text("All financial data has been removed.", ui::StyleType::Subtle)
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::MemoryStore;
    use anyhow::anyhow;
    use async_trait::async_trait;

    struct MockParser {
        text: Option<String>,
    }

    #[async_trait]
    impl StatementParser for MockParser {
        async fn extract_text(&self, _path: &Path) -> Result<String> {
            self.text
                .clone()
                .ok_or_else(|| anyhow!("could not read statement"))
        }
    }

    fn test_config() -> AppConfig {
        serde_yaml::from_str("currency: \"INR\"").unwrap()
    }

    #[tokio::test]
    async fn test_import_saves_snapshot() {
        let parser = MockParser {
            text: Some("Bank Statement with transactions and balance".to_string()),
        };
        let store = MemoryStore::new();

        import(
            Path::new("statement.pdf"),
            &parser,
            &store,
            &test_config(),
            &ui::ViewOptions::default(),
        )
        .await
        .unwrap();

        let snapshot = store.load().await.expect("snapshot should be saved");
        assert_eq!(snapshot.profile.name, "Alex Johnson");
    }

    #[tokio::test]
    async fn test_import_replaces_previous_snapshot() {
        let store = MemoryStore::new();
        let config = test_config();
        let options = ui::ViewOptions::default();

        let parser = MockParser {
            text: Some("Bank Statement".to_string()),
        };
        import(Path::new("a.pdf"), &parser, &store, &config, &options)
            .await
            .unwrap();
        let first = store.load().await.unwrap();

        let parser = MockParser {
            text: Some("something else entirely".to_string()),
        };
        import(Path::new("b.pdf"), &parser, &store, &config, &options)
            .await
            .unwrap();
        let second = store.load().await.unwrap();

        assert_eq!(first.profile.name, "Alex Johnson");
        assert_eq!(second.profile.name, "Jane Smith");
    }

    #[tokio::test]
    async fn test_failed_extraction_leaves_store_untouched() {
        let parser = MockParser { text: None };
        let store = MemoryStore::new();

        let result = import(
            Path::new("broken.pdf"),
            &parser,
            &store,
            &test_config(),
            &ui::ViewOptions::default(),
        )
        .await;

        assert!(result.is_err());
        assert!(
            result
                .unwrap_err()
                .to_string()
                .contains("Failed to process bank statement")
        );
        assert!(store.load().await.is_none());
    }

    #[tokio::test]
    async fn test_demo_then_reset() {
        let store = MemoryStore::new();

        demo(&store, &test_config(), &ui::ViewOptions::default())
            .await
            .unwrap();
        assert!(store.load().await.is_some());

        reset(&store).await.unwrap();
        assert!(store.load().await.is_none());
    }
}
