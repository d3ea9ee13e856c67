use finboard::store::SnapshotStore;
use finboard::store::disk::DiskStore;
use finboard::{AppCommand, DisplayFlags};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

mod test_utils {
    use super::*;

    /// Writes a config whose data directory lives inside the temp dir and
    /// returns the config path.
    pub fn write_config(dir: &TempDir) -> PathBuf {
        let data_path = dir.path().join("data");
        let config_path = dir.path().join("config.yaml");
        let config_content = format!(
            r#"
currency: "INR"
monthly_threshold: 4000
projection:
  years: 5
  monthly_contribution: 2000
  interest_rate: 1.5
data_path: "{}"
"#,
            data_path.display()
        );
        fs::write(&config_path, config_content).expect("Failed to write config file");
        config_path
    }

    pub fn store_path(dir: &TempDir) -> PathBuf {
        dir.path().join("data").join("store")
    }
}

async fn run(command: AppCommand, config_path: &Path) -> anyhow::Result<()> {
    finboard::run_command(
        command,
        Some(config_path.to_str().unwrap()),
        DisplayFlags::default(),
    )
    .await
}

#[test_log::test(tokio::test)]
async fn test_demo_then_all_views() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = test_utils::write_config(&dir);

    run(AppCommand::Demo, &config_path).await.expect("demo");

    run(AppCommand::Dashboard, &config_path)
        .await
        .expect("dashboard");
    run(
        AppCommand::Expenses {
            threshold: Some(3_500.0),
        },
        &config_path,
    )
    .await
    .expect("expenses");
    run(AppCommand::Investments, &config_path)
        .await
        .expect("investments");
    run(AppCommand::Savings, &config_path).await.expect("savings");
    run(AppCommand::Insurance, &config_path)
        .await
        .expect("insurance");
}

#[test_log::test(tokio::test)]
async fn test_demo_persists_snapshot_to_store() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = test_utils::write_config(&dir);

    run(AppCommand::Demo, &config_path).await.expect("demo");

    let store = DiskStore::open(&test_utils::store_path(&dir)).expect("open store");
    let snapshot = store.load().await.expect("snapshot should be persisted");
    // The demo statement text contains "statement", which selects this name.
    assert_eq!(snapshot.profile.name, "Alex Johnson");
    assert_eq!(snapshot.monthly.len(), 12);
}

#[test_log::test(tokio::test)]
async fn test_reset_clears_persisted_snapshot() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = test_utils::write_config(&dir);

    run(AppCommand::Demo, &config_path).await.expect("demo");
    run(AppCommand::Reset, &config_path).await.expect("reset");

    let store = DiskStore::open(&test_utils::store_path(&dir)).expect("open store");
    assert!(store.load().await.is_none());
}

#[test_log::test(tokio::test)]
async fn test_views_without_data_succeed_with_hint() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = test_utils::write_config(&dir);

    // No import has happened; every view should exit cleanly.
    run(AppCommand::Dashboard, &config_path)
        .await
        .expect("dashboard without data");
    run(AppCommand::Savings, &config_path)
        .await
        .expect("savings without data");
}

#[test_log::test(tokio::test)]
async fn test_import_rejects_non_pdf_file() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = test_utils::write_config(&dir);

    let statement = dir.path().join("statement.pdf");
    fs::write(&statement, "plain text pretending to be a statement").unwrap();

    let result = run(AppCommand::Import { file: statement }, &config_path).await;
    let err = result.expect_err("non-PDF import must fail");
    assert!(
        err.to_string().contains("Failed to process bank statement"),
        "unexpected error: {err}"
    );

    // Nothing may have been persisted.
    let store = DiskStore::open(&test_utils::store_path(&dir)).expect("open store");
    assert!(store.load().await.is_none());
}

#[test_log::test(tokio::test)]
async fn test_display_flags_are_remembered() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = test_utils::write_config(&dir);

    finboard::run_command(
        AppCommand::Demo,
        Some(config_path.to_str().unwrap()),
        DisplayFlags {
            theme: Some("light".to_string()),
            compact: Some(true),
        },
    )
    .await
    .expect("demo with display flags");

    let store = DiskStore::open(&test_utils::store_path(&dir)).expect("open store");
    assert_eq!(store.pref("themeMode").await.as_deref(), Some("light"));
    assert_eq!(store.pref("compactTables").await.as_deref(), Some("true"));
}

#[test_log::test(tokio::test)]
async fn test_missing_config_is_an_error() {
    let result = finboard::run_command(
        AppCommand::Dashboard,
        Some("/nonexistent/config.yaml"),
        DisplayFlags::default(),
    )
    .await;
    assert!(result.is_err());
}
