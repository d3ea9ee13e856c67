pub mod cli;
pub mod core;
pub mod ingest;
pub mod store;

use crate::cli::ui::{Theme, ViewOptions};
use crate::core::config::AppConfig;
use crate::ingest::PdfStatementParser;
use crate::store::disk::DiskStore;
use crate::store::{PREF_COMPACT_TABLES, PREF_THEME_MODE, SnapshotStore};
use anyhow::Result;
use std::path::PathBuf;
use tracing::{debug, info};

/// A resolved application command, independent of the clap surface.
pub enum AppCommand {
    Import { file: PathBuf },
    Demo,
    Reset,
    Dashboard,
    Expenses { threshold: Option<f64> },
    Investments,
    Savings,
    Insurance,
}

/// Display flag overrides from the command line. `None` means keep the
/// persisted preference.
#[derive(Default)]
pub struct DisplayFlags {
    pub theme: Option<String>,
    pub compact: Option<bool>,
}

pub async fn run_command(
    command: AppCommand,
    config_path: Option<&str>,
    display: DisplayFlags,
) -> Result<()> {
    info!("finboard starting...");

    let config = match config_path {
        Some(path) => AppConfig::load_from_path(path)?,
        None => AppConfig::load()?,
    };
    debug!("Loaded config: {config:#?}");

    let store = DiskStore::open(&config.default_data_path()?.join("store"))?;
    let options = resolve_view_options(&store, &display).await?;

    match command {
        AppCommand::Import { file } => {
            let parser = PdfStatementParser::new();
            cli::import::import(&file, &parser, &store, &config, &options).await
        }
        AppCommand::Demo => cli::import::demo(&store, &config, &options).await,
        AppCommand::Reset => cli::import::reset(&store).await,
        AppCommand::Dashboard => match store.load().await {
            Some(snapshot) => cli::dashboard::run(&snapshot, &config, &options),
            None => no_data(),
        },
        AppCommand::Expenses { threshold } => match store.load().await {
            Some(snapshot) => cli::expenses::run(&snapshot, &config, &options, threshold),
            None => no_data(),
        },
        AppCommand::Investments => match store.load().await {
            Some(snapshot) => cli::investments::run(&snapshot, &config, &options),
            None => no_data(),
        },
        AppCommand::Savings => match store.load().await {
            Some(snapshot) => cli::savings::run(&snapshot, &config, &options),
            None => no_data(),
        },
        AppCommand::Insurance => match store.load().await {
            Some(snapshot) => cli::insurance::run(&snapshot, &config, &options),
            None => no_data(),
        },
    }
}

/// Persists any display flag overrides, then resolves the effective options
/// from the stored preferences.
async fn resolve_view_options(
    store: &(dyn SnapshotStore + Send + Sync),
    display: &DisplayFlags,
) -> Result<ViewOptions> {
    if let Some(theme) = &display.theme {
        store
            .set_pref(PREF_THEME_MODE, Theme::from_pref(theme).as_pref())
            .await?;
    }
    if let Some(compact) = display.compact {
        store
            .set_pref(PREF_COMPACT_TABLES, if compact { "true" } else { "false" })
            .await?;
    }

    let theme = store
        .pref(PREF_THEME_MODE)
        .await
        .map(|value| Theme::from_pref(&value))
        .unwrap_or_default();
    let compact = store
        .pref(PREF_COMPACT_TABLES)
        .await
        .is_some_and(|value| value == "true");

    Ok(ViewOptions { theme, compact })
}

fn no_data() -> Result<()> {
    println!(
        "{}",
        cli::ui::style_text(
            "No statement data found. Run `finboard import <statement.pdf>` or `finboard demo` first.",
            cli::ui::StyleType::Subtle
        )
    );
    Ok(())
}
