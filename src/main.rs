use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use finboard::core::log::init_logging;
use std::path::PathBuf;

#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to optional configuration file
    #[arg(short, long, global = true)]
    config_path: Option<String>,

    /// Table color theme; remembered across runs
    #[arg(long, global = true, value_parser = ["light", "dark"])]
    theme: Option<String>,

    /// Compact table layout; remembered across runs
    #[arg(long, global = true)]
    compact: Option<bool>,

    #[command(subcommand)]
    command: Option<Commands>,
}

impl From<Commands> for finboard::AppCommand {
    fn from(cmd: Commands) -> finboard::AppCommand {
        match cmd {
            Commands::Import { file } => finboard::AppCommand::Import { file },
            Commands::Demo => finboard::AppCommand::Demo,
            Commands::Reset => finboard::AppCommand::Reset,
            Commands::Dashboard => finboard::AppCommand::Dashboard,
            Commands::Expenses { threshold } => finboard::AppCommand::Expenses { threshold },
            Commands::Investments => finboard::AppCommand::Investments,
            Commands::Savings => finboard::AppCommand::Savings,
            Commands::Insurance => finboard::AppCommand::Insurance,
            Commands::Setup => unreachable!("Setup command should be handled separately"),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Create default configuration
    Setup,
    /// Import a bank statement PDF and show the dashboard
    Import {
        /// Path to the statement PDF
        file: PathBuf,
    },
    /// Load generated demo data and show the dashboard
    Demo,
    /// Remove all stored financial data
    Reset,
    /// Display the overview dashboard
    Dashboard,
    /// Display expense breakdowns and trends
    Expenses {
        /// Monthly spending limit override for this run
        #[arg(long)]
        threshold: Option<f64>,
    },
    /// Display investment allocation, performance, and holdings
    Investments,
    /// Display savings accounts, goals, and projection
    Savings,
    /// Display insurance policies and claims
    Insurance,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let display = finboard::DisplayFlags {
        theme: cli.theme,
        compact: cli.compact,
    };

    let result = match cli.command {
        Some(Commands::Setup) => finboard::cli::setup::setup(),
        Some(cmd) => finboard::run_command(cmd.into(), cli.config_path.as_deref(), display).await,
        None => {
            Cli::command().print_help()?;
            Ok(())
        }
    };

    if let Err(e) = &result {
        eprintln!(
            "{}",
            finboard::cli::ui::style_text(&format!("Error: {e}"), finboard::cli::ui::StyleType::Error)
        );
        tracing::error!(error = %e, "Application failed");
    }
    result
}
