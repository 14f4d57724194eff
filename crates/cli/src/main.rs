//! Relief Explainer CLI
//!
//! Main entry point for the `relief` command-line tool.
//! Answers disaster-preparedness questions from a local document set.

mod commands;

use clap::{Parser, Subcommand};
use commands::{AboutCommand, AskCommand, ChatCommand, DocsCommand};
use relief_core::{config::AppConfig, logging, AppResult};
use std::path::PathBuf;

/// Disaster Response & Relief Explainer
#[derive(Parser, Debug)]
#[command(name = "relief")]
#[command(about = "Explains disaster response and relief processes", long_about = None)]
#[command(version)]
struct Cli {
    /// Directory holding the reference documents
    #[arg(short, long, global = true, env = "RELIEF_DOCS_DIR")]
    docs_dir: Option<PathBuf>,

    /// Path to config file
    #[arg(short, long, global = true, env = "RELIEF_CONFIG")]
    config: Option<PathBuf>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, global = true, env = "RUST_LOG")]
    log_level: Option<String>,

    /// Enable verbose output (sets log level to debug)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Disable colored output (also implied by any NO_COLOR value)
    #[arg(long, global = true)]
    no_color: bool,

    /// Text-generation provider
    #[arg(short, long, global = true, env = "RELIEF_PROVIDER")]
    provider: Option<String>,

    /// Model identifier
    #[arg(short, long, global = true, env = "RELIEF_MODEL")]
    model: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Ask a single question
    Ask(AskCommand),

    /// Interactive question session
    Chat(ChatCommand),

    /// List the loaded reference documents
    Docs(DocsCommand),

    /// What this assistant does and does not do
    About(AboutCommand),
}

#[tokio::main]
async fn main() -> AppResult<()> {
    // Credentials may live in a local .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = AppConfig::load(cli.config.clone())?;

    let config = config.with_overrides(
        cli.docs_dir,
        cli.provider,
        cli.model,
        cli.log_level,
        cli.verbose,
        cli.no_color,
    );

    logging::init_logging(config.log_level.as_deref(), config.no_color)?;

    tracing::info!("Relief Explainer starting");
    tracing::debug!("Documents: {:?}", config.docs_dir);
    tracing::debug!("Provider: {}", config.provider);
    tracing::debug!("Model: {}", config.model);

    let command_name = match &cli.command {
        Commands::Ask(_) => "ask",
        Commands::Chat(_) => "chat",
        Commands::Docs(_) => "docs",
        Commands::About(_) => "about",
    };
    let _span = tracing::info_span!("command", name = command_name).entered();

    let result = match cli.command {
        Commands::Ask(cmd) => cmd.execute(&config).await,
        Commands::Chat(cmd) => cmd.execute(&config).await,
        Commands::Docs(cmd) => cmd.execute(&config),
        Commands::About(cmd) => cmd.execute(),
    };

    match &result {
        Ok(_) => tracing::info!("Command completed successfully"),
        Err(e) => tracing::error!("Command failed: {}", e),
    }

    result
}
