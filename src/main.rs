//! absurda - AI Absurditeiten CLI
//!
//! Main entry point: initializes tracing, loads configuration, and
//! dispatches to the command handlers.

use anyhow::Result;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use absurda::cli::{Cli, Commands};
use absurda::commands;
use absurda::config::Config;

#[tokio::main]
async fn main() -> Result<()> {
    // Parse command line arguments
    let cli = Cli::parse_args();

    init_tracing(cli.verbose);

    // Load and validate configuration
    let config_path = cli.config.as_deref().unwrap_or("config/config.yaml");
    let config = Config::load(config_path)?;
    config.validate()?;

    // Execute command
    match cli.command {
        Commands::Generate { kind } => {
            tracing::info!("Generating {}", kind.kind());
            commands::generate::run_generate(&config, kind).await?;
            Ok(())
        }
        Commands::List { kind, json } => {
            commands::history::run_list(&config, kind, json)?;
            Ok(())
        }
        Commands::Delete { kind, id } => {
            commands::history::run_delete(&config, kind, &id)?;
            Ok(())
        }
        Commands::Clear { kind } => {
            commands::history::run_clear(&config, kind)?;
            Ok(())
        }
        Commands::Share { kind, id } => {
            commands::share::run_share(&config, kind, &id)?;
            Ok(())
        }
        Commands::Import { kind, token } => {
            commands::share::run_import(&config, kind, &token)?;
            Ok(())
        }
        Commands::Auth { key, show, clear } => {
            commands::auth::run_auth(&config, key, show, clear)?;
            Ok(())
        }
    }
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose { "absurda=debug" } else { "absurda=info" };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}
