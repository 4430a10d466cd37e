//! Entry point: parse CLI and dispatch to command handlers.

use clap::Parser;
use fpl_client::{
    cli::{Commands, Fpl},
    commands::handle_get,
    FplClient,
};
use tracing_subscriber::EnvFilter;

/// Run the CLI.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let app = Fpl::parse();

    let default_level = if app.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let client = FplClient::from_env()?;

    let outcome = match app.command {
        Commands::Get { cmd } => handle_get(&client, cmd).await,
    };

    client.close().await;
    outcome?;
    Ok(())
}
