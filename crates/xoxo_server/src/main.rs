//! XOXO game server binary.

#![warn(missing_docs)]

use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;
use xoxo_server::{AppState, Cli, Command, Crypto, GameRepository};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Serve {
            port,
            host,
            db_path,
        } => serve(host, port, db_path).await,
        Command::Migrate { db_path } => {
            xoxo_server::run_migrations(&db_path)?;
            info!(path = %db_path, "Migrations applied");
            Ok(())
        }
    }
}

/// Runs the HTTP game server.
async fn serve(host: String, port: u16, db_path: String) -> Result<()> {
    xoxo_server::run_migrations(&db_path)?;

    let repo = GameRepository::new(db_path)?;
    let state = AppState::new(repo, Crypto::from_env());
    let app = xoxo_server::router(state);

    let listener = tokio::net::TcpListener::bind((host.as_str(), port)).await?;
    info!(host = %host, port, "Server ready");
    axum::serve(listener, app).await?;

    Ok(())
}
