//! tictactoe_server - hosts a single tic-tac-toe game over HTTP.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::Cli;
use tictactoe_server::{GameSession, ServerConfig, app};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = cli.apply(ServerConfig::load_or_default(&cli.config)?);

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_filter())),
        )
        .init();

    info!(
        board_size = config.board_size(),
        win_rule = %config.win_rule(),
        "Starting tic-tac-toe server"
    );

    let session = GameSession::new(*config.board_size(), *config.win_rule())?;
    let listener = tokio::net::TcpListener::bind(config.bind_address()).await?;
    info!(address = %listener.local_addr()?, "Listening");

    axum::serve(listener, app(session))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "Failed to listen for Ctrl-C");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
