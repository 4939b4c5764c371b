//! Tic-Tac-Toe Oracle - Unified CLI

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use tictactoe_oracle::{
    Board, LocalEngine, MoveResponse, RestClient, ServerConfig, run_terminal, select_move, serve,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Command::Serve {
            config,
            host,
            port,
            static_dir,
        } => {
            let port = port.or_else(|| std::env::var("PORT").ok().and_then(|p| p.parse().ok()));
            let config =
                ServerConfig::load(Some(config.as_path()))?.with_overrides(host, port, static_dir);
            init_tracing(config.log_filter());
            info!("Starting Tic-Tac-Toe Oracle server");
            serve(config).await
        }
        Command::Analyze { board } => {
            init_tracing("warn");
            analyze(&board)
        }
        Command::Play { server_url } => {
            init_tracing("warn");
            match server_url {
                Some(url) => run_terminal(&RestClient::new(url)).await,
                None => run_terminal(&LocalEngine).await,
            }
        }
    }
}

/// Prints the analysis of a compact board as pretty JSON.
fn analyze(board: &str) -> Result<()> {
    let board: Board = board.parse().context("Invalid board")?;
    let analysis = select_move(&board).context("Engine failed")?;
    let json = serde_json::to_string_pretty(&MoveResponse::from(&analysis))?;
    println!("{json}");
    Ok(())
}

/// `RUST_LOG` wins; otherwise `default_filter`.
fn init_tracing(default_filter: &str) {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .init();
}
