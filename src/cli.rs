//! Command-line interface for tictactoe_oracle.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Tic-Tac-Toe Oracle - play X against a rule-ladder engine
#[derive(Parser, Debug)]
#[command(name = "tictactoe_oracle")]
#[command(about = "Tic-tac-toe engine served over HTTP", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the HTTP server
    Serve {
        /// Path to a TOML config file
        #[arg(short, long, default_value = "oracle.toml")]
        config: PathBuf,

        /// Host to bind to (overrides config)
        #[arg(long)]
        host: Option<String>,

        /// Port to bind to (overrides config and $PORT)
        #[arg(short, long)]
        port: Option<u16>,

        /// Directory of frontend assets (overrides config)
        #[arg(long)]
        static_dir: Option<PathBuf>,
    },

    /// Print the engine's analysis of a board as JSON
    Analyze {
        /// Nine characters of X, O and '.' in row-major order, e.g. "X...O...."
        board: String,
    },

    /// Play in the terminal
    Play {
        /// Server URL. If not provided, the engine runs in-process.
        #[arg(long)]
        server_url: Option<String>,
    },
}
