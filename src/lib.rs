//! Tic-Tac-Toe Oracle library - the engine behind an HTTP endpoint
//!
//! # Architecture
//!
//! - **Engine**: pure move selection, re-exported from `oracle_tictactoe`
//! - **Server**: axum router with `POST /api/move` and static assets
//! - **Client**: REST client and in-process engine behind [`MoveSource`]
//! - **Session**: client-side game state with rollback on transport failure
//!
//! # Example
//!
//! ```
//! use tictactoe_oracle::{Board, MoveResponse, select_move};
//!
//! let board: Board = "XX..O....".parse().unwrap();
//! let analysis = select_move(&board).unwrap();
//! let response = MoveResponse::from(&analysis);
//! assert_eq!(response.chosen_cell, 2);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod api;
mod assets;
mod client;
mod config;
mod error;
mod play;
mod server;
mod session;

// Crate-level exports - Wire types
pub use api::{ErrorBody, MoveAnalysisEntry, MoveRequest, MoveResponse, RawQuantumResult, compact};

// Crate-level exports - Server
pub use assets::{DEFAULT_PAGE, content_type, resolve};
pub use error::ApiError;
pub use server::{AppState, router, serve};

// Crate-level exports - Configuration
pub use config::{ConfigError, ServerConfig};

// Crate-level exports - Client and session
pub use client::{ClientError, LocalEngine, MoveSource, RestClient};
pub use play::run as run_terminal;
pub use session::{PlaySession, SessionError};

// Crate-level exports - Engine
pub use oracle_tictactoe::{
    AnalysisResult, Board, BoardParseError, EngineError, FeatureVector, GameStatus,
    MoveCandidate, Player, Position, Square, Strategy, select_move,
};
