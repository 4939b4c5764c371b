//! Oracle tic-tac-toe engine.
//!
//! Picks O's reply on a 3x3 board with a fixed rule ladder: win, block,
//! fork, block a fork, center, opposite corner, corner, edge. A deterministic
//! numeric feature of the resulting board separates candidates the ladder
//! scores alike.
//!
//! The engine is pure: every call computes from the board it is given and
//! touches no shared state.
//!
//! # Example
//!
//! ```
//! use oracle_tictactoe::{Board, Position, select_move};
//!
//! let board: Board = "OO.XX....".parse().unwrap();
//! let analysis = select_move(&board).unwrap();
//! assert_eq!(analysis.chosen(), Position::TopRight);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod error;
mod features;
mod position;
pub mod rules;
mod scorer;
mod selector;
mod strategy;
mod types;

pub use error::{BoardParseError, EngineError};
pub use features::{
    FeatureSummary, FeatureVector, REGISTER_BITS, REGISTER_STATES, extract_features,
};
pub use position::Position;
pub use rules::{
    Line, LINES, check_winner, creates_fork, find_winning_moves, game_status, is_full,
    is_winning_move, threat_count,
};
pub use scorer::{
    BLOCK_FORK_BONUS, BLOCK_WIN_SCORE, CENTER_BONUS, CORNER_BONUS, EDGE_BONUS, ENGINE,
    FORK_BONUS, MoveCandidate, OPPOSITE_CORNER_BONUS, TOP_STATE_BONUS, WIN_SCORE, score_move,
};
pub use selector::{AnalysisResult, select_move};
pub use strategy::Strategy;
pub use types::{Board, GameStatus, Player, Square};
