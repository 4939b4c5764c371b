//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`](crate::Board). Every rule is evaluated
//! against the same eight [`LINES`], so win checks, threat counting and fork
//! detection can never disagree about what a line is.

pub mod draw;
pub mod fork;
pub mod win;

use crate::position::Position;

pub use draw::{game_status, is_full};
pub use fork::{creates_fork, threat_count};
pub use win::{check_winner, find_winning_moves, has_line, is_winning_move};

/// A row, column or diagonal.
pub type Line = [Position; 3];

/// The eight lines that win the game.
pub const LINES: [Line; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [Position::BottomLeft, Position::BottomCenter, Position::BottomRight],
    // Columns
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [Position::TopRight, Position::MiddleRight, Position::BottomRight],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];
