//! Win detection logic for tic-tac-toe.

use super::LINES;
use crate::position::Position;
use crate::types::{Board, Player, Square};
use tracing::instrument;

/// Checks whether `player` holds all three squares of any line.
pub fn has_line(board: &Board, player: Player) -> bool {
    let mark = Square::Occupied(player);
    LINES
        .iter()
        .any(|line| line.iter().all(|pos| board.at(*pos) == mark))
}

/// Checks if there is a winner on the board.
///
/// Returns `Some(player)` if the player has three in a row,
/// `None` otherwise.
#[instrument(skip(board))]
pub fn check_winner(board: &Board) -> Option<Player> {
    for [a, b, c] in LINES {
        let sq = board.at(a);
        if sq != Square::Empty && sq == board.at(b) && sq == board.at(c) {
            return sq.player();
        }
    }
    None
}

/// Whether placing `player` at `pos` completes a line.
///
/// An occupied square is simply not a winning move; this never fails.
pub fn is_winning_move(board: &Board, pos: Position, player: Player) -> bool {
    board.is_empty(pos) && has_line(&board.with_mark(pos, player), player)
}

/// Every empty square where `player` would complete a line, in index order.
#[instrument(skip(board))]
pub fn find_winning_moves(board: &Board, player: Player) -> Vec<Position> {
    board
        .empty_positions()
        .filter(|pos| is_winning_move(board, *pos, player))
        .collect()
}
