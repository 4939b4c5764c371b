//! Fork detection: one move, two open threats.
//!
//! Only the immediate placement is examined. Forced sequences that build a
//! fork over several moves are not detected.

use super::LINES;
use crate::position::Position;
use crate::types::{Board, Player, Square};
use tracing::{instrument, trace};

/// Number of lines holding exactly two of `player` and one empty square.
pub fn threat_count(board: &Board, player: Player) -> usize {
    let mark = Square::Occupied(player);
    LINES
        .iter()
        .filter(|line| {
            let mine = line.iter().filter(|pos| board.at(**pos) == mark).count();
            let empty = line.iter().filter(|pos| board.is_empty(**pos)).count();
            mine == 2 && empty == 1
        })
        .count()
}

/// Whether placing `player` at `pos` leaves at least two threats open.
///
/// Occupied squares never create a fork.
#[instrument(skip(board))]
pub fn creates_fork(board: &Board, pos: Position, player: Player) -> bool {
    if !board.is_empty(pos) {
        return false;
    }
    let threats = threat_count(&board.with_mark(pos, player), player);
    trace!(threats, "Threats after placement");
    threats >= 2
}
