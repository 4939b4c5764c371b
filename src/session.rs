//! Client-side game session.
//!
//! The session owns the board and is the only place it changes: a human
//! move, the engine's reply, a rollback, or a reset. The human plays X and
//! always moves first.

use crate::client::{ClientError, MoveSource};
use oracle_tictactoe::{Board, GameStatus, Player, Position, Square, game_status};
use tracing::{debug, info, instrument, warn};

/// Error from a session operation.
#[derive(Debug, Clone, derive_more::Display)]
pub enum SessionError {
    /// The square at the position is already occupied.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(Position),

    /// The game is already over.
    #[display("Game is already over")]
    GameOver,

    /// It is not this player's turn.
    #[display("It's not {}'s turn", _0)]
    WrongPlayer(Player),

    /// The engine answered with something unplayable.
    #[display("Engine chose unplayable square {}", _0)]
    BadReply(usize),

    /// The engine could not be reached; the human move was rolled back.
    #[display("{}", _0)]
    Transport(ClientError),
}

impl std::error::Error for SessionError {}

/// One game against the engine.
#[derive(Debug, Clone)]
pub struct PlaySession {
    board: Board,
    history: Vec<Position>,
    status: GameStatus,
    notice: Option<String>,
}

impl PlaySession {
    /// Starts a new game on an empty board.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            history: Vec::new(),
            status: GameStatus::InProgress,
            notice: None,
        }
    }

    /// The board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The game status after the last move.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Squares played so far, in order.
    pub fn history(&self) -> &[Position] {
        &self.history
    }

    /// Player to move next.
    pub fn to_move(&self) -> Player {
        if self.history.len() % 2 == 0 {
            Player::X
        } else {
            Player::O
        }
    }

    /// Last non-fatal notice for the player, if any.
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    /// Clears the board for a new game.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        info!("Resetting session");
        *self = Self::new();
    }

    /// Places `player` at `pos` after checking turn and emptiness.
    #[instrument(skip(self))]
    pub fn apply(&mut self, pos: Position, player: Player) -> Result<GameStatus, SessionError> {
        if self.status.is_over() {
            return Err(SessionError::GameOver);
        }
        if player != self.to_move() {
            return Err(SessionError::WrongPlayer(player));
        }
        if !self.board.is_empty(pos) {
            return Err(SessionError::SquareOccupied(pos));
        }

        self.board.set(pos, Square::Occupied(player));
        self.history.push(pos);
        self.status = game_status(&self.board);
        debug!(status = ?self.status, "Move applied");
        Ok(self.status)
    }

    /// Undoes the most recent move.
    #[instrument(skip(self))]
    pub fn rollback(&mut self) -> Option<Position> {
        let pos = self.history.pop()?;
        self.board.set(pos, Square::Empty);
        self.status = game_status(&self.board);
        warn!(cell = pos.to_index(), "Move rolled back");
        Some(pos)
    }

    /// Plays a full turn: the human's move, then the engine's reply.
    ///
    /// If the human's move ends the game the engine is not consulted. If the
    /// engine cannot be reached the human's move is rolled back and a notice
    /// is left, so the board is exactly as before the call.
    #[instrument(skip(self, source))]
    pub async fn play_turn(
        &mut self,
        pos: Position,
        source: &dyn MoveSource,
    ) -> Result<GameStatus, SessionError> {
        self.notice = None;
        let status = self.apply(pos, Player::X)?;
        if status.is_over() {
            return Ok(status);
        }

        let reply = match source.request_move(&self.board).await {
            Ok(reply) => reply,
            Err(e) => {
                self.rollback();
                self.notice = Some(format!(
                    "Could not reach the engine, try again ({})",
                    e.message
                ));
                return Err(SessionError::Transport(e));
            }
        };

        let Some(ai_pos) = Position::from_index(reply.chosen_cell)
            .filter(|p| self.board.is_empty(*p))
        else {
            self.rollback();
            self.notice = Some("The engine replied with an unplayable square".to_string());
            return Err(SessionError::BadReply(reply.chosen_cell));
        };

        info!(cell = reply.chosen_cell, "Engine replied");
        self.apply(ai_pos, Player::O)
    }
}

impl Default for PlaySession {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alternating_turns() {
        let mut session = PlaySession::new();
        assert_eq!(session.to_move(), Player::X);
        session.apply(Position::Center, Player::X).unwrap();
        assert_eq!(session.to_move(), Player::O);
        assert!(matches!(
            session.apply(Position::TopLeft, Player::X),
            Err(SessionError::WrongPlayer(Player::X))
        ));
    }

    #[test]
    fn test_occupied_square_rejected() {
        let mut session = PlaySession::new();
        session.apply(Position::Center, Player::X).unwrap();
        assert!(matches!(
            session.apply(Position::Center, Player::O),
            Err(SessionError::SquareOccupied(Position::Center))
        ));
    }

    #[test]
    fn test_rollback_restores_board() {
        let mut session = PlaySession::new();
        session.apply(Position::Center, Player::X).unwrap();
        assert_eq!(session.rollback(), Some(Position::Center));
        assert_eq!(session.board(), &Board::new());
        assert_eq!(session.to_move(), Player::X);
        assert_eq!(session.rollback(), None);
    }

    #[test]
    fn test_no_moves_after_win() {
        let mut session = PlaySession::new();
        for (pos, player) in [
            (Position::TopLeft, Player::X),
            (Position::MiddleLeft, Player::O),
            (Position::TopCenter, Player::X),
            (Position::Center, Player::O),
            (Position::TopRight, Player::X),
        ] {
            session.apply(pos, player).unwrap();
        }
        assert_eq!(session.status(), GameStatus::Won(Player::X));
        assert!(matches!(
            session.apply(Position::BottomLeft, Player::O),
            Err(SessionError::GameOver)
        ));
    }
}
