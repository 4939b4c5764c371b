//! Tests for the client-side play session.

use async_trait::async_trait;
use tictactoe_oracle::{
    Board, ClientError, GameStatus, LocalEngine, MoveResponse, MoveSource, PlaySession, Player,
    Position, SessionError, Square, select_move,
};

/// A source whose connection is always down.
struct Offline;

#[async_trait]
impl MoveSource for Offline {
    async fn request_move(&self, _board: &Board) -> Result<MoveResponse, ClientError> {
        Err(ClientError::new("connection refused".to_string()))
    }
}

/// A source that replies with a fixed square regardless of the board.
struct Stubborn(usize);

#[async_trait]
impl MoveSource for Stubborn {
    async fn request_move(&self, board: &Board) -> Result<MoveResponse, ClientError> {
        let analysis = select_move(board).map_err(|e| ClientError::new(e.to_string()))?;
        let mut response = MoveResponse::from(&analysis);
        response.chosen_cell = self.0;
        Ok(response)
    }
}

#[tokio::test]
async fn test_turn_applies_both_moves() {
    let mut session = PlaySession::new();
    let status = session.play_turn(Position::TopLeft, &LocalEngine).await.unwrap();
    assert_eq!(status, GameStatus::InProgress);
    assert_eq!(session.history().len(), 2);
    assert_eq!(session.board().at(Position::TopLeft), Square::Occupied(Player::X));
    // Opposite corner plus corner outscores the center.
    assert_eq!(session.board().at(Position::BottomRight), Square::Occupied(Player::O));
    assert_eq!(session.to_move(), Player::X);
}

#[tokio::test]
async fn test_transport_failure_rolls_back() {
    let mut session = PlaySession::new();
    session.play_turn(Position::TopLeft, &LocalEngine).await.unwrap();
    let before = *session.board();

    let result = session.play_turn(Position::TopRight, &Offline).await;
    assert!(matches!(result, Err(SessionError::Transport(_))));
    assert_eq!(session.board(), &before);
    assert_eq!(session.history().len(), 2);
    assert!(session.notice().unwrap().contains("connection refused"));

    // Input is usable again and the notice clears on the next turn.
    session.play_turn(Position::TopRight, &LocalEngine).await.unwrap();
    assert_eq!(session.notice(), None);
    assert_eq!(session.history().len(), 4);
}

#[tokio::test]
async fn test_unplayable_reply_rolls_back() {
    let mut session = PlaySession::new();
    // The engine "chooses" the square the human just took.
    let result = session.play_turn(Position::Center, &Stubborn(4)).await;
    assert!(matches!(result, Err(SessionError::BadReply(4))));
    assert_eq!(session.board(), &Board::new());

    let result = session.play_turn(Position::Center, &Stubborn(42)).await;
    assert!(matches!(result, Err(SessionError::BadReply(42))));
    assert_eq!(session.board(), &Board::new());
}

#[tokio::test]
async fn test_occupied_square_is_rejected_without_calling_engine() {
    let mut session = PlaySession::new();
    session.play_turn(Position::Center, &LocalEngine).await.unwrap();
    let result = session.play_turn(Position::Center, &Offline).await;
    assert!(matches!(result, Err(SessionError::SquareOccupied(Position::Center))));
    assert_eq!(session.notice(), None);
}

#[tokio::test]
async fn test_engine_beats_lowest_square_player() {
    // X always takes the lowest empty square.
    let mut session = PlaySession::new();
    while !session.status().is_over() {
        let pos = session.board().empty_positions().next().unwrap();
        session.play_turn(pos, &LocalEngine).await.unwrap();
    }
    assert_eq!(session.status(), GameStatus::Won(Player::O));
    let played: Vec<usize> = session.history().iter().map(|p| p.to_index()).collect();
    assert_eq!(played, vec![0, 8, 1, 2, 3, 5]);
}

#[tokio::test]
async fn test_reset_clears_everything() {
    let mut session = PlaySession::new();
    session.play_turn(Position::Center, &LocalEngine).await.unwrap();
    session.reset();
    assert_eq!(session.board(), &Board::new());
    assert!(session.history().is_empty());
    assert_eq!(session.status(), GameStatus::InProgress);
}
