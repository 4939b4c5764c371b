//! Move selection over every legal square.

use crate::error::EngineError;
use crate::features::FeatureVector;
use crate::position::Position;
use crate::scorer::{MoveCandidate, score_move};
use crate::types::Board;
use serde::{Deserialize, Serialize};
use tracing::{info, instrument, warn};

/// Outcome of one engine turn.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    chosen: Position,
    ranked: Vec<MoveCandidate>,
    board_features: FeatureVector,
}

impl AnalysisResult {
    /// The square the engine plays.
    pub fn chosen(&self) -> Position {
        self.chosen
    }

    /// Every legal candidate, best first.
    pub fn ranked(&self) -> &[MoveCandidate] {
        &self.ranked
    }

    /// Features of the board as received, for display.
    pub fn board_features(&self) -> &FeatureVector {
        &self.board_features
    }
}

/// Picks O's move on `board`.
///
/// Candidates are scored in index order and stable-sorted by descending
/// score, so equal scores keep the lower square first.
///
/// # Errors
///
/// Returns [`EngineError::NoLegalMove`] when the board is full.
#[instrument(skip(board))]
pub fn select_move(board: &Board) -> Result<AnalysisResult, EngineError> {
    if !board.has_valid_counts() {
        warn!("Board counts cannot arise from alternating play; analysing anyway");
    }

    let mut ranked: Vec<MoveCandidate> = board
        .empty_positions()
        .map(|pos| score_move(board, pos))
        .collect();
    ranked.sort_by(|a, b| b.score().total_cmp(&a.score()));

    let best = ranked.first().ok_or(EngineError::NoLegalMove)?;
    let chosen = best.position();
    info!(
        cell = chosen.to_index(),
        score = best.score(),
        strategy = %best.strategy(),
        candidates = ranked.len(),
        "Move selected"
    );

    Ok(AnalysisResult {
        chosen,
        ranked,
        board_features: FeatureVector::extract(board),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::strategy::Strategy;

    #[test]
    fn test_full_board_has_no_legal_move() {
        let board: Board = "XOXOXXOXO".parse().unwrap();
        assert_eq!(select_move(&board), Err(EngineError::NoLegalMove));
    }

    #[test]
    fn test_ranked_lists_only_empty_squares() {
        let board: Board = "X...O....".parse().unwrap();
        let analysis = select_move(&board).unwrap();
        assert_eq!(analysis.ranked().len(), 7);
        assert!(analysis.ranked().iter().all(|c| c.is_valid()));
        assert!(
            analysis
                .ranked()
                .windows(2)
                .all(|w| w[0].score() >= w[1].score())
        );
        assert_eq!(analysis.chosen(), analysis.ranked()[0].position());
    }

    #[test]
    fn test_single_empty_square_is_chosen() {
        let board: Board = "XOXOXXO.O".parse().unwrap();
        let analysis = select_move(&board).unwrap();
        assert_eq!(analysis.chosen(), Position::BottomCenter);
        assert_eq!(analysis.ranked().len(), 1);
    }

    #[test]
    fn test_center_on_empty_board() {
        let analysis = select_move(&Board::new()).unwrap();
        assert_eq!(analysis.chosen(), Position::Center);
        assert_eq!(analysis.ranked()[0].strategy(), Strategy::Center);
    }
}
