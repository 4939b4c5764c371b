//! Wire types for `POST /api/move`.
//!
//! Field names are camelCase to match the browser client.

use oracle_tictactoe::{
    AnalysisResult, Board, BoardParseError, MoveCandidate, Player, Square, Strategy,
};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Request body: the board as the client sees it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoveRequest {
    /// Nine cells, each `null`, `"X"` or `"O"`. Absent means an empty board.
    #[serde(default)]
    pub board_state: Option<Vec<Option<String>>>,
}

impl MoveRequest {
    /// Builds a request from a board.
    pub fn from_board(board: &Board) -> Self {
        let cells = board
            .squares()
            .iter()
            .map(|sq| sq.player().map(|p| p.to_string()))
            .collect();
        Self {
            board_state: Some(cells),
        }
    }

    /// Validates the cells into a board.
    ///
    /// A missing or empty `boardState` is the empty board.
    #[instrument(skip(self))]
    pub fn board(&self) -> Result<Board, BoardParseError> {
        match self.board_state.as_deref() {
            None | Some([]) => Ok(Board::new()),
            Some(cells) => Board::try_from(cells),
        }
    }
}

/// One row of the move analysis table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoveAnalysisEntry {
    /// Board index 0-8.
    pub cell_index: usize,
    /// Total score.
    pub score: f64,
    /// Entropy of the board after the move.
    pub entropy: f64,
    /// Purity of the board after the move.
    pub purity: f64,
    /// Deciding tier.
    pub strategy: Strategy,
}

impl From<&MoveCandidate> for MoveAnalysisEntry {
    fn from(candidate: &MoveCandidate) -> Self {
        let features = candidate.features();
        Self {
            cell_index: candidate.cell_index(),
            score: candidate.score(),
            entropy: features.map(|f| f.entropy).unwrap_or_default(),
            purity: features.map(|f| f.purity).unwrap_or_default(),
            strategy: candidate.strategy(),
        }
    }
}

/// Feature diagnostics of the board as received.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawQuantumResult {
    /// Most probable register state as a bit string.
    pub measured: String,
    /// Most probable register state as an integer.
    pub classical_register: usize,
    /// Probability of each register state.
    pub probabilities: Vec<f64>,
    /// Entropy to three decimal places.
    pub entropy: String,
    /// Purity to three decimal places.
    pub purity: String,
    /// One-line summary of the distribution.
    pub quantum_state: String,
}

/// Response body: the chosen square plus the full analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoveResponse {
    /// Board index the engine plays.
    pub chosen_cell: usize,
    /// Every legal candidate, best first.
    pub move_analysis: Vec<MoveAnalysisEntry>,
    /// The engine's mark, always O.
    pub symbol: Player,
    /// Feature diagnostics.
    pub raw_quantum_result: RawQuantumResult,
}

impl From<&AnalysisResult> for MoveResponse {
    fn from(analysis: &AnalysisResult) -> Self {
        let features = analysis.board_features();
        Self {
            chosen_cell: analysis.chosen().to_index(),
            move_analysis: analysis.ranked().iter().map(MoveAnalysisEntry::from).collect(),
            symbol: oracle_tictactoe::ENGINE,
            raw_quantum_result: RawQuantumResult {
                measured: features.measured(),
                classical_register: features.most_probable(),
                probabilities: features.probabilities().to_vec(),
                entropy: format!("{:.3}", features.entropy()),
                purity: format!("{:.3}", features.purity()),
                quantum_state: features.describe(),
            },
        }
    }
}

/// Error body returned with non-2xx statuses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    /// Human-readable message.
    pub error: String,
}

/// Renders cells as the compact form accepted by the `analyze` command.
pub fn compact(board: &Board) -> String {
    board
        .squares()
        .iter()
        .map(|sq| match sq {
            Square::Empty => '.',
            Square::Occupied(Player::X) => 'X',
            Square::Occupied(Player::O) => 'O',
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use oracle_tictactoe::select_move;

    #[test]
    fn test_missing_board_state_is_empty_board() {
        let req: MoveRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(req.board().unwrap(), Board::new());
        let req: MoveRequest = serde_json::from_str(r#"{"boardState": []}"#).unwrap();
        assert_eq!(req.board().unwrap(), Board::new());
    }

    #[test]
    fn test_board_state_parses() {
        let req: MoveRequest = serde_json::from_str(
            r#"{"boardState": ["O","O",null,"X","X",null,null,null,null]}"#,
        )
        .unwrap();
        let board = req.board().unwrap();
        assert_eq!(compact(&board), "OO.XX....");
        assert_eq!(MoveRequest::from_board(&board), req);
    }

    #[test]
    fn test_short_board_state_is_rejected() {
        let req: MoveRequest = serde_json::from_str(r#"{"boardState": [null, "X"]}"#).unwrap();
        assert_eq!(req.board(), Err(BoardParseError::WrongLength { len: 2 }));
    }

    #[test]
    fn test_response_shape() {
        let analysis = select_move(&Board::new()).unwrap();
        let response = MoveResponse::from(&analysis);
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["chosenCell"], 4);
        assert_eq!(json["symbol"], "O");
        assert_eq!(json["moveAnalysis"].as_array().unwrap().len(), 9);
        assert_eq!(json["moveAnalysis"][0]["strategy"], "center");
        let raw = &json["rawQuantumResult"];
        assert_eq!(raw["measured"], "0000");
        assert_eq!(raw["classicalRegister"], 0);
        assert_eq!(raw["probabilities"].as_array().unwrap().len(), 16);
        assert_eq!(raw["entropy"], "0.000");
        assert_eq!(raw["purity"], "1.000");
    }
}
