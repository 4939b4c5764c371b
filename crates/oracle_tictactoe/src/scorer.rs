//! Scoring of a single candidate square.
//!
//! A win or a block replaces the score outright and outranks every other
//! square. Below those two tiers the bonuses add up, so several lower tiers
//! together can outscore a single higher one. The strategy tag records only
//! the first tier that applied.

use crate::features::{FeatureSummary, FeatureVector};
use crate::position::Position;
use crate::rules::{creates_fork, is_winning_move};
use crate::strategy::Strategy;
use crate::types::{Board, Player, Square};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// The engine always plays O.
pub const ENGINE: Player = Player::O;

/// Completing a line.
pub const WIN_SCORE: f64 = 100_000.0;
/// Blocking the opponent's line.
pub const BLOCK_WIN_SCORE: f64 = 90_000.0;
/// Opening two threats.
pub const FORK_BONUS: f64 = 5_000.0;
/// Denying the opponent a fork square.
pub const BLOCK_FORK_BONUS: f64 = 4_000.0;
/// Taking the center.
pub const CENTER_BONUS: f64 = 3_000.0;
/// Answering an opponent corner from across the board.
pub const OPPOSITE_CORNER_BONUS: f64 = 2_500.0;
/// Taking a corner.
pub const CORNER_BONUS: f64 = 2_000.0;
/// Taking an edge.
pub const EDGE_BONUS: f64 = 500.0;
/// Square index matches one of the top feature states.
pub const TOP_STATE_BONUS: f64 = 30.0;

/// A scored square.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MoveCandidate {
    position: Position,
    score: f64,
    strategy: Strategy,
    features: Option<FeatureSummary>,
}

impl MoveCandidate {
    fn invalid(position: Position) -> Self {
        Self {
            position,
            score: f64::NEG_INFINITY,
            strategy: Strategy::Invalid,
            features: None,
        }
    }

    /// The square.
    pub fn position(&self) -> Position {
        self.position
    }

    /// Board index of the square.
    pub fn cell_index(&self) -> usize {
        self.position.to_index()
    }

    /// Total score; negative infinity for an occupied square.
    pub fn score(&self) -> f64 {
        self.score
    }

    /// The deciding tier.
    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    /// Features of the board after the move; `None` when invalid.
    pub fn features(&self) -> Option<FeatureSummary> {
        self.features
    }

    /// Whether the square can be played.
    pub fn is_valid(&self) -> bool {
        self.strategy != Strategy::Invalid
    }
}

/// Running total for the cumulative tiers.
#[derive(Debug, Default)]
struct Tally {
    score: f64,
    strategy: Strategy,
}

impl Tally {
    fn award(&mut self, bonus: f64, strategy: Strategy) {
        self.score += bonus;
        if self.strategy == Strategy::Quantum {
            self.strategy = strategy;
        }
    }
}

/// Bonus from the features of the board after the move.
fn feature_bonus(features: &FeatureVector, pos: Position) -> f64 {
    let mut bonus = (4.0 - features.entropy()) * 10.0 + features.purity() * 50.0;
    if features
        .top_states(3)
        .iter()
        .any(|state| state % 9 == pos.to_index())
    {
        bonus += TOP_STATE_BONUS;
    }
    bonus + features.top_probability() * 20.0
}

/// Scores O playing at `pos`.
///
/// Occupied squares score negative infinity with the `invalid` tag.
#[instrument(skip(board), fields(cell = pos.to_index()))]
pub fn score_move(board: &Board, pos: Position) -> MoveCandidate {
    if !board.is_empty(pos) {
        debug!("Square occupied, candidate invalid");
        return MoveCandidate::invalid(pos);
    }

    let opponent = ENGINE.opponent();
    let features = FeatureVector::extract(&board.with_mark(pos, ENGINE));

    let (score, strategy) = if is_winning_move(board, pos, ENGINE) {
        (WIN_SCORE, Strategy::WinningMove)
    } else if is_winning_move(board, pos, opponent) {
        (BLOCK_WIN_SCORE, Strategy::BlockWin)
    } else {
        let mut tally = Tally::default();
        if creates_fork(board, pos, ENGINE) {
            tally.award(FORK_BONUS, Strategy::Fork);
        }
        if creates_fork(board, pos, opponent) {
            tally.award(BLOCK_FORK_BONUS, Strategy::BlockFork);
        }
        if pos == Position::Center {
            tally.award(CENTER_BONUS, Strategy::Center);
        }
        if pos
            .opposite_corner()
            .is_some_and(|across| board.at(across) == Square::Occupied(opponent))
        {
            tally.award(OPPOSITE_CORNER_BONUS, Strategy::OppositeCorner);
        }
        if pos.is_corner() {
            tally.award(CORNER_BONUS, Strategy::Corner);
        }
        tally.score += feature_bonus(&features, pos);
        if pos.is_edge() {
            tally.award(EDGE_BONUS, Strategy::Edge);
        }
        (tally.score, tally.strategy)
    };

    debug!(score, %strategy, "Scored candidate");
    MoveCandidate {
        position: pos,
        score,
        strategy,
        features: Some(features.summary()),
    }
}
