//! Deterministic numeric features of a board.
//!
//! Each square is encoded as a rotation angle. Square `i` rotates bit
//! `i % 4` of a four-bit register; a bit rotated by `θ` reads 1 with
//! probability `sin²(θ/2)`. The sixteen register states get the product of
//! their bit probabilities, and the distribution is summarised by its
//! Shannon entropy (0 to 4 bits) and purity `Σ p²` (1/16 to 1).
//!
//! The features carry no strategic meaning. They only separate candidates
//! that the rule ladder scores identically and give the UI something to show.

use crate::types::{Board, Player, Square};
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;
use tracing::instrument;

/// Bits in the feature register.
pub const REGISTER_BITS: usize = 4;

/// Distinct register states.
pub const REGISTER_STATES: usize = 1 << REGISTER_BITS;

/// Rotation applied by a square's content.
fn square_angle(index: usize, square: Square) -> f64 {
    let step = (index + 1) as f64;
    match square {
        Square::Empty => 0.0,
        Square::Occupied(Player::X) => PI / 2.0 + step * PI / 18.0,
        Square::Occupied(Player::O) => PI / 4.0 + step * PI / 27.0,
    }
}

/// Entropy and purity of a board, as attached to each move candidate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FeatureSummary {
    /// Shannon entropy in bits, `0 ≤ entropy ≤ 4`.
    pub entropy: f64,
    /// Purity `Σ p²`, in `[0, 1]`.
    pub purity: f64,
}

/// Full feature distribution for a board.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureVector {
    probabilities: [f64; REGISTER_STATES],
    entropy: f64,
    purity: f64,
}

impl FeatureVector {
    /// Computes the features of `board`.
    ///
    /// The same board always yields bit-identical values.
    #[instrument(skip(board))]
    pub fn extract(board: &Board) -> Self {
        let mut angles = [0.0_f64; REGISTER_BITS];
        for (index, square) in board.squares().iter().enumerate() {
            angles[index % REGISTER_BITS] += square_angle(index, *square);
        }
        let ones = angles.map(|theta| (theta / 2.0).sin().powi(2));

        let mut probabilities = [0.0_f64; REGISTER_STATES];
        for (state, p) in probabilities.iter_mut().enumerate() {
            *p = ones
                .iter()
                .enumerate()
                .map(|(bit, one)| if state >> bit & 1 == 1 { *one } else { 1.0 - one })
                .product();
        }

        let entropy = probabilities
            .iter()
            .filter(|p| **p > 0.0)
            .map(|p| p * (1.0 / p).log2())
            .sum::<f64>()
            .clamp(0.0, REGISTER_BITS as f64);
        let purity = probabilities
            .iter()
            .map(|p| p * p)
            .sum::<f64>()
            .clamp(0.0, 1.0);

        Self {
            probabilities,
            entropy,
            purity,
        }
    }

    /// Probability of every register state.
    pub fn probabilities(&self) -> &[f64; REGISTER_STATES] {
        &self.probabilities
    }

    /// Shannon entropy in bits.
    pub fn entropy(&self) -> f64 {
        self.entropy
    }

    /// Sum of squared probabilities.
    pub fn purity(&self) -> f64 {
        self.purity
    }

    /// Entropy and purity only.
    pub fn summary(&self) -> FeatureSummary {
        FeatureSummary {
            entropy: self.entropy,
            purity: self.purity,
        }
    }

    /// The `n` most probable states, ties going to the lower state.
    pub fn top_states(&self, n: usize) -> Vec<usize> {
        let mut states: Vec<usize> = (0..REGISTER_STATES).collect();
        states.sort_by(|a, b| self.probabilities[*b].total_cmp(&self.probabilities[*a]));
        states.truncate(n);
        states
    }

    /// The single most probable state.
    pub fn most_probable(&self) -> usize {
        self.top_states(1).first().copied().unwrap_or_default()
    }

    /// Probability of the most probable state.
    pub fn top_probability(&self) -> f64 {
        self.probabilities[self.most_probable()]
    }

    /// Most probable state as a bit string, highest bit first.
    pub fn measured(&self) -> String {
        format!("{:0width$b}", self.most_probable(), width = REGISTER_BITS)
    }

    /// One-line description for display.
    pub fn describe(&self) -> String {
        format!(
            "{}-bit register, {} states, peak |{}⟩ p={:.3}",
            REGISTER_BITS,
            REGISTER_STATES,
            self.measured(),
            self.top_probability()
        )
    }
}

/// Entropy and purity of `board`.
pub fn extract_features(board: &Board) -> FeatureSummary {
    FeatureVector::extract(board).summary()
}
