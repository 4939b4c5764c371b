//! Strategy tags explaining why a candidate scored as it did.

use serde::{Deserialize, Serialize};

/// The rule tier that decided a candidate's score.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::IntoStaticStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Strategy {
    /// Completes a line for the engine.
    WinningMove,
    /// Occupies the square the opponent needs to complete a line.
    BlockWin,
    /// Opens two threats at once.
    Fork,
    /// Takes a square that would have been a fork for the opponent.
    BlockFork,
    /// The center square.
    Center,
    /// The corner opposite one the opponent holds.
    OppositeCorner,
    /// Any corner.
    Corner,
    /// Any edge midpoint.
    Edge,
    /// No rule tier applied; ranked by features alone.
    #[default]
    Quantum,
    /// Occupied square, never selectable.
    Invalid,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_wire_names() {
        assert_eq!(Strategy::WinningMove.to_string(), "winning_move");
        assert_eq!(Strategy::OppositeCorner.to_string(), "opposite_corner");
        assert_eq!(
            serde_json::to_string(&Strategy::BlockFork).unwrap(),
            "\"block_fork\""
        );
        assert_eq!(Strategy::from_str("block_win").unwrap(), Strategy::BlockWin);
        assert_eq!(Strategy::default(), Strategy::Quantum);
    }
}
