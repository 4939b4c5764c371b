//! Core domain types for tic-tac-toe.

use crate::error::BoardParseError;
use crate::position::Position;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::instrument;

/// Player in the game.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[strum(ascii_case_insensitive)]
pub enum Player {
    /// Player X (goes first, the human).
    X,
    /// Player O (goes second, the engine).
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }
}

/// A square on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    Empty,
    /// Square occupied by a player.
    Occupied(Player),
}

impl Square {
    /// Returns the occupying player, if any.
    pub fn player(self) -> Option<Player> {
        match self {
            Square::Empty => None,
            Square::Occupied(player) => Some(player),
        }
    }
}

impl From<Option<Player>> for Square {
    fn from(player: Option<Player>) -> Self {
        player.map_or(Square::Empty, Square::Occupied)
    }
}

/// 3x3 tic-tac-toe board.
///
/// Boards are small `Copy` values; hypothetical placements are made on
/// copies via [`Board::with_mark`] and never touch the original.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    /// Squares in row-major order (0-8).
    squares: [Square; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; 9],
        }
    }

    /// Creates a board from squares in row-major order.
    pub fn from_squares(squares: [Square; 9]) -> Self {
        Self { squares }
    }

    /// Gets the square at the given index (0-8).
    pub fn get(&self, index: usize) -> Option<Square> {
        self.squares.get(index).copied()
    }

    /// Gets the square at the given position.
    pub fn at(&self, pos: Position) -> Square {
        self.squares[pos.to_index()]
    }

    /// Sets the square at the given position.
    pub fn set(&mut self, pos: Position, square: Square) {
        self.squares[pos.to_index()] = square;
    }

    /// Checks if a square is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.at(pos) == Square::Empty
    }

    /// Returns a copy of the board with `player` placed at `pos`.
    pub fn with_mark(&self, pos: Position, player: Player) -> Self {
        let mut next = *self;
        next.set(pos, Square::Occupied(player));
        next
    }

    /// Returns all squares as a slice.
    pub fn squares(&self) -> &[Square; 9] {
        &self.squares
    }

    /// Empty positions in index order.
    pub fn empty_positions(&self) -> impl Iterator<Item = Position> + '_ {
        Position::ALL.into_iter().filter(|pos| self.is_empty(*pos))
    }

    /// Number of squares held by `player`.
    pub fn count(&self, player: Player) -> usize {
        self.squares
            .iter()
            .filter(|sq| **sq == Square::Occupied(player))
            .count()
    }

    /// Whether the X/O counts could arise from alternating play with X first.
    pub fn has_valid_counts(&self) -> bool {
        let xs = self.count(Player::X);
        let os = self.count(Player::O);
        xs == os || xs == os + 1
    }

    /// Formats the board as a human-readable string.
    ///
    /// Empty squares show their index so a player can type it.
    pub fn display(&self) -> String {
        let mut result = String::new();
        for row in 0..3 {
            for col in 0..3 {
                let pos = row * 3 + col;
                let symbol = match self.squares[pos] {
                    Square::Empty => pos.to_string(),
                    Square::Occupied(player) => player.to_string(),
                };
                result.push_str(&symbol);
                if col < 2 {
                    result.push('|');
                }
            }
            if row < 2 {
                result.push_str("\n-+-+-\n");
            }
        }
        result
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl FromStr for Board {
    type Err = BoardParseError;

    /// Parses a compact board such as `"XO..X...O"`.
    ///
    /// `X`/`O` (any case) are marks; `.`, `-`, `_` and space are empty.
    #[instrument]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let chars: Vec<char> = s.chars().collect();
        if chars.len() != 9 {
            return Err(BoardParseError::WrongLength { len: chars.len() });
        }
        let mut squares = [Square::Empty; 9];
        for (index, ch) in chars.into_iter().enumerate() {
            squares[index] = match ch {
                'x' | 'X' => Square::Occupied(Player::X),
                'o' | 'O' => Square::Occupied(Player::O),
                '.' | '-' | '_' | ' ' => Square::Empty,
                other => {
                    return Err(BoardParseError::InvalidSymbol {
                        index,
                        symbol: other.to_string(),
                    });
                }
            };
        }
        Ok(Self { squares })
    }
}

impl TryFrom<&[Option<String>]> for Board {
    type Error = BoardParseError;

    /// Builds a board from wire cells (`null`, `"X"` or `"O"`).
    fn try_from(cells: &[Option<String>]) -> Result<Self, Self::Error> {
        if cells.len() != 9 {
            return Err(BoardParseError::WrongLength { len: cells.len() });
        }
        let mut squares = [Square::Empty; 9];
        for (index, cell) in cells.iter().enumerate() {
            squares[index] = match cell.as_deref() {
                None | Some("") => Square::Empty,
                Some(symbol) => Square::Occupied(Player::from_str(symbol).map_err(|_| {
                    BoardParseError::InvalidSymbol {
                        index,
                        symbol: symbol.to_string(),
                    }
                })?),
            };
        }
        Ok(Self { squares })
    }
}

/// Current status of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game is ongoing.
    InProgress,
    /// Game ended in a win.
    Won(Player),
    /// Game ended in a draw.
    Draw,
}

impl GameStatus {
    /// Whether the game has ended.
    pub fn is_over(self) -> bool {
        self != GameStatus::InProgress
    }
}
