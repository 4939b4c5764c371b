//! Error types for the move engine.

/// Error returned when the engine cannot produce a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum EngineError {
    /// Selection was requested on a full board.
    #[display("No legal move: every square is occupied")]
    NoLegalMove,
}

impl std::error::Error for EngineError {}

/// Error that can occur when building a board from external input.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum BoardParseError {
    /// The input did not describe exactly nine squares.
    #[display("Board must have 9 squares, got {}", len)]
    WrongLength {
        /// Number of squares supplied.
        len: usize,
    },

    /// A square held something other than X, O or empty.
    #[display("Invalid symbol {:?} at square {}", symbol, index)]
    InvalidSymbol {
        /// Index of the offending square.
        index: usize,
        /// The symbol as received.
        symbol: String,
    },
}

impl std::error::Error for BoardParseError {}
