//! Engine error types.

use crate::types::{Coord, Side};
use derive_more::{Display, Error};

/// Specific engine error conditions.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum EngineErrorKind {
    /// A move was requested on a board with no empty cell.
    #[display("No legal move: every cell is occupied")]
    BoardFull,

    /// Coordinates outside the 3x3 grid.
    #[display("Cell ({}, {}) is out of bounds (rows and columns are 0-2)", row, col)]
    OutOfBounds {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
    },

    /// The target cell already holds a mark.
    #[display("Cell {} is already occupied", _0)]
    CellOccupied(Coord),

    /// The game has already been decided.
    #[display("Game is already over")]
    GameOver,

    /// A side tried to move out of turn.
    #[display("It's not {}'s turn", _0)]
    WrongSide(Side),

    /// Board notation could not be parsed.
    #[display("Invalid board notation: {}", _0)]
    ParseBoard(String),

    /// Side notation could not be parsed.
    #[display("Invalid side '{}' (expected 'X' or 'O')", _0)]
    ParseSide(String),
}

/// Engine error with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("Engine error: {} at {}:{}", kind, file, line)]
pub struct EngineError {
    /// What went wrong.
    pub kind: EngineErrorKind,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl EngineError {
    /// Creates a new engine error with caller location tracking.
    #[track_caller]
    pub fn new(kind: EngineErrorKind) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            kind,
            line: loc.line(),
            file: loc.file(),
        }
    }

    /// Returns the error kind.
    pub fn kind(&self) -> &EngineErrorKind {
        &self.kind
    }
}

impl From<EngineErrorKind> for EngineError {
    #[track_caller]
    fn from(kind: EngineErrorKind) -> Self {
        Self::new(kind)
    }
}

/// Result alias for engine operations.
pub type EngineResult<T> = Result<T, EngineError>;
