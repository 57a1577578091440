//! Win detection logic for tic-tac-toe.

use crate::types::{Board, Cell, Coord, Side};
use serde::{Deserialize, Serialize};

/// Result of inspecting a board for three in a row.
///
/// A full board without a line is still `NoWinner`; callers combine this with
/// [`Board::is_full`] to detect a draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// The side completed a line.
    Won(Side),
    /// No line is complete.
    NoWinner,
}

impl Outcome {
    /// Returns the winning side, if any.
    pub fn winner(self) -> Option<Side> {
        match self {
            Outcome::Won(side) => Some(side),
            Outcome::NoWinner => None,
        }
    }
}

/// The eight lines, in scan order: each row followed by the matching column,
/// then the two diagonals.
pub const LINES: [[Coord; 3]; 8] = [
    [Coord::new(0, 0), Coord::new(0, 1), Coord::new(0, 2)],
    [Coord::new(0, 0), Coord::new(1, 0), Coord::new(2, 0)],
    [Coord::new(1, 0), Coord::new(1, 1), Coord::new(1, 2)],
    [Coord::new(0, 1), Coord::new(1, 1), Coord::new(2, 1)],
    [Coord::new(2, 0), Coord::new(2, 1), Coord::new(2, 2)],
    [Coord::new(0, 2), Coord::new(1, 2), Coord::new(2, 2)],
    // Diagonals
    [Coord::new(0, 0), Coord::new(1, 1), Coord::new(2, 2)],
    [Coord::new(0, 2), Coord::new(1, 1), Coord::new(2, 0)],
];

/// Checks if either side has three in a row.
///
/// Returns the side owning the first complete line found.
pub fn evaluate(board: &Board) -> Outcome {
    for [a, b, c] in LINES {
        let cell = board.get(a);
        if let Cell::Marked(side) = cell
            && cell == board.get(b)
            && cell == board.get(c)
        {
            return Outcome::Won(side);
        }
    }

    Outcome::NoWinner
}
