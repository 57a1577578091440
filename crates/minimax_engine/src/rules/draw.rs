//! Draw detection logic for tic-tac-toe.

use super::win::evaluate;
use crate::types::Board;

/// Checks if the board is full (all cells occupied).
pub fn is_full(board: &Board) -> bool {
    board.is_full()
}

/// A full board with no winner.
pub fn is_draw(board: &Board) -> bool {
    is_full(board) && evaluate(board).winner().is_none()
}
