//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`]: they read cells and never mutate.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{LINES, Outcome, evaluate};

use crate::types::{Board, GameStatus};
use tracing::instrument;

/// Classifies a board as won, drawn or still in progress.
#[instrument(skip(board), fields(board = %board))]
pub fn status(board: &Board) -> GameStatus {
    if is_draw(board) {
        return GameStatus::Draw;
    }
    match evaluate(board) {
        Outcome::Won(side) => GameStatus::Won(side),
        Outcome::NoWinner => GameStatus::InProgress,
    }
}
