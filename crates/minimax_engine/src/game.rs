//! Authoritative game state for a driver.
//!
//! The search engine only ever sees `&Board` snapshots; this type is what a
//! driver mutates between turns.

use crate::error::{EngineError, EngineErrorKind, EngineResult};
use crate::rules;
use crate::types::{Board, Cell, Coord, GameStatus, Side};
use serde::Serialize;
use tracing::{debug, instrument};

/// A side placing its mark at a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, derive_more::Display)]
#[display("{} -> {}", side, at)]
pub struct Move {
    /// The side making the move.
    pub side: Side,
    /// Where the mark goes.
    pub at: Coord,
}

/// Tic-tac-toe game in progress or finished.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Game {
    board: Board,
    to_move: Side,
    status: GameStatus,
    history: Vec<Move>,
}

impl Game {
    /// Creates an empty game with `first` to move.
    #[instrument]
    pub fn new(first: Side) -> Self {
        Self {
            board: Board::new(),
            to_move: first,
            status: GameStatus::InProgress,
            history: Vec::new(),
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the side to move.
    pub fn to_move(&self) -> Side {
        self.to_move
    }

    /// Returns the game status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Returns the moves played so far.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Number of moves played.
    pub fn ply(&self) -> usize {
        self.history.len()
    }

    /// Checks if the game has been decided.
    pub fn is_over(&self) -> bool {
        self.status != GameStatus::InProgress
    }

    /// Places `side`'s mark at `at` and returns the new status.
    ///
    /// # Errors
    ///
    /// Fails without changing anything when the game is over, when it is not
    /// `side`'s turn, or when the cell is occupied.
    #[instrument(skip(self), fields(to_move = %self.to_move))]
    pub fn make_move(&mut self, side: Side, at: Coord) -> EngineResult<GameStatus> {
        if self.is_over() {
            return Err(EngineError::new(EngineErrorKind::GameOver));
        }
        if side != self.to_move {
            return Err(EngineError::new(EngineErrorKind::WrongSide(side)));
        }
        if !self.board.is_empty(at) {
            return Err(EngineError::new(EngineErrorKind::CellOccupied(at)));
        }

        self.board.set(at, Cell::Marked(side));
        self.history.push(Move { side, at });
        self.status = rules::status(&self.board);
        self.to_move = side.flip();

        debug!(board = %self.board, status = ?self.status, "Move applied");
        Ok(self.status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_game() {
        let game = Game::new(Side::O);
        assert_eq!(game.to_move(), Side::O);
        assert_eq!(game.status(), GameStatus::InProgress);
        assert_eq!(game.ply(), 0);
    }

    #[test]
    fn test_make_move_alternates() {
        let mut game = Game::new(Side::X);
        game.make_move(Side::X, Coord::new(1, 1)).unwrap();
        assert_eq!(game.to_move(), Side::O);
        assert_eq!(game.history()[0].to_string(), "X -> (1, 1)");
    }

    #[test]
    fn test_rejects_wrong_side() {
        let mut game = Game::new(Side::X);
        let err = game.make_move(Side::O, Coord::new(0, 0)).unwrap_err();
        assert_eq!(err.kind(), &EngineErrorKind::WrongSide(Side::O));
        assert_eq!(game.ply(), 0);
    }

    #[test]
    fn test_rejects_occupied() {
        let mut game = Game::new(Side::X);
        game.make_move(Side::X, Coord::new(0, 0)).unwrap();
        let err = game.make_move(Side::O, Coord::new(0, 0)).unwrap_err();
        assert_eq!(err.kind(), &EngineErrorKind::CellOccupied(Coord::new(0, 0)));
    }

    #[test]
    fn test_win_ends_game() {
        let mut game = Game::new(Side::X);
        for (side, row, col) in [
            (Side::X, 0, 0),
            (Side::O, 1, 0),
            (Side::X, 0, 1),
            (Side::O, 1, 1),
        ] {
            game.make_move(side, Coord::new(row, col)).unwrap();
        }
        let status = game.make_move(Side::X, Coord::new(0, 2)).unwrap();
        assert_eq!(status, GameStatus::Won(Side::X));
        assert!(game.is_over());

        let err = game.make_move(Side::O, Coord::new(2, 2)).unwrap_err();
        assert_eq!(err.kind(), &EngineErrorKind::GameOver);
    }
}
