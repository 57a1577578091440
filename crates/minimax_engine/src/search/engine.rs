//! Exhaustive minimax search with memoization.
//!
//! Scores are from the perspective of the side making the move being scored:
//! a completed line is worth [`WIN_SCORE`], a filled board [`DRAW_SCORE`].
//! There is no pruning and no depth discount; every reachable reply is
//! searched unless its exact key is already cached.

use super::cache::{CacheKey, CacheStats, TranspositionCache};
use crate::error::{EngineError, EngineErrorKind, EngineResult};
use crate::rules::{Outcome, evaluate};
use crate::types::{Board, Coord, Side};
use serde::Serialize;
use tracing::{debug, instrument, warn};

/// Score of a move that completes the mover's line.
pub const WIN_SCORE: i32 = 100;

/// Score of a move after which the opponent owns a line.
pub const LOSS_SCORE: i32 = -100;

/// Score of a move that ends the game without a line.
pub const DRAW_SCORE: i32 = 0;

/// Last ply that can still be followed by another move.
pub const LAST_PLY: u8 = 8;

/// A candidate move with its root score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScoredMove {
    /// Cell to play.
    pub at: Coord,
    /// Value of playing it, from the mover's perspective.
    pub score: i32,
}

impl ScoredMove {
    /// The highest-scoring entry of `moves`, the earliest one on ties.
    ///
    /// `None` when `moves` is empty.
    pub fn first_best(moves: &[ScoredMove]) -> Option<ScoredMove> {
        let mut best: Option<ScoredMove> = None;
        for candidate in moves {
            if best.is_none_or(|b| candidate.score > b.score) {
                best = Some(*candidate);
            }
        }
        best
    }
}

/// Minimax search engine holding its own score cache.
///
/// Construct one per process (or per series of games) and reuse it; the
/// cache keeps every score computed until [`SearchEngine::reset`].
#[derive(Debug, Clone, Default)]
pub struct SearchEngine {
    cache: TranspositionCache,
}

impl SearchEngine {
    /// Creates an engine with an empty cache.
    #[instrument]
    pub fn new() -> Self {
        Self::default()
    }

    /// Value for `side` of placing its mark at `at` on `board`, when `ply`
    /// moves have already been made.
    ///
    /// `board` must not yet contain the move. Only the board after the move
    /// is inspected for a winner.
    pub fn score(&mut self, ply: u8, at: Coord, side: Side, board: &Board) -> i32 {
        let key = CacheKey::new(ply, at, side, *board);
        if let Some(score) = self.cache.probe(&key) {
            return score;
        }

        debug_assert!(board.is_empty(at), "scoring a move onto an occupied cell");
        let next = board.with_mark(at, side);

        let score = match evaluate(&next) {
            Outcome::Won(winner) if winner == side => WIN_SCORE,
            // Only reachable when the input board was already decided.
            Outcome::Won(_) => LOSS_SCORE,
            Outcome::NoWinner if ply > LAST_PLY => DRAW_SCORE,
            Outcome::NoWinner => {
                let opponent = side.flip();
                let mut best_reply: Option<i32> = None;
                for reply in next.empty_cells() {
                    let value = self.score(ply + 1, reply, opponent, &next);
                    best_reply = Some(best_reply.map_or(value, |best| best.max(value)));
                }
                best_reply.map_or(DRAW_SCORE, |best| -best)
            }
        };

        self.cache.store(key, score);
        score
    }

    /// Root scores of every empty cell, in row-major order.
    ///
    /// Empty when the board is full.
    #[instrument(skip(self, board), fields(board = %board))]
    pub fn scored_moves(&mut self, side: Side, board: &Board) -> Vec<ScoredMove> {
        board
            .empty_cells()
            .map(|at| ScoredMove {
                at,
                score: self.score(0, at, side, board),
            })
            .collect()
    }

    /// The highest-scoring move for `side`, with its score.
    ///
    /// Ties go to the first cell in row-major order.
    ///
    /// # Errors
    ///
    /// Returns [`EngineErrorKind::BoardFull`] when no cell is empty. Check
    /// for a finished game before asking for a move.
    #[instrument(skip(self, board), fields(board = %board))]
    pub fn best_scored_move(&mut self, side: Side, board: &Board) -> EngineResult<ScoredMove> {
        let moves = self.scored_moves(side, board);
        let Some(best) = ScoredMove::first_best(&moves) else {
            warn!("Best move requested on a full board");
            return Err(EngineError::new(EngineErrorKind::BoardFull));
        };

        let stats = self.cache.stats();
        debug!(
            at = %best.at,
            score = best.score,
            entries = stats.entries(),
            hits = stats.hits(),
            misses = stats.misses(),
            "Selected move"
        );
        Ok(best)
    }

    /// The cell `side` should play on `board`.
    ///
    /// On an empty board every cell scores a draw, so X opens at (0, 0).
    ///
    /// # Errors
    ///
    /// Returns [`EngineErrorKind::BoardFull`] when no cell is empty.
    pub fn best_move(&mut self, side: Side, board: &Board) -> EngineResult<Coord> {
        self.best_scored_move(side, board).map(|best| best.at)
    }

    /// Number of cached scores.
    pub fn cache_len(&self) -> usize {
        self.cache.len()
    }

    /// Cache usage counters.
    pub fn stats(&self) -> CacheStats {
        self.cache.stats()
    }

    /// Forgets every cached score.
    #[instrument(skip(self), fields(entries = self.cache.len()))]
    pub fn reset(&mut self) {
        debug!("Clearing search cache");
        self.cache.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(s: &str) -> Board {
        s.parse().unwrap()
    }

    #[test]
    fn test_completing_own_line_scores_win() {
        let mut engine = SearchEngine::new();
        let b = board("XX_/OO_/___");
        assert_eq!(engine.score(4, Coord::new(0, 2), Side::X, &b), WIN_SCORE);
    }

    #[test]
    fn test_filling_last_cell_without_line_scores_draw() {
        let mut engine = SearchEngine::new();
        // Last empty cell is (2, 2); X there leaves XOX/XOO/OXX
        let b = board("XOX/XOO/OX_");
        assert_eq!(engine.score(8, Coord::new(2, 2), Side::X, &b), DRAW_SCORE);
    }

    #[test]
    fn test_full_board_past_last_ply_is_draw() {
        let mut engine = SearchEngine::new();
        let b = board("XOX/XOO/OX_");
        assert_eq!(engine.score(9, Coord::new(2, 2), Side::X, &b), DRAW_SCORE);
    }

    #[test]
    fn test_existing_opponent_line_scores_loss() {
        let mut engine = SearchEngine::new();
        let b = board("OOO/XX_/___");
        assert_eq!(engine.score(0, Coord::new(2, 2), Side::X, &b), LOSS_SCORE);
    }

    #[test]
    fn test_score_does_not_mutate_board() {
        let mut engine = SearchEngine::new();
        let b = board("X__/_O_/___");
        let before = b;
        engine.score(2, Coord::new(0, 1), Side::X, &b);
        assert_eq!(b, before);
    }

    #[test]
    fn test_repeated_score_hits_cache() {
        let mut engine = SearchEngine::new();
        let b = board("X__/_O_/___");
        let first = engine.score(2, Coord::new(2, 2), Side::X, &b);
        let len = engine.cache_len();
        let misses = *engine.stats().misses();

        let second = engine.score(2, Coord::new(2, 2), Side::X, &b);
        assert_eq!(first, second);
        assert_eq!(engine.cache_len(), len);
        assert_eq!(*engine.stats().misses(), misses);
    }

    #[test]
    fn test_best_move_on_full_board_is_an_error() {
        let mut engine = SearchEngine::new();
        let err = engine.best_move(Side::X, &board("XOX/XOO/OXX")).unwrap_err();
        assert_eq!(err.kind(), &EngineErrorKind::BoardFull);
    }

    #[test]
    fn test_takes_immediate_win() {
        let mut engine = SearchEngine::new();
        let b = board("XX_/OO_/___");
        assert_eq!(engine.best_move(Side::X, &b).unwrap(), Coord::new(0, 2));
    }

    #[test]
    fn test_single_empty_cell_is_chosen() {
        let mut engine = SearchEngine::new();
        let b = board("XOX/XOO/OX_");
        let best = engine.best_scored_move(Side::X, &b).unwrap();
        assert_eq!(best.at, Coord::new(2, 2));
        assert_eq!(best.score, DRAW_SCORE);
    }

    #[test]
    fn test_first_best_keeps_earliest_tie() {
        let moves = [
            ScoredMove { at: Coord::new(0, 1), score: LOSS_SCORE },
            ScoredMove { at: Coord::new(1, 0), score: DRAW_SCORE },
            ScoredMove { at: Coord::new(2, 2), score: DRAW_SCORE },
        ];
        assert_eq!(ScoredMove::first_best(&moves), Some(moves[1]));
        assert_eq!(ScoredMove::first_best(&[]), None);
    }

    #[test]
    fn test_reset_clears_cache() {
        let mut engine = SearchEngine::new();
        engine.best_move(Side::O, &board("X__/___/___")).unwrap();
        assert!(engine.cache_len() > 0);
        engine.reset();
        assert_eq!(engine.cache_len(), 0);
        assert_eq!(engine.stats(), CacheStats::default());
    }
}
