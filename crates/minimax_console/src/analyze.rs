//! Per-move scoring report for a single position.

use anyhow::{Result, bail};
use minimax_engine::{
    Board, CacheStats, EngineError, EngineErrorKind, GameStatus, ScoredMove, SearchEngine, Side,
    status,
};
use serde::Serialize;
use tracing::instrument;

/// Scores of every legal move on a board.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    /// Board in compact notation.
    pub board: String,
    #[serde(skip)]
    position: Board,
    /// Side to move.
    pub side: Side,
    /// Root score of each empty cell, row-major.
    pub moves: Vec<ScoredMove>,
    /// The move the engine would play.
    pub best: ScoredMove,
    /// Cache usage after the search.
    pub cache: CacheStats,
}

/// Scores every empty cell of `board` for `side`.
///
/// Refuses boards that are already won or drawn.
#[instrument(skip(engine, board), fields(board = %board))]
pub fn analyze(engine: &mut SearchEngine, board: &Board, side: Side) -> Result<AnalysisReport> {
    match status(board) {
        GameStatus::InProgress => {}
        GameStatus::Won(winner) => bail!("Board {board} is already won by {winner}"),
        GameStatus::Draw => bail!("Board {board} is a finished draw"),
    }

    let moves = engine.scored_moves(side, board);
    let best = ScoredMove::first_best(&moves)
        .ok_or_else(|| EngineError::new(EngineErrorKind::BoardFull))?;
    Ok(AnalysisReport {
        board: board.to_string(),
        position: *board,
        side,
        moves,
        best,
        cache: engine.stats(),
    })
}

impl AnalysisReport {
    /// Human-readable rendering.
    pub fn to_text(&self) -> String {
        let mut text = format!("{}\n\n{} to move\n", self.position.render(), self.side);
        for m in &self.moves {
            let marker = if m.at == self.best.at { "  <- best" } else { "" };
            text.push_str(&format!(
                "  row {}, column {}: {:>4}{}\n",
                m.at.row() + 1,
                m.at.col() + 1,
                m.score,
                marker
            ));
        }
        text.push_str(&format!(
            "cache: {} entries, {} hits, {} misses",
            self.cache.entries(),
            self.cache.hits(),
            self.cache.misses()
        ));
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use minimax_engine::{Coord, LOSS_SCORE};

    #[test]
    fn test_analyze_forced_block() {
        let mut engine = SearchEngine::new();
        let board: Board = "XX_/_O_/___".parse().unwrap();
        let report = analyze(&mut engine, &board, Side::O).unwrap();

        assert_eq!(report.best.at, Coord::new(0, 2));
        assert_eq!(report.moves.len(), 6);
        assert!(
            report
                .moves
                .iter()
                .filter(|m| m.at != report.best.at)
                .all(|m| m.score == LOSS_SCORE)
        );
        assert!(report.to_text().contains("row 1, column 3:    0  <- best"));
    }

    #[test]
    fn test_report_counts_a_single_root_scan() {
        let board: Board = "XX_/_O_/___".parse().unwrap();

        let mut reference = SearchEngine::new();
        reference.scored_moves(Side::O, &board);

        let mut engine = SearchEngine::new();
        let report = analyze(&mut engine, &board, Side::O).unwrap();
        assert_eq!(report.cache, reference.stats());
        assert_eq!(engine.stats(), reference.stats());
    }

    #[test]
    fn test_analyze_rejects_finished_boards() {
        let mut engine = SearchEngine::new();
        let won: Board = "XXX/OO_/___".parse().unwrap();
        assert!(analyze(&mut engine, &won, Side::O).is_err());
        let drawn: Board = "XOX/XOO/OXX".parse().unwrap();
        assert!(analyze(&mut engine, &drawn, Side::O).is_err());
    }

    #[test]
    fn test_report_serializes() {
        let mut engine = SearchEngine::new();
        let board: Board = "XOX/XOO/OX_".parse().unwrap();
        let report = analyze(&mut engine, &board, Side::X).unwrap();
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["side"], "X");
        assert_eq!(json["best"]["score"], 0);
        assert_eq!(json["moves"].as_array().unwrap().len(), 1);
    }
}
