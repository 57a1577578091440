//! Player backed by the minimax search engine.

use super::Player;
use anyhow::Result;
use minimax_engine::{Coord, Game, SearchEngine};
use std::cell::RefCell;
use std::rc::Rc;
use tracing::debug;

/// A search engine shared by every engine player in a session.
pub type SharedEngine = Rc<RefCell<SearchEngine>>;

/// Creates a fresh shared engine.
pub fn shared_engine() -> SharedEngine {
    Rc::new(RefCell::new(SearchEngine::new()))
}

/// Engine player that always picks the best-scoring move.
pub struct EnginePlayer {
    name: String,
    engine: SharedEngine,
}

impl EnginePlayer {
    /// Creates an engine player using `engine` for its searches.
    pub fn new(name: impl Into<String>, engine: SharedEngine) -> Self {
        Self {
            name: name.into(),
            engine,
        }
    }
}

impl Player for EnginePlayer {
    fn choose_move(&mut self, game: &Game) -> Result<Coord> {
        debug!(player = %self.name, side = %game.to_move(), "Engine searching");
        let best = self
            .engine
            .borrow_mut()
            .best_scored_move(game.to_move(), game.board())?;
        debug!(player = %self.name, at = %best.at, score = best.score, "Engine chose move");
        Ok(best.at)
    }

    fn name(&self) -> &str {
        &self.name
    }
}
