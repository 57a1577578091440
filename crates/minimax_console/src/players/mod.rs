//! Player trait and implementations.

mod engine;
mod human;

pub use engine::{EnginePlayer, SharedEngine, shared_engine};
pub use human::{HumanPlayer, parse_cell};

use anyhow::Result;
use minimax_engine::{Coord, Game};

/// Trait for players that can make moves.
pub trait Player {
    /// Chooses a move for the side to act in `game`.
    ///
    /// The returned cell must be empty; the orchestrator treats anything
    /// else as a bug in the player.
    fn choose_move(&mut self, game: &Game) -> Result<Coord>;

    /// Returns the player's display name.
    fn name(&self) -> &str;
}
