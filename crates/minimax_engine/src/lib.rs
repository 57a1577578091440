//! Minimax engine - optimal tic-tac-toe play by exhaustive search
//!
//! The engine scores every move by searching the full remaining game tree,
//! remembering each scored move so repeated positions are free.
//!
//! # Architecture
//!
//! - **Rules**: pure win/draw evaluation of a [`Board`]
//! - **Search**: [`SearchEngine`] with its memoization cache
//! - **Game**: authoritative state a driver mutates between turns
//!
//! # Example
//!
//! ```
//! use minimax_engine::{Board, Coord, SearchEngine, Side};
//!
//! let mut engine = SearchEngine::new();
//! let opening = engine.best_move(Side::X, &Board::new()).unwrap();
//! assert_eq!(opening, Coord::new(0, 0));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod error;
mod game;
mod rules;
mod search;
mod types;

// Crate-level exports - Errors
pub use error::{EngineError, EngineErrorKind, EngineResult};

// Crate-level exports - Core types
pub use types::{Board, Cell, Coord, GameStatus, Side};

// Crate-level exports - Rules
pub use rules::{LINES, Outcome, evaluate, is_draw, is_full, status};

// Crate-level exports - Search
pub use search::{
    CacheKey, CacheStats, DRAW_SCORE, LAST_PLY, LOSS_SCORE, ScoredMove, SearchEngine,
    TranspositionCache, WIN_SCORE,
};

// Crate-level exports - Game state
pub use game::{Game, Move};
