//! Move search.

pub mod cache;
pub mod engine;

pub use cache::{CacheKey, CacheStats, TranspositionCache};
pub use engine::{DRAW_SCORE, LAST_PLY, LOSS_SCORE, ScoredMove, SearchEngine, WIN_SCORE};
