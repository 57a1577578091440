//! Memoization table for move scores.
//!
//! Entries are keyed by the exact move being scored and the board it is
//! played on, so two keys collide only when the searches are identical.
//! The table never evicts; it only empties on [`TranspositionCache::clear`].

use crate::types::{Board, Coord, Side};
use derive_getters::Getters;
use derive_new::new;
use serde::Serialize;
use std::collections::HashMap;

/// Identifies one scored move: `side` plays `at` on `board` after `ply` moves.
///
/// `board` is the position before the move is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, new)]
pub struct CacheKey {
    ply: u8,
    at: Coord,
    side: Side,
    board: Board,
}

/// Counters describing cache usage since creation or the last clear.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Getters, Serialize)]
pub struct CacheStats {
    /// Lookups answered from the table.
    hits: u64,
    /// Lookups that required a search.
    misses: u64,
    /// Stored scores.
    entries: usize,
}

/// Unbounded score cache owned by a search engine.
#[derive(Debug, Clone, Default)]
pub struct TranspositionCache {
    entries: HashMap<CacheKey, i32>,
    hits: u64,
    misses: u64,
}

impl TranspositionCache {
    /// Creates an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Looks up a score, counting the hit or miss.
    pub fn probe(&mut self, key: &CacheKey) -> Option<i32> {
        match self.entries.get(key) {
            Some(&score) => {
                self.hits += 1;
                Some(score)
            }
            None => {
                self.misses += 1;
                None
            }
        }
    }

    /// Records the score for a key that has just been searched.
    ///
    /// Each key is written once; a second write with a different score
    /// would mean the search is not deterministic.
    pub fn store(&mut self, key: CacheKey, score: i32) {
        let previous = self.entries.insert(key, score);
        debug_assert!(
            previous.is_none_or(|p| p == score),
            "cache key rewritten with a different score"
        );
    }

    /// Number of stored scores.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Checks if nothing has been stored.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drops every entry and resets the counters.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.hits = 0;
        self.misses = 0;
    }

    /// Snapshot of the usage counters.
    pub fn stats(&self) -> CacheStats {
        CacheStats {
            hits: self.hits,
            misses: self.misses,
            entries: self.entries.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(ply: u8) -> CacheKey {
        CacheKey::new(ply, Coord::new(1, 1), Side::X, Board::new())
    }

    #[test]
    fn test_probe_miss_then_hit() {
        let mut cache = TranspositionCache::new();
        assert_eq!(cache.probe(&key(0)), None);
        cache.store(key(0), 42);
        assert_eq!(cache.probe(&key(0)), Some(42));

        let stats = cache.stats();
        assert_eq!(*stats.hits(), 1);
        assert_eq!(*stats.misses(), 1);
        assert_eq!(*stats.entries(), 1);
    }

    #[test]
    fn test_ply_is_part_of_the_key() {
        let mut cache = TranspositionCache::new();
        cache.store(key(0), 100);
        assert_eq!(cache.probe(&key(1)), None);
    }

    #[test]
    fn test_board_is_part_of_the_key() {
        let mut cache = TranspositionCache::new();
        cache.store(key(0), 100);
        let other = CacheKey::new(
            0,
            Coord::new(1, 1),
            Side::X,
            Board::new().with_mark(Coord::new(0, 0), Side::O),
        );
        assert_eq!(cache.probe(&other), None);
    }

    #[test]
    fn test_clear_resets_everything() {
        let mut cache = TranspositionCache::new();
        cache.store(key(0), 0);
        cache.probe(&key(0));
        cache.clear();
        assert!(cache.is_empty());
        assert_eq!(cache.stats(), CacheStats::default());
    }
}
