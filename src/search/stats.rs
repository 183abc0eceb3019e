//! Negamax search statistics for diagnostics.

use serde::{Deserialize, Serialize};

/// Statistics collected during one top-level search.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct SearchStats {
    /// Nodes entered, including the root and memo hits.
    pub nodes_visited: u64,

    /// Nodes that were terminal boards.
    pub terminal_nodes: u64,

    /// Nodes answered from the memo table.
    pub memo_hits: u64,

    /// Entries in the memo table when the search finished.
    pub memo_entries: usize,

    /// Total time spent searching (microseconds).
    pub time_us: u64,
}

impl SearchStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset all statistics to zero.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Fraction of visited nodes served from the memo table.
    #[must_use]
    pub fn hit_rate(&self) -> f64 {
        if self.nodes_visited == 0 {
            0.0
        } else {
            self.memo_hits as f64 / self.nodes_visited as f64
        }
    }

    /// Calculate nodes per second.
    #[must_use]
    pub fn nodes_per_second(&self) -> f64 {
        if self.time_us == 0 {
            0.0
        } else {
            self.nodes_visited as f64 / (self.time_us as f64 / 1_000_000.0)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Board, Mark};
    use crate::search::NegamaxSearch;

    #[test]
    fn test_empty_stats_have_zero_rates() {
        let stats = SearchStats::new();
        assert_eq!(stats.hit_rate(), 0.0);
        assert_eq!(stats.nodes_per_second(), 0.0);
    }

    #[test]
    fn test_hit_rate_from_full_search() {
        let mut board = Board::new();
        let mut search = NegamaxSearch::new();
        search.search(&mut board, Mark::X);
        let stats = search.stats();

        // Every memo entry was a miss once, plus the unmemoized root.
        assert_eq!(stats.nodes_visited, stats.memo_hits + stats.memo_entries as u64 + 1);

        let rate = stats.hit_rate();
        assert!(rate > 0.0 && rate < 1.0, "hit rate {}", rate);
        assert_eq!(rate, stats.memo_hits as f64 / stats.nodes_visited as f64);
    }

    #[test]
    fn test_reset_after_search() {
        let mut board = Board::new();
        let mut search = NegamaxSearch::new();
        search.search(&mut board, Mark::O);

        let mut stats = search.stats().clone();
        assert!(stats.terminal_nodes > 0);

        stats.reset();
        assert_eq!(stats.nodes_visited, 0);
        assert_eq!(stats.memo_entries, 0);
    }

    #[test]
    fn test_stats_serialization() {
        let mut board = Board::new();
        let mut search = NegamaxSearch::new();
        search.search(&mut board, Mark::X);

        let json = serde_json::to_string(search.stats()).unwrap();
        let back: SearchStats = serde_json::from_str(&json).unwrap();

        assert_eq!(back.memo_hits, search.stats().memo_hits);
        assert_eq!(back.memo_entries, 5477);
    }
}
