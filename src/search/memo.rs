//! Memo (transposition) table for negamax.
//!
//! Keys pair the occupancy with the mark to move. Within one search from a
//! legal position the mark is implied by move parity, but the table does not
//! rely on that: a caller evaluating both sides of the same occupancy
//! against one table gets two independent entries.

use rustc_hash::FxHashMap;

use crate::core::{Board, BoardKey, Mark};

use super::payoff::Payoff;

/// Memo table key.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct MemoKey {
    pub board: BoardKey,
    pub to_move: Mark,
}

impl MemoKey {
    #[must_use]
    pub fn new(board: &Board, to_move: Mark) -> Self {
        Self {
            board: board.key(),
            to_move,
        }
    }
}

/// Cache of computed payoffs for the side to move.
#[derive(Clone, Debug, Default)]
pub struct MemoTable {
    entries: FxHashMap<MemoKey, Payoff>,
}

impl MemoTable {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn get(&self, key: &MemoKey) -> Option<Payoff> {
        self.entries.get(key).copied()
    }

    pub fn insert(&mut self, key: MemoKey, value: Payoff) {
        self.entries.insert(key, value);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
