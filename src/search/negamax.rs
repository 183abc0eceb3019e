//! Exhaustive negamax over the tic-tac-toe game tree.
//!
//! Each node is an (occupancy, mark to move) pair. Children are reached by
//! placing the mark on an available position; the value of a node is the
//! maximum over children of the negated child value. Terminal boards score
//! via [`payoff`]. No pruning: every child is evaluated, and ties go to the
//! first position (ascending) reaching the maximum.
//!
//! The board is explored in place. Every provisional move is undone before
//! its branch returns, so callers get their board back unchanged.

use std::time::Instant;

use tracing::{debug, trace};

use crate::core::{Board, Mark, Position};

use super::memo::{MemoKey, MemoTable};
use super::payoff::{payoff, Payoff};
use super::stats::SearchStats;

/// Which kind of answer a negamax call produces.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Ply {
    /// Move decision: return the best position.
    Top,
    /// Recursive call: return the value.
    Inner,
}

/// Result of [`NegamaxSearch::negamax`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Evaluation {
    Position(Position),
    Value(Payoff),
}

impl Evaluation {
    #[must_use]
    pub fn position(self) -> Option<Position> {
        match self {
            Evaluation::Position(p) => Some(p),
            Evaluation::Value(_) => None,
        }
    }

    #[must_use]
    pub fn value(self) -> Option<Payoff> {
        match self {
            Evaluation::Value(v) => Some(v),
            Evaluation::Position(_) => None,
        }
    }
}

/// Negamax search context: memo table plus statistics.
///
/// ## Example
///
/// ```
/// use ttt_engine::core::{Board, Mark, Position};
/// use ttt_engine::search::NegamaxSearch;
///
/// let mut board = Board::new();
/// for (p, m) in [(1, Mark::X), (4, Mark::O), (2, Mark::X), (5, Mark::O)] {
///     board.record_move(Position::new(p).unwrap(), m);
/// }
///
/// let mut search = NegamaxSearch::new();
/// let best = search.search(&mut board, Mark::X);
/// assert_eq!(best, Position::new(3).ok());
/// ```
#[derive(Debug, Default)]
pub struct NegamaxSearch {
    memo: MemoTable,
    stats: SearchStats,
}

impl NegamaxSearch {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Choose the best position for `mark`.
    ///
    /// Starts from a fresh memo table. Returns `None` if the board is
    /// already terminal, without searching.
    pub fn search(&mut self, board: &mut Board, mark: Mark) -> Option<Position> {
        if board.is_terminal() {
            return None;
        }

        let start = Instant::now();
        self.memo.clear();
        self.stats.reset();

        let best = self.negamax(board, mark, Ply::Top).position();

        self.stats.memo_entries = self.memo.len();
        self.stats.time_us = start.elapsed().as_micros() as u64;

        if let Some(position) = best {
            debug!(
                %mark,
                %position,
                nodes = self.stats.nodes_visited,
                memo_hits = self.stats.memo_hits,
                memo_entries = self.stats.memo_entries,
                time_us = self.stats.time_us,
                "negamax selected position"
            );
        }

        best
    }

    /// Core recursion.
    ///
    /// At [`Ply::Top`] on a non-terminal board this yields the best position;
    /// otherwise it yields the value for `mark`. Inner values are read from
    /// and written to the memo table held by `self`, which persists across
    /// direct `negamax` calls until the next [`NegamaxSearch::search`].
    pub fn negamax(&mut self, board: &mut Board, mark: Mark, ply: Ply) -> Evaluation {
        match ply {
            Ply::Top if board.is_terminal() => {
                self.stats.nodes_visited += 1;
                self.stats.terminal_nodes += 1;
                Evaluation::Value(payoff(board, mark))
            }
            Ply::Top => {
                self.stats.nodes_visited += 1;
                let (position, value) = self.best_option(board, mark);
                trace!(%mark, %position, %value, "root best option");
                Evaluation::Position(position)
            }
            Ply::Inner => Evaluation::Value(self.evaluate(board, mark)),
        }
    }

    /// Value of every available position for `mark`, ascending by position.
    pub fn score_moves(&mut self, board: &mut Board, mark: Mark) -> Vec<(Position, Payoff)> {
        let before = board.len();

        let scored = board
            .available_positions()
            .into_iter()
            .map(|position| {
                board.record_move(position, mark);
                let value = -self.evaluate(board, mark.opponent());
                board.undo_last_move();
                (position, value)
            })
            .collect();

        debug_assert_eq!(board.len(), before, "search must restore the board");
        scored
    }

    /// Statistics from the last top-level search.
    #[must_use]
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// The memo table as left by the last call.
    #[must_use]
    pub fn memo(&self) -> &MemoTable {
        &self.memo
    }

    fn evaluate(&mut self, board: &mut Board, mark: Mark) -> Payoff {
        self.stats.nodes_visited += 1;

        let key = MemoKey::new(board, mark);
        if let Some(value) = self.memo.get(&key) {
            self.stats.memo_hits += 1;
            return value;
        }

        let value = if board.is_terminal() {
            self.stats.terminal_nodes += 1;
            payoff(board, mark)
        } else {
            self.best_option(board, mark).1
        };

        self.memo.insert(key, value);
        value
    }

    /// First position reaching the maximum value.
    ///
    /// # Panics
    ///
    /// Panics on a full board; callers check for terminal boards first.
    fn best_option(&mut self, board: &mut Board, mark: Mark) -> (Position, Payoff) {
        let mut best: Option<(Position, Payoff)> = None;

        for (position, value) in self.score_moves(board, mark) {
            if best.map_or(true, |(_, best_value)| value > best_value) {
                best = Some((position, value));
            }
        }

        match best {
            Some(option) => option,
            None => panic!("negamax called on a board with no available positions"),
        }
    }
}

/// One-shot top-level search with a fresh memo table.
pub fn best_position(board: &mut Board, mark: Mark) -> Option<Position> {
    NegamaxSearch::new().search(board, mark)
}
