//! Game-tree search for the optimal computer player.
//!
//! ## Overview
//!
//! - **Negamax**: one recursive scorer for both sides, negating the child's
//!   value at each ply
//! - **Memoization**: values cached per (occupancy, mark to move), fresh
//!   table per top-level search
//! - **In-place exploration**: provisional moves are recorded on and undone
//!   from the caller's board
//!
//! ## Usage
//!
//! ```rust
//! use ttt_engine::core::{Board, Mark};
//! use ttt_engine::search::NegamaxSearch;
//!
//! let mut board = Board::new();
//! let mut search = NegamaxSearch::new();
//!
//! while !board.is_terminal() {
//!     let mark = if board.len() % 2 == 0 { Mark::X } else { Mark::O };
//!     let position = search.search(&mut board, mark).unwrap();
//!     board.record_move(position, mark);
//! }
//!
//! // Perfect play from both sides always ties.
//! assert_eq!(board.winning_mark(), None);
//! ```

pub mod memo;
pub mod negamax;
pub mod payoff;
pub mod stats;

pub use memo::{MemoKey, MemoTable};
pub use negamax::{best_position, Evaluation, NegamaxSearch, Ply};
pub use payoff::{payoff, Payoff};
pub use stats::SearchStats;
