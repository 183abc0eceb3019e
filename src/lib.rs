//! # ttt-engine
//!
//! Tic-tac-toe game-tree search: a memoized negamax engine over a 3×3
//! board, plus the strategies and match runner built on top of it.
//!
//! ## Design Principles
//!
//! 1. **Push/Pop Exploration**: The search records and undoes provisional
//!    moves on the caller's board instead of cloning it per node.
//!
//! 2. **Explicit Memo Table**: Each top-level search owns a fresh table keyed
//!    by occupancy and mark to move. No global state.
//!
//! 3. **Deterministic**: Negamax breaks ties by lowest position; the random
//!    strategies draw from seeded ChaCha8 streams.
//!
//! ## Modules
//!
//! - `core`: Marks, positions, board state, winning lines, RNG
//! - `search`: Negamax with memoization, payoffs, statistics
//! - `strategy`: Random, threat-aware and optimal move selectors
//! - `play`: Match settings, turn schedule, score keeping, match runner
//! - `error`: Crate error type

pub mod core;
pub mod error;
pub mod play;
pub mod search;
pub mod strategy;

// Re-export commonly used types
pub use crate::core::{
    Board, BoardKey, GameRng, Mark, MarkMap, Move, Occupancy, Outcome, Position, WINNING_LINES,
};

pub use crate::error::{Error, Result};

pub use crate::search::{
    best_position, payoff, Evaluation, MemoKey, MemoTable, NegamaxSearch, Payoff, Ply, SearchStats,
};

pub use crate::strategy::{MoveSelector, NegamaxSelector, RandomSelector, Skill, ThreatSelector};

pub use crate::play::{MatchRunner, MatchSettings, MatchSummary, RoundResult, Schedule, ScoreKeeper};
