//! Core types: marks, positions, the board, winning lines, RNG.
//!
//! Everything the search engine and the strategies need to reason about a
//! 3×3 board lives here. None of it knows about strategies or matches.

pub mod mark;
pub mod position;
pub mod board;
pub mod lines;
pub mod rng;

pub use mark::{Mark, MarkMap};
pub use position::{Position, CELL_COUNT};
pub use board::{Board, BoardKey, Move, Occupancy, Outcome};
pub use lines::{threats_against, winning_moves, WINNING_LINES};
pub use rng::GameRng;
