//! Move-selection strategies for computer players.
//!
//! A single [`MoveSelector`] capability with three implementations, chosen
//! by a [`Skill`] value rather than by type:
//!
//! ```rust
//! use ttt_engine::core::{Board, GameRng, Mark};
//! use ttt_engine::strategy::Skill;
//!
//! let mut selector = Skill::Optimal.selector(GameRng::new(42));
//! let mut board = Board::new();
//!
//! let position = selector.select(&mut board, Mark::X).unwrap();
//! assert!(board.is_available(position));
//! ```

pub mod selectors;
pub mod skill;

pub use selectors::{MoveSelector, NegamaxSelector, RandomSelector, ThreatSelector};
pub use skill::Skill;
