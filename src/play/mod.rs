//! Rounds and matches between computer players.
//!
//! [`MatchRunner`] drives a board with two [`MoveSelector`]s, alternating
//! turns via [`Schedule`] and tallying rounds in [`ScoreKeeper`] until one
//! mark reaches the configured number of round wins.
//!
//! [`MoveSelector`]: crate::strategy::MoveSelector

pub mod runner;
pub mod schedule;
pub mod score;
pub mod settings;

pub use runner::{MatchRunner, MatchSummary, RoundResult};
pub use schedule::Schedule;
pub use score::ScoreKeeper;
pub use settings::MatchSettings;
