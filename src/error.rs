//! Error types for ttt-engine.
//!
//! Programmer errors inside the hot search path (recording onto an occupied
//! position, undoing an empty history) panic. Everything reachable from
//! external input goes through [`Error`] instead.

use thiserror::Error;

use crate::core::{Mark, Position};

/// Main error type for the crate.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    #[error("invalid position {value}: expected 1..=9")]
    InvalidPosition { value: i64 },

    #[error("position {position} is already occupied by {occupant}")]
    PositionOccupied { position: Position, occupant: Mark },

    #[error("board is full")]
    BoardFull,

    #[error("no move to undo")]
    EmptyHistory,

    #[error("unknown skill '{name}' (expected dumb, reasonable, optimal or 1, 2, 3)")]
    UnknownSkill { name: String },

    #[error("invalid mark '{name}' (expected X or O)")]
    InvalidMark { name: String },

    #[error("invalid configuration: {message}")]
    InvalidConfiguration { message: String },

    #[error("{mark} selector returned no move on a board still in progress")]
    NoMoveSelected { mark: Mark },

    #[error("match undecided after {rounds} rounds")]
    MatchUndecided { rounds: u32 },
}

/// Result alias using the crate [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
