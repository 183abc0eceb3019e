//! Board positions 1 through 9.
//!
//! Positions are numbered row-major from the top-left corner:
//!
//! ```text
//!  1 | 2 | 3
//! -----------
//!  4 | 5 | 6
//! -----------
//!  7 | 8 | 9
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::Error;

/// Number of cells on the board.
pub const CELL_COUNT: usize = 9;

/// A cell on the 3×3 board.
///
/// The inner value is always in `1..=9`; use [`Position::new`] or
/// `TryFrom` to construct one from untrusted input.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Position(u8);

impl Position {
    /// The center cell.
    pub const CENTER: Position = Position(5);

    /// Every position in ascending order.
    pub const ALL: [Position; CELL_COUNT] = [
        Position(1),
        Position(2),
        Position(3),
        Position(4),
        Position(5),
        Position(6),
        Position(7),
        Position(8),
        Position(9),
    ];

    /// Crate-internal constructor for constant tables.
    pub(crate) const fn from_raw(value: u8) -> Self {
        assert!(value >= 1 && value <= CELL_COUNT as u8);
        Self(value)
    }

    /// Create a position, checking the range.
    pub fn new(value: u8) -> Result<Self, Error> {
        if (1..=CELL_COUNT as u8).contains(&value) {
            Ok(Self(value))
        } else {
            Err(Error::InvalidPosition {
                value: i64::from(value),
            })
        }
    }

    /// The 1-based cell number.
    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }

    /// The 0-based cell index, for array storage.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize - 1
    }

    /// Inverse of [`Position::index`].
    ///
    /// # Panics
    ///
    /// Panics if `index >= 9`.
    #[must_use]
    pub fn from_index(index: usize) -> Self {
        assert!(index < CELL_COUNT, "cell index {} out of range", index);
        Self::ALL[index]
    }

    /// Bit for this position in a 9-bit occupancy mask.
    #[must_use]
    pub const fn bit(self) -> u16 {
        1 << (self.0 - 1)
    }
}

impl TryFrom<u8> for Position {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<i64> for Position {
    type Error = Error;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        u8::try_from(value)
            .map_err(|_| Error::InvalidPosition { value })
            .and_then(Self::new)
    }
}

impl From<Position> for u8 {
    fn from(position: Position) -> u8 {
        position.0
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
