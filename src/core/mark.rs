//! The two playing sides.
//!
//! Tic-tac-toe is strictly two-player, so a `Mark` is a closed enum rather
//! than an index. `opponent()` is the only relation the search needs.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// A side's symbol on the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Mark {
    X,
    O,
}

impl Mark {
    /// Both marks, X first.
    pub const ALL: [Mark; 2] = [Mark::X, Mark::O];

    /// The other side.
    #[must_use]
    pub const fn opponent(self) -> Mark {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }

    /// Dense index (X = 0, O = 1) for per-mark arrays.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Mark::X => 0,
            Mark::O => 1,
        }
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mark::X => write!(f, "X"),
            Mark::O => write!(f, "O"),
        }
    }
}

impl FromStr for Mark {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "x" | "X" => Ok(Mark::X),
            "o" | "O" => Ok(Mark::O),
            other => Err(Error::InvalidMark {
                name: other.to_string(),
            }),
        }
    }
}

/// Per-mark storage indexed by [`Mark`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MarkMap<T> {
    data: [T; 2],
}

impl<T> MarkMap<T> {
    /// Create from explicit X and O values.
    pub fn new(x: T, o: T) -> Self {
        Self { data: [x, o] }
    }

    /// Iterate over `(mark, value)` pairs, X first.
    pub fn iter(&self) -> impl Iterator<Item = (Mark, &T)> {
        Mark::ALL.into_iter().zip(self.data.iter())
    }
}

impl<T> std::ops::Index<Mark> for MarkMap<T> {
    type Output = T;

    fn index(&self, mark: Mark) -> &T {
        &self.data[mark.index()]
    }
}

impl<T> std::ops::IndexMut<Mark> for MarkMap<T> {
    fn index_mut(&mut self, mark: Mark) -> &mut T {
        &mut self.data[mark.index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opponent_swaps() {
        assert_eq!(Mark::X.opponent(), Mark::O);
        assert_eq!(Mark::O.opponent(), Mark::X);
        assert_eq!(Mark::X.opponent().opponent(), Mark::X);
    }

    #[test]
    fn test_parse() {
        assert_eq!("x".parse::<Mark>().unwrap(), Mark::X);
        assert_eq!(" O ".parse::<Mark>().unwrap(), Mark::O);
        assert!(matches!("Z".parse::<Mark>(), Err(Error::InvalidMark { .. })));
    }

    #[test]
    fn test_mark_map() {
        let mut scores: MarkMap<u32> = MarkMap::default();
        scores[Mark::O] += 2;

        assert_eq!(scores[Mark::X], 0);
        assert_eq!(scores[Mark::O], 2);

        let pairs: Vec<_> = scores.iter().map(|(m, v)| (m, *v)).collect();
        assert_eq!(pairs, vec![(Mark::X, 0), (Mark::O, 2)]);
    }

    #[test]
    fn test_serialization() {
        let json = serde_json::to_string(&Mark::O).unwrap();
        let back: Mark = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Mark::O);
    }
}
