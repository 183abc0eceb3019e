//! Signed game-theoretic value of a position.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Neg;

use crate::core::{Board, Mark};

/// Payoff from the perspective of one mark: exactly -1, 0 or +1.
///
/// No depth weighting: a win in one move and a win in five score the same.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Payoff(i8);

impl Payoff {
    pub const LOSS: Payoff = Payoff(-1);
    pub const DRAW: Payoff = Payoff(0);
    pub const WIN: Payoff = Payoff(1);

    /// The raw value.
    #[must_use]
    pub const fn get(self) -> i8 {
        self.0
    }
}

impl Neg for Payoff {
    type Output = Payoff;

    fn neg(self) -> Payoff {
        Payoff(-self.0)
    }
}

impl fmt::Display for Payoff {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:+}", self.0)
    }
}

/// Payoff of a board for `mark`: win, loss, or draw otherwise.
///
/// Meaningful on terminal boards; on a board still in progress with no
/// line completed it reports [`Payoff::DRAW`].
#[must_use]
pub fn payoff(board: &Board, mark: Mark) -> Payoff {
    if board.is_winning_for(mark) {
        Payoff::WIN
    } else if board.is_winning_for(mark.opponent()) {
        Payoff::LOSS
    } else {
        Payoff::DRAW
    }
}
