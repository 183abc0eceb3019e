//! Turn order within a round.

use crate::core::Mark;

/// Tracks whose turn it is.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Schedule {
    starting: Mark,
    active: Mark,
}

impl Schedule {
    pub fn new(starting: Mark) -> Self {
        Self {
            starting,
            active: starting,
        }
    }

    /// Mark to move.
    #[must_use]
    pub fn active(&self) -> Mark {
        self.active
    }

    /// Mark that opens each round.
    #[must_use]
    pub fn starting(&self) -> Mark {
        self.starting
    }

    /// Pass the turn.
    pub fn switch_active(&mut self) {
        self.active = self.active.opponent();
    }

    /// Back to the opening mark for a new round.
    pub fn reset(&mut self) {
        self.active = self.starting;
    }
}
