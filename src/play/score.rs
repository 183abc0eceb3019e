//! Round and match score keeping.

use serde::{Deserialize, Serialize};

use crate::core::{Mark, MarkMap};

/// Per-mark round wins and the match winner once decided.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreKeeper {
    scores: MarkMap<u32>,
    ties: u32,
    round_winner: Option<Mark>,
    match_winner: Option<Mark>,
    rounds_to_win: u32,
}

impl ScoreKeeper {
    /// # Panics
    ///
    /// Panics if `rounds_to_win` is zero.
    pub fn new(rounds_to_win: u32) -> Self {
        assert!(rounds_to_win > 0, "rounds_to_win must be at least 1");
        Self {
            scores: MarkMap::default(),
            ties: 0,
            round_winner: None,
            match_winner: None,
            rounds_to_win,
        }
    }

    /// Record a round result; `None` is a tie.
    ///
    /// Sets the match winner the first time a mark reaches `rounds_to_win`.
    pub fn keep_score(&mut self, round_winner: Option<Mark>) {
        self.round_winner = round_winner;
        match round_winner {
            Some(mark) => {
                self.scores[mark] += 1;
                if self.match_winner.is_none() && self.scores[mark] >= self.rounds_to_win {
                    self.match_winner = Some(mark);
                }
            }
            None => self.ties += 1,
        }
    }

    /// Round wins for a mark.
    #[must_use]
    pub fn score(&self, mark: Mark) -> u32 {
        self.scores[mark]
    }

    #[must_use]
    pub fn ties(&self) -> u32 {
        self.ties
    }

    /// Rounds recorded so far.
    #[must_use]
    pub fn rounds_played(&self) -> u32 {
        self.scores[Mark::X] + self.scores[Mark::O] + self.ties
    }

    /// Winner of the most recent round.
    #[must_use]
    pub fn round_winner(&self) -> Option<Mark> {
        self.round_winner
    }

    #[must_use]
    pub fn match_winner(&self) -> Option<Mark> {
        self.match_winner
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_match_winner_at_threshold() {
        let mut keeper = ScoreKeeper::new(2);

        keeper.keep_score(Some(Mark::X));
        assert_eq!(keeper.match_winner(), None);

        keeper.keep_score(None);
        assert_eq!(keeper.round_winner(), None);
        assert_eq!(keeper.ties(), 1);

        keeper.keep_score(Some(Mark::O));
        keeper.keep_score(Some(Mark::X));

        assert_eq!(keeper.score(Mark::X), 2);
        assert_eq!(keeper.score(Mark::O), 1);
        assert_eq!(keeper.round_winner(), Some(Mark::X));
        assert_eq!(keeper.match_winner(), Some(Mark::X));
        assert_eq!(keeper.rounds_played(), 4);
    }

    #[test]
    fn test_match_winner_is_sticky() {
        let mut keeper = ScoreKeeper::new(1);
        keeper.keep_score(Some(Mark::O));
        keeper.keep_score(Some(Mark::X));
        assert_eq!(keeper.match_winner(), Some(Mark::O));
    }

    #[test]
    #[should_panic(expected = "at least 1")]
    fn test_zero_rounds_panics() {
        let _ = ScoreKeeper::new(0);
    }
}
