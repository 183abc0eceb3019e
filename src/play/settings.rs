//! Match configuration.

use serde::{Deserialize, Serialize};

use crate::core::{Mark, MarkMap};
use crate::error::{Error, Result};
use crate::strategy::Skill;

/// Configuration for a match between two computer players.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchSettings {
    /// Skill of the X player.
    pub x_skill: Skill,

    /// Skill of the O player.
    pub o_skill: Skill,

    /// Mark that opens every round.
    pub starting_mark: Mark,

    /// Round wins needed to take the match.
    pub rounds_to_win: u32,

    /// Rounds played before giving up on a winner (0 = unlimited).
    /// Two optimal players tie forever.
    pub max_rounds: u32,

    /// Seed for the random and threat-aware selectors.
    pub seed: u64,
}

impl Default for MatchSettings {
    fn default() -> Self {
        Self {
            x_skill: Skill::Reasonable,
            o_skill: Skill::Reasonable,
            starting_mark: Mark::X,
            rounds_to_win: 2,
            max_rounds: 1000,
            seed: 42,
        }
    }
}

impl MatchSettings {
    /// Create settings with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the skill for one mark.
    pub fn with_skill(mut self, mark: Mark, skill: Skill) -> Self {
        match mark {
            Mark::X => self.x_skill = skill,
            Mark::O => self.o_skill = skill,
        }
        self
    }

    /// Set the opening mark.
    pub fn with_starting_mark(mut self, mark: Mark) -> Self {
        self.starting_mark = mark;
        self
    }

    /// Set the round wins needed.
    pub fn with_rounds_to_win(mut self, rounds: u32) -> Self {
        self.rounds_to_win = rounds;
        self
    }

    /// Set the round cap.
    pub fn with_max_rounds(mut self, rounds: u32) -> Self {
        self.max_rounds = rounds;
        self
    }

    /// Set the seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Skills indexed by mark.
    #[must_use]
    pub fn skills(&self) -> MarkMap<Skill> {
        MarkMap::new(self.x_skill, self.o_skill)
    }

    /// Reject settings no match could be played with.
    pub fn validate(&self) -> Result<()> {
        if self.rounds_to_win == 0 {
            return Err(Error::InvalidConfiguration {
                message: "rounds_to_win must be at least 1".to_string(),
            });
        }
        if self.max_rounds != 0 && self.max_rounds < self.rounds_to_win {
            return Err(Error::InvalidConfiguration {
                message: format!(
                    "max_rounds ({}) is smaller than rounds_to_win ({})",
                    self.max_rounds, self.rounds_to_win
                ),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = MatchSettings::default();
        assert_eq!(settings.x_skill, Skill::Reasonable);
        assert_eq!(settings.starting_mark, Mark::X);
        assert_eq!(settings.rounds_to_win, 2);
        assert_eq!(settings.seed, 42);
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_builder_pattern() {
        let settings = MatchSettings::new()
            .with_skill(Mark::O, Skill::Optimal)
            .with_starting_mark(Mark::O)
            .with_rounds_to_win(5)
            .with_seed(123);

        assert_eq!(settings.x_skill, Skill::Reasonable);
        assert_eq!(settings.o_skill, Skill::Optimal);
        assert_eq!(settings.skills()[Mark::O], Skill::Optimal);
        assert_eq!(settings.starting_mark, Mark::O);
        assert_eq!(settings.rounds_to_win, 5);
        assert_eq!(settings.seed, 123);
    }

    #[test]
    fn test_validate() {
        let zero = MatchSettings::new().with_rounds_to_win(0);
        assert!(matches!(
            zero.validate(),
            Err(Error::InvalidConfiguration { .. })
        ));

        let capped = MatchSettings::new().with_rounds_to_win(3).with_max_rounds(2);
        assert!(capped.validate().is_err());

        let unlimited = MatchSettings::new().with_rounds_to_win(3).with_max_rounds(0);
        assert!(unlimited.validate().is_ok());
    }

    #[test]
    fn test_serialization() {
        let settings = MatchSettings::new().with_skill(Mark::X, Skill::Dumb);
        let json = serde_json::to_string(&settings).unwrap();
        let deserialized: MatchSettings = serde_json::from_str(&json).unwrap();
        assert_eq!(settings, deserialized);
    }
}
