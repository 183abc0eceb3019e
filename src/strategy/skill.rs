//! Skill levels: the configuration value that picks a selector.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::core::GameRng;
use crate::error::Error;

use super::selectors::{MoveSelector, NegamaxSelector, RandomSelector, ThreatSelector};

/// Computer player strength.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Skill {
    /// Level 1: random.
    Dumb,
    /// Level 2: win, block, center.
    Reasonable,
    /// Level 3: negamax.
    Optimal,
}

impl Skill {
    /// Build the selector for this skill.
    ///
    /// `rng` drives the random and threat-aware selectors and is ignored by
    /// the negamax selector.
    pub fn selector(self, rng: GameRng) -> Box<dyn MoveSelector> {
        match self {
            Skill::Dumb => Box::new(RandomSelector::new(rng)),
            Skill::Reasonable => Box::new(ThreatSelector::new(rng)),
            Skill::Optimal => Box::new(NegamaxSelector::new()),
        }
    }

    /// Numeric level, 1 through 3.
    #[must_use]
    pub fn level(self) -> u8 {
        match self {
            Skill::Dumb => 1,
            Skill::Reasonable => 2,
            Skill::Optimal => 3,
        }
    }
}

impl Default for Skill {
    fn default() -> Self {
        Skill::Reasonable
    }
}

impl fmt::Display for Skill {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Skill::Dumb => write!(f, "dumb"),
            Skill::Reasonable => write!(f, "reasonable"),
            Skill::Optimal => write!(f, "optimal"),
        }
    }
}

impl FromStr for Skill {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "1" | "dumb" => Ok(Skill::Dumb),
            "2" | "reasonable" => Ok(Skill::Reasonable),
            "3" | "optimal" => Ok(Skill::Optimal),
            _ => Err(Error::UnknownSkill {
                name: s.to_string(),
            }),
        }
    }
}
