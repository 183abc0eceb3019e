//! Move selectors for computer players.
//!
//! Selectors are trait-based so the match runner can hold any of them:
//! - `RandomSelector`: uniform over available positions
//! - `ThreatSelector`: one-ply lookahead (win, block, center, anything)
//! - `NegamaxSelector`: full game-tree search

use tracing::trace;

use crate::core::{threats_against, winning_moves, Board, GameRng, Mark, Position};
use crate::search::NegamaxSearch;

use super::skill::Skill;

/// Capability to pick a position for a mark.
pub trait MoveSelector: Send {
    /// Pick a position for `mark`.
    ///
    /// Returns `None` only when the board is terminal. The board may be
    /// explored in place but is restored before returning.
    fn select(&mut self, board: &mut Board, mark: Mark) -> Option<Position>;

    /// The skill level this selector implements.
    fn skill(&self) -> Skill;
}

// =============================================================================
// Random
// =============================================================================

/// Uniform random choice among available positions.
#[derive(Clone, Debug)]
pub struct RandomSelector {
    rng: GameRng,
}

impl RandomSelector {
    pub fn new(rng: GameRng) -> Self {
        Self { rng }
    }
}

impl MoveSelector for RandomSelector {
    fn select(&mut self, board: &mut Board, _mark: Mark) -> Option<Position> {
        if board.is_terminal() {
            return None;
        }
        self.rng.choose(&board.available_positions()).copied()
    }

    fn skill(&self) -> Skill {
        Skill::Dumb
    }
}

// =============================================================================
// Threat-aware
// =============================================================================

/// One-ply lookahead.
///
/// Candidates, by priority: positions winning immediately for the mover,
/// positions the opponent would win on next turn, the center, then every
/// available position. One candidate is drawn uniformly from the first
/// non-empty group.
#[derive(Clone, Debug)]
pub struct ThreatSelector {
    rng: GameRng,
}

impl ThreatSelector {
    pub fn new(rng: GameRng) -> Self {
        Self { rng }
    }

    /// The candidate group the selector draws from.
    #[must_use]
    pub fn candidates(board: &Board, mark: Mark) -> Vec<Position> {
        let wins = winning_moves(board, mark);
        if !wins.is_empty() {
            return wins;
        }

        let blocks = threats_against(board, mark);
        if !blocks.is_empty() {
            return blocks;
        }

        if board.is_available(Position::CENTER) {
            return vec![Position::CENTER];
        }

        board.available_positions()
    }
}

impl MoveSelector for ThreatSelector {
    fn select(&mut self, board: &mut Board, mark: Mark) -> Option<Position> {
        if board.is_terminal() {
            return None;
        }
        let candidates = Self::candidates(board, mark);
        trace!(%mark, ?candidates, "threat selector candidates");
        self.rng.choose(&candidates).copied()
    }

    fn skill(&self) -> Skill {
        Skill::Reasonable
    }
}

// =============================================================================
// Negamax
// =============================================================================

/// Perfect play via [`NegamaxSearch`]. Deterministic.
#[derive(Debug, Default)]
pub struct NegamaxSelector {
    search: NegamaxSearch,
}

impl NegamaxSelector {
    pub fn new() -> Self {
        Self::default()
    }

    /// The underlying search, for its statistics.
    pub fn search(&self) -> &NegamaxSearch {
        &self.search
    }
}

impl MoveSelector for NegamaxSelector {
    fn select(&mut self, board: &mut Board, mark: Mark) -> Option<Position> {
        self.search.search(board, mark)
    }

    fn skill(&self) -> Skill {
        Skill::Optimal
    }
}
