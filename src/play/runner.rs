//! Playing rounds and matches between two selectors.
//!
//! The runner owns the authoritative board. Each turn it asks the active
//! mark's selector for a position and commits it with the checked
//! [`Board::try_record_move`], so a misbehaving selector surfaces as an
//! [`Error`] instead of a corrupted board.

use serde::{Deserialize, Serialize};
use tracing::{info, instrument, trace};

use crate::core::{Board, GameRng, Mark, MarkMap, Move};
use crate::error::{Error, Result};
use crate::strategy::MoveSelector;

use super::schedule::Schedule;
use super::score::ScoreKeeper;
use super::settings::MatchSettings;

/// How one round ended.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundResult {
    /// `None` for a tie.
    pub winner: Option<Mark>,

    /// Moves in play order.
    pub moves: Vec<Move>,
}

/// How a match ended.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchSummary {
    pub winner: Mark,
    pub scores: MarkMap<u32>,
    pub ties: u32,
    pub rounds: Vec<RoundResult>,
}

/// Plays rounds between two selectors and keeps score.
pub struct MatchRunner {
    settings: MatchSettings,
    board: Board,
    schedule: Schedule,
    score_keeper: ScoreKeeper,
    selectors: MarkMap<Box<dyn MoveSelector>>,
    rounds: Vec<RoundResult>,
}

impl MatchRunner {
    /// Build a runner with selectors derived from the settings' skills.
    ///
    /// Each mark's selector gets its own RNG stream from `settings.seed`.
    pub fn new(settings: MatchSettings) -> Result<Self> {
        settings.validate()?;

        let rng = GameRng::new(settings.seed);
        let skills = settings.skills();
        let selectors = MarkMap::new(
            skills[Mark::X].selector(rng.for_context("X")),
            skills[Mark::O].selector(rng.for_context("O")),
        );

        Ok(Self {
            board: Board::new(),
            schedule: Schedule::new(settings.starting_mark),
            score_keeper: ScoreKeeper::new(settings.rounds_to_win),
            selectors,
            rounds: Vec::new(),
            settings,
        })
    }

    /// Replace the selector for one mark.
    pub fn with_selector(mut self, mark: Mark, selector: Box<dyn MoveSelector>) -> Self {
        self.selectors[mark] = selector;
        self
    }

    /// The board as left by the last round.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn score_keeper(&self) -> &ScoreKeeper {
        &self.score_keeper
    }

    #[must_use]
    pub fn settings(&self) -> &MatchSettings {
        &self.settings
    }

    /// Rounds played since the current match started, in play order.
    ///
    /// Still populated after [`Error::MatchUndecided`].
    #[must_use]
    pub fn rounds(&self) -> &[RoundResult] {
        &self.rounds
    }

    /// Play one round from an empty board and record its result.
    ///
    /// The result is also appended to [`MatchRunner::rounds`].
    #[instrument(skip_all)]
    pub fn play_round(&mut self) -> Result<RoundResult> {
        self.board.reset();
        self.schedule.reset();

        while !self.board.is_terminal() {
            let mark = self.schedule.active();
            let position = self.selectors[mark]
                .select(&mut self.board, mark)
                .ok_or(Error::NoMoveSelected { mark })?;

            self.board.try_record_move(position, mark)?;
            trace!(%mark, %position, "move committed");
            self.schedule.switch_active();
        }

        let winner = self.board.winning_mark();
        self.score_keeper.keep_score(winner);

        info!(
            winner = ?winner,
            x = self.score_keeper.score(Mark::X),
            o = self.score_keeper.score(Mark::O),
            ties = self.score_keeper.ties(),
            "round finished"
        );

        let round = RoundResult {
            winner,
            moves: self.board.moves().to_vec(),
        };
        self.rounds.push(round.clone());
        Ok(round)
    }

    /// Play rounds until a mark reaches `rounds_to_win`.
    ///
    /// Scores start from zero on every call. Fails with
    /// [`Error::MatchUndecided`] once `max_rounds` rounds pass without a
    /// match winner.
    #[instrument(skip_all)]
    pub fn play_match(&mut self) -> Result<MatchSummary> {
        self.score_keeper = ScoreKeeper::new(self.settings.rounds_to_win);
        self.rounds.clear();
        info!(
            x_skill = %self.selectors[Mark::X].skill(),
            o_skill = %self.selectors[Mark::O].skill(),
            starting = %self.settings.starting_mark,
            rounds_to_win = self.settings.rounds_to_win,
            "match started"
        );

        let winner = loop {
            if let Some(winner) = self.score_keeper.match_winner() {
                break winner;
            }

            let played = self.score_keeper.rounds_played();
            if self.settings.max_rounds != 0 && played >= self.settings.max_rounds {
                return Err(Error::MatchUndecided { rounds: played });
            }

            self.play_round()?;
        };

        info!(%winner, rounds = self.rounds.len(), "match finished");

        Ok(MatchSummary {
            winner,
            scores: MarkMap::new(
                self.score_keeper.score(Mark::X),
                self.score_keeper.score(Mark::O),
            ),
            ties: self.score_keeper.ties(),
            rounds: self.rounds.clone(),
        })
    }
}
