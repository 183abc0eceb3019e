//! Board state: the ordered move history plus the occupancy derived from it.
//!
//! ## Push/pop discipline
//!
//! The board is mutated only by appending a move ([`Board::record_move`])
//! or removing the most recent one ([`Board::undo_last_move`]). The search
//! engine relies on this: every provisional move it records is undone before
//! the recursive call returns, so the caller's board comes back unchanged.
//!
//! ## Derived views
//!
//! The occupancy map is a pure function of the move list
//! ([`Occupancy::from_moves`]). The board keeps it, and a pair of 9-bit masks,
//! up to date incrementally so queries during search stay O(1).

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::fmt;

use crate::error::{Error, Result};

use super::lines::completes_line;
use super::mark::{Mark, MarkMap};
use super::position::{Position, CELL_COUNT};

/// A mark placed on a position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub position: Position,
    pub mark: Mark,
}

impl Move {
    #[must_use]
    pub const fn new(position: Position, mark: Mark) -> Self {
        Self { position, mark }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.mark, self.position)
    }
}

/// Position → mark map.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Occupancy {
    cells: [Option<Mark>; CELL_COUNT],
}

impl Occupancy {
    /// Build the map from a move sequence.
    ///
    /// Later moves on the same position overwrite earlier ones; a board
    /// never produces such a sequence.
    #[must_use]
    pub fn from_moves(moves: &[Move]) -> Self {
        let mut occupancy = Self::default();
        for mv in moves {
            occupancy.cells[mv.position.index()] = Some(mv.mark);
        }
        occupancy
    }

    /// The mark on a position, if any.
    #[must_use]
    pub fn get(&self, position: Position) -> Option<Mark> {
        self.cells[position.index()]
    }

    /// Iterate over `(position, occupant)` in ascending position order.
    pub fn iter(&self) -> impl Iterator<Item = (Position, Option<Mark>)> + '_ {
        Position::ALL.into_iter().zip(self.cells.iter().copied())
    }

    /// Number of occupied positions.
    #[must_use]
    pub fn occupied(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }
}

/// Compact hashable encoding of an occupancy: X mask in bits 0-8, O mask in
/// bits 9-17.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct BoardKey(pub u32);

impl BoardKey {
    #[must_use]
    pub const fn from_masks(x: u16, o: u16) -> Self {
        Self(x as u32 | (o as u32) << 9)
    }
}

/// State of a round as seen from the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    Winner(Mark),
    Tie,
    InProgress,
}

impl Outcome {
    /// The winning mark, if any.
    #[must_use]
    pub fn winner(self) -> Option<Mark> {
        match self {
            Outcome::Winner(mark) => Some(mark),
            _ => None,
        }
    }
}

/// The 3×3 board.
///
/// ## Example
///
/// ```
/// use ttt_engine::core::{Board, Mark, Position};
///
/// let mut board = Board::new();
/// board.record_move(Position::CENTER, Mark::X);
/// assert_eq!(board.available_positions().len(), 8);
///
/// board.undo_last_move();
/// assert!(board.is_empty());
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Move>", into = "Vec<Move>")]
pub struct Board {
    /// Move history, oldest first. SmallVec keeps all nine moves inline.
    moves: SmallVec<[Move; CELL_COUNT]>,

    /// Incrementally maintained `Occupancy::from_moves(&moves)`.
    occupancy: Occupancy,

    /// Per-mark occupancy bits.
    masks: MarkMap<u16>,
}

impl Board {
    /// Create an empty board.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a board by replaying moves, checking each one.
    pub fn from_moves(moves: impl IntoIterator<Item = Move>) -> Result<Self> {
        let mut board = Self::new();
        for mv in moves {
            board.try_record_move(mv.position, mv.mark)?;
        }
        Ok(board)
    }

    /// Clear all moves for the next round.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    // === Queries ===

    /// Moves applied so far, oldest first.
    #[must_use]
    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    /// The occupancy map.
    #[must_use]
    pub fn occupancy(&self) -> &Occupancy {
        &self.occupancy
    }

    /// The mark on a position, if any.
    #[must_use]
    pub fn mark_at(&self, position: Position) -> Option<Mark> {
        self.occupancy.get(position)
    }

    /// Whether a position is free.
    #[must_use]
    pub fn is_available(&self, position: Position) -> bool {
        self.occupancy.get(position).is_none()
    }

    /// All free positions, ascending.
    #[must_use]
    pub fn available_positions(&self) -> Vec<Position> {
        Position::ALL
            .into_iter()
            .filter(|&p| self.is_available(p))
            .collect()
    }

    /// Occupancy bits for one mark.
    #[must_use]
    pub fn mask(&self, mark: Mark) -> u16 {
        self.masks[mark]
    }

    /// Hashable encoding of the occupancy (turn not included).
    #[must_use]
    pub fn key(&self) -> BoardKey {
        BoardKey::from_masks(self.masks[Mark::X], self.masks[Mark::O])
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// True iff some winning line is fully held by `mark`.
    #[must_use]
    pub fn is_winning_for(&self, mark: Mark) -> bool {
        completes_line(self.masks[mark])
    }

    /// True iff no position is free.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.moves.len() == CELL_COUNT
    }

    /// True iff either mark has won or the board is full.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        self.is_full() || Mark::ALL.iter().any(|&m| self.is_winning_for(m))
    }

    /// The mark holding a full line.
    ///
    /// X is checked first, so a hand-built board where both marks hold a
    /// line (unreachable in play) reports X.
    #[must_use]
    pub fn winning_mark(&self) -> Option<Mark> {
        Mark::ALL.into_iter().find(|&m| self.is_winning_for(m))
    }

    /// Winner, tie, or still in progress.
    #[must_use]
    pub fn outcome(&self) -> Outcome {
        match self.winning_mark() {
            Some(mark) => Outcome::Winner(mark),
            None if self.is_full() => Outcome::Tie,
            None => Outcome::InProgress,
        }
    }

    // === Mutation ===

    /// Place `mark` on `position`.
    ///
    /// # Panics
    ///
    /// Panics if the position is already occupied.
    pub fn record_move(&mut self, position: Position, mark: Mark) {
        if let Some(occupant) = self.mark_at(position) {
            panic!(
                "cannot record {}@{}: position already occupied by {}",
                mark, position, occupant
            );
        }
        self.push(Move::new(position, mark));
    }

    /// Checked variant of [`Board::record_move`].
    pub fn try_record_move(&mut self, position: Position, mark: Mark) -> Result<()> {
        if self.is_full() {
            return Err(Error::BoardFull);
        }
        if let Some(occupant) = self.mark_at(position) {
            return Err(Error::PositionOccupied { position, occupant });
        }
        self.push(Move::new(position, mark));
        Ok(())
    }

    /// Remove and return the most recent move.
    ///
    /// # Panics
    ///
    /// Panics if no move has been recorded.
    pub fn undo_last_move(&mut self) -> Move {
        match self.pop() {
            Some(mv) => mv,
            None => panic!("cannot undo: no move has been recorded"),
        }
    }

    /// Checked variant of [`Board::undo_last_move`].
    pub fn try_undo_last_move(&mut self) -> Result<Move> {
        self.pop().ok_or(Error::EmptyHistory)
    }

    fn push(&mut self, mv: Move) {
        debug_assert!(self.moves.len() < CELL_COUNT);
        self.occupancy.cells[mv.position.index()] = Some(mv.mark);
        self.masks[mv.mark] |= mv.position.bit();
        self.moves.push(mv);
    }

    fn pop(&mut self) -> Option<Move> {
        let mv = self.moves.pop()?;
        self.occupancy.cells[mv.position.index()] = None;
        self.masks[mv.mark] &= !mv.position.bit();
        Some(mv)
    }
}

impl TryFrom<Vec<Move>> for Board {
    type Error = Error;

    fn try_from(moves: Vec<Move>) -> Result<Self> {
        Self::from_moves(moves)
    }
}

impl From<Board> for Vec<Move> {
    fn from(board: Board) -> Self {
        board.moves.into_vec()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, cells) in Position::ALL.chunks(3).enumerate() {
            if row > 0 {
                writeln!(f)?;
                writeln!(f, "-----------")?;
            }
            let markers: Vec<String> = cells
                .iter()
                .map(|&p| match self.mark_at(p) {
                    Some(mark) => mark.to_string(),
                    None => " ".to_string(),
                })
                .collect();
            write!(f, " {} ", markers.join(" | "))?;
        }
        Ok(())
    }
}
