//! Winning lines and one-ply threat detection.
//!
//! Lines are stored both as position triples (for display and tests) and as
//! 9-bit masks over [`Position::bit`], which is what the board queries use.

use super::board::Board;
use super::mark::Mark;
use super::position::Position;

const fn line(a: u8, b: u8, c: u8) -> [Position; 3] {
    [
        Position::from_raw(a),
        Position::from_raw(b),
        Position::from_raw(c),
    ]
}

/// The eight winning lines: rows, columns, diagonals.
pub const WINNING_LINES: [[Position; 3]; 8] = [
    line(1, 2, 3),
    line(4, 5, 6),
    line(7, 8, 9), // rows
    line(1, 4, 7),
    line(2, 5, 8),
    line(3, 6, 9), // columns
    line(1, 5, 9),
    line(3, 5, 7), // diagonals
];

const fn line_masks() -> [u16; 8] {
    let mut masks = [0u16; 8];
    let mut i = 0;
    while i < WINNING_LINES.len() {
        let [a, b, c] = WINNING_LINES[i];
        masks[i] = a.bit() | b.bit() | c.bit();
        i += 1;
    }
    masks
}

/// [`WINNING_LINES`] as occupancy masks.
pub const LINE_MASKS: [u16; 8] = line_masks();

/// True if the mask covers at least one full line.
#[must_use]
pub fn completes_line(mask: u16) -> bool {
    LINE_MASKS.iter().any(|&line| mask & line == line)
}

/// Available positions where `mark` would complete a line immediately.
///
/// Ascending order. Empty if the board is already terminal for `mark`'s
/// purposes (no free cells).
#[must_use]
pub fn winning_moves(board: &Board, mark: Mark) -> Vec<Position> {
    let own = board.mask(mark);
    board
        .available_positions()
        .into_iter()
        .filter(|p| completes_line(own | p.bit()))
        .collect()
}

/// Available positions the opponent of `mark` would win on next turn.
#[must_use]
pub fn threats_against(board: &Board, mark: Mark) -> Vec<Position> {
    winning_moves(board, mark.opponent())
}
