//! Negamax integration tests over the full game tree.

use std::collections::HashSet;

use ttt_engine::core::{Board, BoardKey, Mark, Position};
use ttt_engine::search::{best_position, payoff, Evaluation, NegamaxSearch, Payoff, Ply};

fn pos(value: u8) -> Position {
    Position::new(value).unwrap()
}

fn board_with(moves: &[(u8, Mark)]) -> Board {
    let mut board = Board::new();
    for &(p, m) in moves {
        board.record_move(pos(p), m);
    }
    board
}

/// Visit every distinct board reachable by alternating play from `board`.
fn for_each_reachable(board: &mut Board, to_move: Mark, visit: &mut impl FnMut(&mut Board, Mark)) {
    let mut seen = HashSet::new();
    walk(board, to_move, &mut seen, visit);
}

fn walk(
    board: &mut Board,
    to_move: Mark,
    seen: &mut HashSet<BoardKey>,
    visit: &mut impl FnMut(&mut Board, Mark),
) {
    if !seen.insert(board.key()) {
        return;
    }
    visit(board, to_move);
    if board.is_terminal() {
        return;
    }
    for position in board.available_positions() {
        board.record_move(position, to_move);
        walk(board, to_move.opponent(), seen, visit);
        board.undo_last_move();
    }
}

/// Play the engine against itself until the round ends.
fn self_play(board: &mut Board, mut to_move: Mark) {
    let mut search = NegamaxSearch::new();
    while let Some(position) = search.search(board, to_move) {
        board.record_move(position, to_move);
        to_move = to_move.opponent();
    }
}

// =============================================================================
// Concrete Scenarios
// =============================================================================

#[test]
fn test_completes_row_for_immediate_win() {
    let mut board = board_with(&[(1, Mark::X), (4, Mark::O), (2, Mark::X), (5, Mark::O)]);
    assert_eq!(best_position(&mut board, Mark::X), Some(pos(3)));
}

#[test]
fn test_blocks_diagonal_threat() {
    let mut board = board_with(&[(1, Mark::O), (2, Mark::X), (5, Mark::O)]);
    assert_eq!(best_position(&mut board, Mark::X), Some(pos(9)));
}

#[test]
fn test_opening_move_is_corner_or_center_and_not_losing() {
    let mut board = Board::new();
    let opening = best_position(&mut board, Mark::X).unwrap();

    assert!([1, 3, 5, 7, 9].contains(&opening.get()));

    board.record_move(opening, Mark::X);
    let reply = NegamaxSearch::new().negamax(&mut board, Mark::O, Ply::Inner);
    assert_ne!(reply, Evaluation::Value(Payoff::WIN));

    self_play(&mut board, Mark::O);
    assert_ne!(board.winning_mark(), Some(Mark::O));
}

// =============================================================================
// Properties Over Every Reachable Board
// =============================================================================

#[test]
fn test_top_level_result_is_available_everywhere() {
    for starting in Mark::ALL {
        let mut board = Board::new();
        let mut checked = 0;

        for_each_reachable(&mut board, starting, &mut |board, to_move| {
            if board.is_terminal() {
                return;
            }
            let before = board.clone();
            let position = best_position(board, to_move).unwrap();

            assert!(board.is_available(position), "{} not available on\n{}", position, board);
            assert_eq!(*board, before, "search must restore the board");
            checked += 1;
        });

        // 5478 legal positions, 958 of them terminal.
        assert_eq!(checked, 4520);
    }
}

#[test]
fn test_payoff_antisymmetric_on_terminal_boards() {
    let mut board = Board::new();
    let mut terminals = 0;

    for_each_reachable(&mut board, Mark::X, &mut |board, _| {
        if board.is_terminal() {
            assert_eq!(payoff(board, Mark::X), -payoff(board, Mark::O));
            terminals += 1;
        }
    });

    assert!(terminals > 0);
}

#[test]
fn test_winning_reply_exists_whenever_value_is_win() {
    let mut board = Board::new();

    for_each_reachable(&mut board, Mark::X, &mut |board, to_move| {
        if board.is_terminal() || board.len() < 4 {
            return;
        }
        let value = NegamaxSearch::new().negamax(board, to_move, Ply::Inner);
        if value != Evaluation::Value(Payoff::WIN) {
            return;
        }

        let position = best_position(board, to_move).unwrap();
        board.record_move(position, to_move);
        let reply = NegamaxSearch::new().negamax(board, to_move.opponent(), Ply::Inner);
        board.undo_last_move();

        assert_eq!(reply, Evaluation::Value(Payoff::LOSS));
    });
}

// =============================================================================
// Self-Play and Determinism
// =============================================================================

#[test]
fn test_self_play_always_ties() {
    for starting in Mark::ALL {
        let mut board = Board::new();
        self_play(&mut board, starting);

        assert!(board.is_full());
        assert_eq!(board.winning_mark(), None);
    }
}

#[test]
fn test_self_play_ties_from_every_opening() {
    for opening in Position::ALL {
        let mut board = Board::new();
        board.record_move(opening, Mark::X);
        self_play(&mut board, Mark::O);

        assert_eq!(board.winning_mark(), None, "opening {} produced a winner", opening);
    }
}

#[test]
fn test_search_is_deterministic() {
    let mut board = board_with(&[(5, Mark::X), (1, Mark::O), (9, Mark::X)]);

    let first = best_position(&mut board, Mark::O);
    let second = best_position(&mut board, Mark::O);
    let reused = {
        let mut search = NegamaxSearch::new();
        search.search(&mut board, Mark::O);
        search.search(&mut board, Mark::O)
    };

    assert_eq!(first, second);
    assert_eq!(first, reused);
}

#[test]
fn test_score_moves_reports_every_option() {
    // X X .
    // O O .
    // . . .
    let mut board = board_with(&[(1, Mark::X), (4, Mark::O), (2, Mark::X), (5, Mark::O)]);
    let scored = NegamaxSearch::new().score_moves(&mut board, Mark::X);

    let positions: Vec<u8> = scored.iter().map(|(p, _)| p.get()).collect();
    assert_eq!(positions, vec![3, 6, 7, 8, 9]);

    // Only the row completion wins; anything else lets O complete 4-5-6.
    assert_eq!(scored[0].1, Payoff::WIN);
    assert_eq!(scored[1].1, Payoff::DRAW);
    assert!(scored[2..].iter().all(|&(_, v)| v == Payoff::LOSS));
}
