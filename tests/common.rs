//! Shared helpers for the oxo integration tests.

#![allow(dead_code)]

use std::collections::HashSet;

use oxo::tictactoe::{Board, Mark};

/// Parse a board, panicking on malformed test input
pub fn board(s: &str) -> Board {
    Board::from_string(s).unwrap_or_else(|e| panic!("bad test board '{s}': {e}"))
}

/// Every board reachable by alternating play from an empty board with
/// `first` to move, including the empty board and finished positions.
pub fn reachable_boards(first: Mark) -> HashSet<Board> {
    let mut seen = HashSet::new();
    collect(Board::new(), first, &mut seen);
    seen
}

fn collect(board: Board, to_move: Mark, seen: &mut HashSet<Board>) {
    if !seen.insert(board) || board.is_terminal() {
        return;
    }
    for pos in board.legal_moves() {
        let next = board.with_move(pos, to_move).expect("legal move");
        collect(next, to_move.opponent(), seen);
    }
}
