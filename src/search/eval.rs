//! Static evaluation of search leaves

use crate::tictactoe::{Board, CENTER, CORNERS, Mark};

/// Score of an immediate win for the computer at the search root
pub const WIN_SCORE: i32 = 10;

/// Largest magnitude [`positional_score`] can return
pub const MAX_POSITIONAL_SCORE: i32 = 2;

/// Center weight in tenths of a point
const CENTER_TENTHS: i32 = 10;

/// Per-corner weight in tenths of a point
const CORNER_TENTHS: i32 = 3;

/// Score a finished board reached `depth` plies below the search root.
///
/// Wins count for more the sooner they happen and losses count for less the
/// later they happen. A drawn board scores zero.
pub fn terminal_score(board: &Board, computer: Mark, depth: u32) -> i32 {
    let depth = depth as i32;
    match board.winner() {
        Some(winner) if winner == computer => WIN_SCORE - depth,
        Some(_) => depth - WIN_SCORE,
        None => 0,
    }
}

/// Positional bias for boards cut off by a depth limit.
///
/// One point for the center and three tenths per corner, positive for the
/// computer's marks and negative for the opponent's. The sum is truncated
/// toward zero, so a lone corner is worth nothing.
pub fn positional_score(board: &Board, computer: Mark) -> i32 {
    let weigh = |pos: usize, weight: i32| match board.cells()[pos].mark() {
        Some(mark) if mark == computer => weight,
        Some(_) => -weight,
        None => 0,
    };

    let tenths = weigh(CENTER, CENTER_TENTHS)
        + CORNERS
            .iter()
            .map(|&corner| weigh(corner, CORNER_TENTHS))
            .sum::<i32>();

    // Integer division truncates toward zero.
    tenths / 10
}
