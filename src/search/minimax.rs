//! Minimax with alpha-beta pruning
//!
//! The search places marks on a single working board and removes them again
//! before trying the next candidate, so every call leaves the board exactly as
//! it found it.

use serde::{Deserialize, Serialize};

use super::{
    depth::DepthLimit,
    eval::{positional_score, terminal_score},
};
use crate::tictactoe::{Board, Cell, Mark};

/// Bound used for the initial alpha-beta window
const INF: i32 = i32::MAX;

/// Score and move chosen at one node of the search
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    pub score: i32,
    pub best_move: Option<usize>,
}

impl SearchResult {
    fn leaf(score: i32) -> Self {
        Self {
            score,
            best_move: None,
        }
    }
}

/// Counters collected during one search
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStats {
    /// Nodes entered, including the root
    pub nodes: u64,
    /// Candidate loops stopped early because `beta <= alpha`
    pub cutoffs: u64,
    /// Finished boards scored with [`terminal_score`]
    pub terminal_leaves: u64,
    /// Boards scored with [`positional_score`] at the depth limit
    pub depth_limit_leaves: u64,
}

/// Alpha-beta search maximizing for one mark
#[derive(Debug, Clone)]
pub struct Minimax {
    computer: Mark,
    depth_limit: DepthLimit,
    stats: SearchStats,
}

impl Minimax {
    pub fn new(computer: Mark, depth_limit: DepthLimit) -> Self {
        Self {
            computer,
            depth_limit,
            stats: SearchStats::default(),
        }
    }

    /// Search `board` with the computer to move.
    ///
    /// The board is mutated during the search and restored before returning.
    pub fn search(&mut self, board: &mut Board) -> SearchResult {
        self.minimax(board, 0, -INF, INF, true)
    }

    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    fn minimax(
        &mut self,
        board: &mut Board,
        depth: u32,
        mut alpha: i32,
        mut beta: i32,
        maximizing: bool,
    ) -> SearchResult {
        self.stats.nodes += 1;

        if board.winner().is_some() || board.is_full() {
            self.stats.terminal_leaves += 1;
            return SearchResult::leaf(terminal_score(board, self.computer, depth));
        }

        if self.depth_limit.cuts_off(depth) {
            self.stats.depth_limit_leaves += 1;
            return SearchResult::leaf(positional_score(board, self.computer));
        }

        let (mark, mut best_score) = if maximizing {
            (self.computer, -INF)
        } else {
            (self.computer.opponent(), INF)
        };
        let mut best_move = None;

        for pos in board.legal_moves() {
            board.set(pos, mark.to_cell());
            let score = self.minimax(board, depth + 1, alpha, beta, !maximizing).score;
            board.set(pos, Cell::Empty);

            // Strict comparisons keep the first move reaching a score.
            if maximizing {
                if score > best_score {
                    best_score = score;
                    best_move = Some(pos);
                }
                alpha = alpha.max(best_score);
            } else {
                if score < best_score {
                    best_score = score;
                    best_move = Some(pos);
                }
                beta = beta.min(best_score);
            }

            if beta <= alpha {
                self.stats.cutoffs += 1;
                break;
            }
        }

        SearchResult {
            score: best_score,
            best_move,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(s: &str) -> Board {
        Board::from_string(s).unwrap()
    }

    /// Exhaustive minimax without pruning; counts nodes in `nodes`
    fn plain_minimax(
        board: &mut Board,
        computer: Mark,
        depth: u32,
        maximizing: bool,
        nodes: &mut u64,
    ) -> i32 {
        *nodes += 1;
        if board.is_terminal() {
            return terminal_score(board, computer, depth);
        }
        let mark = if maximizing { computer } else { computer.opponent() };
        let mut scores = Vec::new();
        for pos in board.legal_moves() {
            board.set(pos, mark.to_cell());
            scores.push(plain_minimax(board, computer, depth + 1, !maximizing, nodes));
            board.set(pos, Cell::Empty);
        }
        if maximizing {
            scores.into_iter().max().unwrap()
        } else {
            scores.into_iter().min().unwrap()
        }
    }

    #[test]
    fn test_takes_immediate_win() {
        // O O .
        // X X .
        // X . .
        let mut board = board("OO. XX. X..");
        let result = Minimax::new(Mark::O, DepthLimit::Unlimited).search(&mut board);
        assert_eq!(result.best_move, Some(2));
        assert_eq!(result.score, 9);
    }

    #[test]
    fn test_blocks_immediate_loss() {
        // X X .
        // . O .
        // . . .
        let mut board = board("XX. .O. ...");
        let result = Minimax::new(Mark::O, DepthLimit::Unlimited).search(&mut board);
        assert_eq!(result.best_move, Some(2));
    }

    #[test]
    fn test_double_threat_is_lost_but_delayed() {
        // X O X
        // O X O
        // . . .
        let mut board = board("XOX OXO ...");
        let result = Minimax::new(Mark::O, DepthLimit::Unlimited).search(&mut board);
        // Every reply loses on the next ply; ties keep the lowest index.
        assert_eq!(result.score, -8);
        assert_eq!(result.best_move, Some(6));
    }

    #[test]
    fn test_pruning_preserves_root_score() {
        let positions = [
            "X........",
            "....X....",
            "X...O...X",
            ".X..O....",
            "XO..X....",
            "X.O.X.O..",
            "OX..X....",
        ];
        for text in positions {
            for computer in [Mark::O, Mark::X] {
                let mut pruned = board(text);
                let result = Minimax::new(computer, DepthLimit::Unlimited).search(&mut pruned);

                let mut unpruned = board(text);
                let expected = plain_minimax(&mut unpruned, computer, 0, true, &mut 0);

                assert_eq!(result.score, expected, "{text} searched for {computer}");
            }
        }
    }

    #[test]
    fn test_search_restores_board() {
        let original = board("X...O...X");
        let mut working = original;
        Minimax::new(Mark::O, DepthLimit::Unlimited).search(&mut working);
        assert_eq!(working, original);

        let mut working = original;
        Minimax::new(Mark::O, DepthLimit::Plies(2)).search(&mut working);
        assert_eq!(working, original);
    }

    #[test]
    fn test_depth_limit_scores_leaves_heuristically() {
        let mut board = Board::new();
        let mut search = Minimax::new(Mark::O, DepthLimit::Plies(1));
        let result = search.search(&mut board);

        // One ply: only the computer's own placement is scored, and the
        // center is the only square worth a full point.
        assert_eq!(result.best_move, Some(4));
        assert_eq!(result.score, 1);
        assert_eq!(search.stats().depth_limit_leaves, 9);
        assert_eq!(search.stats().terminal_leaves, 0);
    }

    #[test]
    fn test_zero_depth_limit_returns_no_move() {
        let mut board = board("X...O....");
        let result = Minimax::new(Mark::O, DepthLimit::Plies(0)).search(&mut board);
        assert_eq!(result.best_move, None);
        assert_eq!(result.score, 0);
    }

    #[test]
    fn test_pruning_visits_fewer_nodes() {
        let mut board = board("X........");
        let mut search = Minimax::new(Mark::O, DepthLimit::Unlimited);
        search.search(&mut board);

        let mut unpruned_nodes = 0;
        plain_minimax(&mut board, Mark::O, 0, true, &mut unpruned_nodes);

        let stats = search.stats();
        assert!(stats.cutoffs > 0);
        assert!(
            stats.nodes < unpruned_nodes,
            "visited {} of {unpruned_nodes} nodes",
            stats.nodes
        );
    }
}
