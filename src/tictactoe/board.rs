//! Board state representation and basic operations

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use super::lines::{LineAnalyzer, WinLine};

/// Number of cells on the 3x3 board
pub const BOARD_CELLS: usize = 9;

/// Index of the center cell
pub const CENTER: usize = 4;

/// Indices of the four corner cells
pub const CORNERS: [usize; 4] = [0, 2, 6, 8];

/// A cell on the Tic-Tac-Toe board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    #[default]
    Empty,
    X,
    O,
}

impl Cell {
    pub fn to_char(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::X => 'X',
            Cell::O => 'O',
        }
    }

    pub fn from_char(c: char) -> Option<Cell> {
        match c {
            '.' | '_' | '-' => Some(Cell::Empty),
            'X' | 'x' => Some(Cell::X),
            'O' | 'o' | '0' => Some(Cell::O),
            _ => None,
        }
    }

    /// The mark occupying this cell, if any
    pub fn mark(self) -> Option<Mark> {
        match self {
            Cell::X => Some(Mark::X),
            Cell::O => Some(Mark::O),
            Cell::Empty => None,
        }
    }
}

/// One of the two marks a side places on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mark {
    X,
    O,
}

impl Mark {
    /// Get the opposing mark
    pub fn opponent(self) -> Mark {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }

    /// Convert mark to cell
    pub fn to_cell(self) -> Cell {
        match self {
            Mark::X => Cell::X,
            Mark::O => Cell::O,
        }
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_cell().to_char())
    }
}

impl FromStr for Mark {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "X" => Ok(Mark::X),
            "O" => Ok(Mark::O),
            _ => Err(crate::Error::ParseMark {
                input: s.to_string(),
            }),
        }
    }
}

/// Number of cells holding each mark
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MarkCounts {
    pub x: usize,
    pub o: usize,
}

/// Nine cells indexed row-major (`index = row * 3 + col`)
///
/// The board does not track whose turn it is. Strict alternation of marks is
/// the caller's responsibility; [`Board::mark_counts`] lets callers check it.
/// The type is `Copy` (9 bytes), so a search can work on its own copy and the
/// caller's board is never observed mid-search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Board {
    cells: [Cell; BOARD_CELLS],
}

impl Board {
    /// Create an empty board
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a board from its textual form.
    ///
    /// Whitespace and `|` separators are ignored, so both `"XO.\n.X.\n..O"` and
    /// `"X|O|.  .|X|.  .|.|O"` are accepted.
    ///
    /// # Errors
    ///
    /// Returns error unless exactly 9 cells are present, or if a character is
    /// not a valid cell representation.
    ///
    /// # Examples
    ///
    /// ```
    /// use oxo::tictactoe::{Board, Mark};
    ///
    /// let board = Board::from_string("OOO......").unwrap();
    /// assert_eq!(board.winner(), Some(Mark::O));
    /// ```
    pub fn from_string(s: &str) -> Result<Self, crate::Error> {
        let chars: Vec<char> = s
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '|')
            .collect();

        if chars.len() != BOARD_CELLS {
            return Err(crate::Error::InvalidBoardLength {
                expected: BOARD_CELLS,
                got: chars.len(),
                context: s.to_string(),
            });
        }

        let mut cells = [Cell::Empty; BOARD_CELLS];
        for (i, &c) in chars.iter().enumerate() {
            cells[i] = Cell::from_char(c).ok_or_else(|| crate::Error::InvalidCellCharacter {
                character: c,
                position: i,
                context: s.to_string(),
            })?;
        }

        Ok(Board { cells })
    }

    /// Raw cells in index order
    pub fn cells(&self) -> &[Cell; BOARD_CELLS] {
        &self.cells
    }

    /// Get cell at position (0-8)
    pub fn get(&self, pos: usize) -> Option<Cell> {
        self.cells.get(pos).copied()
    }

    /// Check if a position is on the board and empty
    pub fn is_empty_at(&self, pos: usize) -> bool {
        self.get(pos) == Some(Cell::Empty)
    }

    /// All empty positions in ascending index order
    pub fn legal_moves(&self) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &cell)| cell == Cell::Empty)
            .map(|(i, _)| i)
            .collect()
    }

    /// Count the cells holding each mark
    pub fn mark_counts(&self) -> MarkCounts {
        let mut counts = MarkCounts::default();
        for cell in &self.cells {
            match cell {
                Cell::X => counts.x += 1,
                Cell::O => counts.o += 1,
                Cell::Empty => {}
            }
        }
        counts
    }

    /// Count the number of occupied cells on the board
    pub fn occupied_count(&self) -> usize {
        let counts = self.mark_counts();
        counts.x + counts.o
    }

    /// First completed line, in rows / columns / diagonals order
    pub fn winning_line(&self) -> Option<WinLine> {
        LineAnalyzer::completed_line(&self.cells)
    }

    /// Get the winner if there is one.
    ///
    /// Boards reachable by alternating play have at most one winning mark.
    /// For hand-built boards with lines of both marks, the mark of the first
    /// completed line in enumeration order is returned.
    pub fn winner(&self) -> Option<Mark> {
        self.winning_line()
            .and_then(|line| self.cells[line[0]].mark())
    }

    /// Check if a player has completed a line
    pub fn has_won(&self, mark: Mark) -> bool {
        LineAnalyzer::has_won(&self.cells, mark)
    }

    /// Check whether no empty cell remains
    pub fn is_full(&self) -> bool {
        !self.cells.contains(&Cell::Empty)
    }

    /// Check if the game is over (win or full board)
    pub fn is_terminal(&self) -> bool {
        self.winner().is_some() || self.is_full()
    }

    /// Check if the position is a draw (all cells filled, no winner)
    pub fn is_draw(&self) -> bool {
        self.is_full() && self.winner().is_none()
    }

    /// Place `mark` on an empty cell.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidMove`] if `pos` is out of range or the
    /// cell is occupied. The board is left unchanged in both cases.
    pub fn apply(&mut self, pos: usize, mark: Mark) -> Result<(), crate::Error> {
        match self.cells.get(pos) {
            None => Err(crate::Error::out_of_range(pos)),
            Some(Cell::Empty) => {
                self.cells[pos] = mark.to_cell();
                Ok(())
            }
            Some(_) => Err(crate::Error::occupied(pos)),
        }
    }

    /// Restore a cell to empty, undoing an earlier [`Board::apply`].
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidMove`] if `pos` is out of range.
    pub fn clear(&mut self, pos: usize) -> Result<(), crate::Error> {
        let cell = self
            .cells
            .get_mut(pos)
            .ok_or_else(|| crate::Error::out_of_range(pos))?;
        *cell = Cell::Empty;
        Ok(())
    }

    /// Apply a move and return the resulting board, leaving `self` untouched
    #[must_use = "with_move returns a new board; the original is unchanged"]
    pub fn with_move(&self, pos: usize, mark: Mark) -> Result<Board, crate::Error> {
        let mut next = *self;
        next.apply(pos, mark)?;
        Ok(next)
    }

    /// Set a cell the caller already knows to be in range.
    ///
    /// Used by the search, which only ever places marks on indices taken from
    /// [`Board::legal_moves`] and undoes them with `Cell::Empty`.
    pub(crate) fn set(&mut self, pos: usize, cell: Cell) {
        self.cells[pos] = cell;
    }

    /// Get a compact string representation (9 chars, row-major)
    pub fn encode(&self) -> String {
        self.cells.iter().map(|&c| c.to_char()).collect()
    }
}

impl FromStr for Board {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Board::from_string(s)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, &cell) in self.cells.iter().enumerate() {
            write!(f, "{}", cell.to_char())?;
            if (i + 1) % 3 == 0 && i < 8 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
