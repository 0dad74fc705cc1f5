//! Board state: the NxN grid, move application and reversal, legal-move
//! enumeration, and line-based terminal scoring.

use serde::{Deserialize, Serialize};

use crate::error::BoardError;
use crate::outcome::{LOSS_SCORE, Outcome, TIE_SCORE, WIN_SCORE};

/// A side of the game.
///
/// The maximizer moves first and seeks the highest search value; the
/// minimizer seeks the lowest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    /// The side the search maximizes for.
    Maximizer,
    /// The side the search minimizes for.
    Minimizer,
}

impl Side {
    /// Returns the opposing side.
    pub fn opponent(self) -> Self {
        match self {
            Side::Maximizer => Side::Minimizer,
            Side::Minimizer => Side::Maximizer,
        }
    }
}

/// One square of the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "Option<Side>", into = "Option<Side>")]
pub enum Cell {
    /// No mark placed.
    Empty,
    /// Marked by a side.
    Occupied(Side),
}

impl From<Option<Side>> for Cell {
    fn from(side: Option<Side>) -> Self {
        match side {
            Some(side) => Cell::Occupied(side),
            None => Cell::Empty,
        }
    }
}

impl From<Cell> for Option<Side> {
    fn from(cell: Cell) -> Self {
        match cell {
            Cell::Occupied(side) => Some(side),
            Cell::Empty => None,
        }
    }
}

/// A grid coordinate: row and column, both zero-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// Row index, counted from the top.
    pub row: usize,
    /// Column index, counted from the left.
    pub col: usize,
}

impl Move {
    /// Creates a new move.
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Square board of side length `size`, stored row-major.
///
/// The board is created empty, mutated in place for the lifetime of a game
/// or a search call, and owned exclusively by whichever component currently
/// holds it. The search never copies it per branch; it applies and undoes
/// moves in strict stack discipline (see [`Board::place`]).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    size: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Creates an empty board of the given side length.
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![Cell::Empty; size * size],
        }
    }

    /// Side length of the grid.
    pub fn size(&self) -> usize {
        self.size
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Returns the cell at the given coordinate, or `None` when the
    /// coordinate lies outside the grid.
    pub fn get(&self, mv: Move) -> Option<Cell> {
        self.index(mv).map(|idx| self.cells[idx])
    }

    fn index(&self, mv: Move) -> Option<usize> {
        if mv.row < self.size && mv.col < self.size {
            Some(mv.row * self.size + mv.col)
        } else {
            None
        }
    }

    /// Writes `side` into the target cell.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::OccupiedCell`] if the cell already holds a
    /// mark, [`BoardError::OutOfBounds`] if the coordinate exceeds the
    /// grid. The board is unchanged on error.
    pub fn apply(&mut self, mv: Move, side: Side) -> Result<(), BoardError> {
        let idx = self.index(mv).ok_or(BoardError::OutOfBounds(mv))?;
        match self.cells[idx] {
            Cell::Empty => {
                self.cells[idx] = Cell::Occupied(side);
                Ok(())
            }
            Cell::Occupied(_) => Err(BoardError::OccupiedCell(mv)),
        }
    }

    /// Resets the target cell to empty, regardless of its prior value.
    ///
    /// Never errors; an out-of-bounds coordinate is a no-op. This is a
    /// backtracking primitive: callers must only undo moves they themselves
    /// just applied.
    pub fn undo(&mut self, mv: Move) {
        if let Some(idx) = self.index(mv) {
            self.cells[idx] = Cell::Empty;
        }
    }

    /// Writes `side` into the target cell and returns a guard that undoes
    /// the placement when dropped.
    ///
    /// The search engine explores continuations exclusively through this
    /// guard, so an early return or panic mid-search cannot leave a
    /// speculative mark on the board.
    ///
    /// # Errors
    ///
    /// Same conditions as [`Board::apply`].
    pub fn place(&mut self, mv: Move, side: Side) -> Result<Placement<'_>, BoardError> {
        self.apply(mv, side)?;
        Ok(Placement { board: self, mv })
    }

    /// All empty-cell coordinates, rows top-to-bottom and columns
    /// left-to-right.
    ///
    /// The ordering is load-bearing: the search breaks score ties by
    /// keeping the earliest move in this sequence.
    pub fn legal_moves(&self) -> Vec<Move> {
        let mut moves = Vec::new();
        for row in 0..self.size {
            for col in 0..self.size {
                let mv = Move::new(row, col);
                if self.get(mv) == Some(Cell::Empty) {
                    moves.push(mv);
                }
            }
        }
        moves
    }

    /// Whether every cell holds a mark.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| *cell != Cell::Empty)
    }

    /// Scores one complete line of cells at the given search depth.
    ///
    /// Returns `Some(10 - depth)` when every cell is a maximizer mark,
    /// `Some(depth - 10)` when every cell is a minimizer mark, and `None`
    /// otherwise. The depth adjustment makes the search prefer the quickest
    /// forced win and the most delayed forced loss. `None` means "no score"
    /// and is distinct from the tie score `0`.
    pub fn line_score<I>(line: I, depth: u8) -> Option<i32>
    where
        I: IntoIterator<Item = Cell>,
    {
        let mut cells = line.into_iter();
        let first = match cells.next()? {
            Cell::Occupied(side) => side,
            Cell::Empty => return None,
        };
        if cells.all(|cell| cell == Cell::Occupied(first)) {
            Some(match first {
                Side::Maximizer => WIN_SCORE - i32::from(depth),
                Side::Minimizer => LOSS_SCORE + i32::from(depth),
            })
        } else {
            None
        }
    }

    /// Scores the whole position at the given search depth.
    ///
    /// Checks all rows, then all columns, then both diagonals, in that
    /// fixed order, and returns the first line score found. With no
    /// complete line the result is `Some(0)` on a full board (tie) and
    /// `None` while legal moves remain (unresolved).
    pub fn position_score(&self, depth: u8) -> Option<i32> {
        for row in 0..self.size {
            if let Some(score) = Self::line_score(self.row_cells(row), depth) {
                return Some(score);
            }
        }
        for col in 0..self.size {
            if let Some(score) = Self::line_score(self.col_cells(col), depth) {
                return Some(score);
            }
        }
        if let Some(score) = Self::line_score(self.main_diagonal(), depth) {
            return Some(score);
        }
        if let Some(score) = Self::line_score(self.anti_diagonal(), depth) {
            return Some(score);
        }
        if self.is_full() { Some(TIE_SCORE) } else { None }
    }

    /// Classifies the position into a coarse [`Outcome`].
    ///
    /// Evaluates the position at depth zero, the only depth at which raw
    /// scores map one-to-one onto outcomes.
    pub fn status(&self) -> Outcome {
        Outcome::from_root_score(self.position_score(0))
    }

    /// Formats the board as one character per cell: `x` for the maximizer,
    /// `o` for the minimizer, `_` for an empty square.
    pub fn display(&self) -> String {
        let mut out = String::new();
        for row in 0..self.size {
            for cell in self.row_cells(row) {
                out.push(match cell {
                    Cell::Empty => '_',
                    Cell::Occupied(Side::Maximizer) => 'x',
                    Cell::Occupied(Side::Minimizer) => 'o',
                });
            }
            out.push('\n');
        }
        out
    }

    fn row_cells(&self, row: usize) -> impl Iterator<Item = Cell> + '_ {
        (0..self.size).map(move |col| self.cells[row * self.size + col])
    }

    fn col_cells(&self, col: usize) -> impl Iterator<Item = Cell> + '_ {
        (0..self.size).map(move |row| self.cells[row * self.size + col])
    }

    fn main_diagonal(&self) -> impl Iterator<Item = Cell> + '_ {
        (0..self.size).map(move |i| self.cells[i * self.size + i])
    }

    fn anti_diagonal(&self) -> impl Iterator<Item = Cell> + '_ {
        (0..self.size).map(move |i| self.cells[i * self.size + (self.size - 1 - i)])
    }
}

impl Default for Board {
    /// The canonical 3x3 board.
    fn default() -> Self {
        Self::new(3)
    }
}

/// Guard for a speculative placement made with [`Board::place`].
///
/// Holding the guard is holding the board: continuations are explored
/// through [`Placement::board`], and dropping the guard clears the placed
/// cell. This pairs every apply with exactly one undo even if the search
/// unwinds early.
#[derive(Debug)]
pub struct Placement<'a> {
    board: &'a mut Board,
    mv: Move,
}

impl Placement<'_> {
    /// The board with the speculative move applied.
    pub fn board(&mut self) -> &mut Board {
        self.board
    }
}

impl Drop for Placement<'_> {
    fn drop(&mut self) {
        self.board.undo(self.mv);
    }
}
