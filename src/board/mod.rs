//! Board representation for the connection game
//!
//! The board is a fixed rectangular grid into which discs drop under
//! gravity. Search mutates a single board in place through paired
//! [`Board::add_piece`] / [`Board::remove_piece`] calls, so the mutators
//! maintain one hard invariant: the tracked empty-cell count always equals
//! the number of empty cells, and a column's occupied cells are contiguous
//! from the bottom row.

use std::fmt;

use crate::error::EngineError;
use crate::eval::heuristic;


/// Default board height (rows)
pub const ROWS: usize = 6;
/// Default board width (columns)
pub const COLS: usize = 7;

/// Cell values
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Disc {
    Empty,
    Red,
    Yellow,
}

impl Disc {
    /// Get the opposing disc
    #[inline]
    pub fn opponent(self) -> Disc {
        match self {
            Disc::Red => Disc::Yellow,
            Disc::Yellow => Disc::Red,
            Disc::Empty => Disc::Empty,
        }
    }

    /// Single-character rendering used by the board display
    #[inline]
    pub fn symbol(self) -> char {
        match self {
            Disc::Empty => '.',
            Disc::Red => 'R',
            Disc::Yellow => 'Y',
        }
    }
}

/// Game board. Row 0 is the top row; discs land on the highest-indexed
/// empty row of a column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: Vec<Disc>,
    rows: usize,
    cols: usize,
    empties: usize,
}

impl Board {
    /// Create an empty board with the standard 6x7 dimensions.
    #[must_use]
    pub fn new() -> Self {
        Self::with_size(ROWS, COLS)
    }

    /// Create an empty board with custom dimensions.
    ///
    /// # Panics
    ///
    /// Panics if either dimension is zero.
    #[must_use]
    pub fn with_size(rows: usize, cols: usize) -> Self {
        assert!(rows > 0 && cols > 0, "board dimensions must be non-zero");
        Self {
            cells: vec![Disc::Empty; rows * cols],
            rows,
            cols,
            empties: rows * cols,
        }
    }

    /// Load a board from an externally supplied grid (row 0 first).
    ///
    /// Dimensions are inferred from the grid and the empty-cell count is
    /// recomputed. Cell contents are taken as given; keeping the gravity
    /// invariant is the supplier's responsibility.
    pub fn from_grid(grid: Vec<Vec<Disc>>) -> Result<Self, EngineError> {
        let rows = grid.len();
        let cols = grid.first().map_or(0, Vec::len);
        if rows == 0 || cols == 0 {
            return Err(EngineError::EmptyGrid);
        }

        let mut cells = Vec::with_capacity(rows * cols);
        for (row, line) in grid.into_iter().enumerate() {
            if line.len() != cols {
                return Err(EngineError::RaggedRow {
                    row,
                    expected: cols,
                    found: line.len(),
                });
            }
            cells.extend(line);
        }

        let empties = cells.iter().filter(|&&c| c == Disc::Empty).count();
        Ok(Self {
            cells,
            rows,
            cols,
            empties,
        })
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Number of empty cells remaining
    #[inline]
    pub fn empties(&self) -> usize {
        self.empties
    }

    /// Get the cell at a position. Row 0 is the top row.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Disc {
        self.cells[row * self.cols + col]
    }

    /// Cell contents in row-major order, used for value-keyed memoization.
    #[inline]
    pub(crate) fn cells(&self) -> &[Disc] {
        &self.cells
    }

    /// Lowest empty row of a column, or `None` if the column is full.
    #[must_use]
    pub fn first_empty_row(&self, col: usize) -> Option<usize> {
        (0..self.rows)
            .rev()
            .find(|&row| self.get(row, col) == Disc::Empty)
    }

    /// Drop a disc into a column.
    ///
    /// Returns `false` without mutating anything if the column is full.
    ///
    /// # Panics
    ///
    /// Panics if `col` is out of range.
    pub fn add_piece(&mut self, col: usize, disc: Disc) -> bool {
        assert!(col < self.cols, "column {col} out of range 0..{}", self.cols);
        debug_assert!(disc != Disc::Empty, "cannot drop an empty disc");
        match self.first_empty_row(col) {
            Some(row) => {
                self.cells[row * self.cols + col] = disc;
                self.empties -= 1;
                true
            }
            None => false,
        }
    }

    /// Remove the topmost disc of a column, undoing a prior `add_piece`.
    ///
    /// # Panics
    ///
    /// Panics if `col` is out of range or the column is empty. An unpaired
    /// remove would corrupt the mutate/undo discipline the search relies
    /// on, so it faults loudly instead of no-opping.
    pub fn remove_piece(&mut self, col: usize) {
        assert!(col < self.cols, "column {col} out of range 0..{}", self.cols);
        for row in 0..self.rows {
            if self.get(row, col) != Disc::Empty {
                self.cells[row * self.cols + col] = Disc::Empty;
                self.empties += 1;
                return;
            }
        }
        panic!("remove_piece on empty column {col} (unpaired undo)");
    }

    /// True iff no empty cells remain.
    #[inline]
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.empties == 0
    }

    /// Heuristic score of the position for `disc`, summed over every
    /// 4-cell window in all four line directions plus the center-column
    /// weighting. See [`crate::eval::heuristic`] for the window weights.
    #[must_use]
    pub fn score(&self, disc: Disc) -> f64 {
        heuristic::score_position(self, disc)
    }

    /// Clear the board in place for a fresh game.
    pub fn reset(&mut self) {
        self.cells.fill(Disc::Empty);
        self.empties = self.rows * self.cols;
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.rows {
            write!(f, "|")?;
            for col in 0..self.cols {
                write!(f, " {} |", self.get(row, col).symbol())?;
            }
            writeln!(f)?;
        }
        for _ in 0..self.cols * 4 + 1 {
            write!(f, "-")?;
        }
        writeln!(f)?;
        for col in 0..self.cols {
            write!(f, "  {col} ")?;
        }
        writeln!(f)
    }
}
